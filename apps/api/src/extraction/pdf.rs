//! PDF text extraction.

use tokio::task;

use super::ExtractionError;

/// Extracts text from an in-memory PDF, page by page.
///
/// Pages come back 1..N in document order; each page's text is trimmed and
/// pages are joined with a blank line. Nothing is emitted until every page
/// has been processed. The parse is CPU-bound, so it runs on the blocking
/// pool rather than the async worker threads.
pub async fn extract(data: &[u8]) -> Result<String, ExtractionError> {
    let bytes = data.to_vec();
    let pages = task::spawn_blocking(move || pdf_extract::extract_text_from_mem_by_pages(&bytes))
        .await
        .map_err(|e| ExtractionError::Failed(format!("PDF extraction task failed: {e}")))?
        .map_err(|e| ExtractionError::Failed(format!("Could not parse PDF: {e}")))?;
    Ok(join_pages(&pages))
}

/// Concatenates per-page text with a blank-line separator, preserving page order.
fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .map(|p| p.trim())
        .collect::<Vec<_>>()
        .join("\n\n")
}


#[cfg(test)]
mod tests {
    use super::fixtures::build_pdf;
    use super::*;

    #[tokio::test]
    async fn multi_page_pdf_extracted_in_page_order() {
        let bytes = build_pdf(&["Alpha page text", "Beta page text", "Gamma page text"]);
        let text = extract(&bytes).await.unwrap();

        let alpha = text.find("Alpha page text").expect("page 1 text missing");
        let beta = text.find("Beta page text").expect("page 2 text missing");
        let gamma = text.find("Gamma page text").expect("page 3 text missing");
        assert!(alpha < beta && beta < gamma);
    }

    #[tokio::test]
    async fn pages_separated_by_blank_line() {
        let bytes = build_pdf(&["First page", "Second page"]);
        let text = extract(&bytes).await.unwrap();

        let chunks: Vec<&str> = text.split("\n\n").collect();
        assert!(chunks.len() >= 2, "expected a blank-line page separator: {text:?}");
        assert!(chunks.first().unwrap().contains("First page"));
        assert!(chunks.last().unwrap().contains("Second page"));
    }

    #[tokio::test]
    async fn garbage_bytes_fail_extraction() {
        let err = extract(b"definitely not a pdf").await.unwrap_err();
        assert!(matches!(err, ExtractionError::Failed(_)));
    }
}
