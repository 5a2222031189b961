//! DOCX text extraction.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use tokio::task;

use super::ExtractionError;

/// Extracts the raw text content of an OOXML package, discarding formatting.
///
/// Paragraphs are joined with newlines so line-oriented consumers (name
/// inference in particular) see the document's visual line structure.
pub async fn extract(data: &[u8]) -> Result<String, ExtractionError> {
    let bytes = data.to_vec();
    task::spawn_blocking(move || extract_sync(&bytes))
        .await
        .map_err(|e| ExtractionError::Failed(format!("DOCX extraction task failed: {e}")))?
}

fn extract_sync(data: &[u8]) -> Result<String, ExtractionError> {
    let docx =
        read_docx(data).map_err(|e| ExtractionError::Failed(format!("Could not parse DOCX: {e}")))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children.iter() {
        if let DocumentChild::Paragraph(para) = child {
            let text: String = para
                .children
                .iter()
                .filter_map(|pc| match pc {
                    ParagraphChild::Run(run) => Some(
                        run.children
                            .iter()
                            .filter_map(|rc| match rc {
                                RunChild::Text(t) => Some(t.text.as_str()),
                                _ => None,
                            })
                            .collect::<String>(),
                    ),
                    _ => None,
                })
                .collect();
            paragraphs.push(text);
        }
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    /// Builds a minimal OOXML package with one paragraph per line.
    pub fn build_docx(lines: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for line in lines {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)));
        }
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::build_docx;
    use super::*;

    #[tokio::test]
    async fn extracts_paragraphs_as_lines() {
        let bytes = build_docx(&["Jane Doe", "Senior Widget Engineer"]);
        let text = extract(&bytes).await.unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Jane Doe", "Senior Widget Engineer"]);
    }

    #[tokio::test]
    async fn invalid_package_fails() {
        let err = extract(b"not a zip archive").await.unwrap_err();
        assert!(matches!(err, ExtractionError::Failed(_)));
    }
}
