//! File-to-text extraction pipeline.
//!
//! One strategy per supported format, dispatched on the detected
//! [`format::DocumentFormat`]. The orchestrator ([`extract_document`]) owns
//! the edge-case policy: unsupported formats fail before any bytes are read,
//! extractor failures carry the extractor's message, and an extraction that
//! succeeds with nothing but whitespace is coerced to `EmptyDocument` — a
//! success therefore never carries empty text.

pub mod docx;
pub mod format;
pub mod pdf;
pub mod text;

use thiserror::Error;

use format::{detect, DocumentFormat};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported format. Please upload .pdf, .docx, .txt, or .md files.")]
    UnsupportedFormat,

    #[error("Failed to process file: {0}")]
    Failed(String),

    #[error("The file appears to be empty or text could not be extracted.")]
    EmptyDocument,
}

/// Runs one upload through the pipeline: detect, extract, validate.
pub async fn extract_document(
    file_name: &str,
    declared_mime: Option<&str>,
    data: &[u8],
) -> Result<String, ExtractionError> {
    let raw = match detect(file_name, declared_mime) {
        DocumentFormat::Unsupported => return Err(ExtractionError::UnsupportedFormat),
        DocumentFormat::Pdf => pdf::extract(data).await?,
        DocumentFormat::Docx => docx::extract(data).await?,
        DocumentFormat::PlainText => text::extract(data)?,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ExtractionError::EmptyDocument);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unsupported_format_fails_before_reading_bytes() {
        // These bytes would fail every extractor with a parse error; getting
        // `UnsupportedFormat` back proves no extractor was invoked.
        let err = extract_document("photo.png", Some("image/png"), &[0xFF, 0xD8, 0xFF])
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat));
    }

    #[tokio::test]
    async fn unsupported_error_enumerates_accepted_extensions() {
        let err = extract_document("data.csv", None, b"a,b,c").await.unwrap_err();
        let message = err.to_string();
        for ext in [".pdf", ".docx", ".txt", ".md"] {
            assert!(message.contains(ext), "message should mention {ext}");
        }
    }

    #[tokio::test]
    async fn plain_text_success_is_trimmed() {
        let text = extract_document("resume.txt", Some("text/plain"), b"  Jane Doe\n\n")
            .await
            .unwrap();
        assert_eq!(text, "Jane Doe");
    }

    #[tokio::test]
    async fn whitespace_only_output_is_empty_document() {
        let err = extract_document("blank.txt", Some("text/plain"), b" \n\t \n")
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyDocument));
    }

    #[tokio::test]
    async fn empty_file_is_empty_document() {
        let err = extract_document("empty.md", None, b"").await.unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyDocument));
    }

    // The empty-document coercion has to hold for every extractor, not just
    // plain text.

    #[tokio::test]
    async fn whitespace_only_pdf_is_empty_document() {
        let bytes = pdf::fixtures::build_pdf(&["   ", ""]);
        let err = extract_document("blank.pdf", Some("application/pdf"), &bytes)
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyDocument));
    }

    #[tokio::test]
    async fn pdf_with_text_is_not_coerced_to_empty() {
        let bytes = pdf::fixtures::build_pdf(&["Jane Doe"]);
        let text = extract_document("resume.pdf", Some("application/pdf"), &bytes)
            .await
            .unwrap();
        assert!(text.contains("Jane Doe"));
    }

    #[tokio::test]
    async fn empty_paragraph_docx_is_empty_document() {
        let bytes = docx::fixtures::build_docx(&["", "   ", ""]);
        let err = extract_document("blank.docx", Some(format::DOCX_MIME), &bytes)
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyDocument));
    }

    #[tokio::test]
    async fn docx_with_text_is_not_coerced_to_empty() {
        let bytes = docx::fixtures::build_docx(&["", "Jane Doe", ""]);
        let text = extract_document("resume.docx", Some(format::DOCX_MIME), &bytes)
            .await
            .unwrap();
        assert_eq!(text, "Jane Doe");
    }

    #[tokio::test]
    async fn extractor_failure_propagates_message() {
        let err = extract_document("broken.pdf", Some("application/pdf"), b"not a pdf")
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Failed(_)));
    }
}
