//! Upload format detection.
//!
//! Classification is a pure function: declared MIME type first, then a
//! case-insensitive extension fallback for browsers that report nothing or a
//! generic type. No I/O, no inspection of the file bytes.

/// OOXML MIME string browsers report for `.docx` uploads.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Closed set of formats the extraction pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Docx,
    Unsupported,
}

/// Classifies an upload from its filename and declared MIME type.
///
/// A recognized MIME type wins outright; anything else (including generic
/// types like `application/octet-stream`) falls through to the extension.
pub fn detect(file_name: &str, declared_mime: Option<&str>) -> DocumentFormat {
    if let Some(mime) = declared_mime {
        match mime {
            "application/pdf" => return DocumentFormat::Pdf,
            DOCX_MIME => return DocumentFormat::Docx,
            "text/plain" => return DocumentFormat::PlainText,
            _ => {}
        }
    }

    let name = file_name.to_ascii_lowercase();
    if name.ends_with(".pdf") {
        DocumentFormat::Pdf
    } else if name.ends_with(".docx") {
        DocumentFormat::Docx
    } else if name.ends_with(".txt") || name.ends_with(".md") {
        DocumentFormat::PlainText
    } else {
        DocumentFormat::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_mime_wins() {
        assert_eq!(
            detect("anything.bin", Some("application/pdf")),
            DocumentFormat::Pdf
        );
        assert_eq!(detect("anything.bin", Some(DOCX_MIME)), DocumentFormat::Docx);
        assert_eq!(
            detect("anything.bin", Some("text/plain")),
            DocumentFormat::PlainText
        );
    }

    #[test]
    fn generic_mime_falls_back_to_extension() {
        assert_eq!(
            detect("resume.pdf", Some("application/octet-stream")),
            DocumentFormat::Pdf
        );
        assert_eq!(detect("notes.md", Some("")), DocumentFormat::PlainText);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(detect("Resume.PDF", None), DocumentFormat::Pdf);
        assert_eq!(detect("Resume.DocX", None), DocumentFormat::Docx);
        assert_eq!(detect("notes.TXT", None), DocumentFormat::PlainText);
        assert_eq!(detect("README.md", None), DocumentFormat::PlainText);
    }

    #[test]
    fn unknown_inputs_are_unsupported() {
        assert_eq!(detect("photo.png", None), DocumentFormat::Unsupported);
        assert_eq!(
            detect("archive.zip", Some("application/zip")),
            DocumentFormat::Unsupported
        );
        assert_eq!(detect("no_extension", None), DocumentFormat::Unsupported);
    }
}
