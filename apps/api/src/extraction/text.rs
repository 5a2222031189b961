//! Plain-text decoding for `.txt` / `.md` uploads.

use super::ExtractionError;

/// Decodes the uploaded bytes as UTF-8 text.
///
/// Invalid byte sequences fail extraction rather than being silently
/// replaced, so the user learns the file is not actually text.
pub fn extract(data: &[u8]) -> Result<String, ExtractionError> {
    String::from_utf8(data.to_vec())
        .map_err(|_| ExtractionError::Failed("File is not valid text".to_string()))
}
