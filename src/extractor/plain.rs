// file: src/extractor/plain.rs
// description: strict UTF-8 plain text backend

use super::TextExtractor;
use crate::error::{CompareError, Result};
use crate::models::MediaType;

pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PlainTextExtractor {
    fn media_type(&self) -> MediaType {
        MediaType::PlainText
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|e| CompareError::ExtractionFailure {
                format: MediaType::PlainText.label(),
                message: format!("invalid UTF-8: {}", e),
            })
    }
}
