// file: src/extractor/mod.rs
// description: document text extraction backends and registry
// reference: internal module structure

pub mod docx;
pub mod pdf;
pub mod plain;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use plain::PlainTextExtractor;

use crate::error::{CompareError, Result};
use crate::models::MediaType;
use crate::parser::TextNormalizer;
use std::collections::HashMap;
use tracing::debug;

/// A format-specific backend turning raw bytes into text.
pub trait TextExtractor: Send + Sync {
    fn media_type(&self) -> MediaType;

    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

/// Dispatches extraction to the backend registered for a media type.
pub struct ExtractorRegistry {
    backends: HashMap<MediaType, Box<dyn TextExtractor>>,
    normalizer: TextNormalizer,
}

impl ExtractorRegistry {
    /// Registry with no backends.
    pub fn empty() -> Self {
        Self {
            backends: HashMap::new(),
            normalizer: TextNormalizer::new(),
        }
    }

    /// Registry with the PDF, DOCX and plain text backends.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(PdfExtractor::new()));
        registry.register(Box::new(DocxExtractor::new()));
        registry.register(Box::new(PlainTextExtractor::new()));
        registry
    }

    /// Install a backend, replacing any previous one for the same media type.
    pub fn register(&mut self, backend: Box<dyn TextExtractor>) {
        self.backends.insert(backend.media_type(), backend);
    }

    pub fn supports(&self, media_type: MediaType) -> bool {
        self.backends.contains_key(&media_type)
    }

    /// Extract and normalize text from `bytes` declared as `mime`.
    pub fn extract(&self, bytes: &[u8], mime: &str) -> Result<String> {
        let media_type = MediaType::from_mime(mime)?;
        self.extract_as(bytes, media_type)
    }

    pub fn extract_as(&self, bytes: &[u8], media_type: MediaType) -> Result<String> {
        let backend = self
            .backends
            .get(&media_type)
            .ok_or_else(|| CompareError::UnsupportedFormat(media_type.mime().to_string()))?;

        let raw = backend.extract(bytes)?;
        let text = self.normalizer.normalize(&raw);

        debug!(
            "Extracted {} characters from {} bytes of {}",
            text.chars().count(),
            bytes.len(),
            media_type
        );

        Ok(text)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
