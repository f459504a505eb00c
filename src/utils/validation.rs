// file: src/utils/validation.rs
// description: upload and input validation helpers
// reference: input validation patterns

use crate::error::{CompareError, Result};
use crate::models::MediaType;
use std::fs;
use std::path::Path;

pub const REQUIRED_DOCUMENTS: usize = 2;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            CompareError::InvalidInput(format!(
                "Cannot access {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(CompareError::InvalidInput(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_document_count(count: usize) -> Result<()> {
        if count != REQUIRED_DOCUMENTS {
            return Err(CompareError::InvalidInput(format!(
                "Exactly {} documents are required, got {}",
                REQUIRED_DOCUMENTS, count
            )));
        }
        Ok(())
    }

    pub fn validate_file_size(size: u64, max_bytes: u64) -> Result<()> {
        if size == 0 {
            return Err(CompareError::InvalidInput("File is empty".to_string()));
        }

        if size > max_bytes {
            return Err(CompareError::InvalidInput(format!(
                "File too large ({} bytes, maximum {} bytes)",
                size, max_bytes
            )));
        }

        Ok(())
    }

    /// Infer the media type from a file extension.
    pub fn media_type_for_path(path: &Path) -> Result<MediaType> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                CompareError::UnsupportedFormat(format!("{} (no file extension)", path.display()))
            })?;

        MediaType::from_extension(extension)
    }

    /// Extracted text must keep at least `min_chars` characters once trimmed.
    pub fn validate_text_length(text: &str, min_chars: usize) -> Result<()> {
        let length = text.trim().chars().count();
        if length < min_chars {
            return Err(CompareError::InvalidInput(format!(
                "Extracted text is too short ({} characters, minimum {})",
                length, min_chars
            )));
        }
        Ok(())
    }

    /// Shorten to at most `max_chars` characters, marking the cut with `...`.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.to_string(),
        }
    }
}
