// file: src/models/document.rs
// description: uploaded document, media type and extracted text models
// reference: internal data structures

use crate::error::{CompareError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_PLAIN_TEXT: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    Pdf,
    Docx,
    PlainText,
}

impl MediaType {
    /// Parse a declared MIME type. Parameters such as `charset` are ignored.
    pub fn from_mime(mime: &str) -> Result<Self> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            MIME_PDF => Ok(MediaType::Pdf),
            MIME_DOCX => Ok(MediaType::Docx),
            MIME_PLAIN_TEXT => Ok(MediaType::PlainText),
            _ => Err(CompareError::UnsupportedFormat(mime.to_string())),
        }
    }

    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Ok(MediaType::Pdf),
            "docx" => Ok(MediaType::Docx),
            "txt" | "text" => Ok(MediaType::PlainText),
            other => Err(CompareError::UnsupportedFormat(format!(".{}", other))),
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Pdf => MIME_PDF,
            MediaType::Docx => MIME_DOCX,
            MediaType::PlainText => MIME_PLAIN_TEXT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Pdf => "PDF",
            MediaType::Docx => "DOCX",
            MediaType::PlainText => "plain text",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An uploaded file as handed over by the upload layer. Dropped after extraction.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl RawDocument {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn file_info(&self) -> FileInfo {
        FileInfo {
            name: self.name.clone(),
            size: self.size(),
            media_type: self.media_type.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub media_type: String,
}

/// Text extracted from one document. Cloning shares the underlying buffer.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    text: Arc<str>,
    info: FileInfo,
}

impl ExtractedText {
    pub fn new(text: impl Into<Arc<str>>, info: FileInfo) -> Self {
        Self {
            text: text.into(),
            info,
        }
    }

    /// Convenience for callers that already hold plain text.
    pub fn from_plain(name: &str, text: &str) -> Self {
        Self::new(
            text,
            FileInfo {
                name: name.to_string(),
                size: text.len() as u64,
                media_type: MIME_PLAIN_TEXT.to_string(),
            },
        )
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn info(&self) -> &FileInfo {
        &self.info
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub characters: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
}
