// file: src/error.rs
// description: Custom error types, result alias and boundary error reports
// reference: https://docs.rs/thiserror

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, CompareError>;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Unsupported format: {0} (expected PDF, DOCX, or plain text)")]
    UnsupportedFormat(String),

    #[error("Failed to extract {format} text: {message}")]
    ExtractionFailure {
        format: &'static str,
        message: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Comparison aborted during {stage}: {size} exceeds the limit of {limit}")]
    ComparisonTimeout {
        stage: &'static str,
        size: usize,
        limit: usize,
    },

    #[error("{file}: {source}")]
    File {
        file: String,
        #[source]
        source: Box<CompareError>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification used at the boundary to pick a response class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnsupportedFormat,
    ExtractionFailure,
    InvalidInput,
    ComparisonTimeout,
    Internal,
}

impl ErrorKind {
    /// True for errors the caller can fix by changing the uploaded files.
    pub fn is_user_correctable(&self) -> bool {
        !matches!(self, ErrorKind::Internal)
    }
}

/// Structured, user-facing error object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl CompareError {
    /// Attach the name of the document that produced this error.
    pub fn for_file(self, file: impl Into<String>) -> Self {
        CompareError::File {
            file: file.into(),
            source: Box::new(self),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CompareError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            CompareError::ExtractionFailure { .. } => ErrorKind::ExtractionFailure,
            CompareError::InvalidInput(_) => ErrorKind::InvalidInput,
            CompareError::ComparisonTimeout { .. } => ErrorKind::ComparisonTimeout,
            CompareError::File { source, .. } => source.kind(),
            CompareError::Config(_)
            | CompareError::Storage(_)
            | CompareError::Serialization(_)
            | CompareError::Io(_) => ErrorKind::Internal,
        }
    }

    pub fn file(&self) -> Option<&str> {
        match self {
            CompareError::File { file, .. } => Some(file),
            _ => None,
        }
    }

    /// Build the report handed back to callers. Internal failures are logged
    /// in full and replaced by a generic message.
    pub fn report(&self) -> ErrorReport {
        let kind = self.kind();
        let message = match kind {
            ErrorKind::Internal => {
                error!("Internal comparison failure: {:?}", self);
                "Error comparing documents".to_string()
            }
            ErrorKind::ComparisonTimeout => format!(
                "{}. Try comparing smaller documents.",
                self.innermost()
            ),
            _ => self.innermost().to_string(),
        };

        ErrorReport {
            kind,
            message,
            file: self.file().map(str::to_string),
        }
    }

    fn innermost(&self) -> &CompareError {
        match self {
            CompareError::File { source, .. } => source.innermost(),
            other => other,
        }
    }
}

impl From<serde_json::Error> for CompareError {
    fn from(err: serde_json::Error) -> Self {
        CompareError::Serialization(err.to_string())
    }
}
