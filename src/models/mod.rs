// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod matching;
pub mod result;
pub mod serde_fixed;

pub use document::{DocumentStats, ExtractedText, FileInfo, MediaType, RawDocument};
pub use matching::{Paragraph, SharedSequence, SimilarParagraphMatch};
pub use result::{ComparisonResult, DocumentPair, Explanation, Factor, SimilarityBand};
