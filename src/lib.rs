// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
//! Pairwise document similarity and plagiarism detection.
//!
//! Two uploads (PDF, DOCX or plain text) go through [`DocumentComparator`],
//! which extracts their text, runs cosine, Jaccard, fingerprint, paragraph
//! alignment and shared-phrase analyses, and returns an immutable
//! [`ComparisonResult`].

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod similarity;
pub mod storage;
pub mod utils;

pub use config::{AnalysisConfig, Config, LimitsConfig, OutputConfig, ScoringConfig, StorageConfig};
pub use error::{CompareError, ErrorKind, ErrorReport, Result};
pub use exporter::{render_text_report, JsonExporter};
pub use extractor::{ExtractorRegistry, TextExtractor};
pub use models::{
    ComparisonResult, DocumentPair, ExtractedText, FileInfo, MediaType, RawDocument,
    SharedSequence, SimilarParagraphMatch, SimilarityBand,
};
pub use parser::Tokenizer;
pub use pipeline::{CompareProgress, CompareStage, DocumentComparator};
pub use similarity::{PlagiarismScorer, SimilarityEngine};
pub use storage::{HistoryEntry, HistoryStore, JsonHistoryStore, MemoryHistoryStore};
pub use utils::{OperationTimer, Validator};
