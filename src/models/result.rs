// file: src/models/result.rs
// description: comparison result, explanation and similarity band models
// reference: internal data structures

use super::document::{DocumentStats, FileInfo};
use super::matching::{SharedSequence, SimilarParagraphMatch};
use serde::{Deserialize, Serialize};

/// One value per compared document, serialized as `{file1, file2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPair<T> {
    pub file1: T,
    pub file2: T,
}

impl<T> DocumentPair<T> {
    pub fn new(file1: T, file2: T) -> Self {
        Self { file1, file2 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimilarityBand {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl SimilarityBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            SimilarityBand::VeryHigh
        } else if score >= 0.7 {
            SimilarityBand::High
        } else if score >= 0.5 {
            SimilarityBand::Moderate
        } else {
            SimilarityBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SimilarityBand::VeryHigh => "Very High",
            SimilarityBand::High => "High",
            SimilarityBand::Moderate => "Moderate",
            SimilarityBand::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    pub name: String,
    #[serde(serialize_with = "super::serde_fixed::serialize")]
    pub value: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub summary: String,
    pub factors: Vec<Factor>,
    pub details: String,
    pub recommendations: Vec<String>,
}

/// Immutable output of one pairwise comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Cosine similarity of the whole documents.
    #[serde(serialize_with = "super::serde_fixed::serialize")]
    pub similarity: f64,
    #[serde(serialize_with = "super::serde_fixed::serialize")]
    pub jaccard_similarity: f64,
    #[serde(serialize_with = "super::serde_fixed::serialize")]
    pub semantic_similarity: f64,
    #[serde(serialize_with = "super::serde_fixed::serialize")]
    pub combined_score: f64,
    pub hamming_distance: usize,
    pub plagiarism_detected: bool,
    pub similarity_band: SimilarityBand,
    pub similar_content: Vec<SimilarParagraphMatch>,
    pub doc1_paragraphs: Vec<String>,
    pub doc2_paragraphs: Vec<String>,
    pub shared_sequences: Vec<SharedSequence>,
    pub fingerprints: DocumentPair<String>,
    pub file_info: DocumentPair<FileInfo>,
    pub document_stats: DocumentPair<DocumentStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<Explanation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc1_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc2_text: Option<String>,
}

impl ComparisonResult {
    /// Paragraph matches ordered by descending similarity, for presentation.
    pub fn matches_by_similarity(&self) -> Vec<&SimilarParagraphMatch> {
        let mut matches: Vec<&SimilarParagraphMatch> = self.similar_content.iter().collect();
        matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        matches
    }

    pub fn verdict_label(&self) -> &'static str {
        if self.plagiarism_detected { "Yes" } else { "No" }
    }
}
