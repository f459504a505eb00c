// file: src/models/matching.rs
// description: paragraph and shared phrase match models
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// A substantive paragraph. `index` is its ordinal among the paragraphs kept
/// for its document and is stable for one comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub index: usize,
    pub text: String,
}

impl Paragraph {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarParagraphMatch {
    pub paragraph1: String,
    pub paragraph2: String,
    pub index1: usize,
    pub index2: usize,
    #[serde(serialize_with = "super::serde_fixed::serialize")]
    pub similarity: f64,
}

/// A run of identical words found in both documents. Positions are word
/// offsets into each document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedSequence {
    pub text: String,
    pub pos1: usize,
    pub pos2: usize,
    pub length: usize,
}
