// file: src/similarity/mod.rs
// description: similarity metrics, alignment and scoring
// reference: internal module structure

pub mod explanation;
pub mod fingerprint;
pub mod jaccard;
pub mod paragraph;
pub mod scorer;
pub mod sequence;
pub mod vector;

pub use explanation::{explain, Evidence};
pub use fingerprint::{fingerprint, hamming_distance, FINGERPRINT_LEN};
pub use paragraph::ParagraphAligner;
pub use scorer::{PlagiarismScore, PlagiarismScorer};
pub use sequence::SharedSequenceFinder;
pub use vector::{cosine, TermFrequency};

use crate::parser::{stem, Tokenizer};
use std::collections::HashSet;

/// Whole-document similarity metrics over a shared [`Tokenizer`].
#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine {
    tokenizer: Tokenizer,
}

impl SimilarityEngine {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn term_frequency(&self, text: &str) -> TermFrequency {
        TermFrequency::from_tokens(self.tokenizer.vector_tokens(text))
    }

    /// Cosine similarity of the texts' term-frequency vectors, in [0, 1].
    pub fn cosine_similarity(&self, text1: &str, text2: &str) -> f64 {
        cosine(&self.term_frequency(text1), &self.term_frequency(text2))
    }

    /// Jaccard index of the texts' filtered token sets, in [0, 1].
    pub fn jaccard_similarity(&self, text1: &str, text2: &str) -> f64 {
        jaccard::jaccard(
            &self.tokenizer.token_set(text1),
            &self.tokenizer.token_set(text2),
        )
    }

    /// Overlap of stemmed token sets relative to the larger set. A cheap
    /// proxy that tolerates inflection; it carries no notion of meaning.
    pub fn semantic_similarity(&self, text1: &str, text2: &str) -> f64 {
        jaccard::overlap_ratio(&self.stems(text1), &self.stems(text2))
    }

    fn stems(&self, text: &str) -> HashSet<String> {
        self.tokenizer
            .set_tokens(text)
            .iter()
            .map(|token| stem(token))
            .collect()
    }
}
