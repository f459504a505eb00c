// file: src/similarity/paragraph.rs
// description: exhaustive pairwise paragraph alignment

use super::vector::{cosine, TermFrequency};
use crate::models::{Paragraph, SimilarParagraphMatch};
use crate::parser::Tokenizer;
use tracing::debug;

pub const DEFAULT_PARAGRAPH_THRESHOLD: f64 = 0.6;

/// Scores every paragraph of one document against every paragraph of the
/// other and keeps pairs whose cosine similarity reaches the threshold.
pub struct ParagraphAligner<'a> {
    tokenizer: &'a Tokenizer,
    threshold: f64,
}

impl<'a> ParagraphAligner<'a> {
    pub fn new(tokenizer: &'a Tokenizer, threshold: f64) -> Self {
        Self {
            tokenizer,
            threshold,
        }
    }

    /// Matches come out in scan order: outer loop over `paras1`, inner over
    /// `paras2`. A paragraph may appear in any number of matches.
    pub fn align(&self, paras1: &[Paragraph], paras2: &[Paragraph]) -> Vec<SimilarParagraphMatch> {
        let vectors1 = self.vectorize(paras1);
        let vectors2 = self.vectorize(paras2);
        let mut matches = Vec::new();

        for (p1, v1) in paras1.iter().zip(&vectors1) {
            for (p2, v2) in paras2.iter().zip(&vectors2) {
                let similarity = cosine(v1, v2);
                if similarity >= self.threshold {
                    matches.push(SimilarParagraphMatch {
                        paragraph1: p1.text.clone(),
                        paragraph2: p2.text.clone(),
                        index1: p1.index,
                        index2: p2.index,
                        similarity,
                    });
                }
            }
        }

        debug!(
            "Aligned {}x{} paragraphs, {} matches at threshold {}",
            paras1.len(),
            paras2.len(),
            matches.len(),
            self.threshold
        );

        matches
    }

    fn vectorize(&self, paragraphs: &[Paragraph]) -> Vec<TermFrequency> {
        paragraphs
            .iter()
            .map(|p| TermFrequency::from_tokens(self.tokenizer.vector_tokens(&p.text)))
            .collect()
    }
}
