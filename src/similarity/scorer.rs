// file: src/similarity/scorer.rs
// description: weighted plagiarism score and verdict

use crate::config::ScoringConfig;
use crate::models::SimilarParagraphMatch;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlagiarismScore {
    pub combined: f64,
    pub paragraph_density: f64,
    pub strong_matches: usize,
    pub detected: bool,
}

/// Combines document-level similarity with paragraph match density:
/// `combined = wc*cosine + wj*jaccard + wp*min(1, strong / saturation)`.
#[derive(Debug, Clone)]
pub struct PlagiarismScorer {
    config: ScoringConfig,
}

impl PlagiarismScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn paragraph_density(&self, matches: &[SimilarParagraphMatch]) -> (usize, f64) {
        let strong = matches
            .iter()
            .filter(|m| m.similarity >= self.config.strong_match_threshold)
            .count();
        let saturation = self.config.strong_match_saturation.max(1) as f64;

        (strong, (strong as f64 / saturation).min(1.0))
    }

    pub fn score(
        &self,
        cosine: f64,
        jaccard: f64,
        matches: &[SimilarParagraphMatch],
    ) -> PlagiarismScore {
        let (strong_matches, paragraph_density) = self.paragraph_density(matches);

        let combined = self.config.cosine_weight * cosine
            + self.config.jaccard_weight * jaccard
            + self.config.paragraph_weight * paragraph_density;

        PlagiarismScore {
            combined,
            paragraph_density,
            strong_matches,
            detected: combined >= self.config.verdict_threshold,
        }
    }
}

impl Default for PlagiarismScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
