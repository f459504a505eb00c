// file: src/similarity/explanation.rs
// description: human-readable explanation of a comparison verdict

use super::scorer::PlagiarismScore;
use crate::models::{Explanation, Factor, SimilarityBand};

/// Metrics an explanation is built from.
#[derive(Debug, Clone, Copy)]
pub struct Evidence {
    pub cosine: f64,
    pub jaccard: f64,
    pub semantic: f64,
    pub score: PlagiarismScore,
    pub paragraph_matches: usize,
    pub shared_sequences: usize,
    pub identical_fingerprint: bool,
}

pub fn explain(evidence: &Evidence) -> Explanation {
    let band = SimilarityBand::from_score(evidence.cosine);

    Explanation {
        summary: summary(evidence, band),
        factors: factors(evidence),
        details: details(evidence),
        recommendations: recommendations(evidence, band),
    }
}

fn summary(evidence: &Evidence, band: SimilarityBand) -> String {
    if evidence.identical_fingerprint {
        return "The documents are textually identical.".to_string();
    }

    let verdict = if evidence.score.detected {
        "Potential plagiarism detected"
    } else {
        "No plagiarism detected"
    };

    format!(
        "{}: {} overall similarity ({}% combined score).",
        verdict,
        band.label().to_lowercase(),
        percent(evidence.score.combined)
    )
}

fn factors(evidence: &Evidence) -> Vec<Factor> {
    vec![
        Factor {
            name: "Vocabulary overlap".to_string(),
            value: evidence.cosine,
            description: "Cosine similarity of word-frequency vectors".to_string(),
        },
        Factor {
            name: "Shared terms".to_string(),
            value: evidence.jaccard,
            description: "Fraction of distinct terms used by both documents".to_string(),
        },
        Factor {
            name: "Word-form overlap".to_string(),
            value: evidence.semantic,
            description: "Overlap of stemmed terms, ignoring inflection".to_string(),
        },
        Factor {
            name: "Matching paragraphs".to_string(),
            value: evidence.score.paragraph_density,
            description: format!(
                "{} strongly matching paragraph pair(s)",
                evidence.score.strong_matches
            ),
        },
    ]
}

fn details(evidence: &Evidence) -> String {
    let mut parts = vec![format!(
        "{} similar paragraph pair(s) were found, {} of them strong matches.",
        evidence.paragraph_matches, evidence.score.strong_matches
    )];

    if evidence.shared_sequences > 0 {
        parts.push(format!(
            "{} verbatim phrase(s) of several consecutive words appear in both documents.",
            evidence.shared_sequences
        ));
    } else {
        parts.push("No long verbatim phrases are shared.".to_string());
    }

    parts.join(" ")
}

fn recommendations(evidence: &Evidence, band: SimilarityBand) -> Vec<String> {
    let mut recommendations = Vec::new();

    if evidence.score.detected {
        recommendations.push("Review the matching paragraphs side by side.".to_string());
    }
    if evidence.shared_sequences > 0 {
        recommendations
            .push("Check whether the shared phrases are quoted and attributed.".to_string());
    }
    if !evidence.score.detected && matches!(band, SimilarityBand::Moderate | SimilarityBand::High) {
        recommendations.push(
            "Similarity is notable but below the verdict threshold; a manual read is advised."
                .to_string(),
        );
    }

    recommendations
}

fn percent(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evidence(cosine: f64, detected: bool, shared_sequences: usize) -> Evidence {
        Evidence {
            cosine,
            jaccard: cosine,
            semantic: cosine,
            score: PlagiarismScore {
                combined: cosine,
                paragraph_density: 0.0,
                strong_matches: 0,
                detected,
            },
            paragraph_matches: 0,
            shared_sequences,
            identical_fingerprint: false,
        }
    }

    #[test]
    fn test_detected_summary_and_recommendations() {
        let explanation = explain(&evidence(0.92, true, 2));
        assert!(explanation.summary.starts_with("Potential plagiarism detected"));
        assert!(explanation.summary.contains("very high"));
        assert_eq!(explanation.factors.len(), 4);
        assert_eq!(explanation.recommendations.len(), 2);
        assert!(explanation.details.contains("2 verbatim phrase(s)"));
    }

    #[test]
    fn test_moderate_similarity_suggests_manual_read() {
        let explanation = explain(&evidence(0.55, false, 0));
        assert!(explanation.summary.starts_with("No plagiarism detected"));
        assert_eq!(explanation.recommendations.len(), 1);
        assert!(explanation.details.contains("No long verbatim phrases"));
    }

    #[test]
    fn test_identical_documents() {
        let mut identical = evidence(1.0, true, 1);
        identical.identical_fingerprint = true;
        assert_eq!(explain(&identical).summary, "The documents are textually identical.");
    }
}
