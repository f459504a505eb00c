// file: src/exporter/report.rs
// description: plain-text comparison report

use crate::models::ComparisonResult;
use crate::utils::Validator;
use std::fmt::Write;

const TOP_MATCHES: usize = 5;
const TOP_SEQUENCES: usize = 5;
const EXCERPT_CHARS: usize = 120;

pub fn render_text_report(result: &ComparisonResult) -> String {
    let mut out = String::new();
    let rule = "=".repeat(72);

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "Comparison: {} vs {}",
        result.file_info.file1.name, result.file_info.file2.name
    );
    let _ = writeln!(out, "{}", rule);

    let _ = writeln!(out, "Cosine similarity:   {:.4}", result.similarity);
    let _ = writeln!(out, "Jaccard similarity:  {:.4}", result.jaccard_similarity);
    let _ = writeln!(out, "Semantic similarity: {:.4}", result.semantic_similarity);
    let _ = writeln!(out, "Combined score:      {:.4}", result.combined_score);
    let _ = writeln!(out, "Hamming distance:    {}", result.hamming_distance);
    let _ = writeln!(out, "Similarity band:     {}", result.similarity_band.label());
    let _ = writeln!(out, "Plagiarism detected: {}", result.verdict_label());

    let _ = writeln!(
        out,
        "\nSimilar paragraphs: {} (doc1 {} / doc2 {} paragraphs)",
        result.similar_content.len(),
        result.doc1_paragraphs.len(),
        result.doc2_paragraphs.len()
    );
    for m in result.matches_by_similarity().into_iter().take(TOP_MATCHES) {
        let _ = writeln!(
            out,
            "  [{} <-> {}] {:.4}\n    1: {}\n    2: {}",
            m.index1,
            m.index2,
            m.similarity,
            Validator::truncate_text(&m.paragraph1, EXCERPT_CHARS),
            Validator::truncate_text(&m.paragraph2, EXCERPT_CHARS)
        );
    }

    let _ = writeln!(out, "\nShared phrases: {}", result.shared_sequences.len());
    for sequence in result.shared_sequences.iter().take(TOP_SEQUENCES) {
        let _ = writeln!(
            out,
            "  ({} words at {}/{}) \"{}\"",
            sequence.length,
            sequence.pos1,
            sequence.pos2,
            Validator::truncate_text(&sequence.text, EXCERPT_CHARS)
        );
    }

    if let Some(explanation) = &result.explanation {
        let _ = writeln!(out, "\n{}", explanation.summary);
        let _ = writeln!(out, "{}", explanation.details);
        for recommendation in &explanation.recommendations {
            let _ = writeln!(out, "  - {}", recommendation);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtractedText;
    use crate::pipeline::DocumentComparator;
    use crate::Config;

    #[test]
    fn test_report_contains_metrics_and_verdict() {
        let body = "The quick brown fox jumps over the lazy dog near the river bank today.";
        let result = DocumentComparator::new(Config::default_config())
            .unwrap()
            .compare_texts(
                &ExtractedText::from_plain("essay-a.txt", body),
                &ExtractedText::from_plain("essay-b.txt", body),
            )
            .unwrap();

        let report = render_text_report(&result);
        assert!(report.contains("essay-a.txt vs essay-b.txt"));
        assert!(report.contains("Cosine similarity:   1.0000"));
        assert!(report.contains("Plagiarism detected: Yes"));
        assert!(report.contains("Similarity band:     Very High"));
        assert!(report.contains("Shared phrases: 1"));
        assert!(report.contains("The documents are textually identical."));
    }
}
