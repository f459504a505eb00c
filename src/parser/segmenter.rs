// file: src/parser/segmenter.rs
// description: paragraph and sentence segmentation plus document statistics

use super::patterns::{PARAGRAPH_BREAK, SENTENCE_END};
use crate::models::{DocumentStats, Paragraph};

/// Split on runs of newlines, trim, and keep segments of at least
/// `min_chars` characters. Indices are assigned to the kept segments.
pub fn split_paragraphs(text: &str, min_chars: usize) -> Vec<Paragraph> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|segment| !segment.is_empty() && segment.chars().count() >= min_chars)
        .enumerate()
        .map(|(index, segment)| Paragraph::new(index, segment))
        .collect()
}

/// Split after runs of `.`, `!` or `?` that are followed by whitespace or
/// end the text. Trailing text without terminal punctuation is a sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_END.find_iter(text) {
        push_sentence(&mut sentences, &text[start..boundary.end()]);
        start = boundary.end();
    }

    push_sentence(&mut sentences, &text[start..]);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

pub fn document_stats(text: &str, min_paragraph_chars: usize) -> DocumentStats {
    DocumentStats {
        characters: text.chars().count(),
        words: text.split_whitespace().count(),
        sentences: split_sentences(text).len(),
        paragraphs: split_paragraphs(text, min_paragraph_chars).len(),
    }
}
