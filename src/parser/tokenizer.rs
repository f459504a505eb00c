// file: src/parser/tokenizer.rs
// description: word tokenization pipelines for vector and set similarity
// reference: split-based and regex-based token extraction

use super::patterns::{NON_WORD_CHARS, WHITESPACE_RUN, WORD};
use std::collections::HashSet;

/// Stopwords dropped by the term-frequency pipeline.
pub const VECTOR_STOPWORDS: &[&str] = &["the", "and", "for", "but", "not", "with", "this", "that"];

/// Stopwords dropped by the set pipeline. Superset of [`VECTOR_STOPWORDS`].
pub const SET_STOPWORDS: &[&str] = &[
    "the", "and", "for", "but", "not", "with", "this", "that", "is", "are", "was", "were",
];

/// Tokens this short or shorter are never kept.
const MAX_DROPPED_LEN: usize = 2;

/// Holds the stopword lists for both tokenization pipelines.
///
/// The two pipelines differ on purpose: [`Tokenizer::vector_tokens`] strips
/// punctuation and splits on whitespace, while [`Tokenizer::set_tokens`]
/// extracts `\w+` runs. `"it's"` is one token (`its`) in the first and two
/// (`it`, `s`) in the second.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    vector_stopwords: HashSet<String>,
    set_stopwords: HashSet<String>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::with_extra_stopwords(&[])
    }

    /// Extend both stopword lists with caller supplied words.
    pub fn with_extra_stopwords(extra: &[String]) -> Self {
        let extra = extra.iter().map(|w| w.trim().to_lowercase()).filter(|w| !w.is_empty());

        let mut vector_stopwords: HashSet<String> =
            VECTOR_STOPWORDS.iter().map(|w| w.to_string()).collect();
        let mut set_stopwords: HashSet<String> =
            SET_STOPWORDS.iter().map(|w| w.to_string()).collect();

        for word in extra {
            vector_stopwords.insert(word.clone());
            set_stopwords.insert(word);
        }

        Self {
            vector_stopwords,
            set_stopwords,
        }
    }

    /// lowercase, strip punctuation, collapse whitespace, split, filter.
    pub fn vector_tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let stripped = NON_WORD_CHARS.replace_all(&lowered, "");
        let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");

        collapsed
            .split(' ')
            .filter(|token| keep(token, &self.vector_stopwords))
            .map(str::to_string)
            .collect()
    }

    /// lowercase, extract `\w+` runs, filter.
    pub fn set_tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        WORD.find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|token| keep(token, &self.set_stopwords))
            .map(str::to_string)
            .collect()
    }

    /// Distinct tokens of the set pipeline.
    pub fn token_set(&self, text: &str) -> HashSet<String> {
        self.set_tokens(text).into_iter().collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn keep(token: &str, stopwords: &HashSet<String>) -> bool {
    token.chars().count() > MAX_DROPPED_LEN && !stopwords.contains(token)
}

/// Lowercased whitespace-delimited words, punctuation kept.
pub fn raw_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
