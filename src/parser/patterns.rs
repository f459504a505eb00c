// file: src/parser/patterns.rs
// description: compiled regex patterns for tokenization and normalization
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Tokenization
    pub static ref NON_WORD_CHARS: Regex = Regex::new(
        r"[^\w\s]"
    ).expect("NON_WORD_CHARS regex is valid");

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).expect("WHITESPACE_RUN regex is valid");

    pub static ref WORD: Regex = Regex::new(
        r"\w+"
    ).expect("WORD regex is valid");

    // Segmentation
    pub static ref PARAGRAPH_BREAK: Regex = Regex::new(
        r"\n+"
    ).expect("PARAGRAPH_BREAK regex is valid");

    pub static ref SENTENCE_END: Regex = Regex::new(
        r"[.!?]+(?:\s+|$)"
    ).expect("SENTENCE_END regex is valid");

    // Normalization
    pub static ref CONTROL_CHARS: Regex = Regex::new(
        r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F]"
    ).expect("CONTROL_CHARS regex is valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_pattern() {
        let words: Vec<&str> = WORD.find_iter("it's a re-run").map(|m| m.as_str()).collect();
        assert_eq!(words, vec!["it", "s", "a", "re", "run"]);
    }

    #[test]
    fn test_non_word_chars_pattern() {
        assert_eq!(NON_WORD_CHARS.replace_all("don't stop!", ""), "dont stop");
    }
}
