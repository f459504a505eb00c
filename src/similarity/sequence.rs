// file: src/similarity/sequence.rs
// description: greedy shared word-run search between two documents

use crate::models::SharedSequence;
use crate::parser::raw_words;
use tracing::debug;

pub const DEFAULT_MIN_SEQUENCE_WORDS: usize = 5;

/// Finds contiguous runs of identical words present in both documents.
///
/// For each start position in the first document the second document is
/// scanned left to right; the first run reaching `min_length` is recorded and
/// the scan resumes after that run. The first qualifying run wins even when a
/// longer one starts later.
pub struct SharedSequenceFinder {
    min_length: usize,
}

impl SharedSequenceFinder {
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length: min_length.max(1),
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn find(&self, text1: &str, text2: &str) -> Vec<SharedSequence> {
        let words1 = raw_words(text1);
        let words2 = raw_words(text2);
        self.find_in_words(&words1, &words2)
    }

    pub fn find_in_words(&self, words1: &[String], words2: &[String]) -> Vec<SharedSequence> {
        let mut sequences = Vec::new();
        let mut i = 0;

        while i + self.min_length <= words1.len() {
            for j in 0..words2.len() {
                let run = run_length(&words1[i..], &words2[j..]);
                if run >= self.min_length {
                    sequences.push(SharedSequence {
                        text: words1[i..i + run].join(" "),
                        pos1: i,
                        pos2: j,
                        length: run,
                    });
                    i += run - 1;
                    break;
                }
            }
            i += 1;
        }

        debug!(
            "Found {} shared sequences across {}x{} words",
            sequences.len(),
            words1.len(),
            words2.len()
        );

        sequences
    }
}

impl Default for SharedSequenceFinder {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SEQUENCE_WORDS)
    }
}

fn run_length(a: &[String], b: &[String]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedded_run_found_and_short_overlap_ignored() {
        let text1 = "Mountains rise here. the cat sat upon the warm mat today. Later we see river bend south gently";
        let text2 = "Completely different words, yes: the cat sat upon the warm mat tonight; also we see river bend";

        let sequences = SharedSequenceFinder::new(5).find(text1, text2);

        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].text, "the cat sat upon the warm mat");
        assert_eq!(sequences[0].length, 7);
        assert_eq!(sequences[0].pos1, 3);
        assert_eq!(sequences[0].pos2, 4);
    }

    #[test]
    fn test_no_sequence_shorter_than_minimum() {
        let text1 = "one two three four five six seven";
        let text2 = "zero one two three four nine";
        assert!(SharedSequenceFinder::new(5).find(text1, text2).is_empty());

        let found = SharedSequenceFinder::new(4).find(text1, text2);
        assert_eq!(found.len(), 1);
        assert!(found.iter().all(|s| s.length >= 4));
    }

    #[test]
    fn test_first_match_wins_over_longer_later_match() {
        let text1 = "a b c d e f g";
        let text2 = "a b c d e x a b c d e f g";

        let sequences = SharedSequenceFinder::new(5).find(text1, text2);

        assert_eq!(
            sequences,
            vec![SharedSequence {
                text: "a b c d e".to_string(),
                pos1: 0,
                pos2: 0,
                length: 5,
            }]
        );
    }

    #[test]
    fn test_scan_resumes_after_recorded_run() {
        let text1 = "p q r s t p q r s t";
        let text2 = "p q r s t";

        let sequences = SharedSequenceFinder::new(5).find(text1, text2);

        assert_eq!(sequences.len(), 2);
        assert_eq!((sequences[0].pos1, sequences[0].pos2), (0, 0));
        assert_eq!((sequences[1].pos1, sequences[1].pos2), (5, 0));
    }

    #[test]
    fn test_case_insensitive_and_short_documents() {
        let sequences = SharedSequenceFinder::new(3).find("Red Green Blue", "red green blue");
        assert_eq!(sequences.len(), 1);
        assert!(SharedSequenceFinder::new(5).find("too short", "too short").is_empty());
        assert!(SharedSequenceFinder::new(5).find("", "").is_empty());
    }
}
