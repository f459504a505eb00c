// file: src/similarity/vector.rs
// description: term-frequency vectors and cosine similarity

use std::collections::{BTreeSet, HashMap};

/// Occurrence count per normalized token for one text unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequency {
    counts: HashMap<String, usize>,
}

impl TermFrequency {
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts = HashMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Cosine of the angle between two term-frequency vectors laid out over the
/// union of their vocabularies. Returns 0 when either vector is all zeros.
pub fn cosine(a: &TermFrequency, b: &TermFrequency) -> f64 {
    let vocabulary: BTreeSet<&str> = a.terms().chain(b.terms()).collect();

    let mut dot = 0.0;
    let mut squared_a = 0.0;
    let mut squared_b = 0.0;

    for term in vocabulary {
        let x = a.count(term) as f64;
        let y = b.count(term) as f64;
        dot += x * y;
        squared_a += x * x;
        squared_b += y * y;
    }

    if squared_a == 0.0 || squared_b == 0.0 {
        return 0.0;
    }

    (dot / (squared_a.sqrt() * squared_b.sqrt())).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tf(words: &[&str]) -> TermFrequency {
        TermFrequency::from_tokens(words.iter().map(|w| w.to_string()))
    }

    #[test]
    fn test_counts() {
        let freq = tf(&["red", "blue", "red"]);
        assert_eq!(freq.count("red"), 2);
        assert_eq!(freq.count("green"), 0);
        assert_eq!(freq.len(), 2);
    }

    #[test]
    fn test_known_cosine() {
        // [2, 1, 0] . [1, 0, 1] = 2; |a| = sqrt(5), |b| = sqrt(2)
        let a = tf(&["red", "red", "blue"]);
        let b = tf(&["red", "green"]);
        let expected = 2.0 / (5f64.sqrt() * 2f64.sqrt());
        assert!((cosine(&a, &b) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_orthogonal_and_empty_vectors() {
        let a = tf(&["red"]);
        let b = tf(&["blue"]);
        assert_eq!(cosine(&a, &b), 0.0);
        assert_eq!(cosine(&a, &TermFrequency::default()), 0.0);
        assert_eq!(cosine(&TermFrequency::default(), &TermFrequency::default()), 0.0);
    }

    #[test]
    fn test_scale_invariance() {
        let a = tf(&["red", "blue"]);
        let b = tf(&["red", "red", "blue", "blue"]);
        assert!((cosine(&a, &b) - 1.0).abs() < 1e-9);
    }
}
