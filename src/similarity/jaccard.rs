// file: src/similarity/jaccard.rs
// description: set overlap measures

use std::collections::HashSet;
use std::hash::Hash;

/// |A ∩ B| / |A ∪ B|, or 0 when both sets are empty.
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}

/// |A ∩ B| / max(|A|, |B|), or 0 when either set is empty.
pub fn overlap_ratio<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let larger = a.len().max(b.len());
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    a.intersection(b).count() as f64 / larger as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_jaccard() {
        let a = set(&["apple", "pear", "plum"]);
        let b = set(&["pear", "plum", "kiwi", "lime"]);
        assert!((jaccard(&a, &b) - 2.0 / 5.0).abs() < 1e-9);
        assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }

    #[test]
    fn test_jaccard_empty() {
        assert_eq!(jaccard(&set(&[]), &set(&[])), 0.0);
        assert_eq!(jaccard(&set(&["apple"]), &set(&[])), 0.0);
    }

    #[test]
    fn test_overlap_ratio() {
        let a = set(&["apple", "pear"]);
        let b = set(&["pear", "plum", "kiwi", "lime"]);
        assert!((overlap_ratio(&a, &b) - 0.25).abs() < 1e-9);
        assert_eq!(overlap_ratio(&a, &set(&[])), 0.0);
    }
}
