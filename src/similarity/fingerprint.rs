// file: src/similarity/fingerprint.rs
// description: content fingerprints and hash distance
// reference: https://docs.rs/sha2

use sha2::{Digest, Sha256};

/// Length of a fingerprint in hex characters.
pub const FINGERPRINT_LEN: usize = 64;

/// SHA-256 of the text as lowercase hex.
///
/// This is an identity signal, not a graded one: any edit changes roughly
/// fifteen of every sixteen characters.
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Number of character positions at which two fingerprints differ.
///
/// Both inputs must come from [`fingerprint`]; positions past the shorter
/// string count as differences.
pub fn hamming_distance(a: &str, b: &str) -> usize {
    debug_assert_eq!(a.len(), b.len(), "fingerprints must have equal length");

    let differing = a
        .bytes()
        .zip(b.bytes())
        .filter(|(x, y)| x != y)
        .count();

    differing + a.len().abs_diff(b.len())
}
