// file: src/parser/stemmer.rs
// description: light suffix-stripping stemmer

/// Suffix rules checked in order; the first applicable one wins.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("fulness", "ful"),
    ("ness", ""),
    ("ment", ""),
    ("edly", ""),
    ("ingly", ""),
    ("ing", ""),
    ("ies", "y"),
    ("ied", "y"),
    ("ed", ""),
    ("ly", ""),
    ("es", ""),
    ("s", ""),
];

const MIN_STEM_CHARS: usize = 3;

/// Strip one common English suffix, keeping at least three characters.
/// Tokens ending in `ss` keep their final `s`.
pub fn stem(token: &str) -> String {
    for (suffix, replacement) in SUFFIX_RULES {
        if *suffix == "s" && token.ends_with("ss") {
            continue;
        }

        if let Some(base) = token.strip_suffix(suffix) {
            if base.chars().count() + replacement.chars().count() >= MIN_STEM_CHARS {
                return format!("{}{}", base, replacement);
            }
        }
    }

    token.to_string()
}
