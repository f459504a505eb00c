// file: src/parser/normalizer.rs
// description: extracted text normalization for consistent downstream analysis

use super::patterns::CONTROL_CHARS;

pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, content: &str) -> String {
        let mut normalized = self.strip_bom(content).to_string();

        normalized = self.normalize_line_endings(&normalized);
        normalized = self.strip_control_chars(&normalized);
        normalized = self.trim_line_ends(&normalized);

        normalized
    }

    fn strip_bom<'a>(&self, content: &'a str) -> &'a str {
        content.strip_prefix('\u{feff}').unwrap_or(content)
    }

    fn normalize_line_endings(&self, content: &str) -> String {
        content.replace("\r\n", "\n").replace('\r', "\n")
    }

    fn strip_control_chars(&self, content: &str) -> String {
        CONTROL_CHARS.replace_all(content, "").into_owned()
    }

    fn trim_line_ends(&self, content: &str) -> String {
        content
            .split('\n')
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_ending_normalization() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_bom_and_control_chars_removed() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("\u{feff}he\u{0}llo\tworld"), "hello\tworld");
    }

    #[test]
    fn test_trailing_whitespace_trimmed_per_line() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("line one   \n  line two\t"), "line one\n  line two");
    }
}
