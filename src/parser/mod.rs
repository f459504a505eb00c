// file: src/parser/mod.rs
// description: text normalization, tokenization and segmentation exports
// reference: internal module structure

pub mod normalizer;
pub mod patterns;
pub mod segmenter;
pub mod stemmer;
pub mod tokenizer;

pub use normalizer::TextNormalizer;
pub use segmenter::{document_stats, split_paragraphs, split_sentences};
pub use stemmer::stem;
pub use tokenizer::{raw_words, Tokenizer};
