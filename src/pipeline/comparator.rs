// file: src/pipeline/comparator.rs
// description: runs extraction and all similarity analyses for one document pair
// reference: pure pipeline producing an immutable comparison result

use crate::config::Config;
use crate::error::{CompareError, Result};
use crate::extractor::ExtractorRegistry;
use crate::models::{
    ComparisonResult, DocumentPair, ExtractedText, Paragraph, RawDocument, SharedSequence,
    SimilarParagraphMatch, SimilarityBand,
};
use crate::parser::{document_stats, raw_words, split_paragraphs, Tokenizer};
use crate::similarity::{
    explain, fingerprint, hamming_distance, Evidence, ParagraphAligner, PlagiarismScorer,
    SharedSequenceFinder, SimilarityEngine,
};
use crate::utils::{OperationTimer, Validator};
use std::time::Duration;
use tracing::{debug, info};

/// Compares exactly two documents. Holds no per-comparison state, so one
/// instance can serve concurrent comparisons.
pub struct DocumentComparator {
    config: Config,
    extractors: ExtractorRegistry,
    engine: SimilarityEngine,
    scorer: PlagiarismScorer,
}

struct Segments {
    paragraphs: Vec<Paragraph>,
    words: Vec<String>,
}

struct Analyses {
    cosine: f64,
    jaccard: f64,
    semantic: f64,
    fingerprints: (String, String),
    matches: Vec<SimilarParagraphMatch>,
    sequences: Vec<SharedSequence>,
}

impl DocumentComparator {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let tokenizer = Tokenizer::with_extra_stopwords(&config.analysis.extra_stopwords);
        let scorer = PlagiarismScorer::new(config.scoring.clone());

        Ok(Self {
            config,
            extractors: ExtractorRegistry::new(),
            engine: SimilarityEngine::new(tokenizer),
            scorer,
        })
    }

    /// Replace the extraction backends.
    pub fn with_extractors(mut self, extractors: ExtractorRegistry) -> Self {
        self.extractors = extractors;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extract one upload. Errors name the offending file.
    pub fn extract(&self, document: &RawDocument) -> Result<ExtractedText> {
        let text = self
            .extractors
            .extract(&document.bytes, &document.media_type)
            .map_err(|e| e.for_file(&document.name))?;

        Ok(ExtractedText::new(text, document.file_info()))
    }

    /// Extract and compare an upload batch, which must hold exactly two documents.
    pub fn compare_uploads(&self, documents: &[RawDocument]) -> Result<ComparisonResult> {
        Validator::validate_document_count(documents.len())?;

        let first = self.extract(&documents[0])?;
        let second = self.extract(&documents[1])?;

        self.compare_texts(&first, &second)
    }

    pub fn compare_texts(
        &self,
        doc1: &ExtractedText,
        doc2: &ExtractedText,
    ) -> Result<ComparisonResult> {
        let timer = OperationTimer::new("document comparison");
        let min_chars = self.config.analysis.min_text_chars;

        for doc in [doc1, doc2] {
            Validator::validate_text_length(doc.as_str(), min_chars)
                .map_err(|e| e.for_file(&doc.info().name))?;
        }

        let segments1 = self.segment(doc1);
        let segments2 = self.segment(doc2);
        self.check_limits(&segments1, &segments2)?;
        timer.checkpoint("segmented");

        let analyses = self.analyze(doc1.as_str(), doc2.as_str(), &segments1, &segments2);
        timer.checkpoint("analyzed");

        let result = self.assemble(doc1, doc2, &segments1, &segments2, analyses);

        timer.warn_if_slow(
            Duration::from_millis(self.config.limits.slow_comparison_ms),
            &format!("{} vs {}", doc1.info().name, doc2.info().name),
        );
        timer.finish();

        info!(
            "Compared {} and {}: cosine {:.4}, jaccard {:.4}, combined {:.4}, plagiarism {}",
            doc1.info().name,
            doc2.info().name,
            result.similarity,
            result.jaccard_similarity,
            result.combined_score,
            result.verdict_label()
        );

        Ok(result)
    }

    fn segment(&self, doc: &ExtractedText) -> Segments {
        Segments {
            paragraphs: split_paragraphs(doc.as_str(), self.config.analysis.min_paragraph_chars),
            words: raw_words(doc.as_str()),
        }
    }

    /// Reject inputs whose quadratic analyses would exceed the configured ceilings.
    fn check_limits(&self, a: &Segments, b: &Segments) -> Result<()> {
        let limits = &self.config.limits;

        let paragraph_pairs = a.paragraphs.len().saturating_mul(b.paragraphs.len());
        if paragraph_pairs > limits.max_paragraph_pairs {
            return Err(CompareError::ComparisonTimeout {
                stage: "paragraph alignment",
                size: paragraph_pairs,
                limit: limits.max_paragraph_pairs,
            });
        }

        let word_pairs = a.words.len().saturating_mul(b.words.len());
        if word_pairs > limits.max_word_pairs {
            return Err(CompareError::ComparisonTimeout {
                stage: "shared sequence search",
                size: word_pairs,
                limit: limits.max_word_pairs,
            });
        }

        debug!(
            "Within limits: {} paragraph pairs, {} word pairs",
            paragraph_pairs, word_pairs
        );
        Ok(())
    }

    /// The four analyses read the same immutable inputs and run in parallel.
    fn analyze(&self, text1: &str, text2: &str, a: &Segments, b: &Segments) -> Analyses {
        let aligner = ParagraphAligner::new(
            self.engine.tokenizer(),
            self.config.analysis.paragraph_threshold,
        );
        let finder = SharedSequenceFinder::new(self.config.analysis.min_sequence_words);

        let ((cosine, jaccard, semantic), (fingerprints, (matches, sequences))) = rayon::join(
            || {
                (
                    self.engine.cosine_similarity(text1, text2),
                    self.engine.jaccard_similarity(text1, text2),
                    self.engine.semantic_similarity(text1, text2),
                )
            },
            || {
                rayon::join(
                    || (fingerprint(text1), fingerprint(text2)),
                    || {
                        rayon::join(
                            || aligner.align(&a.paragraphs, &b.paragraphs),
                            || finder.find_in_words(&a.words, &b.words),
                        )
                    },
                )
            },
        );

        Analyses {
            cosine,
            jaccard,
            semantic,
            fingerprints,
            matches,
            sequences,
        }
    }

    fn assemble(
        &self,
        doc1: &ExtractedText,
        doc2: &ExtractedText,
        a: &Segments,
        b: &Segments,
        analyses: Analyses,
    ) -> ComparisonResult {
        let Analyses {
            cosine,
            jaccard,
            semantic,
            fingerprints: (fingerprint1, fingerprint2),
            matches,
            mut sequences,
        } = analyses;

        let score = self.scorer.score(cosine, jaccard, &matches);
        let distance = hamming_distance(&fingerprint1, &fingerprint2);

        let explanation = self.config.output.include_explanation.then(|| {
            explain(&Evidence {
                cosine,
                jaccard,
                semantic,
                score,
                paragraph_matches: matches.len(),
                shared_sequences: sequences.len(),
                identical_fingerprint: distance == 0,
            })
        });

        sequences.truncate(self.config.analysis.max_shared_sequences);

        let min_paragraph_chars = self.config.analysis.min_paragraph_chars;
        let include_text = self.config.output.include_text;

        ComparisonResult {
            similarity: cosine,
            jaccard_similarity: jaccard,
            semantic_similarity: semantic,
            combined_score: score.combined,
            hamming_distance: distance,
            plagiarism_detected: score.detected,
            similarity_band: SimilarityBand::from_score(cosine),
            similar_content: matches,
            doc1_paragraphs: a.paragraphs.iter().map(|p| p.text.clone()).collect(),
            doc2_paragraphs: b.paragraphs.iter().map(|p| p.text.clone()).collect(),
            shared_sequences: sequences,
            fingerprints: DocumentPair::new(fingerprint1, fingerprint2),
            file_info: DocumentPair::new(doc1.info().clone(), doc2.info().clone()),
            document_stats: DocumentPair::new(
                document_stats(doc1.as_str(), min_paragraph_chars),
                document_stats(doc2.as_str(), min_paragraph_chars),
            ),
            explanation,
            doc1_text: include_text.then(|| doc1.as_str().to_string()),
            doc2_text: include_text.then(|| doc2.as_str().to_string()),
        }
    }
}
