// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{CompareError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub scoring: ScoringConfig,
    pub limits: LimitsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    pub paragraph_threshold: f64,
    pub min_paragraph_chars: usize,
    pub min_sequence_words: usize,
    pub max_shared_sequences: usize,
    pub min_text_chars: usize,
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoringConfig {
    pub cosine_weight: f64,
    pub jaccard_weight: f64,
    pub paragraph_weight: f64,
    pub verdict_threshold: f64,
    pub strong_match_threshold: f64,
    pub strong_match_saturation: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    pub max_paragraph_pairs: usize,
    pub max_word_pairs: usize,
    pub max_file_size_mb: usize,
    pub slow_comparison_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub include_explanation: bool,
    pub include_text: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub history_path: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            paragraph_threshold: 0.6,
            min_paragraph_chars: 30,
            min_sequence_words: 5,
            max_shared_sequences: 20,
            min_text_chars: 10,
            extra_stopwords: vec![],
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            cosine_weight: 0.5,
            jaccard_weight: 0.3,
            paragraph_weight: 0.2,
            verdict_threshold: 0.7,
            strong_match_threshold: 0.8,
            strong_match_saturation: 3,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_paragraph_pairs: 250_000,
            max_word_pairs: 400_000_000,
            max_file_size_mb: 10,
            slow_comparison_ms: 2_000,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_explanation: true,
            include_text: false,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from("data/history.json"),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DOC_COMPARE")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("analysis.extra_stopwords")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| CompareError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| CompareError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            scoring: ScoringConfig::default(),
            limits: LimitsConfig::default(),
            output: OutputConfig::default(),
            storage: StorageConfig::default(),
        }
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        (self.limits.max_file_size_mb as u64) * 1_048_576
    }

    pub fn validate(&self) -> Result<()> {
        let unit_range = [
            ("analysis.paragraph_threshold", self.analysis.paragraph_threshold),
            ("scoring.verdict_threshold", self.scoring.verdict_threshold),
            ("scoring.strong_match_threshold", self.scoring.strong_match_threshold),
            ("scoring.cosine_weight", self.scoring.cosine_weight),
            ("scoring.jaccard_weight", self.scoring.jaccard_weight),
            ("scoring.paragraph_weight", self.scoring.paragraph_weight),
        ];

        for (name, value) in unit_range {
            if !(0.0..=1.0).contains(&value) {
                return Err(CompareError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        let weight_sum =
            self.scoring.cosine_weight + self.scoring.jaccard_weight + self.scoring.paragraph_weight;
        if (weight_sum - 1.0).abs() > 1e-6 {
            return Err(CompareError::Config(format!(
                "scoring weights must sum to 1.0, got {}",
                weight_sum
            )));
        }

        if self.analysis.min_sequence_words == 0 {
            return Err(CompareError::Config(
                "min_sequence_words must be greater than 0".to_string(),
            ));
        }

        if self.scoring.strong_match_saturation == 0 {
            return Err(CompareError::Config(
                "strong_match_saturation must be greater than 0".to_string(),
            ));
        }

        if self.limits.max_paragraph_pairs == 0
            || self.limits.max_word_pairs == 0
            || self.limits.max_file_size_mb == 0
        {
            return Err(CompareError::Config(
                "limits must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
