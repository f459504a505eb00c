// file: src/exporter/json.rs
// description: json export of comparison results

use crate::error::Result;
use crate::models::ComparisonResult;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn to_json(result: &ComparisonResult, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(result)?
        } else {
            serde_json::to_string(result)?
        };
        Ok(json)
    }

    /// Write `comparison-<timestamp>.json` and return its path.
    pub fn export(&self, result: &ComparisonResult, pretty: bool) -> Result<PathBuf> {
        let timestamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
        let path = self
            .output_dir
            .join(format!("comparison-{}.json", timestamp));

        fs::write(&path, Self::to_json(result, pretty)?)?;

        info!("Exported comparison to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtractedText;
    use crate::pipeline::DocumentComparator;
    use crate::Config;
    use tempfile::tempdir;

    fn sample_result() -> ComparisonResult {
        let body = "The quick brown fox jumps over the lazy dog.";
        DocumentComparator::new(Config::default_config())
            .unwrap()
            .compare_texts(
                &ExtractedText::from_plain("a.txt", body),
                &ExtractedText::from_plain("b.txt", body),
            )
            .unwrap()
    }

    #[test]
    fn test_exporter_creation() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("exports"));
        assert!(exporter.is_ok());
        assert!(dir.path().join("exports").is_dir());
    }

    #[test]
    fn test_export_writes_named_file() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();
        let path = exporter.export(&sample_result(), true).unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("comparison-"));
        assert!(name.ends_with(".json"));

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["plagiarismDetected"], true);
        assert_eq!(written["similarity"], 1.0);
    }

    #[test]
    fn test_compact_json_is_single_line() {
        let json = JsonExporter::to_json(&sample_result(), false).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"similarContent\""));
    }
}
