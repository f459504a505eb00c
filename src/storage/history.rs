// file: src/storage/history.rs
// description: comparison history stores keyed by owner
// reference: json file persistence with tokio fs

use crate::error::{CompareError, Result};
use crate::models::ComparisonResult;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

/// One saved comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub owner: String,
    /// RFC 3339, UTC, microsecond precision.
    pub created_at: String,
    pub result: ComparisonResult,
}

impl HistoryEntry {
    pub fn new(owner: impl Into<String>, result: ComparisonResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner: owner.into(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            result,
        }
    }
}

/// Persistence port for comparison results. The comparison core never calls
/// it; callers decide what to keep.
#[allow(async_fn_in_trait)]
pub trait HistoryStore {
    async fn record(&mut self, owner: &str, result: ComparisonResult) -> Result<HistoryEntry>;

    /// Entries for `owner`, newest first.
    async fn list(&self, owner: &str) -> Result<Vec<HistoryEntry>>;

    async fn get(&self, id: Uuid) -> Result<Option<HistoryEntry>>;
}

fn newest_first(entries: &[HistoryEntry], owner: &str) -> Vec<HistoryEntry> {
    let mut owned: Vec<HistoryEntry> = entries
        .iter()
        .rev()
        .filter(|entry| entry.owner == owner)
        .cloned()
        .collect();
    owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    owned
}

#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    entries: Vec<HistoryEntry>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HistoryStore for MemoryHistoryStore {
    async fn record(&mut self, owner: &str, result: ComparisonResult) -> Result<HistoryEntry> {
        let entry = HistoryEntry::new(owner, result);
        self.entries.push(entry.clone());
        Ok(entry)
    }

    async fn list(&self, owner: &str) -> Result<Vec<HistoryEntry>> {
        Ok(newest_first(&self.entries, owner))
    }

    async fn get(&self, id: Uuid) -> Result<Option<HistoryEntry>> {
        Ok(self.entries.iter().find(|entry| entry.id == id).cloned())
    }
}

/// History kept in a single JSON file, loaded on open and rewritten on every record.
pub struct JsonHistoryStore {
    storage_path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl JsonHistoryStore {
    pub async fn open(storage_path: impl Into<PathBuf>) -> Result<Self> {
        let storage_path = storage_path.into();

        if let Some(parent) = storage_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                CompareError::Storage(format!("Failed to create history directory: {}", e))
            })?;
        }

        let mut store = Self {
            storage_path,
            entries: Vec::new(),
        };
        store.load().await?;

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    async fn load(&mut self) -> Result<()> {
        if !fs::try_exists(&self.storage_path).await.unwrap_or(false) {
            debug!("No existing history file at {:?}", self.storage_path);
            return Ok(());
        }

        let contents = fs::read_to_string(&self.storage_path).await.map_err(|e| {
            CompareError::Storage(format!("Failed to read history file: {}", e))
        })?;

        self.entries = serde_json::from_str(&contents).map_err(|e| {
            CompareError::Storage(format!(
                "Failed to parse history file {}: {}",
                self.storage_path.display(),
                e
            ))
        })?;

        info!("Loaded {} history entries", self.entries.len());
        Ok(())
    }

    async fn save(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.entries)?;

        fs::write(&self.storage_path, contents).await.map_err(|e| {
            CompareError::Storage(format!("Failed to write history file: {}", e))
        })?;

        debug!("Saved {} history entries", self.entries.len());
        Ok(())
    }
}

impl HistoryStore for JsonHistoryStore {
    /// The returned entry carries the values as persisted: result floats are
    /// rounded to 4 decimals, so it equals what a later `open` reads back.
    async fn record(&mut self, owner: &str, result: ComparisonResult) -> Result<HistoryEntry> {
        let entry: HistoryEntry =
            serde_json::from_value(serde_json::to_value(HistoryEntry::new(owner, result))?)?;
        self.entries.push(entry.clone());

        if let Err(e) = self.save().await {
            self.entries.pop();
            return Err(e);
        }

        Ok(entry)
    }

    async fn list(&self, owner: &str) -> Result<Vec<HistoryEntry>> {
        Ok(newest_first(&self.entries, owner))
    }

    async fn get(&self, id: Uuid) -> Result<Option<HistoryEntry>> {
        Ok(self.entries.iter().find(|entry| entry.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::ExtractedText;
    use crate::pipeline::DocumentComparator;
    use crate::Config;
    use tempfile::tempdir;

    fn sample_result(body: &str) -> ComparisonResult {
        DocumentComparator::new(Config::default_config())
            .unwrap()
            .compare_texts(
                &ExtractedText::from_plain("a.txt", body),
                &ExtractedText::from_plain("b.txt", body),
            )
            .unwrap()
    }

    #[tokio::test]
    async fn test_memory_store_lists_newest_first_per_owner() {
        let mut store = MemoryHistoryStore::new();
        let first = store
            .record("ada@example.com", sample_result("first comparison body"))
            .await
            .unwrap();
        store
            .record("bob@example.com", sample_result("someone else entirely"))
            .await
            .unwrap();
        let second = store
            .record("ada@example.com", sample_result("second comparison body"))
            .await
            .unwrap();

        let listed = store.list("ada@example.com").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
        assert!(store.list("nobody@example.com").await.unwrap().is_empty());
        assert_eq!(store.get(first.id).await.unwrap(), Some(first));
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn test_json_store_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");

        let recorded = {
            let mut store = JsonHistoryStore::open(&path).await.unwrap();
            assert!(store.is_empty());
            store
                .record("ada@example.com", sample_result("The quick brown fox jumps."))
                .await
                .unwrap()
        };

        let store = JsonHistoryStore::open(&path).await.unwrap();
        assert_eq!(store.len(), 1);

        let loaded = store.get(recorded.id).await.unwrap().unwrap();
        assert_eq!(loaded.owner, "ada@example.com");
        assert_eq!(loaded.created_at, recorded.created_at);
        assert!(loaded.result.plagiarism_detected);
        assert_eq!(loaded.result.file_info.file1.name, "a.txt");
    }

    #[tokio::test]
    async fn test_json_store_record_matches_reloaded_entry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        let result = DocumentComparator::new(Config::default_config())
            .unwrap()
            .compare_texts(
                &ExtractedText::from_plain("a.txt", "The quick brown fox jumps over the lazy dog."),
                &ExtractedText::from_plain("b.txt", "A lazy dog sleeps while the quick fox runs away."),
            )
            .unwrap();
        assert!((result.jaccard_similarity - 4.0 / 11.0).abs() < 1e-12);

        let recorded = JsonHistoryStore::open(&path)
            .await
            .unwrap()
            .record("ada@example.com", result)
            .await
            .unwrap();
        assert_eq!(recorded.result.jaccard_similarity, 0.3636);

        let reopened = JsonHistoryStore::open(&path).await.unwrap();
        assert_eq!(reopened.get(recorded.id).await.unwrap(), Some(recorded.clone()));
        assert_eq!(reopened.list("ada@example.com").await.unwrap(), vec![recorded]);
    }

    #[tokio::test]
    async fn test_json_store_rejects_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = JsonHistoryStore::open(&path).await.err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(matches!(err, CompareError::Storage(_)));
    }
}
