// file: src/storage/mod.rs
// description: comparison history persistence
// reference: internal module structure

pub mod history;

pub use history::{HistoryEntry, HistoryStore, JsonHistoryStore, MemoryHistoryStore};
