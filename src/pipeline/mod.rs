// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod comparator;
mod progress;

pub use comparator::DocumentComparator;
pub use progress::{CompareProgress, CompareStage, CompareStats};
