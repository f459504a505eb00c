// file: src/exporter/mod.rs
// description: comparison result export
// reference: internal module structure

pub mod json;
pub mod report;

pub use json::JsonExporter;
pub use report::render_text_report;
