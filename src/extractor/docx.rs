// file: src/extractor/docx.rs
// description: DOCX (WordprocessingML) text backend built on docx-rs
// reference: https://docs.rs/docx-rs

use super::TextExtractor;
use crate::error::{CompareError, Result};
use crate::models::MediaType;
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use std::panic::{self, AssertUnwindSafe};
use tracing::warn;

pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }

    fn failure(message: impl Into<String>) -> CompareError {
        CompareError::ExtractionFailure {
            format: MediaType::Docx.label(),
            message: message.into(),
        }
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for DocxExtractor {
    fn media_type(&self) -> MediaType {
        MediaType::Docx
    }

    /// One output line per paragraph; runs are concatenated inside a paragraph,
    /// tabs become `\t` and breaks of any type become `\n`.
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| docx_rs::read_docx(bytes)));

        let docx = match outcome {
            Ok(Ok(docx)) => docx,
            Ok(Err(e)) => return Err(Self::failure(format!("not a valid DOCX document: {}", e))),
            Err(_) => {
                warn!("DOCX reader panicked");
                return Err(Self::failure("DOCX reader panicked"));
            }
        };

        let mut text = String::new();
        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(paragraph) => push_paragraph(&mut text, paragraph),
                DocumentChild::Table(table) => push_table(&mut text, table),
                _ => {}
            }
        }

        Ok(text)
    }
}

fn push_paragraph(text: &mut String, paragraph: &Paragraph) {
    push_paragraph_children(text, &paragraph.children);
    text.push('\n');
}

fn push_paragraph_children(text: &mut String, children: &[ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(text, run),
            ParagraphChild::Hyperlink(link) => push_paragraph_children(text, &link.children),
            _ => {}
        }
    }
}

fn push_run(text: &mut String, run: &Run) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

fn push_table(text: &mut String, table: &Table) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                if let TableCellContent::Paragraph(paragraph) = content {
                    push_paragraph(text, paragraph);
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use docx_rs::{BreakType, Docx};
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn pack(docx: Docx) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        docx.build().pack(&mut buffer).unwrap();
        buffer.into_inner()
    }

    /// Build a DOCX document with one single-run paragraph per entry.
    pub(crate) fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let docx = paragraphs.iter().fold(Docx::new(), |docx, p| {
            docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*p)))
        });
        pack(docx)
    }

    #[test]
    fn test_extracts_paragraph_per_line() {
        let bytes = build_docx(&["First paragraph.", "Second & last."]);
        let text = DocxExtractor::new().extract(&bytes).unwrap();
        assert_eq!(text, "First paragraph.\nSecond & last.\n");
    }

    #[test]
    fn test_runs_and_tabs_join_within_paragraph() {
        let docx = Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Split"))
                .add_run(Run::new().add_text(" run").add_tab().add_text("tab")),
        );
        let text = DocxExtractor::new().extract(&pack(docx)).unwrap();
        assert_eq!(text, "Split run\ttab\n");
    }

    #[test]
    fn test_page_break_separates_words() {
        let docx = Docx::new().add_paragraph(
            Paragraph::new().add_run(
                Run::new()
                    .add_text("Chapter end")
                    .add_break(BreakType::Page)
                    .add_text("Next chapter"),
            ),
        );
        let text = DocxExtractor::new().extract(&pack(docx)).unwrap();

        assert!(!text.contains("endNext"), "{:?}", text);
        assert_eq!(text, "Chapter end\nNext chapter\n");
    }

    #[test]
    fn test_garbage_is_extraction_failure() {
        let err = DocxExtractor::new().extract(b"not a zip archive").unwrap_err();
        assert!(matches!(err, CompareError::ExtractionFailure { format: "DOCX", .. }));
    }

    #[test]
    fn test_zip_without_document_part_is_extraction_failure() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = DocxExtractor::new().extract(&bytes).unwrap_err();
        assert!(matches!(err, CompareError::ExtractionFailure { format: "DOCX", .. }));
    }
}
