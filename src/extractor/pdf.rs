// file: src/extractor/pdf.rs
// description: PDF text backend built on pdf-extract
// reference: https://docs.rs/pdf-extract

use super::TextExtractor;
use crate::error::{CompareError, Result};
use crate::models::MediaType;
use std::panic::{self, AssertUnwindSafe};
use tracing::warn;

/// Readers accept a `%PDF-` marker anywhere in the first kilobyte.
const HEADER_SEARCH_WINDOW: usize = 1024;

pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    fn failure(message: impl Into<String>) -> CompareError {
        CompareError::ExtractionFailure {
            format: MediaType::Pdf.label(),
            message: message.into(),
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdfExtractor {
    fn media_type(&self) -> MediaType {
        MediaType::Pdf
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let window = &bytes[..bytes.len().min(HEADER_SEARCH_WINDOW)];
        if !window.windows(5).any(|w| w == b"%PDF-") {
            return Err(Self::failure("missing %PDF header"));
        }

        // pdf-extract panics on some malformed inputs instead of returning an error.
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }));

        match outcome {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(Self::failure(format!("{:?}", e))),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "parser panicked".to_string());
                warn!("PDF parser panicked: {}", message);
                Err(Self::failure(message))
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Build a one-page PDF with one text line per entry, set in Courier.
    pub(crate) fn build_pdf(lines: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![50.into(), 750.into()]),
        ];
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                operations.push(Operation::new("Td", vec![0.into(), (-24).into()]));
            }
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_extracts_text_from_valid_pdf() {
        let bytes = build_pdf(&["Plagiarism detection compares vocabulary"]);
        let text = PdfExtractor::new().extract(&bytes).unwrap();
        assert!(
            text.contains("Plagiarism detection compares vocabulary"),
            "{:?}",
            text
        );
    }

    #[test]
    fn test_non_pdf_bytes_rejected() {
        let err = PdfExtractor::new().extract(b"just some text").unwrap_err();
        assert!(matches!(err, CompareError::ExtractionFailure { format: "PDF", .. }));
        assert!(err.to_string().contains("%PDF header"));
    }

    #[test]
    fn test_truncated_pdf_is_extraction_failure() {
        let err = PdfExtractor::new()
            .extract(b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog")
            .unwrap_err();
        assert!(matches!(err, CompareError::ExtractionFailure { .. }));
    }
}
