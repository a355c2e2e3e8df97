use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::error::{DocsiftError, Result};
use crate::models::{ExtractedContent, FormatFamily};

/// Reads the text of each page of a PDF, in page order.
pub trait PdfTextReader: Send + Sync {
    fn page_texts(&self, bytes: &[u8]) -> Result<Vec<String>>;
}

/// `pdf-extract` backed reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractReader;

impl PdfTextReader for PdfExtractReader {
    fn page_texts(&self, bytes: &[u8]) -> Result<Vec<String>> {
        // pdf-extract panics on some malformed documents
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(bytes)
        }));

        match outcome {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(DocsiftError::decode(
                FormatFamily::Pdf,
                format!("PDF extraction failed: {e}"),
            )),
            Err(_) => Err(DocsiftError::decode(
                FormatFamily::Pdf,
                "PDF extraction aborted on malformed document",
            )),
        }
    }
}

pub struct PdfExtractor;

impl PdfExtractor {
    /// Page texts concatenated in order with no separator; only the outer
    /// boundary of the result is stripped.
    pub fn extract(path: &Path, reader: &dyn PdfTextReader) -> Result<ExtractedContent> {
        let bytes = std::fs::read(path)?;
        let pages = reader.page_texts(&bytes)?;

        let text = pages.concat().trim().to_string();
        Ok(ExtractedContent::text(FormatFamily::Pdf, text))
    }
}
