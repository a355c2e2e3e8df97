use std::path::Path;

use tracing::warn;

use crate::config::OcrConfig;
use crate::error::Result;
use crate::models::{ExtractedContent, FormatFamily};
use crate::ocr::{preprocess_image, OcrEngine};

pub struct ImageExtractor;

impl ImageExtractor {
    /// OCR the image at `path`. Never fails: decode, preprocessing and OCR
    /// errors are logged and reported as an absent payload.
    pub fn extract(path: &Path, ocr: &dyn OcrEngine, config: &OcrConfig) -> ExtractedContent {
        match Self::recognize(path, ocr, config) {
            Ok(text) => ExtractedContent::text(FormatFamily::Image, text),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "OCR failed, no text extracted");
                ExtractedContent::absent(FormatFamily::Image)
            }
        }
    }

    fn recognize(path: &Path, ocr: &dyn OcrEngine, config: &OcrConfig) -> Result<String> {
        let bytes = std::fs::read(path)?;
        let processed = preprocess_image(&bytes, config)?;
        let text = ocr.recognize(&processed)?;
        Ok(text.trim().to_string())
    }
}
