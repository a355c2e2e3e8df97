use std::path::Path;

use crate::error::Result;
use crate::models::{ExtractedContent, FormatFamily};

pub struct TextExtractor;

impl TextExtractor {
    /// Whole file as text. Invalid UTF-8 sequences are dropped and
    /// surrounding whitespace is preserved.
    pub fn extract(path: &Path) -> Result<ExtractedContent> {
        let bytes = std::fs::read(path)?;
        Ok(ExtractedContent::text(
            FormatFamily::PlainText,
            decode_lossless_utf8(&bytes),
        ))
    }
}

/// Decode UTF-8, skipping invalid byte sequences instead of replacing them.
fn decode_lossless_utf8(mut bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                text.push_str(valid);
                return text;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                // valid_up_to marks a checked boundary
                text.push_str(std::str::from_utf8(valid).unwrap_or_default());
                match e.error_len() {
                    Some(len) => bytes = &rest[len..],
                    // truncated sequence at end of input
                    None => return text,
                }
            }
        }
    }
}
