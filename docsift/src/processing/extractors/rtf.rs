use std::path::Path;

use crate::convert::TextConverter;
use crate::error::{DocsiftError, Result};
use crate::models::{ExtractedContent, FormatFamily};

pub struct RtfExtractor;

impl RtfExtractor {
    /// Converts RTF markup to plain text. The converter output is returned
    /// unchanged.
    pub fn extract(path: &Path, converter: &dyn TextConverter) -> Result<ExtractedContent> {
        let bytes = std::fs::read(path)?;
        let markup = String::from_utf8(bytes).map_err(|e| {
            DocsiftError::decode(
                FormatFamily::RichText,
                format!("RTF file is not valid UTF-8: {e}"),
            )
        })?;

        let text = converter.convert(&markup, "rtf", "plain")?;
        Ok(ExtractedContent::text(FormatFamily::RichText, text))
    }
}
