use crate::models::{ExtractedContent, FormatFamily};

pub const AUDIO_ADVISORY: &str =
    "(Audio file detected – run speech-to-text here if you need text.)";

/// Audio is recognised but never decoded.
pub struct AudioExtractor;

impl AudioExtractor {
    pub fn extract() -> ExtractedContent {
        ExtractedContent::advisory(FormatFamily::Audio, AUDIO_ADVISORY.to_string())
    }
}

pub struct UnsupportedExtractor;

impl UnsupportedExtractor {
    /// `extension` is the lower-cased extension including its dot, or empty.
    pub fn extract(extension: &str) -> ExtractedContent {
        ExtractedContent::advisory(
            FormatFamily::Unsupported,
            format!("(Unsupported or binary file type {extension})"),
        )
    }
}
