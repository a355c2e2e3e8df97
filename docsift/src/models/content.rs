use std::path::PathBuf;

use serde::Serialize;

use super::FormatFamily;

/// What a decoder produced for a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Payload {
    /// Text decoded from the document.
    Text(String),
    /// Fixed informational string for recognised but non-extractable files.
    Advisory(String),
    /// The decoder ran but no text is available (e.g. OCR failed).
    Absent,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractedContent {
    pub family: FormatFamily,
    pub payload: Payload,
    pub word_count: usize,
    pub source_path: Option<PathBuf>,
}

impl ExtractedContent {
    pub fn text(family: FormatFamily, text: String) -> Self {
        let word_count = count_words(&text);
        Self {
            family,
            payload: Payload::Text(text),
            word_count,
            source_path: None,
        }
    }

    pub fn advisory(family: FormatFamily, message: String) -> Self {
        Self {
            family,
            payload: Payload::Advisory(message),
            word_count: 0,
            source_path: None,
        }
    }

    pub fn absent(family: FormatFamily) -> Self {
        Self {
            family,
            payload: Payload::Absent,
            word_count: 0,
            source_path: None,
        }
    }

    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Decoded or advisory text; `None` when absent.
    pub fn as_str(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text(text) | Payload::Advisory(text) => Some(text),
            Payload::Absent => None,
        }
    }

    pub fn is_advisory(&self) -> bool {
        matches!(self.payload, Payload::Advisory(_))
    }

    pub fn into_text(self) -> Option<String> {
        match self.payload {
            Payload::Text(text) | Payload::Advisory(text) => Some(text),
            Payload::Absent => None,
        }
    }
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
