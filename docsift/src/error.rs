use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::models::FormatFamily;

#[derive(Error, Debug)]
pub enum DocsiftError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to decode {family} document: {message}")]
    Decode {
        family: FormatFamily,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse outcome classes callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    DecodeFailure,
    Io,
    Config,
}

impl DocsiftError {
    pub fn decode(family: FormatFamily, message: impl Into<String>) -> Self {
        DocsiftError::Decode {
            family,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DocsiftError::NotFound(_) => ErrorKind::NotFound,
            DocsiftError::Decode { .. }
            | DocsiftError::Conversion(_)
            | DocsiftError::Ocr(_)
            | DocsiftError::OcrUnavailable(_) => ErrorKind::DecodeFailure,
            DocsiftError::Io(_) => ErrorKind::Io,
            DocsiftError::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, DocsiftError>;
