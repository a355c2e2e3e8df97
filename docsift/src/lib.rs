//! Format-dispatch text extraction.
//!
//! A file path is classified by its extension into a [`FormatFamily`] and
//! routed to the decoder for that family. [`ContentExtractor`] is the entry
//! point.

pub mod config;
pub mod convert;
pub mod error;
pub mod models;
pub mod ocr;
pub mod processing;

pub use config::Config;
pub use error::{DocsiftError, ErrorKind, Result};
pub use models::{ExtractedContent, FormatFamily, Payload, SourceFile};
pub use processing::{ContentExtractor, ContentExtractorBuilder};
