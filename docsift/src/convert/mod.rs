//! Markup-to-text conversion through an external converter.

mod pandoc;

pub use pandoc::PandocConverter;

use crate::error::Result;

/// Converts markup text from one format to another, e.g. `rtf` to `plain`.
pub trait TextConverter: Send + Sync {
    fn convert(&self, input: &str, from: &str, to: &str) -> Result<String>;
}
