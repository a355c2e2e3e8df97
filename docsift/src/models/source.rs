use std::path::{Path, PathBuf};

use super::FormatFamily;

/// A caller-supplied input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Lower-cased with a leading dot, or empty when the name has no extension.
    pub extension: String,
    pub exists: bool,
}

impl SourceFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .unwrap_or_default();
        let exists = path.is_file();

        Self {
            path,
            extension,
            exists,
        }
    }

    pub fn family(&self) -> FormatFamily {
        FormatFamily::from_extension(&self.extension)
    }
}
