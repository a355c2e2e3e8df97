use std::path::Path;

use serde::{Deserialize, Serialize};

/// Format family a file is routed to, derived from its extension alone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FormatFamily {
    PlainText,
    Pdf,
    WordProcessor,
    OpenDocumentText,
    RichText,
    Spreadsheet,
    Presentation,
    OpenDocumentPresentation,
    Image,
    Audio,
    Unsupported,
}

impl FormatFamily {
    pub const ALL: [FormatFamily; 11] = [
        Self::PlainText,
        Self::Pdf,
        Self::WordProcessor,
        Self::OpenDocumentText,
        Self::RichText,
        Self::Spreadsheet,
        Self::Presentation,
        Self::OpenDocumentPresentation,
        Self::Image,
        Self::Audio,
        Self::Unsupported,
    ];

    /// Classify an extension. Case-insensitive; the leading dot is optional.
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.strip_prefix('.').unwrap_or(ext).to_ascii_lowercase();
        match ext.as_str() {
            "txt" | "py" | "js" | "json" | "xml" | "yaml" | "yml" | "html" | "css" | "md" => {
                Self::PlainText
            }
            "pdf" => Self::Pdf,
            "docx" | "doc" => Self::WordProcessor,
            "odt" => Self::OpenDocumentText,
            "rtf" => Self::RichText,
            "csv" | "xls" | "xlsx" | "ods" => Self::Spreadsheet,
            "pptx" | "ppt" => Self::Presentation,
            "odp" => Self::OpenDocumentPresentation,
            "jpg" | "jpeg" | "png" | "gif" | "svg" | "tiff" => Self::Image,
            "mp3" | "wav" | "aac" | "flac" => Self::Audio,
            _ => Self::Unsupported,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .map(|ext| Self::from_extension(&ext.to_string_lossy()))
            .unwrap_or(Self::Unsupported)
    }

    /// Extensions routed to this family, with leading dots.
    /// `Unsupported` has none: it is whatever the others do not claim.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::PlainText => &[
                ".txt", ".py", ".js", ".json", ".xml", ".yaml", ".yml", ".html", ".css", ".md",
            ],
            Self::Pdf => &[".pdf"],
            Self::WordProcessor => &[".docx", ".doc"],
            Self::OpenDocumentText => &[".odt"],
            Self::RichText => &[".rtf"],
            Self::Spreadsheet => &[".csv", ".xls", ".xlsx", ".ods"],
            Self::Presentation => &[".pptx", ".ppt"],
            Self::OpenDocumentPresentation => &[".odp"],
            Self::Image => &[".jpg", ".jpeg", ".png", ".gif", ".svg", ".tiff"],
            Self::Audio => &[".mp3", ".wav", ".aac", ".flac"],
            Self::Unsupported => &[],
        }
    }
}

impl std::fmt::Display for FormatFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlainText => write!(f, "plain_text"),
            Self::Pdf => write!(f, "pdf"),
            Self::WordProcessor => write!(f, "word_processor"),
            Self::OpenDocumentText => write!(f, "open_document_text"),
            Self::RichText => write!(f, "rich_text"),
            Self::Spreadsheet => write!(f, "spreadsheet"),
            Self::Presentation => write!(f, "presentation"),
            Self::OpenDocumentPresentation => write!(f, "open_document_presentation"),
            Self::Image => write!(f, "image"),
            Self::Audio => write!(f, "audio"),
            Self::Unsupported => write!(f, "unsupported"),
        }
    }
}
