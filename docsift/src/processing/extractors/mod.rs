mod archive;
pub mod audio;
pub mod docx;
pub mod image;
pub mod odf;
pub mod pdf;
pub mod pptx;
pub mod rtf;
pub mod spreadsheet;
pub mod text;

pub use audio::{AudioExtractor, UnsupportedExtractor, AUDIO_ADVISORY};
pub use docx::DocxExtractor;
pub use image::ImageExtractor;
pub use odf::OdfExtractor;
pub use pdf::{PdfExtractReader, PdfExtractor, PdfTextReader};
pub use pptx::PptxExtractor;
pub use rtf::RtfExtractor;
pub use spreadsheet::SpreadsheetExtractor;
pub use text::TextExtractor;
