//! OCR (Optical Character Recognition) Module
//!
//! Image text extraction for the image decoder. Recognition itself is
//! delegated to an external engine behind the [`OcrEngine`] trait:
//! - `OcrProvider` implements it with Tesseract via leptess
//! - tests and embedders can supply any other implementation
//!
//! # Configuration
//!
//! Controlled via `OcrConfig` (see `config.rs`):
//! - `engine`: `local/tesseract` or `none`
//! - `languages`: Tesseract language codes, e.g. `eng+deu`
//! - `data_path`: optional tessdata directory
//! - `max/min_image_dimension`: preprocessing size limits
//!
//! # Usage
//!
//! ```rust,ignore
//! let ocr = OcrProvider::new(&config.ocr);
//! let png = preprocess_image(&bytes, &config.ocr)?;
//! let text = ocr.recognize(&png)?;
//! ```

mod preprocessing;
mod provider;

pub use preprocessing::preprocess_image;
pub use provider::{OcrEngine, OcrProvider};
