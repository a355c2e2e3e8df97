use std::sync::Mutex;

use leptess::LepTess;
use tracing::{info, warn};

use crate::config::{parse_engine, OcrConfig};
use crate::error::{DocsiftError, Result};

/// Recognises text in an encoded raster image.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image_bytes: &[u8]) -> Result<String>;

    fn is_available(&self) -> bool {
        true
    }
}

enum OcrBackend {
    Local { tesseract: Mutex<LepTess> },
    Unavailable { reason: String },
}

/// Tesseract-backed OCR. Construction never fails: a missing engine or
/// language pack leaves the provider unavailable and every call errors.
pub struct OcrProvider {
    backend: OcrBackend,
}

fn create_tesseract(config: &OcrConfig) -> std::result::Result<LepTess, String> {
    LepTess::new(config.data_path.as_deref(), &config.languages).map_err(|e| e.to_string())
}

impl OcrProvider {
    pub fn new(config: &OcrConfig) -> Self {
        let (provider, engine) = parse_engine(&config.engine);

        let backend = match (provider.as_str(), engine.as_str()) {
            (_, "none") | (_, "disabled") => OcrBackend::Unavailable {
                reason: "OCR disabled by configuration".to_string(),
            },
            ("local", "tesseract") => match create_tesseract(config) {
                Ok(lt) => {
                    info!(languages = %config.languages, "Tesseract OCR initialized");
                    OcrBackend::Local {
                        tesseract: Mutex::new(lt),
                    }
                }
                Err(e) => {
                    let reason = format!("Tesseract not available: {e}");
                    warn!("{}", reason);
                    OcrBackend::Unavailable { reason }
                }
            },
            _ => {
                let reason = format!("Unknown OCR engine '{}'", config.engine);
                warn!("{}", reason);
                OcrBackend::Unavailable { reason }
            }
        };

        Self { backend }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            backend: OcrBackend::Unavailable {
                reason: reason.into(),
            },
        }
    }
}

impl OcrEngine for OcrProvider {
    fn recognize(&self, image_bytes: &[u8]) -> Result<String> {
        match &self.backend {
            OcrBackend::Local { tesseract } => {
                let mut lt = tesseract
                    .lock()
                    .map_err(|_| DocsiftError::Ocr("Tesseract handle poisoned".to_string()))?;
                lt.set_image_from_mem(image_bytes)
                    .map_err(|e| DocsiftError::Ocr(format!("Failed to set image: {e}")))?;
                lt.get_utf8_text()
                    .map_err(|e| DocsiftError::Ocr(format!("Failed to extract text: {e}")))
            }
            OcrBackend::Unavailable { reason } => Err(DocsiftError::OcrUnavailable(reason.clone())),
        }
    }

    fn is_available(&self) -> bool {
        !matches!(self.backend, OcrBackend::Unavailable { .. })
    }
}
