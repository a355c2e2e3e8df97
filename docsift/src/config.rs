use serde::Deserialize;
use std::env;

use crate::error::{DocsiftError, Result};

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn env_opt(var: &str) -> Option<String> {
    env::var(var).ok().filter(|val| !val.trim().is_empty())
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub ocr: OcrConfig,
    pub conversion: ConversionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    /// `local/tesseract` or `none`.
    pub engine: String,
    /// Tesseract language codes joined with `+`, e.g. `eng+deu`.
    pub languages: String,
    pub data_path: Option<String>,
    pub max_image_dimension: u32,
    pub min_image_dimension: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionConfig {
    pub pandoc_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub json: bool,
}

impl LoggingConfig {
    /// Read on its own so the subscriber can be installed before the rest of
    /// the configuration is parsed and its warnings emitted.
    pub fn from_env() -> Self {
        Self {
            json: env::var("DOCSIFT_LOG_FORMAT")
                .map(|v| v.trim().eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            engine: "local/tesseract".to_string(),
            languages: "eng".to_string(),
            data_path: None,
            max_image_dimension: 4096,
            min_image_dimension: 10,
        }
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            pandoc_path: "pandoc".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let ocr_defaults = OcrConfig::default();
        Self {
            ocr: OcrConfig {
                engine: env::var("OCR_ENGINE").unwrap_or(ocr_defaults.engine),
                languages: env::var("OCR_LANGUAGES").unwrap_or(ocr_defaults.languages),
                data_path: env_opt("OCR_DATA_PATH"),
                max_image_dimension: parse_env_or(
                    "OCR_MAX_DIMENSION",
                    ocr_defaults.max_image_dimension,
                ),
                min_image_dimension: parse_env_or(
                    "OCR_MIN_DIMENSION",
                    ocr_defaults.min_image_dimension,
                ),
            },
            conversion: ConversionConfig {
                pandoc_path: env_opt("PANDOC_PATH")
                    .unwrap_or_else(|| ConversionConfig::default().pandoc_path),
            },
            logging: LoggingConfig::from_env(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Rejects settings no adapter could work with.
    pub fn validate(&self) -> Result<()> {
        if self.ocr.min_image_dimension == 0 {
            return Err(DocsiftError::Config(
                "OCR_MIN_DIMENSION must be at least 1".to_string(),
            ));
        }
        if self.ocr.min_image_dimension > self.ocr.max_image_dimension {
            return Err(DocsiftError::Config(format!(
                "OCR_MIN_DIMENSION ({}) exceeds OCR_MAX_DIMENSION ({})",
                self.ocr.min_image_dimension, self.ocr.max_image_dimension
            )));
        }
        if self.conversion.pandoc_path.trim().is_empty() {
            return Err(DocsiftError::Config("PANDOC_PATH is empty".to_string()));
        }
        Ok(())
    }
}

/// Split an engine string like `local/tesseract` into `(provider, engine)`.
pub fn parse_engine(engine: &str) -> (String, String) {
    let lower = engine.trim().to_lowercase();
    match lower.split_once('/') {
        Some((provider, name)) => (provider.to_string(), name.to_string()),
        None => ("local".to_string(), lower),
    }
}
