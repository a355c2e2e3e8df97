use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{Config, OcrConfig};
use crate::convert::{PandocConverter, TextConverter};
use crate::error::{DocsiftError, Result};
use crate::models::{ExtractedContent, FormatFamily, SourceFile};
use crate::ocr::{OcrEngine, OcrProvider};
use crate::processing::extractors::{
    AudioExtractor, DocxExtractor, ImageExtractor, OdfExtractor, PdfExtractReader, PdfExtractor,
    PdfTextReader, PptxExtractor, RtfExtractor, SpreadsheetExtractor, TextExtractor,
    UnsupportedExtractor,
};

/// Routes a file to the decoder for its format family.
///
/// Holds no per-call state, so one instance can serve concurrent callers.
pub struct ContentExtractor {
    pdf_reader: Arc<dyn PdfTextReader>,
    ocr: Arc<dyn OcrEngine>,
    converter: Arc<dyn TextConverter>,
    ocr_config: OcrConfig,
}

impl ContentExtractor {
    /// Wires the production adapters: pdf-extract, Tesseract and pandoc.
    pub fn new(config: &Config) -> Self {
        Self {
            pdf_reader: Arc::new(PdfExtractReader),
            ocr: Arc::new(OcrProvider::new(&config.ocr)),
            converter: Arc::new(PandocConverter::new(&config.conversion)),
            ocr_config: config.ocr.clone(),
        }
    }

    pub fn builder() -> ContentExtractorBuilder {
        ContentExtractorBuilder::default()
    }

    pub fn extract(&self, path: impl AsRef<Path>) -> Result<ExtractedContent> {
        let path = path.as_ref();
        let source = SourceFile::new(path);

        if !source.exists {
            warn!(path = %path.display(), "File not found");
            return Err(DocsiftError::NotFound(path.to_path_buf()));
        }

        let family = source.family();
        debug!(path = %path.display(), %family, "Extracting");

        let result = match family {
            FormatFamily::PlainText => TextExtractor::extract(path),
            FormatFamily::Pdf => PdfExtractor::extract(path, self.pdf_reader.as_ref()),
            FormatFamily::WordProcessor => DocxExtractor::extract(path),
            FormatFamily::OpenDocumentText | FormatFamily::OpenDocumentPresentation => {
                OdfExtractor::extract(path, family)
            }
            FormatFamily::RichText => RtfExtractor::extract(path, self.converter.as_ref()),
            FormatFamily::Spreadsheet => SpreadsheetExtractor::extract(path, &source.extension),
            FormatFamily::Presentation => PptxExtractor::extract(path),
            FormatFamily::Image => Ok(ImageExtractor::extract(
                path,
                self.ocr.as_ref(),
                &self.ocr_config,
            )),
            FormatFamily::Audio => Ok(AudioExtractor::extract()),
            FormatFamily::Unsupported => Ok(UnsupportedExtractor::extract(&source.extension)),
        };

        match result {
            Ok(content) => {
                debug!(
                    path = %path.display(),
                    %family,
                    words = content.word_count,
                    "Extraction complete"
                );
                Ok(content.with_source_path(path))
            }
            Err(e) => {
                warn!(path = %path.display(), %family, error = %e, "Extraction failed");
                Err(e)
            }
        }
    }

    /// Extracts each path in turn, pairing it with its outcome.
    pub fn extract_many<I, P>(&self, paths: I) -> Vec<(PathBuf, Result<ExtractedContent>)>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .map(|p| {
                let path = p.as_ref().to_path_buf();
                let result = self.extract(&path);
                (path, result)
            })
            .collect()
    }
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Builds a [`ContentExtractor`], substituting any of its adapters. Ports
/// left unset get the production adapter for the given configuration.
#[derive(Default)]
pub struct ContentExtractorBuilder {
    config: Option<Config>,
    pdf_reader: Option<Arc<dyn PdfTextReader>>,
    ocr: Option<Arc<dyn OcrEngine>>,
    converter: Option<Arc<dyn TextConverter>>,
}

impl ContentExtractorBuilder {
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_pdf_reader(mut self, reader: impl PdfTextReader + 'static) -> Self {
        self.pdf_reader = Some(Arc::new(reader));
        self
    }

    pub fn with_ocr(mut self, ocr: impl OcrEngine + 'static) -> Self {
        self.ocr = Some(Arc::new(ocr));
        self
    }

    pub fn with_converter(mut self, converter: impl TextConverter + 'static) -> Self {
        self.converter = Some(Arc::new(converter));
        self
    }

    pub fn build(self) -> ContentExtractor {
        let config = self.config.unwrap_or_default();

        ContentExtractor {
            pdf_reader: self
                .pdf_reader
                .unwrap_or_else(|| Arc::new(PdfExtractReader)),
            ocr: self
                .ocr
                .unwrap_or_else(|| Arc::new(OcrProvider::new(&config.ocr))),
            converter: self
                .converter
                .unwrap_or_else(|| Arc::new(PandocConverter::new(&config.conversion))),
            ocr_config: config.ocr,
        }
    }
}
