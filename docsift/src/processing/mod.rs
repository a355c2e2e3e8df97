mod extractor;

pub mod extractors;

pub use extractor::{ContentExtractor, ContentExtractorBuilder};
