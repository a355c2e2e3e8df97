use std::path::Path;

use crate::error::{DocsiftError, Result};
use crate::models::{ExtractedContent, FormatFamily};

pub struct DocxExtractor;

impl DocxExtractor {
    pub fn extract(path: &Path) -> Result<ExtractedContent> {
        let bytes = std::fs::read(path)?;
        let docx = docx_rs::read_docx(&bytes).map_err(|e| {
            DocsiftError::decode(FormatFamily::WordProcessor, format!("DOCX parse error: {e}"))
        })?;

        // Body paragraphs only; tables and other block content are skipped.
        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                docx_rs::DocumentChild::Paragraph(paragraph) => {
                    Some(Self::extract_paragraph(paragraph))
                }
                _ => None,
            })
            .collect();

        Ok(ExtractedContent::text(
            FormatFamily::WordProcessor,
            paragraphs.join("\n"),
        ))
    }

    fn extract_paragraph(paragraph: &docx_rs::Paragraph) -> String {
        let mut content = String::new();
        for para_child in &paragraph.children {
            match para_child {
                docx_rs::ParagraphChild::Run(run) => Self::push_run(&mut content, run),
                docx_rs::ParagraphChild::Hyperlink(link) => {
                    for link_child in &link.children {
                        if let docx_rs::ParagraphChild::Run(run) = link_child {
                            Self::push_run(&mut content, run);
                        }
                    }
                }
                _ => {}
            }
        }
        content
    }

    fn push_run(content: &mut String, run: &docx_rs::Run) {
        for run_child in &run.children {
            match run_child {
                docx_rs::RunChild::Text(text) => content.push_str(&text.text),
                docx_rs::RunChild::Tab(_) => content.push('\t'),
                docx_rs::RunChild::Break(_) => content.push('\n'),
                _ => {}
            }
        }
    }
}
