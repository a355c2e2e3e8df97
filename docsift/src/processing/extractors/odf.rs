//! OpenDocument (ODT/ODP) extractor using zip + quick-xml

use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::archive::{attribute, open_archive, read_entry, resolve_entity};
use crate::error::{DocsiftError, Result};
use crate::models::{ExtractedContent, FormatFamily};

/// Upper bound for a single `text:s` run.
const MAX_SPACE_RUN: usize = 1024;

pub struct OdfExtractor;

impl OdfExtractor {
    /// Every `text:p` in `content.xml`, in document order, joined with `\n`.
    pub fn extract(path: &Path, family: FormatFamily) -> Result<ExtractedContent> {
        let mut archive = open_archive(path, family)?;
        let xml = read_entry(&mut archive, "content.xml", family)?;

        let paragraphs = Self::collect_paragraphs(&xml, family)?;

        Ok(ExtractedContent::text(family, paragraphs.join("\n")))
    }

    /// A nested paragraph (e.g. inside a text box) is listed on its own and
    /// also contributes to the text of the paragraph containing it.
    fn collect_paragraphs(xml: &str, family: FormatFamily) -> Result<Vec<String>> {
        let mut reader = Reader::from_str(xml);

        let mut paragraphs: Vec<String> = Vec::new();
        let mut open: Vec<usize> = Vec::new();
        let mut buf = Vec::new();

        let push_all = |paragraphs: &mut Vec<String>, open: &[usize], s: &str| {
            for &idx in open {
                paragraphs[idx].push_str(s);
            }
        };

        loop {
            match reader
                .read_event_into(&mut buf)
                .map_err(|e| DocsiftError::decode(family, format!("content.xml: {e}")))?
            {
                Event::Start(e) => {
                    if e.name().as_ref() == b"text:p" {
                        paragraphs.push(String::new());
                        open.push(paragraphs.len() - 1);
                    }
                }
                Event::Empty(e) => match e.name().as_ref() {
                    b"text:p" => paragraphs.push(String::new()),
                    b"text:s" if !open.is_empty() => {
                        let count = Self::space_count(&e, family)?;
                        push_all(&mut paragraphs, &open, &" ".repeat(count));
                    }
                    b"text:tab" if !open.is_empty() => push_all(&mut paragraphs, &open, "\t"),
                    b"text:line-break" if !open.is_empty() => {
                        push_all(&mut paragraphs, &open, "\n")
                    }
                    _ => {}
                },
                Event::Text(e) if !open.is_empty() => {
                    if let Ok(text) = std::str::from_utf8(e.as_ref()) {
                        push_all(&mut paragraphs, &open, text);
                    }
                }
                Event::CData(e) if !open.is_empty() => {
                    if let Ok(text) = std::str::from_utf8(e.as_ref()) {
                        push_all(&mut paragraphs, &open, text);
                    }
                }
                Event::GeneralRef(e) if !open.is_empty() => {
                    if let Some(c) = resolve_entity(e.as_ref()) {
                        push_all(&mut paragraphs, &open, c.encode_utf8(&mut [0; 4]));
                    }
                }
                Event::End(e) => {
                    if e.name().as_ref() == b"text:p" {
                        open.pop();
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(paragraphs)
    }

    /// `text:c` of a `text:s` element, 1 when absent.
    fn space_count(e: &quick_xml::events::BytesStart<'_>, family: FormatFamily) -> Result<usize> {
        let Some(raw) = attribute(e, b"text:c") else {
            return Ok(1);
        };
        match raw.trim().parse::<usize>() {
            Ok(count) if count <= MAX_SPACE_RUN => Ok(count),
            _ => Err(DocsiftError::decode(
                family,
                format!("invalid text:s count '{raw}' (maximum {MAX_SPACE_RUN})"),
            )),
        }
    }
}
