//! PPTX extractor using zip + quick-xml

use std::collections::HashMap;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::archive::{attribute, open_archive, read_entry, resolve_entity, Archive};
use crate::error::{DocsiftError, Result};
use crate::models::{ExtractedContent, FormatFamily};

const FAMILY: FormatFamily = FormatFamily::Presentation;

/// Element path (qualified names) from the slide root down to a paragraph
/// of a top-level shape's text frame.
const SHAPE_PARAGRAPH_PATH: [&[u8]; 6] = [
    b"p:sld", b"p:cSld", b"p:spTree", b"p:sp", b"p:txBody", b"a:p",
];

pub struct PptxExtractor;

impl PptxExtractor {
    pub fn extract(path: &Path) -> Result<ExtractedContent> {
        let mut archive = open_archive(path, FAMILY)?;

        let slide_order = Self::get_slide_order(&mut archive)?;
        let slide_mapping = Self::get_slide_mapping(&mut archive)?;

        let mut paragraphs = Vec::new();
        for (index, r_id) in slide_order.iter().enumerate() {
            let slide_path = slide_mapping
                .get(r_id)
                .cloned()
                .unwrap_or_else(|| format!("ppt/slides/slide{}.xml", index + 1));

            let xml = read_entry(&mut archive, &slide_path, FAMILY)?;
            let slide_paragraphs = Self::extract_shape_paragraphs(&xml)
                .map_err(|e| DocsiftError::decode(FAMILY, format!("{slide_path}: {e}")))?;
            paragraphs.extend(slide_paragraphs);
        }

        Ok(ExtractedContent::text(FAMILY, paragraphs.join("\n")))
    }

    /// Relationship ids of `p:sldId` entries, in presentation order.
    fn get_slide_order(archive: &mut Archive) -> Result<Vec<String>> {
        let xml = read_entry(archive, "ppt/presentation.xml", FAMILY)?;

        let mut reader = Reader::from_str(&xml);
        let mut slide_ids = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) => {
                    if e.name().as_ref() == b"p:sldId" {
                        if let Some(id) = attribute(&e, b"r:id") {
                            slide_ids.push(id);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(DocsiftError::decode(
                        FAMILY,
                        format!("Error parsing presentation.xml: {e}"),
                    ))
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(slide_ids)
    }

    /// Relationship id to archive path, for slide relationships only.
    fn get_slide_mapping(archive: &mut Archive) -> Result<HashMap<String, String>> {
        let xml = read_entry(archive, "ppt/_rels/presentation.xml.rels", FAMILY)?;

        let mut reader = Reader::from_str(&xml);
        let mut mapping = HashMap::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) => {
                    if e.name().as_ref() == b"Relationship" {
                        let id = attribute(&e, b"Id");
                        let target = attribute(&e, b"Target");
                        let rel_type = attribute(&e, b"Type");

                        if let (Some(id), Some(target), Some(rel_type)) = (id, target, rel_type) {
                            if rel_type.ends_with("/slide") {
                                mapping.insert(id, Self::resolve_target(&target));
                            }
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(DocsiftError::decode(
                        FAMILY,
                        format!("Error parsing presentation.xml.rels: {e}"),
                    ))
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(mapping)
    }

    /// Targets are relative to `ppt/` unless absolute within the package.
    fn resolve_target(target: &str) -> String {
        match target.strip_prefix('/') {
            Some(absolute) => absolute.to_string(),
            None => format!("ppt/{target}"),
        }
    }

    /// Paragraph texts of every top-level shape with a text frame, in
    /// shape order then paragraph order. Group shapes, tables and pictures
    /// contribute nothing. Empty paragraphs are kept.
    fn extract_shape_paragraphs(xml: &str) -> std::result::Result<Vec<String>, quick_xml::Error> {
        let mut reader = Reader::from_str(xml);

        let mut path: Vec<Vec<u8>> = Vec::new();
        let mut paragraphs = Vec::new();
        let mut current: Option<String> = None;
        let mut in_text = false;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    path.push(e.name().as_ref().to_vec());
                    if Self::at_shape_paragraph(&path) {
                        current = Some(String::new());
                    } else if current.is_some() && e.name().as_ref() == b"a:t" {
                        in_text = true;
                    }
                }
                Event::Empty(e) => {
                    if let Some(paragraph) = current.as_mut() {
                        // soft line break, kept distinct from paragraph breaks
                        if e.name().as_ref() == b"a:br" {
                            paragraph.push('\u{000B}');
                        }
                    } else {
                        path.push(e.name().as_ref().to_vec());
                        if Self::at_shape_paragraph(&path) {
                            paragraphs.push(String::new());
                        }
                        path.pop();
                    }
                }
                Event::Text(e) if in_text => {
                    if let (Some(paragraph), Ok(text)) =
                        (current.as_mut(), std::str::from_utf8(e.as_ref()))
                    {
                        paragraph.push_str(text);
                    }
                }
                Event::GeneralRef(e) if in_text => {
                    if let (Some(paragraph), Some(c)) = (current.as_mut(), resolve_entity(e.as_ref()))
                    {
                        paragraph.push(c);
                    }
                }
                Event::End(e) => {
                    if e.name().as_ref() == b"a:t" {
                        in_text = false;
                    }
                    if Self::at_shape_paragraph(&path) {
                        if let Some(paragraph) = current.take() {
                            paragraphs.push(paragraph);
                        }
                    }
                    path.pop();
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(paragraphs)
    }

    fn at_shape_paragraph(path: &[Vec<u8>]) -> bool {
        path.len() == SHAPE_PARAGRAPH_PATH.len()
            && path
                .iter()
                .zip(SHAPE_PARAGRAPH_PATH)
                .all(|(name, expected)| name.as_slice() == expected)
    }
}
