//! Shared plumbing for zip-packaged XML formats (OOXML and OpenDocument).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use zip::ZipArchive;

use crate::error::{DocsiftError, Result};
use crate::models::FormatFamily;

pub(crate) type Archive = ZipArchive<BufReader<File>>;

pub(crate) fn open_archive(path: &Path, family: FormatFamily) -> Result<Archive> {
    let file = File::open(path)?;
    ZipArchive::new(BufReader::new(file))
        .map_err(|e| DocsiftError::decode(family, format!("not a zip container: {e}")))
}

pub(crate) fn read_entry(archive: &mut Archive, name: &str, family: FormatFamily) -> Result<String> {
    let mut entry = archive
        .by_name(name)
        .map_err(|e| DocsiftError::decode(family, format!("missing {name}: {e}")))?;

    let mut content = String::new();
    entry
        .read_to_string(&mut content)
        .map_err(|e| DocsiftError::decode(family, format!("failed to read {name}: {e}")))?;

    Ok(content)
}

/// Resolve the body of an XML entity or character reference (`amp`, `#38`, `#x26`).
pub(crate) fn resolve_entity(name: &[u8]) -> Option<char> {
    match name {
        b"amp" => Some('&'),
        b"lt" => Some('<'),
        b"gt" => Some('>'),
        b"quot" => Some('"'),
        b"apos" => Some('\''),
        [b'#', b'x' | b'X', hex @ ..] => std::str::from_utf8(hex)
            .ok()
            .and_then(|h| u32::from_str_radix(h, 16).ok())
            .and_then(char::from_u32),
        [b'#', dec @ ..] => std::str::from_utf8(dec)
            .ok()
            .and_then(|d| d.parse::<u32>().ok())
            .and_then(char::from_u32),
        _ => None,
    }
}

/// Attribute value by qualified name, decoded as UTF-8.
pub(crate) fn attribute(e: &quick_xml::events::BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .and_then(|attr| std::str::from_utf8(&attr.value).ok().map(String::from))
}
