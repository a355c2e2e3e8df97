use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{DocsiftError, Result};
use crate::models::{ExtractedContent, FormatFamily};

const FAMILY: FormatFamily = FormatFamily::Spreadsheet;

/// Extractor for tabular files. CSV goes through the csv crate; XLS, XLSX
/// and ODS through calamine (first worksheet only). The first row is the
/// header in both cases.
pub struct SpreadsheetExtractor;

impl SpreadsheetExtractor {
    pub fn extract(path: &Path, extension: &str) -> Result<ExtractedContent> {
        let (headers, records) = if extension == ".csv" {
            Self::load_csv(path)?
        } else {
            Self::load_workbook(path)?
        };

        Ok(ExtractedContent::text(
            FAMILY,
            render_table(&headers, &records),
        ))
    }

    fn load_csv(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        let bytes = std::fs::read(path)?;
        let bytes = strip_bom(&bytes);

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(DocsiftError::decode(FAMILY, "Empty CSV file"));
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(bytes);

        let headers = reader
            .headers()
            .map_err(|e| DocsiftError::decode(FAMILY, format!("Failed to read CSV headers: {e}")))?
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| {
                DocsiftError::decode(FAMILY, format!("Failed to read CSV record: {e}"))
            })?;
            records.push(record.iter().map(|f| f.to_string()).collect());
        }

        Ok((headers, records))
    }

    fn load_workbook(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        let mut workbook = open_workbook_auto(path)
            .map_err(|e| DocsiftError::decode(FAMILY, format!("Spreadsheet parse error: {e}")))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| DocsiftError::decode(FAMILY, "Workbook has no worksheets"))?
            .map_err(|e| DocsiftError::decode(FAMILY, format!("Failed to read worksheet: {e}")))?;

        let mut rows = range
            .rows()
            .map(|row| row.iter().map(format_cell_value).collect::<Vec<_>>());

        let headers = rows
            .next()
            .ok_or_else(|| DocsiftError::decode(FAMILY, "Worksheet is empty"))?;
        let records = rows.collect();

        Ok((headers, records))
    }
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes)
}

fn format_cell_value(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            let s = format!("{f}");
            if s.contains('.') {
                s.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                s
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(dt) => dt.to_string(),
        Data::DurationIso(d) => d.to_string(),
        Data::Error(e) => format!("#{e:?}"),
        _ => String::new(),
    }
}

/// Plain-text table without row labels: a header line followed by one line
/// per record, each column right-aligned to its widest cell and columns
/// separated by two spaces. Short records are padded with blanks.
fn render_table(headers: &[String], records: &[Vec<String>]) -> String {
    let columns = records
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; columns];
    for row in std::iter::once(headers).chain(records.iter().map(Vec::as_slice)) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let render_row = |row: &[String]| -> String {
        widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                format!("{cell:>width$}")
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(render_row(headers));
    lines.extend(records.iter().map(|record| render_row(record)));
    lines.join("\n")
}
