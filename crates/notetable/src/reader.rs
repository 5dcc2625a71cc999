//! CSV note table reader.
//!
//! Each row is `label,frequency,wavelength`. Labels may be compound
//! (`C#4/Db4`), in which case every sub-label becomes its own record sharing
//! the row's frequency and wavelength. Rows whose label starts with `//` are
//! comments.

use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{NoteTableError, Result, RowError};
use crate::note::NoteRecord;

/// Prefix marking a comment row.
pub const COMMENT_MARKER: &str = "//";

/// Separator between enharmonic labels in a compound label.
pub const LABEL_SEPARATOR: char = '/';

/// Parsed note table plus row statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteTable {
    /// Records in input order.
    pub records: Vec<NoteRecord>,
    /// Non-blank rows seen, comments included.
    pub rows_read: usize,
    /// Rows skipped as comments.
    pub comment_rows: usize,
}

impl NoteTable {
    pub fn summary(&self) -> TableSummary {
        TableSummary {
            rows_read: self.rows_read,
            comment_rows: self.comment_rows,
            record_count: self.records.len(),
        }
    }
}

/// Counts describing a parsed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    pub rows_read: usize,
    pub comment_rows: usize,
    pub record_count: usize,
}

/// Reads all note records from a CSV file.
pub fn read_notes(path: impl AsRef<Path>) -> Result<Vec<NoteRecord>> {
    read_table(path).map(|table| table.records)
}

/// Reads all note records from any CSV source.
pub fn read_notes_from_reader<R: Read>(reader: R) -> Result<Vec<NoteRecord>> {
    read_table_from_reader(reader).map(|table| table.records)
}

/// Reads a CSV file into a [`NoteTable`].
pub fn read_table(path: impl AsRef<Path>) -> Result<NoteTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| NoteTableError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_table_from_reader(file)
}

/// Reads a CSV source into a [`NoteTable`], stopping at the first bad row.
pub fn read_table_from_reader<R: Read>(reader: R) -> Result<NoteTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut table = NoteTable {
        records: Vec::new(),
        rows_read: 0,
        comment_rows: 0,
    };

    for result in csv_reader.records() {
        let row = result?;
        table.rows_read += 1;

        let line = row.position().map_or(0, |pos| pos.line());
        match parse_row(&row).map_err(|reason| NoteTableError::MalformedRow { line, reason })? {
            Some(records) => table.records.extend(records),
            None => table.comment_rows += 1,
        }
    }

    Ok(table)
}

/// Parses one row; `None` means the row is a comment.
fn parse_row(row: &StringRecord) -> std::result::Result<Option<Vec<NoteRecord>>, RowError> {
    let label_field = row.get(0).unwrap_or_default();
    if label_field.starts_with(COMMENT_MARKER) {
        return Ok(None);
    }

    if row.len() < 3 {
        return Err(RowError::TooFewFields(row.len()));
    }

    let frequency = parse_number("frequency", &row[1])?;
    let wavelength = parse_number("wavelength", &row[2])?;

    label_field
        .split(LABEL_SEPARATOR)
        .map(|label| {
            NoteRecord::from_label(label, frequency, wavelength).map_err(|source| {
                RowError::Label {
                    label: label.to_string(),
                    source,
                }
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()
        .map(Some)
}

fn parse_number(column: &'static str, raw: &str) -> std::result::Result<f64, RowError> {
    let value: f64 = raw.trim().parse().map_err(|source| RowError::InvalidNumber {
        column,
        value: raw.to_string(),
        source,
    })?;

    if !value.is_finite() {
        return Err(RowError::NonFinite {
            column,
            value: raw.to_string(),
        });
    }

    Ok(value)
}
