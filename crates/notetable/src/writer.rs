//! JSON note table writer.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

use crate::error::{NoteTableError, Result};
use crate::note::NoteRecord;

/// Indentation used for the pretty-printed output.
pub const JSON_INDENT: &[u8] = b"    ";

/// Renders records as a pretty-printed JSON array.
///
/// The output has no trailing newline.
pub fn to_json_bytes(records: &[NoteRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    records.serialize(&mut serializer)?;
    Ok(buf)
}

/// Writes records to `path`, replacing any existing file.
///
/// The JSON is rendered fully in memory before the file is opened.
pub fn write_notes(records: &[NoteRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = to_json_bytes(records)?;
    fs::write(path, json).map_err(|source| NoteTableError::Write {
        path: path.to_path_buf(),
        source,
    })
}
