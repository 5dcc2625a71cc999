//! Lookup over a generated note table.
//!
//! Consumers load the JSON written by [`crate::write_notes`] and look notes
//! up by label.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{NoteTableError, Result};
use crate::note::NoteRecord;

/// Note records indexed by `note_label`.
///
/// Iteration follows file order. When a label repeats, lookups return the
/// last occurrence.
#[derive(Debug, Clone, Default)]
pub struct NoteCatalog {
    records: Vec<NoteRecord>,
    by_label: HashMap<String, usize>,
}

impl NoteCatalog {
    pub fn from_records(records: Vec<NoteRecord>) -> Self {
        let by_label = records
            .iter()
            .enumerate()
            .map(|(index, record)| (record.note_label.clone(), index))
            .collect();
        Self { records, by_label }
    }

    /// Parses a JSON array of note records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<NoteRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    pub fn get(&self, label: &str) -> Option<&NoteRecord> {
        self.by_label.get(label).map(|&index| &self.records[index])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NoteRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[NoteRecord] {
        &self.records
    }
}

/// Loads a generated JSON note table from disk.
pub fn load_notes(path: impl AsRef<Path>) -> Result<NoteCatalog> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| NoteTableError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    NoteCatalog::from_json_str(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::{Accidental, Pitch};
    use crate::writer::to_json_bytes;

    fn sample() -> Vec<NoteRecord> {
        vec![
            NoteRecord::from_label("C#4", 277.18, 1.2415).unwrap(),
            NoteRecord::from_label("Db4", 277.18, 1.2415).unwrap(),
            NoteRecord::from_label("A4", 440.0, 0.7818).unwrap(),
        ]
    }

    #[test]
    fn test_lookup_by_label() {
        let catalog = NoteCatalog::from_records(sample());
        assert_eq!(catalog.len(), 3);

        let db4 = catalog.get("Db4").unwrap();
        assert_eq!(db4.pitch, Pitch::D);
        assert_eq!(db4.accidental, Accidental::Flat);
        assert!(catalog.get("E4").is_none());
    }

    #[test]
    fn test_reads_writer_output() {
        let json = String::from_utf8(to_json_bytes(&sample()).unwrap()).unwrap();
        let catalog = NoteCatalog::from_json_str(&json).unwrap();
        let labels: Vec<&str> = catalog.iter().map(|r| r.note_label.as_str()).collect();
        assert_eq!(labels, vec!["C#4", "Db4", "A4"]);
    }

    #[test]
    fn test_duplicate_label_keeps_last() {
        let records = vec![
            NoteRecord::from_label("A4", 440.0, 0.7818).unwrap(),
            NoteRecord::from_label("A4", 442.0, 0.7783).unwrap(),
        ];
        let catalog = NoteCatalog::from_records(records);
        assert_eq!(catalog.get("A4").unwrap().frequency, 442.0);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_rejects_unknown_accidental() {
        let json = r#"[{"note_label":"A4","pitch":"A","accidental":"DoubleSharp","octave":4,"frequency":440.0,"wavelength":0.78}]"#;
        assert!(matches!(
            NoteCatalog::from_json_str(json),
            Err(NoteTableError::Json(_))
        ));
    }
}
