//! Note table conversion.
//!
//! Reads a CSV table of notes (`label,frequency,wavelength`), decomposes
//! each label into pitch, accidental and octave, and writes the result as a
//! pretty-printed JSON array.
//!
//! # Example
//!
//! ```no_run
//! use notetable::{convert, ConverterConfig};
//!
//! let summary = convert(&ConverterConfig::default()).unwrap();
//! println!("wrote {} notes", summary.record_count);
//! ```

pub mod catalog;
pub mod config;
pub mod convert;
pub mod error;
pub mod note;
pub mod reader;
pub mod writer;

pub use catalog::{load_notes, NoteCatalog};
pub use config::{ConverterConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
pub use convert::convert;
pub use error::{LabelError, NoteTableError, Result, RowError};
pub use note::{parse_label, Accidental, NoteRecord, ParsedLabel, Pitch};
pub use reader::{
    read_notes, read_notes_from_reader, read_table, read_table_from_reader, NoteTable,
    TableSummary, COMMENT_MARKER, LABEL_SEPARATOR,
};
pub use writer::{to_json_bytes, write_notes};
