//! Error types for note table parsing and serialization.

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while decomposing a single note label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// The label (or one half of a compound label) is empty.
    #[error("note label is empty")]
    Empty,

    /// The first character is not a pitch letter.
    #[error("unknown pitch letter '{0}' (expected A-G)")]
    UnknownPitch(char),

    /// The last character is not an octave digit.
    #[error("octave character '{0}' is not a digit")]
    InvalidOctave(char),
}

/// Why a single CSV row could not be turned into note records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// The row has fewer than the three required fields.
    #[error("expected at least 3 fields, found {0}")]
    TooFewFields(usize),

    /// A numeric column could not be parsed.
    #[error("invalid {column} value '{value}'")]
    InvalidNumber {
        column: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// A numeric column parsed to NaN or infinity.
    #[error("{column} value '{value}' is not a finite number")]
    NonFinite { column: &'static str, value: String },

    /// One of the row's labels could not be decomposed.
    #[error("invalid note label '{label}'")]
    Label {
        label: String,
        #[source]
        source: LabelError,
    },
}

/// Top-level error type for note table operations.
#[derive(Debug, Error)]
pub enum NoteTableError {
    /// The input file could not be opened or read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row of the note table is malformed.
    #[error("malformed row at line {line}")]
    MalformedRow {
        line: u64,
        #[source]
        reason: RowError,
    },

    /// The CSV layer could not tokenize the input.
    #[error("invalid CSV input")]
    Csv(#[from] csv::Error),

    /// A configuration file is not valid JSON for the expected shape.
    #[error("invalid config file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

impl NoteTableError {
    /// Returns the 1-based line number for row-level errors.
    pub fn line(&self) -> Option<u64> {
        match self {
            NoteTableError::MalformedRow { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NoteTableError>;
