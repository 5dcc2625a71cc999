//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`, which replaces the colored status lines
//! with a single JSON object on stdout.

use notetable::{NoteRecord, NoteTableError, TableSummary};
use serde::{Deserialize, Serialize};

/// Stable error codes for CLI operations.
pub mod error_codes {
    /// Input file could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// A CSV row is malformed
    pub const MALFORMED_ROW: &str = "CLI_003";
    /// The CSV layer rejected the input
    pub const CSV_PARSE: &str = "CLI_004";
    /// Config file is invalid
    pub const CONFIG: &str = "CLI_005";
    /// JSON parse or serialization error
    pub const JSON: &str = "CLI_006";
    /// Requested note label is not in the table
    pub const UNKNOWN_LABEL: &str = "CLI_007";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_003")
    pub code: String,
    /// Human-readable error message, including its causes
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Line number (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
            line: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_line(mut self, line: u64) -> Self {
        self.line = Some(line);
        self
    }
}

/// Converts a library error into a JSON error, keeping its cause chain.
pub fn note_table_error_to_json(err: &NoteTableError) -> JsonError {
    let (code, file) = match err {
        NoteTableError::Read { path, .. } => (error_codes::FILE_READ, Some(path)),
        NoteTableError::Write { path, .. } => (error_codes::FILE_WRITE, Some(path)),
        NoteTableError::MalformedRow { .. } => (error_codes::MALFORMED_ROW, None),
        NoteTableError::Csv(_) => (error_codes::CSV_PARSE, None),
        NoteTableError::Config { path, .. } => (error_codes::CONFIG, Some(path)),
        NoteTableError::Json(_) => (error_codes::JSON, None),
    };

    let mut json = JsonError::new(code, error_chain(err));
    if let Some(path) = file {
        json = json.with_file(path.display().to_string());
    }
    if let Some(line) = err.line() {
        json = json.with_line(line);
    }
    json
}

/// Joins an error and its sources as `outer: inner: ...`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// JSON output for the convert command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertOutput {
    pub success: bool,
    pub input: String,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<TableSummary>,
    pub errors: Vec<JsonError>,
}

/// JSON output for the validate command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    pub success: bool,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<TableSummary>,
    pub errors: Vec<JsonError>,
}

/// JSON output for the inspect command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    pub success: bool,
    pub input: String,
    pub notes: Vec<NoteRecord>,
    pub errors: Vec<JsonError>,
}

/// Prints any serializable output as pretty JSON on stdout.
pub fn print_json<T: Serialize>(output: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(output)?;
    println!("{}", json);
    Ok(())
}
