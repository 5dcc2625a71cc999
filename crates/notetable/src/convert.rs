//! The read-then-write conversion pipeline.

use crate::config::ConverterConfig;
use crate::error::Result;
use crate::reader::{read_table, TableSummary};
use crate::writer::write_notes;

/// Converts the configured CSV table to JSON.
///
/// Every row is parsed before the output file is opened, so a malformed
/// row leaves an existing output file untouched.
pub fn convert(config: &ConverterConfig) -> Result<TableSummary> {
    let table = read_table(&config.input_path)?;
    write_notes(&table.records, &config.output_path)?;
    Ok(table.summary())
}
