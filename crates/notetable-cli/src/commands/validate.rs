//! Validate command implementation
//!
//! Parses a CSV note table without writing any output.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::{note_table_error_to_json, print_json, ValidateOutput};
use crate::config::resolve_config;

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if every row parses, 1 otherwise
pub fn run(config_file: Option<&str>, input: Option<&str>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return run_json(config_file, input);
    }

    let config = resolve_config(config_file, input, None)?;
    println!(
        "{} {}",
        "Validating:".cyan().bold(),
        config.input_path.display()
    );

    let summary = notetable::read_table(&config.input_path)?.summary();

    println!(
        "{} {} notes from {} rows ({} comment rows)",
        "SUCCESS".green().bold(),
        summary.record_count,
        summary.rows_read,
        summary.comment_rows
    );

    Ok(ExitCode::SUCCESS)
}

fn run_json(config_file: Option<&str>, input: Option<&str>) -> Result<ExitCode> {
    let result = match resolve_config(config_file, input, None) {
        Ok(config) => {
            let input = config.input_path.display().to_string();
            match notetable::read_table(&config.input_path) {
                Ok(table) => ValidateOutput {
                    success: true,
                    input,
                    summary: Some(table.summary()),
                    errors: Vec::new(),
                },
                Err(err) => ValidateOutput {
                    success: false,
                    input,
                    summary: None,
                    errors: vec![note_table_error_to_json(&err)],
                },
            }
        }
        Err(err) => ValidateOutput {
            success: false,
            input: input.unwrap_or(notetable::DEFAULT_INPUT_PATH).to_string(),
            summary: None,
            errors: vec![note_table_error_to_json(&err)],
        },
    };

    print_json(&result)?;

    Ok(if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
