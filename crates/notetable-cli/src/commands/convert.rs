//! Convert command implementation
//!
//! Converts a CSV note table to a JSON array of note records.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::{note_table_error_to_json, print_json, ConvertOutput};
use crate::config::resolve_config;

/// Run the convert command
///
/// # Arguments
/// * `config_file` - Optional JSON config file
/// * `input` - CSV path override
/// * `output` - JSON path override
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    config_file: Option<&str>,
    input: Option<&str>,
    output: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(config_file, input, output)
    } else {
        run_human(config_file, input, output)
    }
}

fn run_human(config_file: Option<&str>, input: Option<&str>, output: Option<&str>) -> Result<ExitCode> {
    let config = resolve_config(config_file, input, output)?;

    println!(
        "{} {}",
        "Converting:".cyan().bold(),
        config.input_path.display()
    );
    println!("  {} {}", "->".dimmed(), config.output_path.display());

    let summary = notetable::convert(&config)?;

    println!(
        "{} Wrote {} notes ({} rows, {} comments skipped)",
        "SUCCESS".green().bold(),
        summary.record_count,
        summary.rows_read,
        summary.comment_rows
    );

    Ok(ExitCode::SUCCESS)
}

fn run_json(config_file: Option<&str>, input: Option<&str>, output: Option<&str>) -> Result<ExitCode> {
    let config = match resolve_config(config_file, input, output) {
        Ok(config) => config,
        Err(err) => {
            let result = ConvertOutput {
                success: false,
                input: input.unwrap_or(notetable::DEFAULT_INPUT_PATH).to_string(),
                output: output.unwrap_or(notetable::DEFAULT_OUTPUT_PATH).to_string(),
                summary: None,
                errors: vec![note_table_error_to_json(&err)],
            };
            print_json(&result)?;
            return Ok(ExitCode::from(1));
        }
    };

    let (summary, errors) = match notetable::convert(&config) {
        Ok(summary) => (Some(summary), Vec::new()),
        Err(err) => (None, vec![note_table_error_to_json(&err)]),
    };
    let success = errors.is_empty();

    print_json(&ConvertOutput {
        success,
        input: config.input_path.display().to_string(),
        output: config.output_path.display().to_string(),
        summary,
        errors,
    })?;

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
