//! Inspect command implementation
//!
//! Loads a generated JSON note table and prints its notes.

use anyhow::{bail, Result};
use colored::Colorize;
use notetable::{load_notes, NoteCatalog, NoteRecord};
use std::process::ExitCode;

use super::json_output::{error_codes, note_table_error_to_json, print_json, InspectOutput, JsonError};

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to a generated JSON note table
/// * `label` - Only show this note label
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 if the file cannot be loaded or the label is unknown
pub fn run(input: &str, label: Option<&str>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return run_json(input, label);
    }

    println!("{} {}", "Inspecting:".cyan().bold(), input);
    let catalog = load_notes(input)?;

    let notes = match select(&catalog, label) {
        Some(notes) => notes,
        None => bail!("unknown note label: {}", label.unwrap_or_default()),
    };

    for note in &notes {
        println!("  {}", format_row(note));
    }
    println!(
        "{} {} of {} notes",
        "SUCCESS".green().bold(),
        notes.len(),
        catalog.len()
    );

    Ok(ExitCode::SUCCESS)
}

fn run_json(input: &str, label: Option<&str>) -> Result<ExitCode> {
    let mut result = InspectOutput {
        success: false,
        input: input.to_string(),
        notes: Vec::new(),
        errors: Vec::new(),
    };

    match load_notes(input) {
        Ok(catalog) => match select(&catalog, label) {
            Some(notes) => {
                result.success = true;
                result.notes = notes.into_iter().cloned().collect();
            }
            None => result.errors.push(JsonError::new(
                error_codes::UNKNOWN_LABEL,
                format!("unknown note label: {}", label.unwrap_or_default()),
            )),
        },
        Err(err) => result.errors.push(note_table_error_to_json(&err)),
    }

    print_json(&result)?;

    Ok(if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Picks the notes to show; `None` when a requested label is missing.
fn select<'a>(catalog: &'a NoteCatalog, label: Option<&str>) -> Option<Vec<&'a NoteRecord>> {
    match label {
        Some(label) => catalog.get(label).map(|note| vec![note]),
        None => Some(catalog.iter().collect()),
    }
}

fn format_row(note: &NoteRecord) -> String {
    format!(
        "{:<5} {} {:<7} {} {:>10.2} Hz {:>10.4}",
        note.note_label,
        note.pitch,
        format!("{:?}", note.accidental),
        note.octave,
        note.frequency,
        note.wavelength
    )
}
