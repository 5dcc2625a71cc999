//! End-to-end tests for the CLI commands.

use notetable::load_notes;
use notetable_cli::commands::{convert, inspect, validate};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tempfile::TempDir;

fn write_table(dir: &TempDir, csv: &str) -> PathBuf {
    let path = dir.path().join("notes.csv");
    fs::write(&path, csv).unwrap();
    path
}

fn s(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn convert_writes_json_table() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_table(&tmp, "// header,0,0\nA4,440.0,0.7818\nC#4/Db4,277.18,1.2415\n");
    let output = tmp.path().join("notes.json");

    let code = convert::run(None, Some(s(&input)), Some(s(&output)), false).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let catalog = load_notes(&output).unwrap();
    let labels: Vec<&str> = catalog.iter().map(|r| r.note_label.as_str()).collect();
    assert_eq!(labels, vec!["A4", "C#4", "Db4"]);
}

#[test]
fn convert_reads_paths_from_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_table(&tmp, "A4,440.0,0.7818\n");
    let output = tmp.path().join("from_config.json");
    let config = tmp.path().join("notetable.json");
    fs::write(
        &config,
        serde_json::json!({ "input_path": input, "output_path": output }).to_string(),
    )
    .unwrap();

    let code = convert::run(Some(s(&config)), None, None, true).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    assert!(output.exists());
}

#[test]
fn convert_human_mode_propagates_malformed_row() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_table(&tmp, "A4,notanumber,0.78\n");
    let output = tmp.path().join("notes.json");

    let err = convert::run(None, Some(s(&input)), Some(s(&output)), false).unwrap_err();
    assert!(format!("{err:#}").contains("line 1"));
    assert!(!output.exists());
}

#[test]
fn convert_json_mode_reports_failure_with_exit_code() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_table(&tmp, "A4,notanumber,0.78\n");
    let output = tmp.path().join("notes.json");
    fs::write(&output, "[]").unwrap();

    let code = convert::run(None, Some(s(&input)), Some(s(&output)), true).unwrap();
    assert_eq!(code, ExitCode::from(1));
    assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
}

#[test]
fn convert_json_mode_reports_bad_config() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("notetable.json");
    fs::write(&config, "{").unwrap();

    let code = convert::run(Some(s(&config)), None, None, true).unwrap();
    assert_eq!(code, ExitCode::from(1));
}

#[test]
fn validate_does_not_write_output() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_table(&tmp, "A4,440.0,0.7818\n");

    assert_eq!(
        validate::run(None, Some(s(&input)), false).unwrap(),
        ExitCode::SUCCESS
    );
    assert_eq!(
        validate::run(None, Some(s(&input)), true).unwrap(),
        ExitCode::SUCCESS
    );
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
}

#[test]
fn validate_fails_on_short_row() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_table(&tmp, "A4,440.0\n");

    assert!(validate::run(None, Some(s(&input)), false).is_err());
    assert_eq!(
        validate::run(None, Some(s(&input)), true).unwrap(),
        ExitCode::from(1)
    );
}

#[test]
fn inspect_reads_generated_table() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_table(&tmp, "C#4/Db4,277.18,1.2415\n");
    let output = tmp.path().join("notes.json");
    convert::run(None, Some(s(&input)), Some(s(&output)), true).unwrap();

    assert_eq!(
        inspect::run(s(&output), None, false).unwrap(),
        ExitCode::SUCCESS
    );
    assert_eq!(
        inspect::run(s(&output), Some("Db4"), true).unwrap(),
        ExitCode::SUCCESS
    );
    assert_eq!(
        inspect::run(s(&output), Some("E4"), true).unwrap(),
        ExitCode::from(1)
    );
    assert!(inspect::run(s(&output), Some("E4"), false).is_err());
}

#[test]
fn inspect_missing_file_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("absent.json");

    assert!(inspect::run(s(&missing), None, false).is_err());
    assert_eq!(
        inspect::run(s(&missing), None, true).unwrap(),
        ExitCode::from(1)
    );
}
