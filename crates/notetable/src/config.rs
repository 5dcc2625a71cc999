//! Converter configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NoteTableError, Result};

/// Default CSV source, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "assets/notes.csv";

/// Default JSON destination, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "assets/notes.json";

/// Input and output locations for one conversion run.
///
/// Missing keys in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl ConverterConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Loads a config from a JSON file such as
    /// `{"input_path": "notes.csv", "output_path": "notes.json"}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| NoteTableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| NoteTableError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_input(mut self, input_path: impl Into<PathBuf>) -> Self {
        self.input_path = input_path.into();
        self
    }

    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConverterConfig::default();
        assert_eq!(config.input_path, Path::new("assets/notes.csv"));
        assert_eq!(config.output_path, Path::new("assets/notes.json"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ConverterConfig =
            serde_json::from_str(r#"{"output_path": "out/notes.json"}"#).unwrap();
        assert_eq!(config.input_path, Path::new(DEFAULT_INPUT_PATH));
        assert_eq!(config.output_path, Path::new("out/notes.json"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: std::result::Result<ConverterConfig, _> =
            serde_json::from_str(r#"{"inputPath": "notes.csv"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("notetable.json");
        fs::write(&path, r#"{"input_path": "a.csv", "output_path": "b.json"}"#).unwrap();

        let config = ConverterConfig::from_json_file(&path).unwrap();
        assert_eq!(config, ConverterConfig::new("a.csv", "b.json"));
    }

    #[test]
    fn test_from_invalid_json_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("notetable.json");
        fs::write(&path, "{not json").unwrap();

        let err = ConverterConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, NoteTableError::Config { .. }));
    }

    #[test]
    fn test_overrides() {
        let config = ConverterConfig::default()
            .with_input("in.csv")
            .with_output("out.json");
        assert_eq!(config, ConverterConfig::new("in.csv", "out.json"));
    }
}
