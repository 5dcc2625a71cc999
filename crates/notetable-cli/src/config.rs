//! Resolution of converter settings from CLI flags.
//!
//! Precedence: explicit flags, then the `--config` file, then defaults.

use notetable::ConverterConfig;

/// Builds the effective config for a run.
pub fn resolve_config(
    config_file: Option<&str>,
    input: Option<&str>,
    output: Option<&str>,
) -> notetable::Result<ConverterConfig> {
    let mut config = match config_file {
        Some(path) => ConverterConfig::from_json_file(path)?,
        None => ConverterConfig::default(),
    };

    if let Some(input) = input {
        config = config.with_input(input);
    }
    if let Some(output) = output {
        config = config.with_output(output);
    }

    Ok(config)
}
