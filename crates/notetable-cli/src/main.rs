//! notetable CLI - converts CSV note tables to JSON
//!
//! Running `notetable` with no subcommand converts `assets/notes.csv` to
//! `assets/notes.json`.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use notetable_cli::commands;

/// notetable - Note table converter
#[derive(Parser)]
#[command(name = "notetable")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a CSV note table to a JSON array of notes
    Convert {
        /// JSON config file with `input_path` and `output_path`
        #[arg(short, long)]
        config: Option<String>,

        /// CSV note table to read (default: assets/notes.csv)
        #[arg(short, long)]
        input: Option<String>,

        /// JSON file to write (default: assets/notes.json)
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Parse a CSV note table without writing output
    Validate {
        /// JSON config file with `input_path`
        #[arg(short, long)]
        config: Option<String>,

        /// CSV note table to read (default: assets/notes.csv)
        #[arg(short, long)]
        input: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the notes of a generated JSON note table
    Inspect {
        /// JSON note table to read
        #[arg(short, long, default_value = notetable::DEFAULT_OUTPUT_PATH)]
        input: String,

        /// Only show this note label (e.g. "C#4")
        #[arg(short, long)]
        label: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::convert::run(None, None, None, false),
        Some(Commands::Convert {
            config,
            input,
            output,
            json,
        }) => commands::convert::run(
            config.as_deref(),
            input.as_deref(),
            output.as_deref(),
            json,
        ),
        Some(Commands::Validate {
            config,
            input,
            json,
        }) => commands::validate::run(config.as_deref(), input.as_deref(), json),
        Some(Commands::Inspect { input, label, json }) => {
            commands::inspect::run(&input, label.as_deref(), json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
