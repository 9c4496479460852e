use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{check_command, coverage_command, init_command};

#[derive(Parser, Debug)]
#[command(name = "flowlint")]
#[command(version, about = "Lint driver for the Flow static type checker", long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    FLOW_BIN=/path/to/flow    Override checker discovery\n    RUST_LOG=debug            Enable debug logging")]
pub struct Flowlint {
    #[command(subcommand)]
    pub command: Commands,
}

/// How collected diagnostics are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Text,
    /// Diagnostics as a JSON array
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Type-check a file and report diagnostics
    #[command(visible_alias = "c")]
    Check {
        /// Path to the file to check
        filepath: String,

        /// Print the checker command without executing it
        #[arg(short, long)]
        dry_run: bool,

        /// Output format for the diagnostic list
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,

        /// Parse the checker's plain-text output instead of --json
        #[arg(long)]
        text_protocol: bool,
    },
    /// Report type coverage warnings for a file
    Coverage {
        /// Path to the file to analyze
        filepath: String,

        /// Print the checker command without executing it
        #[arg(short, long)]
        dry_run: bool,

        /// Output format for the diagnostic list
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
    /// Write a default .flowlint.json settings file
    Init {
        /// Custom working directory (defaults to current directory)
        #[arg(long = "cwd")]
        cwd: Option<String>,

        /// Force overwrite an existing settings file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Check {
                filepath,
                dry_run,
                output,
                text_protocol,
            } => check_command(&filepath, dry_run, output, text_protocol),
            Commands::Coverage {
                filepath,
                dry_run,
                output,
            } => coverage_command(&filepath, dry_run, output),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
