//! flowlint - a lint driver for the Flow static type checker
//!
//! This crate provides functionality to:
//! - Build `flow` command invocations from per-project lint settings
//! - Parse Flow's text and JSON output into structured diagnostics
//! - Run the checker and capture its output for a host to render
pub mod command;
pub mod config;
pub mod error;
pub mod parser;
pub mod pragma;
pub mod runner;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{Diagnostic, Severity};

// Re-export main API components
pub use command::{build_check_command, build_coverage_command, FlowCommand, FlowSubcommand};
pub use config::Settings;
pub use runner::FlowRunner;
