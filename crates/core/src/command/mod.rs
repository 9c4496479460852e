//! Checker command construction

mod builder;
mod flow_command;

pub use builder::{build_check_command, build_coverage_command, DEFAULT_EXECUTABLE};
pub use flow_command::{FlowCommand, FlowSubcommand};
