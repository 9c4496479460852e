use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use flowlint_core::parser::coverage;
use flowlint_core::{build_coverage_command, runner, FlowRunner, Settings};

use crate::cli::OutputFormat;
use crate::display::print_diagnostics;

pub fn coverage_command(filepath: &str, dry_run: bool, output: OutputFormat) -> Result<()> {
    let path = Path::new(filepath);
    debug!("Collecting coverage for file: {}", filepath);

    let mut settings = Settings::load_for_path(path)
        .with_context(|| format!("Failed to load settings for {filepath}"))?;
    if settings.executable.is_none() {
        settings.executable = runner::resolve_executable();
    }

    let flow = FlowRunner::for_target(path);
    let command = build_coverage_command(&settings, path)
        .with_working_dir(flow.project_root().to_path_buf());

    if dry_run {
        println!("{}", command.to_shell_command());
        if let Some(ref dir) = command.working_dir {
            println!("Working directory: {}", dir.display());
        }
        return Ok(());
    }

    let raw = flow.run(&command)?;
    let diagnostics = coverage::parse(&raw);

    print_diagnostics(&diagnostics, output)
}
