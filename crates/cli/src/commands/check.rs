use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use flowlint_core::parser::{coverage, json, text};
use flowlint_core::{
    build_check_command, build_coverage_command, pragma, runner, FlowRunner, Settings, Severity,
};

use crate::cli::OutputFormat;
use crate::display::print_diagnostics;

pub fn check_command(
    filepath: &str,
    dry_run: bool,
    output: OutputFormat,
    text_protocol: bool,
) -> Result<()> {
    let path = Path::new(filepath);
    debug!("Checking file: {}", filepath);

    let mut settings = Settings::load_for_path(path)
        .with_context(|| format!("Failed to load settings for {filepath}"))?;
    if settings.executable.is_none() {
        settings.executable = runner::resolve_executable();
    }

    let flow = FlowRunner::for_target(path);

    let mut command = build_check_command(&settings);
    if !text_protocol {
        command = command.with_json_output();
    }
    let command = command.with_working_dir(flow.project_root().to_path_buf());

    if dry_run {
        println!("{}", command.to_shell_command());
        if let Some(ref dir) = command.working_dir {
            println!("Working directory: {}", dir.display());
        }
        return Ok(());
    }

    // Lint only files that opted in, unless `all` is set
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {filepath}"))?;
    if !settings.all && !pragma::has_flow_pragma(&source) {
        info!("no @flow pragma in {}, skipping", filepath);
        return print_diagnostics(&[], output);
    }

    let raw = flow.run(&command)?;

    let mut diagnostics = if text_protocol {
        text::parse(&raw)
    } else {
        let target = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        json::parse_for_file(&raw, &target)
    };

    // The original plugin pairs every check with a coverage pass when
    // the setting asks for one
    if settings.coverage && !text_protocol {
        let coverage_command = build_coverage_command(&settings, path)
            .with_working_dir(flow.project_root().to_path_buf());
        let raw = flow.run(&coverage_command)?;
        diagnostics.extend(coverage::parse(&raw));
    }

    print_diagnostics(&diagnostics, output)?;

    if diagnostics
        .iter()
        .any(|diagnostic| diagnostic.severity == Severity::Error)
    {
        std::process::exit(1);
    }

    Ok(())
}
