use anyhow::Result;

use flowlint_core::{Diagnostic, Severity};

use crate::cli::OutputFormat;

/// Print collected diagnostics in the requested format.
pub fn print_diagnostics(diagnostics: &[Diagnostic], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(diagnostics)?);
        }
        OutputFormat::Text => {
            if diagnostics.is_empty() {
                println!("✅ No issues found");
                return Ok(());
            }

            for diagnostic in diagnostics {
                let icon = match diagnostic.severity {
                    Severity::Error => "❌",
                    Severity::Warning => "⚠️ ",
                };
                println!(
                    "{} {}:{} {}",
                    icon, diagnostic.line, diagnostic.column, diagnostic.message
                );
            }

            let errors = diagnostics
                .iter()
                .filter(|d| d.severity == Severity::Error)
                .count();
            let warnings = diagnostics.len() - errors;
            println!("\n{} error(s), {} warning(s)", errors, warnings);
        }
    }

    Ok(())
}
