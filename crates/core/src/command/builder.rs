//! Builds checker invocations from lint settings.
//!
//! Pure data transformation: no I/O happens here and construction
//! cannot fail. Flag order is deterministic for identical settings.

use super::{FlowCommand, FlowSubcommand};
use crate::config::Settings;
use std::path::Path;

/// Checker binary name used when settings carry no override.
pub const DEFAULT_EXECUTABLE: &str = "flow";

fn executable(settings: &Settings) -> String {
    settings
        .executable
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| DEFAULT_EXECUTABLE.to_string())
}

/// Build the type-check invocation for the given settings.
///
/// With `use-server` set this queries an already-running server and
/// never auto-starts one (`status --no-auto-start`); otherwise it
/// performs a one-shot `check`. Flags follow in a fixed order:
/// `--all`, `--lib <path>` pairs, `--show-all-errors`, `--coverage`.
pub fn build_check_command(settings: &Settings) -> FlowCommand {
    let subcommand = if settings.use_server {
        FlowSubcommand::Status
    } else {
        FlowSubcommand::Check
    };

    let mut args = vec![executable(settings), subcommand.as_str().to_string()];

    if settings.use_server {
        args.push("--no-auto-start".to_string());
    }
    if settings.all {
        args.push("--all".to_string());
    }
    for lib in &settings.lib {
        args.push("--lib".to_string());
        args.push(lib.display().to_string());
    }
    if settings.show_all_errors {
        args.push("--show-all-errors".to_string());
    }
    if settings.coverage {
        args.push("--coverage".to_string());
    }

    FlowCommand::new(subcommand, args)
}

/// Build the coverage invocation for one file, derived from the same
/// settings as the check command. Coverage output is only consumed in
/// JSON form, so `--json` is always appended.
pub fn build_coverage_command(settings: &Settings, file: &Path) -> FlowCommand {
    let args = vec![
        executable(settings),
        FlowSubcommand::Coverage.as_str().to_string(),
        file.display().to_string(),
    ];

    FlowCommand::new(FlowSubcommand::Coverage, args).with_json_output()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Settings with every flag off, unlike the shipped defaults.
    fn bare_settings() -> Settings {
        Settings {
            show_all_errors: false,
            ..Default::default()
        }
    }

    #[test]
    fn bare_settings_produce_exe_and_check_only() {
        let command = build_check_command(&bare_settings());
        assert_eq!(command.args, vec!["flow", "check"]);
    }

    #[test]
    fn all_files_flag_is_emitted_exactly_once() {
        let mut settings = bare_settings();
        settings.all = true;

        let command = build_check_command(&settings);
        assert_eq!(command.args.iter().filter(|a| *a == "--all").count(), 1);

        // Still exactly once with everything else enabled
        settings.show_all_errors = true;
        settings.coverage = true;
        settings.lib = vec![PathBuf::from("interfaces")];
        let command = build_check_command(&settings);
        assert_eq!(command.args.iter().filter(|a| *a == "--all").count(), 1);
    }

    #[test]
    fn library_paths_keep_their_input_order() {
        let mut settings = bare_settings();
        settings.lib = vec![
            PathBuf::from("interfaces"),
            PathBuf::from("flow-typed"),
            PathBuf::from("decls"),
        ];

        let command = build_check_command(&settings);
        assert_eq!(
            command.args,
            vec![
                "flow",
                "check",
                "--lib",
                "interfaces",
                "--lib",
                "flow-typed",
                "--lib",
                "decls"
            ]
        );
    }

    #[test]
    fn server_mode_queries_without_auto_start() {
        let mut settings = bare_settings();
        settings.use_server = true;

        let command = build_check_command(&settings);
        assert_eq!(command.subcommand, FlowSubcommand::Status);
        assert_eq!(command.args, vec!["flow", "status", "--no-auto-start"]);
        assert!(!command.args.iter().any(|a| a == "check"));
    }

    #[test]
    fn executable_override_replaces_the_base_name() {
        let mut settings = bare_settings();
        settings.executable = Some(PathBuf::from("/opt/flow/bin/flow"));

        let command = build_check_command(&settings);
        assert_eq!(command.args[0], "/opt/flow/bin/flow");
    }

    #[test]
    fn identical_settings_produce_identical_argv() {
        let settings = Settings {
            all: true,
            lib: vec![PathBuf::from("interfaces")],
            coverage: true,
            ..Default::default()
        };

        assert_eq!(
            build_check_command(&settings).args,
            build_check_command(&settings).args
        );
    }

    #[test]
    fn shipped_defaults_bypass_the_error_cap() {
        let command = build_check_command(&Settings::default());
        assert_eq!(command.args, vec!["flow", "check", "--show-all-errors"]);
    }

    #[test]
    fn coverage_command_targets_the_file_as_json() {
        let command = build_coverage_command(&bare_settings(), Path::new("src/app.js"));
        assert_eq!(
            command.args,
            vec!["flow", "coverage", "src/app.js", "--json"]
        );
        assert_eq!(command.subcommand, FlowSubcommand::Coverage);
    }
}
