use std::io;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Which checker entry point an invocation drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowSubcommand {
    /// One-shot full check.
    Check,
    /// Query an already-running server.
    Status,
    /// Type coverage report for a single file.
    Coverage,
}

impl FlowSubcommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowSubcommand::Check => "check",
            FlowSubcommand::Status => "status",
            FlowSubcommand::Coverage => "coverage",
        }
    }
}

/// A fully-built checker invocation.
///
/// `args` holds the executable as its first element, so the vector is
/// the exact argv the command would be spawned with.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowCommand {
    pub subcommand: FlowSubcommand,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl FlowCommand {
    pub fn new(subcommand: FlowSubcommand, args: Vec<String>) -> Self {
        Self {
            subcommand,
            args,
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Ask the checker for machine-readable JSON output.
    pub fn with_json_output(mut self) -> Self {
        self.args.push("--json".to_string());
        self
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = String::new();
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                cmd.push(' ');
            }
            if arg.contains(' ') {
                cmd.push_str(&format!("'{arg}'"));
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }

    /// Spawn the checker and wait for it to exit, capturing its output.
    ///
    /// A non-zero exit status is not an error at this level: the checker
    /// legitimately exits non-zero whenever it finds diagnostics.
    pub fn execute(&self) -> io::Result<Output> {
        if self.args.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "No command specified",
            ));
        }

        let mut cmd = Command::new(&self.args[0]);
        cmd.args(&self.args[1..]);

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        cmd.output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_command_joins_argv() {
        let command = FlowCommand::new(
            FlowSubcommand::Check,
            vec!["flow".into(), "check".into(), "--all".into()],
        );
        assert_eq!(command.to_shell_command(), "flow check --all");
    }

    #[test]
    fn shell_command_quotes_args_with_spaces() {
        let command = FlowCommand::new(
            FlowSubcommand::Check,
            vec!["flow".into(), "check".into(), "--lib".into(), "my libs".into()],
        );
        assert_eq!(command.to_shell_command(), "flow check --lib 'my libs'");
    }

    #[test]
    fn json_output_flag_is_appended_last() {
        let command = FlowCommand::new(
            FlowSubcommand::Status,
            vec!["flow".into(), "status".into(), "--no-auto-start".into()],
        )
        .with_json_output();
        assert_eq!(command.args.last().map(String::as_str), Some("--json"));
    }
}
