//! Spawns the checker and captures its output.

use crate::command::FlowCommand;
use crate::error::{Error, Result};
use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Runs checker invocations for one target.
///
/// One short-lived child process per invocation, no state across
/// invocations. Timeouts and cancellation belong to the caller.
pub struct FlowRunner {
    project_root: PathBuf,
}

impl FlowRunner {
    /// Create a runner rooted at the project containing `target`.
    pub fn for_target(target: &Path) -> Self {
        Self {
            project_root: find_project_root(target),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run one checker invocation and capture its stdout.
    ///
    /// The exit status is deliberately not inspected: the checker
    /// exits non-zero whenever it finds diagnostics, and its output is
    /// parsed either way.
    pub fn run(&self, command: &FlowCommand) -> Result<String> {
        let command = match command.working_dir {
            Some(_) => command.clone(),
            None => command.clone().with_working_dir(self.project_root.clone()),
        };

        tracing::debug!("running checker: {}", command.to_shell_command());

        let output = command.execute().map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::ExecutableNotFound,
            _ => Error::from(err),
        })?;

        tracing::debug!("checker exit code: {:?}", output.status.code());

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            tracing::debug!("checker stderr: {}", stderr);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Resolve the checker binary: the `FLOW_BIN` environment variable
/// first, then `flow` on PATH. Returns `None` when neither resolves,
/// leaving the settings override (or the bare default name) in charge.
pub fn resolve_executable() -> Option<PathBuf> {
    if let Ok(path) = env::var("FLOW_BIN") {
        let path = PathBuf::from(path);
        if path.exists() {
            tracing::info!("found checker via FLOW_BIN: {}", path.display());
            return Some(path);
        }
        tracing::warn!("FLOW_BIN points at a missing file: {}", path.display());
    }

    find_in_path("flow")
}

fn find_in_path(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Find the directory the checker should run in: the nearest ancestor
/// holding a `.flowconfig`, falling back to the target's own directory.
pub fn find_project_root(target: &Path) -> PathBuf {
    // Relative targets cannot be walked upward, so resolve them first
    let target = target
        .canonicalize()
        .unwrap_or_else(|_| target.to_path_buf());

    let start = if target.is_dir() {
        target.clone()
    } else {
        match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    };

    let mut current = start.clone();
    loop {
        if current.join(".flowconfig").exists() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return start,
        }
    }
}
