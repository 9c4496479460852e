use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project settings file, found by walking up from the
/// linted file.
pub const SETTINGS_FILE: &str = ".flowlint.json";

/// Per-project lint settings.
///
/// Key names follow the host settings schema: `all`, `lib`,
/// `show-all-errors`, `use-server`, `executable`, `coverage`. Settings
/// are immutable for the duration of one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
    /// Check every file, ignoring the per-file `@flow` opt-in pragma.
    pub all: bool,
    /// Additional library definition paths, passed to the checker in order.
    pub lib: Vec<PathBuf>,
    /// Bypass the checker's 50 error cap.
    pub show_all_errors: bool,
    /// Query a running Flow server instead of doing a one-shot check.
    pub use_server: bool,
    /// Override for locating the `flow` binary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable: Option<PathBuf>,
    /// Also report coverage-style warnings.
    pub coverage: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            all: false,
            lib: Vec::new(),
            show_all_errors: true,
            use_server: false,
            executable: None,
            coverage: false,
        }
    }
}

impl Settings {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse settings: {e}")))?;
        Ok(settings)
    }

    /// Walk up from `start_path` looking for a settings file.
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = if start_path.is_dir() {
            start_path
        } else {
            start_path.parent()?
        };

        loop {
            let config_path = current.join(SETTINGS_FILE);
            if config_path.exists() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }

    /// Load the settings governing `path`, falling back to defaults when
    /// no settings file exists.
    pub fn load_for_path(path: &Path) -> Result<Self> {
        match Self::find_config_file(path) {
            Some(config_path) => {
                tracing::debug!("Loading settings from {}", config_path.display());
                Self::load_from_file(&config_path)
            }
            None => {
                tracing::debug!("No settings file found for {}, using defaults", path.display());
                Ok(Self::default())
            }
        }
    }
}
