use std::io;

/// Errors that can occur during flowlint operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Flow executable not found (set `executable` in .flowlint.json or FLOW_BIN)")]
    ExecutableNotFound,
}

/// Result type alias for flowlint operations
pub type Result<T> = std::result::Result<T, Error>;
