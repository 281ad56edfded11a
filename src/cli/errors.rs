//! CLI-specific error types
//!
//! All CLI errors are fatal: main prints them to stderr and exits
//! non-zero.

use thiserror::Error;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Server failed to boot or exited with an error
    #[error("Failed to start server: {0}")]
    BootFailed(String),
}

impl CliError {
    /// Boot failure
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::BootFailed(msg.into())
    }
}
