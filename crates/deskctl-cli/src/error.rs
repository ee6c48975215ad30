//! CLI-specific error types and mappings.
//!
//! Library errors are mapped here to exit codes and user-facing messages.

use deskctl_core::{PathError, ShutdownError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The shutdown finished abnormally.
    #[error("{0}")]
    Shutdown(String),

    /// The installation could not be located.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An OS or external-process operation failed.
    #[error("Process error: {0}")]
    Process(String),

    /// The operation was cancelled by Ctrl-C or `--timeout`.
    #[error("Cancelled: {0}")]
    Cancelled(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (reported by clap before any handler runs)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Shutdown(_) | Self::Cancelled(_) => 1,
            Self::Process(_) => 71, // EX_OSERR
            Self::Config(_) => 78,  // EX_CONFIG
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<ShutdownError> for CliError {
    fn from(err: ShutdownError) -> Self {
        match err {
            ShutdownError::Path(_) | ShutdownError::Discovery { .. } => {
                Self::Config(err.to_string())
            }
            ShutdownError::Io { .. }
            | ShutdownError::Signal { .. }
            | ShutdownError::CommandFailed { .. }
            | ShutdownError::Unsupported(_) => Self::Process(err.to_string()),
            ShutdownError::Cancelled { .. } => Self::Cancelled(err.to_string()),
            ShutdownError::Check { .. }
            | ShutdownError::Terminate { .. }
            | ShutdownError::Aggregate(_) => Self::Shutdown(err.to_string()),
        }
    }
}

/// Exit code for an error returned from `main`'s body.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
