//! Error types for the shutdown engine.
//!
//! Every port (`ProcessProbe`, `Terminator`, `ShutdownTargets`) reports
//! failures as [`ShutdownError`]. Multi-step terminators collect their
//! failures into an [`AggregateError`] so no cause is dropped.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::paths::PathError;

/// Errors produced while probing or terminating subsystems.
#[derive(Debug, Error)]
pub enum ShutdownError {
    /// Installation layout lookup failed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// An OS operation failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// An external command ran but reported failure.
    #[error("`{command}` failed: {status}")]
    CommandFailed { command: String, status: String },

    /// Delivering a signal to a process failed.
    #[error("failed to signal process {pid}: {reason}")]
    Signal { pid: u32, reason: String },

    /// An external command was killed because the operation was cancelled.
    #[error("`{command}` was cancelled")]
    Cancelled { command: String },

    /// The operation has no implementation on this platform.
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),

    /// A required location could not be discovered.
    #[error("failed to find {what}: {source}")]
    Discovery {
        what: &'static str,
        #[source]
        source: Box<ShutdownError>,
    },

    /// A probe failed, so polling stopped without terminating.
    #[error("while checking {subsystem}, found error: {source}")]
    Check {
        subsystem: String,
        #[source]
        source: Box<ShutdownError>,
    },

    /// The terminator for a subsystem failed.
    #[error("failed to terminate {subsystem}: {source}")]
    Terminate {
        subsystem: String,
        #[source]
        source: Box<ShutdownError>,
    },

    /// Several independent steps failed.
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

impl ShutdownError {
    /// Wrap an I/O error with a short description of what was attempted.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn discovery(what: &'static str, source: Self) -> Self {
        Self::Discovery {
            what,
            source: Box::new(source),
        }
    }
}

/// An ordered collection of independent failures.
///
/// Callers can inspect each cause through [`AggregateError::errors`]; the
/// `Display` form lists every cause on its own line.
#[derive(Debug, Default)]
pub struct AggregateError {
    errors: Vec<ShutdownError>,
}

impl AggregateError {
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn push(&mut self, error: ShutdownError) {
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ShutdownError] {
        &self.errors
    }

    /// `Ok(())` when nothing was collected, otherwise the aggregate.
    pub fn into_result(self) -> Result<(), ShutdownError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ShutdownError::Aggregate(self))
        }
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.errors.len() == 1 {
            "error"
        } else {
            "errors"
        };
        write!(f, "{} {noun} occurred:", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n\t* {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateError {}

impl FromIterator<ShutdownError> for AggregateError {
    fn from_iter<I: IntoIterator<Item = ShutdownError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AggregateError {
    type Item = ShutdownError;
    type IntoIter = std::vec::IntoIter<ShutdownError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
