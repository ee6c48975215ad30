//! Subsystem descriptor: one pipeline stage's probe, terminator and tuning.

use std::fmt;
use std::sync::Arc;

use super::RetryPolicy;
use crate::ports::{ProcessProbe, StageHandles, Terminator};

/// Everything the escalation policy needs for one stage.
///
/// Built fresh for every coordinator run and dropped at its end.
#[derive(Clone)]
pub struct Subsystem {
    /// Human-readable name used in logs and errors.
    pub name: String,
    pub probe: Arc<dyn ProcessProbe>,
    pub terminator: Arc<dyn Terminator>,
    pub retry: RetryPolicy,
}

impl Subsystem {
    pub fn new(
        name: impl Into<String>,
        probe: Arc<dyn ProcessProbe>,
        terminator: Arc<dyn Terminator>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            name: name.into(),
            probe,
            terminator,
            retry,
        }
    }

    /// Build a descriptor from catalog handles.
    pub fn from_handles(name: impl Into<String>, handles: StageHandles, retry: RetryPolicy) -> Self {
        Self::new(name, handles.probe, handles.terminator, retry)
    }
}

impl fmt::Debug for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subsystem")
            .field("name", &self.name)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}
