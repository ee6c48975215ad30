//! Process probe port.

use async_trait::async_trait;

use crate::shutdown::ShutdownError;

/// Capability: tell whether a subsystem is currently running.
///
/// Probes are expected to be fast and take no cancellation token. An error
/// means the answer is unknown, which is different from "still running":
/// the escalation policy stops polling on the first error.
#[async_trait]
pub trait ProcessProbe: Send + Sync {
    async fn is_running(&self) -> Result<bool, ShutdownError>;
}
