//! Terminator port.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::shutdown::ShutdownError;

/// Capability: forcibly stop a subsystem.
///
/// Implementations that shell out must kill the external command when
/// `cancel` fires instead of waiting for it to finish.
#[async_trait]
pub trait Terminator: Send + Sync {
    async fn terminate(&self, cancel: &CancellationToken) -> Result<(), ShutdownError>;
}
