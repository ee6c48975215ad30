use std::sync::Arc;

use async_trait::async_trait;
use deskctl_core::{ShutdownError, Terminator};
use tokio_util::sync::CancellationToken;

use crate::vm::{VmAction, VmManager};

/// Run one VM-manager action; the command is killed on cancellation.
#[derive(Debug, Clone)]
pub struct VmCommandTerminator {
    manager: Arc<VmManager>,
    action: VmAction,
}

impl VmCommandTerminator {
    pub const fn new(manager: Arc<VmManager>, action: VmAction) -> Self {
        Self { manager, action }
    }
}

#[async_trait]
impl Terminator for VmCommandTerminator {
    async fn terminate(&self, cancel: &CancellationToken) -> Result<(), ShutdownError> {
        self.manager.run(self.action, cancel).await
    }
}
