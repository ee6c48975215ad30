use std::sync::Arc;

use async_trait::async_trait;
use deskctl_core::{ProcessProbe, ShutdownError};

use crate::vm::VmManager;

/// Running iff the VM manager lists the instance as `Running`.
#[derive(Debug, Clone)]
pub struct VmStatusProbe {
    manager: Arc<VmManager>,
}

impl VmStatusProbe {
    pub const fn new(manager: Arc<VmManager>) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl ProcessProbe for VmStatusProbe {
    async fn is_running(&self) -> Result<bool, ShutdownError> {
        self.manager.is_running().await
    }
}
