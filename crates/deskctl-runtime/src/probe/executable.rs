use std::path::PathBuf;

use async_trait::async_trait;
use deskctl_core::{ProcessProbe, ShutdownError};

use crate::process::find_pid_by_executable;

/// Running iff some process was started from `executable`.
#[derive(Debug, Clone)]
pub struct ExecutablePathProbe {
    executable: PathBuf,
}

impl ExecutablePathProbe {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

#[async_trait]
impl ProcessProbe for ExecutablePathProbe {
    async fn is_running(&self) -> Result<bool, ShutdownError> {
        let pid = find_pid_by_executable(&self.executable).map_err(|e| {
            ShutdownError::io(
                format!("failed to look up {}", self.executable.display()),
                e,
            )
        })?;
        Ok(pid.is_some())
    }
}
