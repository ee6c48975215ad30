use std::path::PathBuf;

use async_trait::async_trait;
use deskctl_core::{ShutdownError, Terminator};
use tokio_util::sync::CancellationToken;

use crate::process::{find_pid_by_executable, kill_process_group};

/// Signal the process group of the process started from `executable`.
#[derive(Debug, Clone)]
pub struct ProcessGroupTerminator {
    executable: PathBuf,
    force: bool,
}

impl ProcessGroupTerminator {
    pub fn new(executable: impl Into<PathBuf>, force: bool) -> Self {
        Self {
            executable: executable.into(),
            force,
        }
    }
}

#[async_trait]
impl Terminator for ProcessGroupTerminator {
    async fn terminate(&self, _cancel: &CancellationToken) -> Result<(), ShutdownError> {
        let pid = find_pid_by_executable(&self.executable).map_err(|e| {
            ShutdownError::io(
                format!("failed to look up {}", self.executable.display()),
                e,
            )
        })?;
        match pid {
            Some(pid) => kill_process_group(pid, self.force),
            None => Ok(()),
        }
    }
}
