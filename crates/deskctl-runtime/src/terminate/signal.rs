use std::path::PathBuf;

use async_trait::async_trait;
use deskctl_core::{ShutdownError, Terminator};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::process::{find_pid_by_executable, terminate_pid};

/// Ask the process started from `executable` to exit.
///
/// Nothing running counts as success.
#[derive(Debug, Clone)]
pub struct SignalTerminator {
    executable: PathBuf,
}

impl SignalTerminator {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

#[async_trait]
impl Terminator for SignalTerminator {
    async fn terminate(&self, _cancel: &CancellationToken) -> Result<(), ShutdownError> {
        let pid = find_pid_by_executable(&self.executable).map_err(|e| {
            ShutdownError::io(
                format!("failed to look up {}", self.executable.display()),
                e,
            )
        })?;
        let Some(pid) = pid else {
            debug!(executable = %self.executable.display(), "Nothing to terminate");
            return Ok(());
        };
        terminate_pid(pid, false)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::test_support::spawn_private_sleep;
    use tempfile::TempDir;

    #[tokio::test]
    async fn idle_executable_is_success() {
        let dir = TempDir::new().unwrap();
        let exe = dir.path().join("qemu-system-test");
        std::fs::write(&exe, "").unwrap();

        SignalTerminator::new(&exe)
            .terminate(&CancellationToken::new())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn running_process_receives_sigterm() {
        let dir = TempDir::new().unwrap();
        let Some((exe, mut child)) = spawn_private_sleep(dir.path()) else {
            return;
        };

        SignalTerminator::new(&exe)
            .terminate(&CancellationToken::new())
            .await
            .unwrap();
        let status = child.wait().await.unwrap();
        assert!(!status.success());
    }
}
