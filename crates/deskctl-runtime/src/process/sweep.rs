//! Directory sweep: terminate every process running from an installation.

use std::path::Path;

use deskctl_core::{AggregateError, ShutdownError};
use tracing::{debug, warn};

use super::lookup::pids_under_directory;
use super::signal::terminate_pid;

/// Signal every process whose executable lives under `dir`.
///
/// All processes are attempted; failures are collected and returned
/// together. The calling process is skipped.
pub fn terminate_processes_in_directory(dir: &Path, force: bool) -> Result<(), ShutdownError> {
    let pids = pids_under_directory(dir).map_err(|e| {
        ShutdownError::io(format!("failed to resolve {}", dir.display()), e)
    })?;
    debug!(dir = %dir.display(), count = pids.len(), force, "Sweeping installation directory");

    let mut failures = AggregateError::new();
    for pid in pids {
        if let Err(e) = terminate_pid(pid, force) {
            warn!(pid, error = %e, "Failed to terminate process");
            failures.push(e);
        }
    }
    failures.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_private_sleep;
    use tempfile::TempDir;

    #[test]
    fn missing_directory_is_an_io_error() {
        let err = terminate_processes_in_directory(Path::new("/nonexistent/deskbox"), true)
            .unwrap_err();
        assert!(matches!(err, ShutdownError::Io { .. }));
    }

    #[test]
    fn empty_directory_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        assert!(terminate_processes_in_directory(dir.path(), true).is_ok());
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn sweep_kills_processes_started_from_directory() {
        let dir = TempDir::new().unwrap();
        let Some((_exe, mut child)) = spawn_private_sleep(dir.path()) else {
            return;
        };

        terminate_processes_in_directory(dir.path(), true).unwrap();
        let status = child.wait().await.unwrap();
        assert!(!status.success());
    }
}
