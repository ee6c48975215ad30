use std::path::PathBuf;

use async_trait::async_trait;
use deskctl_core::paths::application_directory;
use deskctl_core::{ShutdownError, Terminator};
use tokio_util::sync::CancellationToken;

use crate::process::terminate_processes_in_directory;

/// Terminate every process running from `dir`, except the CLI itself.
#[derive(Debug, Clone)]
pub struct DirectoryTerminator {
    dir: PathBuf,
    force: bool,
}

impl DirectoryTerminator {
    pub fn new(dir: impl Into<PathBuf>, force: bool) -> Self {
        Self {
            dir: dir.into(),
            force,
        }
    }
}

#[async_trait]
impl Terminator for DirectoryTerminator {
    async fn terminate(&self, _cancel: &CancellationToken) -> Result<(), ShutdownError> {
        terminate_processes_in_directory(&self.dir, self.force)
    }
}

/// Force-kill everything in the installation directory, resolved on each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceKillApplication;

#[async_trait]
impl Terminator for ForceKillApplication {
    async fn terminate(&self, _cancel: &CancellationToken) -> Result<(), ShutdownError> {
        let dir = application_directory()?;
        terminate_processes_in_directory(&dir, true)
    }
}
