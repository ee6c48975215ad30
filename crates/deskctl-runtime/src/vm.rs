//! VM-manager (`limactl`) command wrappers.
//!
//! Every invocation runs against [`VM_INSTANCE`] with `LIMA_HOME` pointing
//! at the application's VM home. The variable is set on the child only,
//! never on the CLI process.

use std::fmt;
use std::path::PathBuf;
use std::process::Stdio;

use deskctl_core::paths::{VM_INSTANCE, vm_home, vm_manager_executable};
use deskctl_core::{ApplicationPaths, ShutdownError};
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Environment variable the VM manager reads its state directory from.
pub const VM_HOME_ENV: &str = "LIMA_HOME";

/// Mutating VM-manager subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmAction {
    /// `stop`
    Stop,
    /// `stop --force`
    ForceStop,
    /// `delete --force`
    ForceDelete,
}

impl VmAction {
    pub const fn args(self) -> &'static [&'static str] {
        match self {
            Self::Stop => &["stop"],
            Self::ForceStop => &["stop", "--force"],
            Self::ForceDelete => &["delete", "--force"],
        }
    }
}

impl fmt::Display for VmAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args().join(" "))
    }
}

/// A discovered VM manager bound to one VM home and instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmManager {
    executable: PathBuf,
    home: PathBuf,
    instance: String,
}

impl VmManager {
    pub fn new(executable: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            home: home.into(),
            instance: VM_INSTANCE.to_string(),
        }
    }

    /// Locate the bundled VM manager and the VM home for `paths`.
    pub fn discover(paths: &ApplicationPaths) -> Result<Self, ShutdownError> {
        let home = vm_home(&paths.app_home)?;
        let executable = vm_manager_executable(&paths.resources)?;
        debug!(
            executable = %executable.display(),
            home = %home.display(),
            "Discovered VM manager"
        );
        Ok(Self::new(executable, home))
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.args(args)
            .arg(&self.instance)
            .env(VM_HOME_ENV, &self.home);
        cmd
    }

    fn describe(&self, args: &[&str]) -> String {
        format!(
            "{} {} {}",
            self.executable.display(),
            args.join(" "),
            self.instance
        )
    }

    /// Whether the VM reports a `Running` status.
    pub async fn is_running(&self) -> Result<bool, ShutdownError> {
        const ARGS: &[&str] = &["ls", "--format", "{{.Status}}"];
        let description = self.describe(ARGS);

        let output = self
            .command(ARGS)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| ShutdownError::io(format!("failed to run `{description}`"), e))?;

        if !output.status.success() {
            return Err(ShutdownError::CommandFailed {
                command: description,
                status: output.status.to_string(),
            });
        }

        let status = String::from_utf8_lossy(&output.stdout);
        debug!(status = %status.trim(), "VM status");
        Ok(status.starts_with("Running"))
    }

    /// Run a mutating subcommand with inherited stdio.
    ///
    /// The child is killed if `cancel` fires before it exits.
    pub async fn run(
        &self,
        action: VmAction,
        cancel: &CancellationToken,
    ) -> Result<(), ShutdownError> {
        let description = self.describe(action.args());
        if cancel.is_cancelled() {
            return Err(ShutdownError::Cancelled {
                command: description,
            });
        }

        debug!(command = %description, "Running VM manager");
        let mut child = self
            .command(action.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ShutdownError::io(format!("failed to run `{description}`"), e))?;

        tokio::select! {
            status = child.wait() => {
                let status = status
                    .map_err(|e| ShutdownError::io(format!("failed to wait for `{description}`"), e))?;
                if status.success() {
                    Ok(())
                } else {
                    Err(ShutdownError::CommandFailed {
                        command: description,
                        status: status.to_string(),
                    })
                }
            }
            () = cancel.cancelled() => {
                warn!(command = %description, "Cancelled, killing VM manager");
                if let Err(e) = child.kill().await {
                    debug!(error = %e, "VM manager already exited");
                }
                Err(ShutdownError::Cancelled { command: description })
            }
        }
    }
}
