//! Signal delivery to single processes and process groups.

use deskctl_core::ShutdownError;

#[cfg(unix)]
use nix::errno::Errno;
#[cfg(unix)]
use nix::sys::signal::{self, Signal};
#[cfg(unix)]
use nix::unistd::{self, Pid};

/// Whether [`kill_process_group`] is used to stop the main application.
///
/// Linux installs spread the application over several independent groups,
/// so a directory sweep is used there instead.
pub const fn process_groups_supported() -> bool {
    cfg!(all(unix, not(target_os = "linux")))
}

/// Ask a process to exit (`force == false`) or kill it outright.
///
/// A process that is already gone counts as success.
#[cfg(unix)]
pub fn terminate_pid(pid: u32, force: bool) -> Result<(), ShutdownError> {
    let sig = if force { Signal::SIGKILL } else { Signal::SIGTERM };
    match signal::kill(to_nix_pid(pid)?, sig) {
        Ok(()) | Err(Errno::ESRCH) => Ok(()),
        Err(e) => Err(ShutdownError::Signal {
            pid,
            reason: e.to_string(),
        }),
    }
}

#[cfg(not(unix))]
pub fn terminate_pid(pid: u32, force: bool) -> Result<(), ShutdownError> {
    use sysinfo::{Pid, ProcessesToUpdate, System};

    let target = Pid::from_u32(pid);
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::Some(&[target]), true);

    let Some(process) = system.process(target) else {
        return Ok(());
    };
    let delivered = if force {
        process.kill()
    } else {
        process
            .kill_with(sysinfo::Signal::Term)
            .unwrap_or_else(|| process.kill())
    };
    if delivered {
        Ok(())
    } else {
        Err(ShutdownError::Signal {
            pid,
            reason: "TerminateProcess failed".to_string(),
        })
    }
}

/// Signal the whole process group that `pid` belongs to.
///
/// Refuses to signal the group of the calling process, which would take the
/// CLI down with the application.
#[cfg(unix)]
pub fn kill_process_group(pid: u32, force: bool) -> Result<(), ShutdownError> {
    let group = match unistd::getpgid(Some(to_nix_pid(pid)?)) {
        Ok(group) => group,
        Err(Errno::ESRCH) => return Ok(()),
        Err(e) => {
            return Err(ShutdownError::Signal {
                pid,
                reason: format!("failed to get process group: {e}"),
            });
        }
    };

    if group == unistd::getpgrp() {
        return Err(ShutdownError::Signal {
            pid,
            reason: format!("process group {group} also contains this process"),
        });
    }

    let sig = if force { Signal::SIGKILL } else { Signal::SIGTERM };
    tracing::debug!(pid, pgid = group.as_raw(), ?sig, "Signalling process group");
    match signal::killpg(group, sig) {
        Ok(()) | Err(Errno::ESRCH) => Ok(()),
        Err(e) => Err(ShutdownError::Signal {
            pid,
            reason: format!("failed to signal process group {group}: {e}"),
        }),
    }
}

#[cfg(not(unix))]
pub fn kill_process_group(_pid: u32, _force: bool) -> Result<(), ShutdownError> {
    Err(ShutdownError::Unsupported("process groups"))
}

#[cfg(unix)]
fn to_nix_pid(pid: u32) -> Result<Pid, ShutdownError> {
    i32::try_from(pid)
        .map(Pid::from_raw)
        .map_err(|_| ShutdownError::Signal {
            pid,
            reason: "PID out of range".to_string(),
        })
}
