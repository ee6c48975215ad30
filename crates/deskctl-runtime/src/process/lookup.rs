//! Process lookup over the OS process table.

use std::io;
use std::path::Path;

use sysinfo::{Pid, Process, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};

/// Snapshot of the process table with executable paths loaded.
fn process_table() -> System {
    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::All,
        true,
        ProcessRefreshKind::nothing().with_exe(UpdateKind::OnlyIfNotSet),
    );
    system
}

/// Processes in `system`, without the per-thread entries Linux reports.
///
/// Signalling a thread ID delivers the signal to its whole process, so a
/// thread of this CLI must never be mistaken for a separate process.
fn processes(system: &System) -> impl Iterator<Item = (&Pid, &Process)> {
    system
        .processes()
        .iter()
        .filter(|(_, process)| process.thread_kind().is_none())
}

/// Compare a process executable against an already canonical path.
fn same_executable(exe: &Path, canonical: &Path) -> bool {
    exe == canonical || exe.canonicalize().is_ok_and(|actual| actual == canonical)
}

/// Find the PID of a running process started from `executable`.
///
/// # Returns
/// - `Ok(Some(pid))` for the lowest matching PID
/// - `Ok(None)` if no process runs that executable
/// - `Err` if `executable` itself cannot be resolved
pub fn find_pid_by_executable(executable: &Path) -> io::Result<Option<u32>> {
    let target = executable.canonicalize()?;
    let system = process_table();

    Ok(processes(&system)
        .filter(|(_, process)| {
            process
                .exe()
                .is_some_and(|exe| same_executable(exe, &target))
        })
        .map(|(pid, _)| pid.as_u32())
        .min())
}

/// Find every process whose executable lives under `dir`.
///
/// The calling process is never included, so a CLI shipped inside the
/// installation directory does not terminate itself.
pub fn pids_under_directory(dir: &Path) -> io::Result<Vec<u32>> {
    let root = dir.canonicalize()?;
    let own_pid = std::process::id();
    let system = process_table();

    let mut pids: Vec<u32> = processes(&system)
        .filter(|(pid, _)| pid.as_u32() != own_pid)
        .filter(|(_, process)| process.exe().is_some_and(|exe| exe.starts_with(&root)))
        .map(|(pid, _)| pid.as_u32())
        .collect();
    pids.sort_unstable();
    Ok(pids)
}

/// Find every process whose executable file name is `name`, ignoring case.
pub fn find_pids_by_name(name: &str) -> Vec<u32> {
    let system = process_table();

    let mut pids: Vec<u32> = processes(&system)
        .filter(|(_, process)| process.name().to_string_lossy().eq_ignore_ascii_case(name))
        .map(|(pid, _)| pid.as_u32())
        .collect();
    pids.sort_unstable();
    pids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_private_sleep;
    use tempfile::TempDir;

    #[test]
    fn missing_executable_is_an_error() {
        let err = find_pid_by_executable(Path::new("/nonexistent/deskbox")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn unused_executable_is_not_running() {
        let dir = TempDir::new().unwrap();
        let exe = dir.path().join("idle");
        std::fs::write(&exe, "").unwrap();
        assert_eq!(find_pid_by_executable(&exe).unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn own_threads_are_excluded_from_directory_scan() {
        let own_exe = std::env::current_exe().unwrap();
        let own_dir = own_exe.parent().unwrap();
        let pids = pids_under_directory(own_dir).unwrap();

        assert!(!pids.contains(&std::process::id()));
        #[cfg(target_os = "linux")]
        for task in std::fs::read_dir("/proc/self/task").unwrap() {
            let tid: u32 = task.unwrap().file_name().to_string_lossy().parse().unwrap();
            assert!(!pids.contains(&tid), "thread {tid} of this process was swept");
        }
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn finds_private_binary_by_path_and_directory() {
        let dir = TempDir::new().unwrap();
        let Some((exe, mut child)) = spawn_private_sleep(dir.path()) else {
            return;
        };
        let pid = child.id().expect("no PID");

        assert_eq!(find_pid_by_executable(&exe).unwrap(), Some(pid));
        assert_eq!(pids_under_directory(dir.path()).unwrap(), vec![pid]);

        child.kill().await.unwrap();
        let _ = child.wait().await;
    }
}
