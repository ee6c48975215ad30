//! Helpers for tests that need a real process with a known executable path.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::process::{Child, Command};

/// Copy `sleep` into `dir` and start it, so the process can be found by
/// executable path or directory.
///
/// Returns `None` when the host does not allow executing from the temp dir.
#[cfg(unix)]
pub fn spawn_private_sleep(dir: &Path) -> Option<(PathBuf, Child)> {
    let source = ["/bin/sleep", "/usr/bin/sleep"]
        .into_iter()
        .map(Path::new)
        .find(|p| p.is_file())?;
    // Keep the name: multi-call coreutils builds dispatch on argv[0].
    let exe = dir.join("sleep");
    std::fs::copy(source, &exe).ok()?;

    let child = match Command::new(&exe).arg("30").kill_on_drop(true).spawn() {
        Ok(child) => child,
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => return None,
        Err(e) => panic!("Failed to spawn {}: {e}", exe.display()),
    };
    // Give the process table a moment to report the new executable.
    std::thread::sleep(Duration::from_millis(100));
    Some((exe.canonicalize().ok()?, child))
}
