//! Platform-specific roots of the installation layout.
//!
//! Public API is exposed through sibling modules. Every root honours an
//! environment override so packaged builds, AppImages and tests can point
//! the CLI at a different installation.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Overrides the per-user application data directory.
pub const APP_HOME_ENV: &str = "DESKCTL_APP_HOME";

/// Overrides the bundled resources directory.
pub const RESOURCES_DIR_ENV: &str = "DESKCTL_RESOURCES_DIR";

/// Overrides the application installation directory.
pub const APP_DIR_ENV: &str = "DESKCTL_APP_DIR";

/// Directory name used under the system data directory.
const APP_HOME_NAME: &str = "deskbox";

/// Name of the per-OS directory inside the resources tree.
///
/// The bundle layout predates this CLI and uses Node-style platform names.
pub const fn os_dir_name() -> &'static str {
    if cfg!(target_os = "macos") {
        "darwin"
    } else if cfg!(target_os = "windows") {
        "win32"
    } else {
        "linux"
    }
}

/// Append the platform executable suffix to a bare binary name.
pub fn executable_name(stem: &str) -> String {
    format!("{stem}{}", env::consts::EXE_SUFFIX)
}

/// Read a non-empty path override from the environment.
pub(super) fn env_override(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Walk `levels` parents up from `path`.
pub fn ancestor(path: &Path, levels: usize) -> Result<PathBuf, PathError> {
    path.ancestors()
        .nth(levels)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| PathError::NoAncestor {
            path: path.to_path_buf(),
            levels,
        })
}

/// Get the per-user application data directory.
///
/// Resolution order:
/// 1. `DESKCTL_APP_HOME` environment variable
/// 2. System data directory (e.g., `~/.local/share/deskbox`)
pub fn app_home() -> Result<PathBuf, PathError> {
    if let Some(path) = env_override(APP_HOME_ENV) {
        return Ok(path);
    }

    let data_dir = dirs::data_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join(APP_HOME_NAME))
}

/// Get the bundled resources directory.
///
/// Resolution order:
/// 1. `DESKCTL_RESOURCES_DIR` environment variable
/// 2. Three levels above the running CLI, which ships as
///    `<resources>/<os>/bin/deskctl`
pub fn resources_dir() -> Result<PathBuf, PathError> {
    if let Some(path) = env_override(RESOURCES_DIR_ENV) {
        return Ok(path);
    }

    let exe = env::current_exe().map_err(|e| PathError::CurrentExe(e.to_string()))?;
    let exe = exe.canonicalize().unwrap_or(exe);
    resources_dir_from_cli(&exe)
}

/// Derive the resources directory from the CLI's own path.
pub(super) fn resources_dir_from_cli(cli_path: &Path) -> Result<PathBuf, PathError> {
    ancestor(cli_path, 3)
}
