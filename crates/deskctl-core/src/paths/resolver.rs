//! Aggregate path resolution for the shutdown engine and `deskctl paths`.

use std::fmt;
use std::path::PathBuf;

use super::{
    PathError, app_home, application_directory, emulator_executable, main_executable,
    resources_dir, vm_home, vm_manager_executable,
};

/// The two roots every other location is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationPaths {
    /// Per-user application data (VM home lives here)
    pub app_home: PathBuf,
    /// Bundled resources shipped with the installation
    pub resources: PathBuf,
}

impl ApplicationPaths {
    /// Resolve both roots using the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        Ok(Self {
            app_home: app_home()?,
            resources: resources_dir()?,
        })
    }
}

/// Every location the CLI cares about, resolved best-effort.
///
/// Used by `deskctl paths` for diagnostics; unlike the shutdown engine it
/// never fails, it reports which lookups did.
#[derive(Debug)]
pub struct ResolvedPaths {
    pub app_home: Result<PathBuf, PathError>,
    pub resources: Result<PathBuf, PathError>,
    pub application_dir: Result<PathBuf, PathError>,
    pub main_executable: Result<PathBuf, PathError>,
    pub vm_home: Result<PathBuf, PathError>,
    pub vm_manager: Result<PathBuf, PathError>,
    pub emulator: Result<PathBuf, PathError>,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    pub fn resolve() -> Self {
        let vm = app_home().and_then(|home| vm_home(&home));
        let vm_manager = resources_dir().and_then(|dir| vm_manager_executable(&dir));
        let emulator = resources_dir().and_then(|dir| emulator_executable(&dir));

        Self {
            app_home: app_home(),
            resources: resources_dir(),
            application_dir: application_directory(),
            main_executable: main_executable(),
            vm_home: vm,
            vm_manager,
            emulator,
        }
    }
}

fn write_entry(
    f: &mut fmt::Formatter<'_>,
    key: &str,
    value: &Result<PathBuf, PathError>,
) -> fmt::Result {
    match value {
        Ok(path) => write!(f, "{key} = {}", path.display()),
        Err(e) => write!(f, "{key} = <unresolved: {e}>"),
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entry(f, "app_home", &self.app_home)?;
        writeln!(f)?;
        write_entry(f, "resources", &self.resources)?;
        writeln!(f)?;
        write_entry(f, "application_dir", &self.application_dir)?;
        writeln!(f)?;
        write_entry(f, "main_executable", &self.main_executable)?;
        writeln!(f)?;
        write_entry(f, "vm_home", &self.vm_home)?;
        writeln!(f)?;
        write_entry(f, "vm_manager", &self.vm_manager)?;
        writeln!(f)?;
        write_entry(f, "emulator", &self.emulator)
    }
}
