//! Virtual machine layout: VM home, VM-manager and emulator binaries.
//!
//! Both binaries ship under `<resources>/<os>/lima/bin`. Linux AppImage
//! builds additionally carry them in the image's `usr/bin`, four levels
//! above the resources directory.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;
use super::executable::find_first_executable;
use super::platform::{ancestor, executable_name, os_dir_name};

/// Instance name of the single VM managed by the application.
pub const VM_INSTANCE: &str = "0";

/// Get the VM home inside the application data directory.
///
/// The directory must already exist; a missing VM home means no VM was ever
/// created for this user.
pub fn vm_home(app_home: &Path) -> Result<PathBuf, PathError> {
    let home = app_home.join("lima");
    if !home.exists() {
        return Err(PathError::DirectoryNotFound(home));
    }
    if !home.is_dir() {
        return Err(PathError::NotADirectory(home));
    }
    Ok(home)
}

/// Locate the VM-manager executable in the resources tree.
pub fn vm_manager_executable(resources: &Path) -> Result<PathBuf, PathError> {
    find_first_executable(bundled_candidates(resources, &executable_name("limactl")))
}

/// Locate the hardware-emulation executable for the host architecture.
pub fn emulator_executable(resources: &Path) -> Result<PathBuf, PathError> {
    if cfg!(target_os = "windows") {
        return Err(PathError::Unsupported("qemu"));
    }
    find_first_executable(bundled_candidates(resources, &emulator_name()))
}

/// Name of the emulator binary for the host CPU, e.g. `qemu-system-aarch64`.
pub fn emulator_name() -> String {
    format!("qemu-system-{}", env::consts::ARCH)
}

fn bundled_candidates(resources: &Path, name: &str) -> Vec<PathBuf> {
    let mut candidates = vec![
        resources
            .join(os_dir_name())
            .join("lima")
            .join("bin")
            .join(name),
    ];

    if cfg!(target_os = "linux") {
        if let Ok(image_root) = ancestor(resources, 4) {
            candidates.push(image_root.join("usr").join("bin").join(name));
        }
    }

    candidates
}
