//! Installation layout resolution for deskctl.
//!
//! This module answers "where does everything live" for the shutdown
//! engine:
//! - Per-user application home and the VM home below it
//! - Bundled resources, VM-manager and emulator binaries
//! - Installation directory and main application executable
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No process inspection - runtime adapters handle that separately
//! - OS-specific logic is kept private in `platform`

mod application;
mod error;
mod executable;
mod platform;
mod resolver;
mod vm;

#[cfg(test)]
mod test_utils;

// Error type
pub use error::PathError;

// Platform roots and overrides
pub use platform::{
    APP_DIR_ENV, APP_HOME_ENV, RESOURCES_DIR_ENV, ancestor, app_home, executable_name,
    os_dir_name, resources_dir,
};

// Installation directory
pub use application::{
    application_directory, application_directory_from, main_executable, main_executable_in,
    main_executable_name,
};

// VM layout
pub use vm::{
    VM_INSTANCE, emulator_executable, emulator_name, vm_home, vm_manager_executable,
};

// Executable lookup
pub use executable::find_first_executable;

// Aggregate resolution
pub use resolver::{ApplicationPaths, ResolvedPaths};
