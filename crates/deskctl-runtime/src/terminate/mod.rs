//! Concrete [`Terminator`](deskctl_core::Terminator) adapters.
//!
//! - [`SignalTerminator`]: SIGTERM the process started from an executable
//! - [`ProcessGroupTerminator`]: signal that process's whole group
//! - [`DirectoryTerminator`]: sweep everything running from a directory
//! - [`VmCommandTerminator`]: stop or delete the VM through its manager
//! - [`ForceKillApplication`]: directory sweep that discovers its directory lazily

mod directory;
mod group;
mod signal;
mod vm;

use std::path::Path;
use std::sync::Arc;

use deskctl_core::CompositeTerminator;

use crate::process::process_groups_supported;

pub use directory::{DirectoryTerminator, ForceKillApplication};
pub use group::ProcessGroupTerminator;
pub use signal::SignalTerminator;
pub use vm::VmCommandTerminator;

/// Terminator for the main application in the pipeline topology.
///
/// Signals the application's process group where groups are reliable, then
/// force-kills anything still running from the installation directory.
pub fn application_terminator(main_executable: &Path, app_dir: &Path) -> CompositeTerminator {
    let mut composite = CompositeTerminator::default();
    if process_groups_supported() {
        composite = composite.with(Arc::new(ProcessGroupTerminator::new(main_executable, false)));
    }
    composite.with(Arc::new(DirectoryTerminator::new(app_dir, true)))
}
