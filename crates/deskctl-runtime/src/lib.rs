//! OS adapters for the `deskctl` shutdown engine.
//!
//! Implements the process-control ports from `deskctl-core` with `sysinfo`
//! process tables, Unix signals (`nix`) and the bundled VM manager.

#![deny(unsafe_code)]

mod finish;
pub mod probe;
pub mod process;
mod targets;
pub mod terminate;
pub mod vm;

#[cfg(test)]
mod test_support;

pub use finish::{finish_shutdown, finish_shutdown_with};
pub use targets::{InstallLayout, InstalledTargets};
pub use vm::{VmAction, VmManager};
