//! Port definitions (trait abstractions) for process inspection and control.
//!
//! Ports define the interfaces the shutdown engine expects from the OS.
//! They contain no implementation details.
//!
//! # Design Rules
//!
//! - No `sysinfo`/`nix` types in any signature
//! - One capability per trait: probing is separate from terminating
//! - Implementations are constructed with their parameters (executable
//!   path, VM manager, directory) instead of closing over globals

pub mod process_probe;
pub mod shutdown_targets;
pub mod terminator;

pub use process_probe::ProcessProbe;
pub use shutdown_targets::{ShutdownTargets, StageHandles, VmHandles};
pub use terminator::Terminator;
