//! Core domain for `deskctl`: installation layout, process-control ports and
//! the shutdown escalation engine.
//!
//! This crate contains no OS process code. Concrete probes and terminators
//! live in `deskctl-runtime`, whose `finish_shutdown` wires them together.

#![deny(unused_crate_dependencies)]

pub mod paths;
pub mod ports;
pub mod settings;
pub mod shutdown;

// Re-export commonly used types for convenience
pub use paths::{ApplicationPaths, PathError, ResolvedPaths};
pub use ports::{ProcessProbe, ShutdownTargets, StageHandles, Terminator, VmHandles};
pub use settings::ShutdownSettings;
pub use shutdown::{
    AggregateError, CompositeTerminator, EscalationOutcome, InitiatingCommand, RetryPolicy,
    ShutdownCoordinator, ShutdownError, ShutdownRequest, ShutdownTopology, Subsystem, escalate,
};
