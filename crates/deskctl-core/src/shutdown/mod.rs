//! Graceful-shutdown escalation engine.
//!
//! After the application has been asked to exit, the engine makes sure its
//! VM, emulator and own processes are actually gone:
//! - [`escalate`]: poll-then-kill for one subsystem
//! - [`CompositeTerminator`]: run several kill mechanisms, report all failures
//! - [`ShutdownCoordinator`]: the ordered, best-effort pipeline

mod composite;
mod coordinator;
mod error;
mod escalation;
mod subsystem;
mod types;

pub use composite::CompositeTerminator;
pub use coordinator::ShutdownCoordinator;
pub use error::{AggregateError, ShutdownError};
pub use escalation::escalate;
pub use subsystem::Subsystem;
pub use types::{
    EscalationOutcome, InitiatingCommand, RetryPolicy, ShutdownRequest, ShutdownTopology,
    UnknownCommandError,
};
