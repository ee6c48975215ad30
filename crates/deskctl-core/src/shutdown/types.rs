//! Request and outcome types for one shutdown invocation.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// The CLI command that asked the application to go away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitiatingCommand {
    /// `deskctl shutdown`: stop the VM, keep its state.
    Shutdown,
    /// `deskctl factory-reset`: the VM is deleted, not merely stopped.
    FactoryReset,
}

impl InitiatingCommand {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shutdown => "shutdown",
            Self::FactoryReset => "factory-reset",
        }
    }
}

impl fmt::Display for InitiatingCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown initiating command.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown shutdown initiating command {0:?}")]
pub struct UnknownCommandError(pub String);

impl FromStr for InitiatingCommand {
    type Err = UnknownCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shutdown" => Ok(Self::Shutdown),
            "factory-reset" => Ok(Self::FactoryReset),
            other => Err(UnknownCommandError(other.to_string())),
        }
    }
}

/// Parameters of one shutdown invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShutdownRequest {
    /// Poll each subsystem before killing it. When `false`, every stage
    /// goes straight to its terminator.
    pub wait_for_shutdown: bool,
    pub command: InitiatingCommand,
}

impl ShutdownRequest {
    pub const fn new(wait_for_shutdown: bool, command: InitiatingCommand) -> Self {
        Self {
            wait_for_shutdown,
            command,
        }
    }
}

/// How long to keep polling a subsystem before terminating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of probe calls. Zero means "terminate immediately".
    pub count: u32,
    /// Fixed pause between consecutive probe calls.
    pub wait: Duration,
}

impl RetryPolicy {
    pub const fn new(count: u32, wait: Duration) -> Self {
        Self { count, wait }
    }

    pub const fn from_secs(count: u32, wait_secs: u64) -> Self {
        Self::new(count, Duration::from_secs(wait_secs))
    }

    /// Longest time spent sleeping before the terminator runs.
    pub fn total_wait(&self) -> Duration {
        self.wait * self.count.saturating_sub(1)
    }
}

/// What the escalation policy did for one subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationOutcome {
    /// The probe reported the subsystem gone; nothing was killed.
    Resolved,
    /// The terminator ran and succeeded.
    Terminated,
}

/// Which pipeline shape the coordinator runs on this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownTopology {
    /// VM, emulator and application stages in order.
    Pipeline,
    /// A single find-and-kill of the application. Used where the VM and
    /// emulator are not managed by the CLI.
    SingleStage,
}

impl ShutdownTopology {
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::SingleStage
        } else {
            Self::Pipeline
        }
    }
}
