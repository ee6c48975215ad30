//! Available subcommands.

use std::time::Duration;

use clap::{Args, Subcommand};

/// Available commands for controlling the desktop application.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Make sure the application, its VM and the emulator are stopped
    Shutdown(ShutdownArgs),

    /// Stop everything and delete the VM
    FactoryReset(ShutdownArgs),

    /// Show resolved installation paths
    Paths,
}

/// Options shared by `shutdown` and `factory-reset`.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShutdownArgs {
    /// Kill every subsystem immediately instead of waiting for it to exit
    #[arg(long)]
    pub no_wait: bool,

    /// Cancel running VM-manager commands after this many seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl ShutdownArgs {
    pub const fn wait_for_shutdown(&self) -> bool {
        !self.no_wait
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
