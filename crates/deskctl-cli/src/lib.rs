//! Library half of the `deskctl` binary: argument parsing, handlers,
//! error mapping and logging setup.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by integration tests only
#[cfg(test)]
use tempfile as _;

// Loaded in main.rs before parsing
use dotenvy as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

pub use commands::{Commands, ShutdownArgs};
pub use error::CliError;
pub use parser::Cli;
