//! Command handlers.
//!
//! Each handler owns one subcommand and returns `anyhow::Result`, with
//! [`CliError`](crate::CliError) inside so `main` can pick the exit code.

pub mod paths;
pub mod shutdown;
