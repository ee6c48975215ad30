//! Paths command handler.
//!
//! Displays every resolved installation path for diagnostics.

use anyhow::Result;

use deskctl_core::ResolvedPaths;

/// Execute the paths command.
///
/// Prints `key = value` lines; lookups that fail are shown as
/// `<unresolved: reason>` instead of aborting.
pub fn execute() -> Result<()> {
    println!("{}", ResolvedPaths::resolve());
    Ok(())
}
