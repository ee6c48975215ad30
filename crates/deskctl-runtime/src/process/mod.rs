//! OS process inspection and termination.
//!
//! - `lookup`: find processes by executable path, name or directory
//! - `signal`: deliver termination signals to one process or a group
//! - `sweep`: terminate everything running out of a directory

mod lookup;
mod signal;
mod sweep;

pub use lookup::{find_pid_by_executable, find_pids_by_name, pids_under_directory};
pub use signal::{kill_process_group, process_groups_supported, terminate_pid};
pub use sweep::terminate_processes_in_directory;
