//! Concrete [`ProcessProbe`](deskctl_core::ProcessProbe) adapters.

mod executable;
mod name;
mod vm_status;

pub use executable::ExecutablePathProbe;
pub use name::ApplicationNameProbe;
pub use vm_status::VmStatusProbe;
