//! Shutdown target catalog port.
//!
//! The coordinator asks this port for the probes and terminators of each
//! pipeline stage. Adapters resolve the installation layout when a method
//! is called, so discovery failures surface at the stage that needs them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{ProcessProbe, Terminator};
use crate::shutdown::ShutdownError;

/// Probe and terminator for one stage.
#[derive(Clone)]
pub struct StageHandles {
    pub probe: Arc<dyn ProcessProbe>,
    pub terminator: Arc<dyn Terminator>,
}

impl StageHandles {
    pub fn new(probe: Arc<dyn ProcessProbe>, terminator: Arc<dyn Terminator>) -> Self {
        Self { probe, terminator }
    }
}

/// The VM probe and the three VM-manager terminators.
///
/// All four share one discovered VM manager.
#[derive(Clone)]
pub struct VmHandles {
    pub status: Arc<dyn ProcessProbe>,
    pub stop: Arc<dyn Terminator>,
    pub force_stop: Arc<dyn Terminator>,
    pub force_delete: Arc<dyn Terminator>,
}

/// Source of per-stage probes and terminators.
pub trait ShutdownTargets: Send + Sync {
    /// VM supervisor handles. Failure is best-effort: the VM stages are skipped.
    fn vm_handles(&self) -> Result<VmHandles, ShutdownError>;

    /// Hardware-emulation process handles. Failure aborts the shutdown.
    fn emulator_handles(&self) -> Result<StageHandles, ShutdownError>;

    /// Installation directory of the main application. Failure aborts the shutdown.
    fn application_directory(&self) -> Result<PathBuf, ShutdownError>;

    /// Main application handles for the installation in `app_dir`.
    /// Failure (no main executable) aborts the shutdown.
    fn application_handles(&self, app_dir: &Path) -> Result<StageHandles, ShutdownError>;

    /// Handles for the single-stage topology.
    fn native_application_handles(&self) -> Result<StageHandles, ShutdownError>;
}
