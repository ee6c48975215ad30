//! The installed application's shutdown targets.
//!
//! [`InstalledTargets`] resolves the installation layout when the
//! coordinator asks for a stage and wires the concrete probes and
//! terminators from [`crate::probe`] and [`crate::terminate`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use deskctl_core::paths::{
    application_directory, emulator_executable, main_executable_in, main_executable_name,
    resources_dir,
};
use deskctl_core::{ApplicationPaths, ShutdownError, ShutdownTargets, StageHandles, VmHandles};

use crate::probe::{ApplicationNameProbe, ExecutablePathProbe, VmStatusProbe};
use crate::terminate::{
    ForceKillApplication, SignalTerminator, VmCommandTerminator, application_terminator,
};
use crate::vm::{VmAction, VmManager};

/// A fixed installation layout, bypassing environment discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    pub paths: ApplicationPaths,
    /// Installation directory containing the main executable
    pub app_dir: PathBuf,
}

/// Shutdown targets of the locally installed application.
#[derive(Debug, Clone, Default)]
pub struct InstalledTargets {
    layout: Option<InstallLayout>,
}

impl InstalledTargets {
    /// Targets discovered from the environment on each request.
    pub const fn new() -> Self {
        Self { layout: None }
    }

    /// Targets for a known layout.
    pub const fn with_layout(layout: InstallLayout) -> Self {
        Self {
            layout: Some(layout),
        }
    }

    fn application_paths(&self) -> Result<ApplicationPaths, ShutdownError> {
        match &self.layout {
            Some(layout) => Ok(layout.paths.clone()),
            None => Ok(ApplicationPaths::resolve()?),
        }
    }

    fn resources(&self) -> Result<PathBuf, ShutdownError> {
        match &self.layout {
            Some(layout) => Ok(layout.paths.resources.clone()),
            None => Ok(resources_dir()?),
        }
    }

}

impl ShutdownTargets for InstalledTargets {
    fn vm_handles(&self) -> Result<VmHandles, ShutdownError> {
        let manager = Arc::new(VmManager::discover(&self.application_paths()?)?);
        let command = |action| Arc::new(VmCommandTerminator::new(Arc::clone(&manager), action));

        Ok(VmHandles {
            status: Arc::new(VmStatusProbe::new(Arc::clone(&manager))),
            stop: command(VmAction::Stop),
            force_stop: command(VmAction::ForceStop),
            force_delete: command(VmAction::ForceDelete),
        })
    }

    fn emulator_handles(&self) -> Result<StageHandles, ShutdownError> {
        let emulator = emulator_executable(&self.resources()?)?;
        Ok(StageHandles::new(
            Arc::new(ExecutablePathProbe::new(&emulator)),
            Arc::new(SignalTerminator::new(emulator)),
        ))
    }

    fn application_directory(&self) -> Result<PathBuf, ShutdownError> {
        match &self.layout {
            Some(layout) => Ok(layout.app_dir.clone()),
            None => Ok(application_directory()?),
        }
    }

    fn application_handles(&self, app_dir: &Path) -> Result<StageHandles, ShutdownError> {
        let main = main_executable_in(app_dir)?;
        Ok(StageHandles::new(
            Arc::new(ExecutablePathProbe::new(&main)),
            Arc::new(application_terminator(&main, app_dir)),
        ))
    }

    fn native_application_handles(&self) -> Result<StageHandles, ShutdownError> {
        Ok(StageHandles::new(
            Arc::new(ApplicationNameProbe::new(main_executable_name())),
            Arc::new(ForceKillApplication),
        ))
    }
}
