//! Shutdown coordinator: the ordered teardown pipeline.
//!
//! Stages run one at a time, never concurrently. Killing the emulator while
//! the VM manager is still stopping the VM leaves inconsistent VM metadata,
//! so the VM always goes first.

use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use super::escalation::escalate;
use super::{InitiatingCommand, ShutdownError, ShutdownRequest, ShutdownTopology, Subsystem};
use crate::ports::{ShutdownTargets, VmHandles};
use crate::settings::ShutdownSettings;

const VM: &str = "the VM";
const EMULATOR: &str = "the emulator";
const APPLICATION: &str = "the app";

/// Sequences the per-subsystem escalations for one shutdown invocation.
pub struct ShutdownCoordinator<T> {
    targets: T,
    settings: ShutdownSettings,
    topology: ShutdownTopology,
}

impl<T: ShutdownTargets> ShutdownCoordinator<T> {
    /// Coordinator with production tuning and the host's topology.
    pub fn new(targets: T) -> Self {
        Self {
            targets,
            settings: ShutdownSettings::default(),
            topology: ShutdownTopology::current(),
        }
    }

    #[must_use]
    pub const fn with_settings(mut self, settings: ShutdownSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub const fn with_topology(mut self, topology: ShutdownTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Make sure none of the application's processes survive.
    ///
    /// Returns `Err` only when a required location cannot be discovered
    /// (emulator executable, installation directory, main executable).
    /// Every other failure is logged and the pipeline moves on.
    pub async fn run(
        &self,
        request: ShutdownRequest,
        cancel: &CancellationToken,
    ) -> Result<(), ShutdownError> {
        info!(
            command = %request.command,
            wait = request.wait_for_shutdown,
            topology = ?self.topology,
            "Finishing shutdown"
        );

        match self.topology {
            ShutdownTopology::SingleStage => self.run_single_stage(request, cancel).await,
            ShutdownTopology::Pipeline => self.run_pipeline(request, cancel).await,
        }
    }

    async fn run_single_stage(
        &self,
        request: ShutdownRequest,
        cancel: &CancellationToken,
    ) -> Result<(), ShutdownError> {
        let handles = self
            .targets
            .native_application_handles()
            .map_err(|e| ShutdownError::discovery("the application", e))?;
        let app = Subsystem::from_handles(APPLICATION, handles, self.settings.native_application);

        self.run_stage(&app, request, cancel, "stop the app").await;
        Ok(())
    }

    async fn run_pipeline(
        &self,
        request: ShutdownRequest,
        cancel: &CancellationToken,
    ) -> Result<(), ShutdownError> {
        // Required locations are discovered before anything is killed, so a
        // broken installation leaves every process untouched.
        let emulator = self
            .targets
            .emulator_handles()
            .map_err(|e| ShutdownError::discovery("qemu executable", e))?;
        let app_dir = self
            .targets
            .application_directory()
            .map_err(|e| ShutdownError::discovery("application directory", e))?;
        let application = self
            .targets
            .application_handles(&app_dir)
            .map_err(|e| ShutdownError::discovery("application executable", e))?;

        match self.targets.vm_handles() {
            Ok(vm) => self.stop_vm(vm, request, cancel).await,
            Err(e) => error!("Ignoring error trying to locate the VM manager: {e}"),
        }

        let emulator = Subsystem::from_handles(EMULATOR, emulator, self.settings.emulator);
        self.run_stage(&emulator, request, cancel, "kill the emulator")
            .await;

        let application =
            Subsystem::from_handles(APPLICATION, application, self.settings.application);
        self.run_stage(&application, request, cancel, "stop the app")
            .await;

        Ok(())
    }

    async fn stop_vm(&self, vm: VmHandles, request: ShutdownRequest, cancel: &CancellationToken) {
        match request.command {
            InitiatingCommand::Shutdown => {
                let graceful = Subsystem::new(VM, vm.status.clone(), vm.stop, self.settings.vm);
                self.run_stage(&graceful, request, cancel, "stop the VM")
                    .await;

                // One more check; force-stop without waiting if it is still up.
                let forced = Subsystem::new(VM, vm.status, vm.force_stop, self.settings.vm_force);
                self.run_stage(&forced, request, cancel, "force-stop the VM")
                    .await;
            }
            InitiatingCommand::FactoryReset => {
                let delete = Subsystem::new(VM, vm.status, vm.force_delete, self.settings.vm);
                self.run_stage(&delete, request, cancel, "delete the VM")
                    .await;
            }
        }
    }

    /// Best-effort stage: errors are logged, never returned.
    async fn run_stage(
        &self,
        subsystem: &Subsystem,
        request: ShutdownRequest,
        cancel: &CancellationToken,
        action: &str,
    ) {
        match escalate(subsystem, request.wait_for_shutdown, cancel).await {
            Ok(outcome) => {
                info!(subsystem = %subsystem.name, ?outcome, "Stage finished");
            }
            Err(e) => {
                error!(subsystem = %subsystem.name, "Ignoring error trying to {action}: {e}");
            }
        }
    }
}
