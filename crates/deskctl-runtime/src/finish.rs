//! Entry point used by the `shutdown` and `factory-reset` commands.

use deskctl_core::{
    InitiatingCommand, ShutdownCoordinator, ShutdownError, ShutdownRequest, ShutdownSettings,
};
use tokio_util::sync::CancellationToken;

use crate::targets::InstalledTargets;

/// Make sure no process of the installed application survives.
///
/// Uses the production retry tuning and the host's shutdown topology.
pub async fn finish_shutdown(
    cancel: &CancellationToken,
    wait_for_shutdown: bool,
    command: InitiatingCommand,
) -> Result<(), ShutdownError> {
    finish_shutdown_with(
        cancel,
        ShutdownRequest::new(wait_for_shutdown, command),
        ShutdownSettings::default(),
    )
    .await
}

/// [`finish_shutdown`] with explicit retry tuning.
pub async fn finish_shutdown_with(
    cancel: &CancellationToken,
    request: ShutdownRequest,
    settings: ShutdownSettings,
) -> Result<(), ShutdownError> {
    ShutdownCoordinator::new(InstalledTargets::new())
        .with_settings(settings)
        .run(request, cancel)
        .await
}
