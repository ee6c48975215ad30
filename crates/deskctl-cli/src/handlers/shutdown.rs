//! `shutdown` and `factory-reset` handlers.

use std::future;
use std::time::Duration;

use anyhow::Result;
use deskctl_core::InitiatingCommand;
use deskctl_runtime::finish_shutdown;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::commands::ShutdownArgs;
use crate::error::CliError;

/// Exit status used when a second Ctrl-C aborts the CLI.
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Execute a shutdown flavour.
pub async fn execute(command: InitiatingCommand, args: ShutdownArgs) -> Result<()> {
    let cancel = CancellationToken::new();
    let watcher = spawn_cancellation_watcher(cancel.clone(), args.timeout());

    let result = finish_shutdown(&cancel, args.wait_for_shutdown(), command).await;

    watcher.abort();
    result.map_err(CliError::from)?;
    info!(%command, "Shutdown complete");
    Ok(())
}

/// Cancel `cancel` on Ctrl-C or when `timeout` elapses.
///
/// Cancellation only kills in-flight VM-manager commands; the remaining
/// stages still run. A second Ctrl-C exits immediately.
fn spawn_cancellation_watcher(
    cancel: CancellationToken,
    timeout: Option<Duration>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let deadline = async {
            match timeout {
                Some(timeout) => tokio::time::sleep(timeout).await,
                None => future::pending().await,
            }
        };

        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    warn!("Failed to listen for Ctrl-C: {e}");
                    return;
                }
                warn!("Interrupted; cancelling running commands (press Ctrl-C again to abort)");
            }
            () = deadline => {
                warn!(?timeout, "Timed out; cancelling running commands");
            }
        }
        cancel.cancel();

        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
    })
}
