//! Poll-then-kill escalation policy.
//!
//! Given a subsystem descriptor, poll its probe at a fixed interval until it
//! reports the subsystem gone or the retry budget runs out, then invoke the
//! terminator exactly once.

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::{EscalationOutcome, ShutdownError, Subsystem};

/// Wait for `subsystem` to exit on its own, terminating it otherwise.
///
/// # Strategy
/// 1. If `wait_for_shutdown` is false, skip straight to step 3
/// 2. Probe up to `retry.count` times, sleeping `retry.wait` between
///    probes (never before the first one). Return `Resolved` as soon as
///    the probe reports the subsystem gone
/// 3. Invoke the terminator once
///
/// # Returns
/// - `Ok(Resolved)` if the subsystem exited without being killed
/// - `Ok(Terminated)` if the terminator ran and succeeded
/// - `Err(Check)` if a probe failed; the terminator is not invoked
/// - `Err(Terminate)` if the terminator failed
pub async fn escalate(
    subsystem: &Subsystem,
    wait_for_shutdown: bool,
    cancel: &CancellationToken,
) -> Result<EscalationOutcome, ShutdownError> {
    let name = subsystem.name.as_str();
    let retry = subsystem.retry;

    if wait_for_shutdown {
        for iter in 0..retry.count {
            if iter > 0 {
                debug!(
                    subsystem = name,
                    wait_secs = retry.wait.as_secs_f64(),
                    "Checking {name} showed it's still running; sleeping"
                );
                sleep(retry.wait).await;
            }

            let running = subsystem
                .probe
                .is_running()
                .await
                .map_err(|source| ShutdownError::Check {
                    subsystem: name.to_string(),
                    source: Box::new(source),
                })?;

            if !running {
                debug!(subsystem = name, attempt = iter + 1, "{name} is no longer running");
                return Ok(EscalationOutcome::Resolved);
            }
        }
    }

    debug!(subsystem = name, "About to force-kill {name}");
    subsystem
        .terminator
        .terminate(cancel)
        .await
        .map_err(|source| ShutdownError::Terminate {
            subsystem: name.to_string(),
            source: Box::new(source),
        })?;

    Ok(EscalationOutcome::Terminated)
}
