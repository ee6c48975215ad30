//! Escalation tuning for each shutdown stage.
//!
//! Pure domain values with no infrastructure dependencies. Each stage has
//! its own wait budget because the subsystems exit at very different speeds.

use crate::shutdown::RetryPolicy;

/// VM graceful stop: 15 checks, 2 seconds apart.
pub const DEFAULT_VM_RETRY: RetryPolicy = RetryPolicy::from_secs(15, 2);

/// VM follow-up: one more check, then force-stop with no waiting.
pub const DEFAULT_VM_FORCE_RETRY: RetryPolicy = RetryPolicy::from_secs(1, 0);

/// Emulator: 15 checks, 2 seconds apart.
pub const DEFAULT_EMULATOR_RETRY: RetryPolicy = RetryPolicy::from_secs(15, 2);

/// Main application: 5 checks, 1 second apart.
pub const DEFAULT_APPLICATION_RETRY: RetryPolicy = RetryPolicy::from_secs(5, 1);

/// Single-stage topology: 15 checks, 2 seconds apart.
pub const DEFAULT_NATIVE_APPLICATION_RETRY: RetryPolicy = RetryPolicy::from_secs(15, 2);

/// Per-stage retry policies used by the shutdown coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShutdownSettings {
    pub vm: RetryPolicy,
    pub vm_force: RetryPolicy,
    pub emulator: RetryPolicy,
    pub application: RetryPolicy,
    pub native_application: RetryPolicy,
}

impl ShutdownSettings {
    /// Settings with the production tuning.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            vm: DEFAULT_VM_RETRY,
            vm_force: DEFAULT_VM_FORCE_RETRY,
            emulator: DEFAULT_EMULATOR_RETRY,
            application: DEFAULT_APPLICATION_RETRY,
            native_application: DEFAULT_NATIVE_APPLICATION_RETRY,
        }
    }

    /// Worst-case time spent polling across the pipeline stages.
    pub fn pipeline_wait_budget(&self) -> std::time::Duration {
        self.vm.total_wait()
            + self.vm_force.total_wait()
            + self.emulator.total_wait()
            + self.application.total_wait()
    }
}

impl Default for ShutdownSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}
