use async_trait::async_trait;
use deskctl_core::{ProcessProbe, ShutdownError};

use crate::process::find_pids_by_name;

/// Running iff any process carries the given executable file name.
///
/// Used where the main application cannot be matched by path; the
/// comparison ignores ASCII case.
#[derive(Debug, Clone)]
pub struct ApplicationNameProbe {
    name: String,
}

impl ApplicationNameProbe {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl ProcessProbe for ApplicationNameProbe {
    async fn is_running(&self) -> Result<bool, ShutdownError> {
        Ok(!find_pids_by_name(&self.name).is_empty())
    }
}
