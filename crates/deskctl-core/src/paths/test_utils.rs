//! `DESKCTL_*` override helpers for path tests.

use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::Mutex;

/// Held by every test that touches an installation override.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets or clears one override for the lifetime of the guard.
pub struct EnvOverride {
    key: &'static str,
    previous: Option<OsString>,
}

impl EnvOverride {
    #[allow(unsafe_code)]
    pub fn set(key: &'static str, value: impl AsRef<OsStr>) -> Self {
        let previous = env::var_os(key);
        // SAFETY: callers hold ENV_LOCK.
        unsafe { env::set_var(key, value) };
        Self { key, previous }
    }

    #[allow(unsafe_code)]
    pub fn unset(key: &'static str) -> Self {
        let previous = env::var_os(key);
        // SAFETY: callers hold ENV_LOCK.
        unsafe { env::remove_var(key) };
        Self { key, previous }
    }
}

impl Drop for EnvOverride {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: the guard is dropped before ENV_LOCK is released.
        match self.previous.take() {
            Some(value) => unsafe { env::set_var(self.key, value) },
            None => unsafe { env::remove_var(self.key) },
        }
    }
}
