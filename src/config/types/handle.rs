//! Global provider handle.
//!
//! The configuration is immutable once loaded, so the handle is a
//! `OnceLock`: installed once at startup, read lock-free afterwards.
//! Code that can take the provider as a parameter should do so; the
//! handle exists for consumers without a context to thread it through.

use crate::config::ConfigError;
use crate::provider::Provider;
use std::sync::OnceLock;

static PROVIDER: OnceLock<Provider> = OnceLock::new();

/// Install the process-wide provider.
///
/// Fails with [`ConfigError::AlreadyInitialized`] on a second call; the
/// first installed value is kept.
pub fn init_provider(provider: Provider) -> Result<&'static Provider, ConfigError> {
    let mut installed = false;
    let stored = PROVIDER.get_or_init(|| {
        installed = true;
        provider
    });
    if installed {
        Ok(stored)
    } else {
        Err(ConfigError::AlreadyInitialized)
    }
}

/// The process-wide provider, if one was installed.
#[inline]
pub fn provider() -> Option<&'static Provider> {
    PROVIDER.get()
}
