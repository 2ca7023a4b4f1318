use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{CredentialStore, LogoutConfig, Navigate, Result};

/// What actually happened during a logout. Failures are logged, never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogoutOutcome {
    pub removed: bool,
    pub navigated: bool,
}

/// Clears the stored credential and sends the browser back to the landing
/// page. Both the logout page and the logout button go through this.
#[derive(Debug, Clone)]
pub struct Logout<S, N> {
    store: S,
    navigator: N,
    config: LogoutConfig,
}

impl<S, N> Logout<S, N>
where
    S: CredentialStore,
    N: Navigate,
{
    pub fn new(store: S, navigator: N) -> Self {
        Self::with_config(store, navigator, LogoutConfig::default())
    }

    pub fn with_config(store: S, navigator: N, config: LogoutConfig) -> Self {
        Self {
            store,
            navigator,
            config,
        }
    }

    pub fn config(&self) -> &LogoutConfig {
        &self.config
    }

    pub fn token(&self) -> Result<Option<String>> {
        self.store.get(&self.config.token_key)
    }

    /// Always removes first, then navigates, even if removal failed.
    pub fn perform(&self) -> LogoutOutcome {
        info!(key = %self.config.token_key, landing = %self.config.landing, "logout");

        let removed = match self.store.remove(&self.config.token_key) {
            Ok(_) => {
                debug!("logout:removed");
                true
            }
            Err(e) => {
                warn!("logout:remove {}", e);
                false
            }
        };

        let navigated = match self.navigator.replace(&self.config.landing) {
            Ok(_) => {
                debug!("logout:navigated");
                true
            }
            Err(e) => {
                warn!("logout:navigate {}", e);
                false
            }
        };

        LogoutOutcome { removed, navigated }
    }
}
