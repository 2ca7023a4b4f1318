use std::fmt;
use std::rc::Rc;

use session::{CredentialStore, Logout, LogoutConfig, LogoutOutcome, Navigate};
use yew::prelude::*;

use crate::config::logout_config;
use crate::services::{BrowserNavigator, BrowserStore};

type SharedLogout = Logout<Rc<dyn CredentialStore>, Rc<dyn Navigate>>;

/// Where the token lives and how to leave the page. Provided through context
/// by [`crate::shared::SessionProvider`], browser backed unless overridden.
#[derive(Clone)]
pub struct SessionServices {
    store: Rc<dyn CredentialStore>,
    navigator: Rc<dyn Navigate>,
    config: LogoutConfig,
}

impl SessionServices {
    pub fn new(
        store: impl CredentialStore + 'static,
        navigator: impl Navigate + 'static,
        config: LogoutConfig,
    ) -> Self {
        Self {
            store: Rc::new(store),
            navigator: Rc::new(navigator),
            config,
        }
    }

    pub fn browser() -> Self {
        Self::new(BrowserStore, BrowserNavigator, logout_config())
    }

    pub fn config(&self) -> &LogoutConfig {
        &self.config
    }

    fn logout(&self) -> SharedLogout {
        Logout::with_config(
            self.store.clone(),
            self.navigator.clone(),
            self.config.clone(),
        )
    }
}

impl Default for SessionServices {
    fn default() -> Self {
        Self::browser()
    }
}

impl PartialEq for SessionServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
            && Rc::ptr_eq(&self.navigator, &other.navigator)
            && self.config == other.config
    }
}

impl fmt::Debug for SessionServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionServices")
            .field("config", &self.config)
            .finish()
    }
}

/// State handle for the [`use_logout`] hook.
pub struct UseLogoutHandle {
    inner: Rc<SharedLogout>,
}

impl UseLogoutHandle {
    /// Clears the token and leaves for the landing page.
    pub fn logout(&self) -> LogoutOutcome {
        let outcome = self.inner.perform();
        log::info!("logout: {:?}", outcome);
        outcome
    }

    pub fn token(&self) -> Option<String> {
        match self.inner.token() {
            Ok(token) => token,
            Err(e) => {
                log::warn!("token: {}", e);
                None
            }
        }
    }
}

impl Clone for UseLogoutHandle {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl PartialEq for UseLogoutHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for UseLogoutHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UseLogoutHandle")
            .field("config", self.inner.config())
            .finish()
    }
}

/// Shared logout capability, used by the logout page and the logout button.
#[hook]
pub fn use_logout() -> UseLogoutHandle {
    let fallback = use_memo(|_| SessionServices::browser(), ());
    let services = use_context::<SessionServices>().unwrap_or_else(|| (*fallback).clone());
    let inner = use_memo(|services| services.logout(), services);

    UseLogoutHandle { inner }
}
