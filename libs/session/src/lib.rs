pub mod activation;
pub mod logout;
pub mod navigate;
pub mod store;

pub use activation::*;
pub use logout::*;
pub use navigate::*;
pub use store::*;

use thiserror::Error;

/// Key the credential token is persisted under.
pub const AUTHORIZATION_KEY: &str = "Authorization";

/// Where the browser is sent once the token is gone.
pub const LANDING_URL: &str = "/";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Navigation error: {0}")]
    Navigation(String),
    #[error("Storage unavailable")]
    Unavailable,
}

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutConfig {
    pub token_key: String,
    pub landing: String,
}

impl Default for LogoutConfig {
    fn default() -> Self {
        Self {
            token_key: AUTHORIZATION_KEY.to_owned(),
            landing: LANDING_URL.to_owned(),
        }
    }
}

impl LogoutConfig {
    pub fn new(token_key: impl Into<String>, landing: impl Into<String>) -> Self {
        Self {
            token_key: token_key.into(),
            landing: landing.into(),
        }
    }
}

#[cfg(test)]
#[ctor::ctor]
fn initialize_tests() {
    // log_test()
}

#[cfg(test)]
#[allow(dead_code)]
fn log_test() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "session=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
