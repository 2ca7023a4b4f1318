use session::{Navigate, Result, SessionError};

use crate::errors::Error;

/// Full page navigation through `window.location`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserNavigator;

impl Navigate for BrowserNavigator {
    fn replace(&self, url: &str) -> Result<()> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;

        log::debug!("location:replace {}", url);

        window
            .location()
            .replace(url)
            .map_err(|e| SessionError::Navigation(Error::from(e).to_string()))
    }
}
