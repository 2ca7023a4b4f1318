use session::SessionError;
use thiserror::Error as ThisError;
use wasm_bindgen::JsValue;

/// Failures talking to the browser.
#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("No window")]
    NoWindow,
    #[error("No local storage")]
    NoStorage,
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{:?}", value))
    }
}

impl From<Error> for SessionError {
    fn from(value: Error) -> Self {
        match value {
            Error::NoWindow | Error::NoStorage => SessionError::Unavailable,
            Error::Js(message) => SessionError::Storage(message),
        }
    }
}
