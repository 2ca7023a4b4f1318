mod logout_button;
mod session_provider;

pub use logout_button::*;
pub use session_provider::*;
