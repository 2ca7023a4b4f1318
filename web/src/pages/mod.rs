mod home;
mod logout;

pub use home::*;
pub use logout::*;
