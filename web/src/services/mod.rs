mod location;
mod storage;

pub use location::*;
pub use storage::*;
