mod config;
mod core;
mod option;

pub use self::core::*;
pub use config::*;
pub use option::*;
