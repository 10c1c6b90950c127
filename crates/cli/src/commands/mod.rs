pub mod config;
pub mod discover;
pub mod extract;
pub mod output;

pub use config::*;
pub use discover::*;
pub use extract::*;
pub use output::*;
