pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod logs;
pub mod prompt;

pub use cli::*;
pub use client::*;
pub use config::*;
pub use constants::*;
pub use logs::*;
pub use prompt::*;
