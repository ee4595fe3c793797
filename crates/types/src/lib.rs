pub mod encoding;
pub mod network;
pub mod object;

pub use encoding::*;
pub use network::*;
pub use object::*;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Unknown contract: {0}")]
    UnknownContract(String),
}
