pub mod address;
pub mod builder;
pub mod client;
pub mod error;
pub mod executor;
pub mod inventory;
pub mod keypair;
pub mod publish;
pub mod rpc;
pub mod signature;

pub use address::*;
pub use builder::*;
pub use client::*;
pub use error::*;
pub use executor::*;
pub use inventory::*;
pub use keypair::*;
pub use publish::*;
pub use rpc::*;
pub use signature::*;

pub use sui_sdk_types::{
    Address, Argument, Command, Identifier, Input, ObjectDigest, ObjectId, ObjectReference,
    ProgrammableTransaction, Transaction, TransactionKind, TypeTag,
};

/// Address of the Sui framework package.
pub const SUI_FRAMEWORK_ADDRESS: &str = "0x2";
