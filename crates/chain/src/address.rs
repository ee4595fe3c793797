use std::str::FromStr;

use sui_sdk_types::{Address, ObjectDigest, ObjectId};

use crate::ChainError;

const ADDRESS_HEX_LENGTH: usize = 64;

/// Expands short forms such as `0x2` to the full 64-digit hex the SDK parses.
fn full_hex(raw: &str) -> Result<String, ChainError> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() || digits.len() > ADDRESS_HEX_LENGTH {
        return Err(ChainError::InvalidAddress(raw.to_string()));
    }
    Ok(format!("0x{digits:0>64}").to_lowercase())
}

pub fn parse_address(raw: &str) -> Result<Address, ChainError> {
    Address::from_str(&full_hex(raw)?).map_err(|_| ChainError::InvalidAddress(raw.to_string()))
}

pub fn parse_object_id(raw: &str) -> Result<ObjectId, ChainError> {
    ObjectId::from_str(&full_hex(raw)?).map_err(|_| ChainError::InvalidAddress(raw.to_string()))
}

/// Object digests travel as base58 in JSON-RPC.
pub fn parse_object_digest(raw: &str) -> Result<ObjectDigest, ChainError> {
    ObjectDigest::from_str(raw).map_err(|_| ChainError::InvalidDigest(raw.to_string()))
}
