use crate::TypesError;

/// Normalizes a hex payload: strips an optional `0x` prefix and lowercases it.
///
/// The payload must be non-empty, of even length and made of hex digits only,
/// otherwise the raw input is reported back in the error.
pub fn normalize_hex(raw: &str) -> Result<String, TypesError> {
    let trimmed = raw.trim();
    let hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);

    if hex.is_empty() || hex.len() % 2 != 0 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TypesError::InvalidHex(raw.to_string()));
    }

    Ok(hex.to_ascii_lowercase())
}

/// Decodes a hex payload into bytes, normalizing it first.
pub fn hex_to_bytes(raw: &str) -> Result<Vec<u8>, TypesError> {
    let normalized = normalize_hex(raw)?;
    hex::decode(&normalized).map_err(|_| TypesError::InvalidHex(raw.to_string()))
}

/// Prefixes an object identifier with `0x` when it is missing.
pub fn normalize_object_id(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("0x") {
        trimmed.to_string()
    } else {
        format!("0x{}", trimmed)
    }
}
