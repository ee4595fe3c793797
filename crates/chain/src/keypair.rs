use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use sui_crypto::ed25519::Ed25519PrivateKey;
use sui_crypto::SuiSigner;
use sui_sdk_types::{Address, Ed25519PublicKey, Transaction};

use crate::ChainError;

/// Signature scheme flag of Ed25519 keys in the Sui keystore.
pub const ED25519_FLAG: u8 = 0x00;

/// Transaction bytes and the matching serialized signature, both base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    pub tx_bytes: String,
    pub signature: String,
}

/// Ed25519 key used to sign every administrative transaction.
pub struct AdminKeypair {
    private_key: Ed25519PrivateKey,
}

impl AdminKeypair {
    pub fn from_secret_bytes(secret: [u8; 32]) -> Self {
        Self {
            private_key: Ed25519PrivateKey::new(secret),
        }
    }

    /// Decodes a key either in Sui keystore form (base64 of `flag || secret`)
    /// or as a 32-byte hex secret with an optional `0x` prefix.
    pub fn decode(encoded: &str) -> Result<Self, ChainError> {
        let trimmed = encoded.trim();

        if trimmed.starts_with("suiprivkey") {
            return Err(ChainError::InvalidKey(
                "bech32 keys are not supported, convert with `sui keytool convert`".to_string(),
            ));
        }

        let hex_part = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        if hex_part.len() == 64 && hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            let mut secret = [0u8; 32];
            hex::decode_to_slice(hex_part, &mut secret)
                .map_err(|e| ChainError::InvalidKey(e.to_string()))?;
            return Ok(Self::from_secret_bytes(secret));
        }

        let bytes = BASE64
            .decode(trimmed)
            .map_err(|_| ChainError::InvalidKey("expected base64 or hex encoding".to_string()))?;

        match bytes.split_first() {
            Some((&ED25519_FLAG, secret)) if secret.len() == 32 => {
                let mut buf = [0u8; 32];
                buf.copy_from_slice(secret);
                Ok(Self::from_secret_bytes(buf))
            }
            Some((flag, _)) if bytes.len() == 33 => Err(ChainError::InvalidKey(format!(
                "unsupported signature scheme flag {flag:#04x}, only Ed25519 is supported"
            ))),
            _ => Err(ChainError::InvalidKey(format!(
                "expected 33 bytes (flag || secret), got {}",
                bytes.len()
            ))),
        }
    }

    pub fn public_key(&self) -> Ed25519PublicKey {
        self.private_key.public_key()
    }

    pub fn address(&self) -> Address {
        self.public_key().to_address()
    }

    /// BCS-encodes the transaction and signs its intent digest.
    pub fn sign_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<SignedTransaction, ChainError> {
        let tx_bytes = bcs::to_bytes(transaction)?;
        let signature = self
            .private_key
            .sign_transaction(transaction)
            .map_err(|e| ChainError::Signing(e.to_string()))?;

        Ok(SignedTransaction {
            tx_bytes: BASE64.encode(&tx_bytes),
            signature: signature.to_base64(),
        })
    }
}

impl std::fmt::Debug for AdminKeypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminKeypair")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}
