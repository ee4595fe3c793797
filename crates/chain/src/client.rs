use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use sn_types::RawOwnedObject;

use sui_sdk_types::{Address, Input, ObjectDigest, ObjectId, ObjectReference};

use crate::{parse_object_digest, parse_object_id, ChainError, SignedTransaction};

/// One page of `suix_getOwnedObjects`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedObjectsPage {
    #[serde(default)]
    pub data: Vec<RawOwnedObject>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}

/// A gas coin as reported by `suix_getCoins`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinInfo {
    pub coin_object_id: String,
    pub version: String,
    pub digest: String,
    pub balance: String,
}

impl CoinInfo {
    pub fn object_info(&self) -> Result<ObjectInfo, ChainError> {
        Ok(ObjectInfo {
            object_id: parse_object_id(&self.coin_object_id)?,
            version: parse_u64(&self.version, "coin version")?,
            digest: parse_object_digest(&self.digest)?,
            ownership: ObjectOwnership::Owned,
        })
    }

    pub fn balance(&self) -> Result<u64, ChainError> {
        parse_u64(&self.balance, "coin balance")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPage {
    #[serde(default)]
    pub data: Vec<CoinInfo>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}

/// Ownership of an object, as needed to turn it into a transaction input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectOwnership {
    /// Address-owned, object-owned or immutable: referenced by exact version.
    Owned,
    Shared { initial_shared_version: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInfo {
    pub object_id: ObjectId,
    pub version: u64,
    pub digest: ObjectDigest,
    pub ownership: ObjectOwnership,
}

impl ObjectInfo {
    pub fn object_reference(&self) -> ObjectReference {
        ObjectReference::new(self.object_id, self.version, self.digest.clone())
    }

    /// Transaction input for this object. Only shared objects carry `mutable`.
    pub fn input(&self, mutable: bool) -> Input {
        match self.ownership {
            ObjectOwnership::Shared {
                initial_shared_version,
            } => Input::Shared {
                object_id: self.object_id,
                initial_shared_version,
                mutable,
            },
            ObjectOwnership::Owned => Input::ImmutableOrOwned(self.object_reference()),
        }
    }

    /// Parses one entry of `sui_multiGetObjects` requested with `showOwner`.
    pub fn from_response(entry: &Value) -> Result<Self, ChainError> {
        let data = match entry.get("data") {
            Some(data) if !data.is_null() => data,
            _ => {
                let reason = entry
                    .get("error")
                    .map(Value::to_string)
                    .unwrap_or_else(|| "no data".to_string());
                return Err(ChainError::ObjectNotFound(reason));
            }
        };

        let field = |name: &str| {
            data.get(name)
                .ok_or_else(|| ChainError::InvalidResponse(format!("object is missing `{name}`")))
        };

        let object_id = field("objectId")?
            .as_str()
            .ok_or_else(|| ChainError::InvalidResponse("objectId is not a string".to_string()))?;
        let version = value_to_u64(field("version")?, "object version")?;
        let digest = field("digest")?
            .as_str()
            .ok_or_else(|| ChainError::InvalidResponse("digest is not a string".to_string()))?;

        let ownership = match data.get("owner").and_then(|o| o.get("Shared")) {
            Some(shared) => ObjectOwnership::Shared {
                initial_shared_version: value_to_u64(
                    shared.get("initial_shared_version").unwrap_or(&Value::Null),
                    "initial_shared_version",
                )?,
            },
            None => ObjectOwnership::Owned,
        };

        Ok(Self {
            object_id: parse_object_id(object_id)?,
            version,
            digest: parse_object_digest(digest)?,
            ownership,
        })
    }
}

pub(crate) fn parse_u64(raw: &str, what: &str) -> Result<u64, ChainError> {
    raw.parse::<u64>()
        .map_err(|_| ChainError::InvalidResponse(format!("{what} is not an integer: {raw}")))
}

pub(crate) fn value_to_u64(value: &Value, what: &str) -> Result<u64, ChainError> {
    match value {
        Value::String(s) => parse_u64(s, what),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| ChainError::InvalidResponse(format!("{what} is not an integer: {n}"))),
        other => Err(ChainError::InvalidResponse(format!(
            "{what} is not an integer: {other}"
        ))),
    }
}

/// Page-fetch capability used by the inventory. Injected so pagination can be
/// driven by a fixture in tests.
#[async_trait]
pub trait OwnedObjectsFetcher: Send + Sync {
    async fn owned_objects_page(
        &self,
        owner: &Address,
        cursor: Option<String>,
        limit: usize,
    ) -> Result<OwnedObjectsPage, ChainError>;
}

/// Chain operations needed to build, sign and submit a transaction.
#[async_trait]
pub trait ChainClient: Send + Sync {
    async fn multi_get_objects(&self, ids: &[ObjectId]) -> Result<Vec<ObjectInfo>, ChainError>;

    async fn reference_gas_price(&self) -> Result<u64, ChainError>;

    /// Parameter types of a Move function, in `sui_getNormalizedMoveFunction` form.
    async fn move_function_parameters(
        &self,
        package: &ObjectId,
        module: &str,
        function: &str,
    ) -> Result<Vec<Value>, ChainError>;

    async fn coins_page(
        &self,
        owner: &Address,
        cursor: Option<String>,
    ) -> Result<CoinPage, ChainError>;

    /// Submits a signed transaction, asking for effects and object changes.
    async fn execute_transaction(&self, signed: &SignedTransaction) -> Result<Value, ChainError>;
}
