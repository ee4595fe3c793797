use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::client::value_to_u64;
use sui_sdk_types::{Address, ObjectId};

use crate::{
    ChainClient, ChainError, CoinPage, ObjectInfo, OwnedObjectsFetcher, OwnedObjectsPage,
    SignedTransaction,
};

pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

/// JSON-RPC transport for a Sui full node. Responses are mapped onto SDK types.
#[derive(Debug)]
pub struct SuiRpcClient {
    http: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl SuiRpcClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), url)
    }

    pub fn with_http_client(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issues a JSON-RPC call and decodes its `result` member.
    pub async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, ChainError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        log::debug!("rpc #{id} {method} -> {}", self.url);

        let response = self
            .http
            .post(&self.url)
            .json(&json!({
                "jsonrpc": "2.0",
                "id": id,
                "method": method,
                "params": params,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChainError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: RpcResponse = response.json().await?;
        if let Some(error) = envelope.error {
            return Err(ChainError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        let result = envelope
            .result
            .ok_or_else(|| ChainError::InvalidResponse(format!("{method} returned no result")))?;

        serde_json::from_value(result)
            .map_err(|e| ChainError::InvalidResponse(format!("{method}: {e}")))
    }
}

#[async_trait]
impl OwnedObjectsFetcher for SuiRpcClient {
    async fn owned_objects_page(
        &self,
        owner: &Address,
        cursor: Option<String>,
        limit: usize,
    ) -> Result<OwnedObjectsPage, ChainError> {
        self.call(
            "suix_getOwnedObjects",
            json!([
                owner.to_string(),
                {
                    "filter": null,
                    "options": {
                        "showType": true,
                        "showContent": true,
                        "showOwner": true,
                    }
                },
                cursor,
                limit,
            ]),
        )
        .await
    }
}

#[async_trait]
impl ChainClient for SuiRpcClient {
    async fn multi_get_objects(&self, ids: &[ObjectId]) -> Result<Vec<ObjectInfo>, ChainError> {
        let ids: Vec<String> = ids.iter().map(ObjectId::to_string).collect();
        let entries: Vec<Value> = self
            .call(
                "sui_multiGetObjects",
                json!([ids, { "showOwner": true }]),
            )
            .await?;

        entries.iter().map(ObjectInfo::from_response).collect()
    }

    async fn reference_gas_price(&self) -> Result<u64, ChainError> {
        let price: Value = self.call("suix_getReferenceGasPrice", json!([])).await?;
        value_to_u64(&price, "reference gas price")
    }

    async fn move_function_parameters(
        &self,
        package: &ObjectId,
        module: &str,
        function: &str,
    ) -> Result<Vec<Value>, ChainError> {
        let normalized: Value = self
            .call(
                "sui_getNormalizedMoveFunction",
                json!([package.to_string(), module, function]),
            )
            .await?;

        match normalized.get("parameters") {
            Some(Value::Array(parameters)) => Ok(parameters.clone()),
            _ => Err(ChainError::InvalidResponse(format!(
                "{package}::{module}::{function} has no parameter list"
            ))),
        }
    }

    async fn coins_page(
        &self,
        owner: &Address,
        cursor: Option<String>,
    ) -> Result<CoinPage, ChainError> {
        self.call(
            "suix_getCoins",
            json!([owner.to_string(), SUI_COIN_TYPE, cursor, null]),
        )
        .await
    }

    async fn execute_transaction(&self, signed: &SignedTransaction) -> Result<Value, ChainError> {
        self.call(
            "sui_executeTransactionBlock",
            json!([
                signed.tx_bytes,
                [signed.signature],
                {
                    "showEffects": true,
                    "showObjectChanges": true,
                },
                "WaitForLocalExecution",
            ]),
        )
        .await
    }
}
