use serde_json::{json, Value};
use sn_chain::AdminKeypair;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Base58 of 32 zero bytes, a well-formed object digest.
pub const ZERO_DIGEST: &str = "11111111111111111111111111111111";

/// Deterministic admin key for tests.
pub fn admin() -> AdminKeypair {
    AdminKeypair::from_secret_bytes([7u8; 32])
}

/// Answers every call of `rpc_method` with `result`.
pub async fn mount_rpc(server: &MockServer, rpc_method: &str, result: Value) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": rpc_method })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": result,
        })))
        .mount(server)
        .await;
}

/// Matches `sui_getNormalizedMoveFunction` requests for one function name.
struct NormalizedFunction(String);

impl Match for NormalizedFunction {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<Value>(&request.body)
            .map(|body| {
                body["method"] == "sui_getNormalizedMoveFunction"
                    && body["params"][2] == self.0.as_str()
            })
            .unwrap_or(false)
    }
}

/// Serves the signature of `function` with the given parameter list.
#[allow(unused)]
pub async fn mount_move_function(server: &MockServer, function: &str, parameters: Value) {
    Mock::given(method("POST"))
        .and(NormalizedFunction(function.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "visibility": "Public",
                "isEntry": false,
                "typeParameters": [],
                "parameters": parameters,
                "return": [],
            },
        })))
        .mount(server)
        .await;
}

/// A struct parameter of the normalized form, taken by `access`.
#[allow(unused)]
pub fn struct_parameter(access: &str, name: &str) -> Value {
    let inner = json!({
        "Struct": { "address": "0xe0", "module": "enclave", "name": name, "typeArguments": [] }
    });
    Value::Object([(access.to_string(), inner)].into_iter().collect())
}

/// Mounts the calls every transaction submission makes besides execution.
#[allow(unused)]
pub async fn mount_gas(server: &MockServer, balance: u64) {
    mount_rpc(server, "suix_getReferenceGasPrice", json!("750")).await;
    mount_rpc(
        server,
        "suix_getCoins",
        json!({
            "data": [{
                "coinType": "0x2::sui::SUI",
                "coinObjectId": "0xc0",
                "version": "11",
                "digest": ZERO_DIGEST,
                "balance": balance.to_string(),
            }],
            "nextCursor": null,
            "hasNextPage": false,
        }),
    )
    .await;
}

/// All JSON-RPC request bodies received for `rpc_method`.
#[allow(unused)]
pub async fn requests_for(server: &MockServer, rpc_method: &str) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|request| serde_json::from_slice::<Value>(&request.body).ok())
        .filter(|body| body["method"] == rpc_method)
        .collect()
}
