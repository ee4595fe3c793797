use std::io::Write;

use serde_json::{json, Value};
use tempfile::NamedTempFile;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

pub const ZERO_DIGEST: &str = "11111111111111111111111111111111";

/// Hex secret of the admin key used by every test.
pub const ADMIN_KEY_HEX: &str = "0909090909090909090909090909090909090909090909090909090909090909";

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
struct NormalizedFunction(&'static str);

impl Match for NormalizedFunction {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<Value>(&request.body)
            .map(|body| {
                body["method"] == "sui_getNormalizedMoveFunction" && body["params"][2] == self.0
            })
            .unwrap_or(false)
    }
}

fn by_ref(mutable: bool, name: &str) -> Value {
    let inner = json!({ "Struct": { "address": "0xe0", "module": "enclave", "name": name, "typeArguments": [] } });
    if mutable {
        json!({ "MutableReference": inner })
    } else {
        json!({ "Reference": inner })
    }
}

async fn mount_move_function(server: &MockServer, function: &'static str, parameters: Value) {
    Mock::given(method("POST"))
        .and(NormalizedFunction(function))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "visibility": "Public", "isEntry": false, "typeParameters": [], "parameters": parameters, "return": [] },
        })))
        .mount(server)
        .await;
}

fn shared(id: &str, initial_shared_version: u64) -> Value {
    json!({ "data": { "objectId": id, "version": "900", "digest": ZERO_DIGEST, "owner": { "Shared": { "initial_shared_version": initial_shared_version } } } })
}

/// A node that knows the governed objects and their Move signatures, and
/// accepts one transaction.
pub async fn governance_node() -> MockServer {
    let server = MockServer::start().await;
    mount_rpc(
        &server,
        "sui_multiGetObjects",
        json!([
            shared("0x6", 1),
            shared("0xec", 5),
            shared("0xbc", 7),
            shared("0xe1", 9),
            { "data": { "objectId": "0xca", "version": "4", "digest": ZERO_DIGEST, "owner": { "AddressOwner": "0x1" } } }
        ]),
    )
    .await;
    let tx_context = by_ref(true, "TxContext");
    mount_move_function(
        &server,
        "load_nitro_attestation",
        json!([{ "Vector": "U8" }, by_ref(false, "Clock"), tx_context]),
    )
    .await;
    mount_move_function(
        &server,
        "register_enclave",
        json!([by_ref(false, "EnclaveConfig"), { "Struct": { "address": "0x2", "module": "nitro_attestation", "name": "NitroAttestationDocument", "typeArguments": [] } }, tx_context]),
    )
    .await;
    mount_move_function(
        &server,
        "update_pcrs",
        json!([by_ref(true, "EnclaveConfig"), by_ref(false, "Cap"), { "Vector": "U8" }, { "Vector": "U8" }, { "Vector": "U8" }, tx_context]),
    )
    .await;
    mount_move_function(
        &server,
        "set_canonical_enclave",
        json!([by_ref(true, "ProtocolConfig"), by_ref(false, "Enclave"), by_ref(false, "Clock"), tx_context]),
    )
    .await;
    mount_rpc(&server, "suix_getReferenceGasPrice", json!("1000")).await;
    mount_rpc(
        &server,
        "suix_getCoins",
        json!({
            "data": [{
                "coinType": "0x2::sui::SUI",
                "coinObjectId": "0xc0",
                "version": "3",
                "digest": ZERO_DIGEST,
                "balance": "5000000000",
            }],
            "nextCursor": null,
            "hasNextPage": false,
        }),
    )
    .await;
    mount_rpc(
        &server,
        "sui_executeTransactionBlock",
        json!({ "digest": "RegDigest", "effects": { "status": { "status": "success" } } }),
    )
    .await;
    server
}

/// Config file holding `contents`, kept alive for the test's duration.
pub fn config_file(contents: Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

/// Every object id and package id, plus the enclave URL and witness names.
pub fn object_flags(enclave_url: &str) -> Vec<String> {
    [
        ("--enclave-url", enclave_url),
        ("--module-name", "sentinel"),
        ("--otw-name", "SENTINEL"),
        ("--enclave-package-id", "0xe0"),
        ("--app-package-id", "0xa0"),
        ("--cap-object-id", "0xca"),
        ("--enclave-config-object-id", "0xec"),
        ("--protocol-config-id", "0xbc"),
        ("--enclave-object-id", "0xe1"),
        ("--clock-object-id", "0x6"),
        ("--gas-budget", "100000000"),
        ("--network", "localnet"),
    ]
    .into_iter()
    .flat_map(|(flag, value)| [flag.to_string(), value.to_string()])
    .collect()
}
