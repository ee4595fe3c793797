use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use sn_chain::{AdminKeypair, ChainError, CompiledPackage, PackageBuilder};
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ZERO_DIGEST: &str = "11111111111111111111111111111111";

pub fn admin() -> AdminKeypair {
    AdminKeypair::from_secret_bytes([3u8; 32])
}

/// Compiler stand-in that records which packages it was asked to build.
#[derive(Default)]
pub struct RecordingBuilder {
    pub built: Mutex<Vec<PathBuf>>,
}

#[async_trait]
impl PackageBuilder for RecordingBuilder {
    async fn build(&self, package_path: &Path) -> Result<CompiledPackage, ChainError> {
        self.built.lock().unwrap().push(package_path.to_path_buf());
        Ok(CompiledPackage {
            modules: vec!["oRzrCw==".to_string()],
            dependencies: vec!["0x1".to_string(), "0x2".to_string()],
            digest: vec![],
        })
    }
}

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

/// A node that accepts one publish and reports `package_id` as published.
pub async fn publishing_node(package_id: &str) -> MockServer {
    let server = MockServer::start().await;
    mount_rpc(&server, "suix_getReferenceGasPrice", json!("1000")).await;
    mount_rpc(
        &server,
        "suix_getCoins",
        json!({
            "data": [{
                "coinType": "0x2::sui::SUI",
                "coinObjectId": "0xc0",
                "version": "2",
                "digest": ZERO_DIGEST,
                "balance": "900000000000",
            }],
            "nextCursor": null,
            "hasNextPage": false,
        }),
    )
    .await;
    mount_rpc(
        &server,
        "sui_executeTransactionBlock",
        json!({
            "digest": "PublishDigest",
            "effects": { "status": { "status": "success" } },
            "objectChanges": [
                { "type": "created", "objectId": "0xca", "objectType": "0x2::package::UpgradeCap" },
                { "type": "published", "packageId": package_id, "version": "1" }
            ]
        }),
    )
    .await;
    server
}
