mod common;

use std::path::PathBuf;

use chrono::TimeZone;
use serde_json::Value;
use sn_chain::{SuiRpcClient, DEFAULT_PUBLISH_GAS_BUDGET};
use sn_deploy_cli::{DeployCmd, DeploySelection, DeployTokenCmd};
use sn_types::{Contract, Network};
use sn_utils_cli::ChainArgs;

use common::{admin, publishing_node, RecordingBuilder};

#[tokio::test]
async fn test_deploy_writes_log_record() {
    let server = publishing_node("0xbeef").await;
    let logs = tempfile::tempdir().unwrap();

    let cmd = DeployCmd {
        packages_root: PathBuf::from("/work/move"),
        logs_dir: logs.path().join("logs"),
        gas_budget: DEFAULT_PUBLISH_GAS_BUDGET,
        sui_bin: PathBuf::from("sui"),
        chain: ChainArgs::default(),
    };
    let selection = DeploySelection {
        network: Network::Devnet,
        contract: Contract::Enclave,
    };
    let now = chrono::Utc
        .with_ymd_and_hms(2025, 6, 1, 12, 30, 45)
        .unwrap();

    let client = SuiRpcClient::new(server.uri());
    let builder = RecordingBuilder::default();
    let (record, log_path) = cmd
        .deploy_and_log(&client, &builder, &admin(), selection, now)
        .await
        .unwrap();

    assert_eq!(record.package_id, "0xbeef");
    assert_eq!(
        *builder.built.lock().unwrap(),
        vec![PathBuf::from("/work/move/enclave")]
    );
    assert_eq!(
        log_path,
        logs.path()
            .join("logs")
            .join("2025-06-01T12-30-45-000Z-devnet-enclave.json")
    );

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(&log_path).unwrap()).unwrap();
    assert_eq!(written["timestamp"], "2025-06-01T12:30:45.000Z");
    assert_eq!(written["network"], "devnet");
    assert_eq!(written["contract"], "enclave");
    assert_eq!(written["packagePath"], "/work/move/enclave");
    assert_eq!(written["packageId"], "0xbeef");
    assert_eq!(written["publishResponse"]["digest"], "PublishDigest");
}

#[tokio::test]
async fn test_deploy_records_absolute_package_path() {
    let server = publishing_node("0xbeef").await;
    let logs = tempfile::tempdir().unwrap();

    let cmd = DeployCmd {
        packages_root: PathBuf::from("move"),
        logs_dir: logs.path().to_path_buf(),
        gas_budget: DEFAULT_PUBLISH_GAS_BUDGET,
        sui_bin: PathBuf::from("sui"),
        chain: ChainArgs::default(),
    };
    let selection = DeploySelection {
        network: Network::Testnet,
        contract: Contract::App,
    };

    let client = SuiRpcClient::new(server.uri());
    let (record, _) = cmd
        .deploy_and_log(
            &client,
            &RecordingBuilder::default(),
            &admin(),
            selection,
            chrono::Utc::now(),
        )
        .await
        .unwrap();

    let expected = std::env::current_dir().unwrap().join("move").join("app");
    assert_eq!(record.package_path, expected.display().to_string());
    assert!(PathBuf::from(&record.package_path).is_absolute());
}

#[tokio::test]
async fn test_failed_publish_writes_no_log() {
    let server = wiremock::MockServer::start().await;
    let logs = tempfile::tempdir().unwrap();

    let cmd = DeployCmd {
        packages_root: PathBuf::from(".."),
        logs_dir: logs.path().to_path_buf(),
        gas_budget: DEFAULT_PUBLISH_GAS_BUDGET,
        sui_bin: PathBuf::from("sui"),
        chain: ChainArgs::default(),
    };
    let selection = DeploySelection {
        network: Network::Testnet,
        contract: Contract::App,
    };

    // The node answers nothing, so the gas price lookup fails.
    let client = SuiRpcClient::new(server.uri());
    let result = cmd
        .deploy_and_log(
            &client,
            &RecordingBuilder::default(),
            &admin(),
            selection,
            chrono::Utc::now(),
        )
        .await;

    assert!(result.is_err());
    assert_eq!(std::fs::read_dir(logs.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_deploy_token_publishes_sentinel_token() {
    let server = publishing_node("0x70ce").await;

    let cmd = DeployTokenCmd {
        packages_root: PathBuf::from("/work/move"),
        gas_budget: DEFAULT_PUBLISH_GAS_BUDGET,
        sui_bin: PathBuf::from("sui"),
        chain: ChainArgs::default(),
    };

    let client = SuiRpcClient::new(server.uri());
    let builder = RecordingBuilder::default();
    let outcome = cmd.deploy(&client, &builder, &admin()).await.unwrap();

    assert_eq!(outcome.package_id, "0x70ce");
    assert_eq!(
        *builder.built.lock().unwrap(),
        vec![PathBuf::from("/work/move/sentinel-token")]
    );
}
