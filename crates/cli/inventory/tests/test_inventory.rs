mod common;

use clap::Parser;
use serde_json::Value;
use sn_inventory_cli::InventoryCmd;
use sn_utils_cli::CliCommand;
use wiremock::MockServer;

use common::{mount_pages, owned, ADMIN_KEY_HEX};

fn parse(server: &MockServer, extra: &[&str]) -> InventoryCmd {
    let uri = server.uri();
    let mut args = vec![
        "sn-admin-objects",
        "--rpc-url",
        uri.as_str(),
        "--admin-key",
        ADMIN_KEY_HEX,
    ];
    args.extend_from_slice(extra);
    InventoryCmd::try_parse_from(args).unwrap()
}

#[tokio::test]
async fn test_snapshot_groups_fixture_objects() {
    let server = MockServer::start().await;
    mount_pages(
        &server,
        vec![
            vec![
                owned("0x11", "0xe::enclave::Cap<0xa::app::APP>"),
                owned("0x12", "0x2::package::UpgradeCap"),
                owned("0x13", "0x2::kiosk::Kiosk"),
            ],
            vec![
                owned("0x14", "0xe::enclave::Cap<0xa::app::APP>"),
                owned("0x15", "0xa::registry::Entry"),
            ],
        ],
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");
    let cmd = parse(
        &server,
        &["--network", "devnet", "--output", output.to_str().unwrap()],
    );
    cmd.call().await.unwrap();

    let snapshot: Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let objects = &snapshot["objects"];
    assert_eq!(objects["capObjects"].as_array().unwrap().len(), 2);
    assert_eq!(objects["upgradeCaps"].as_array().unwrap().len(), 1);
    assert_eq!(objects["otherObjects"].as_array().unwrap().len(), 2);
    assert_eq!(objects["allObjects"].as_array().unwrap().len(), 5);

    assert_eq!(snapshot["network"], "devnet");
    let admin = snapshot["adminAddress"].as_str().unwrap();
    assert!(admin.starts_with("0x") && admin.len() == 66);

    let first = &objects["allObjects"][0];
    assert_eq!(first["objectId"], "0x11");
    assert_eq!(first["version"], "42");
    assert_eq!(first["fullData"]["objectId"], "0x11");
    assert_eq!(objects["otherObjects"][1]["objectId"], "0x15");
}

#[tokio::test]
async fn test_max_pages_aborts_without_writing() {
    let server = MockServer::start().await;
    mount_pages(
        &server,
        vec![
            vec![owned("0x1", "0x2::kiosk::Kiosk")],
            vec![owned("0x2", "0x2::kiosk::Kiosk")],
        ],
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");
    let cmd = parse(
        &server,
        &["--output", output.to_str().unwrap(), "--max-pages", "1"],
    );

    assert!(cmd.call().await.is_err());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_node_failure_aborts_inventory() {
    let server = MockServer::start().await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");
    let cmd = parse(&server, &["--output", output.to_str().unwrap()]);

    let err = cmd.call().await.unwrap_err();
    assert!(err.to_string().contains("Failed to fetch admin objects"));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_snapshot_path_is_absolute() {
    let server = MockServer::start().await;
    mount_pages(&server, vec![vec![owned("0x1", "0x2::kiosk::Kiosk")]]).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nested").join("out.json");
    let cmd = parse(&server, &["--output", output.to_str().unwrap()]);
    let admin = cmd.chain.keypair().unwrap().address();
    let client = cmd.chain.client(cmd.network);

    let (snapshot, path) = cmd
        .save_snapshot(&client, &admin, chrono::Utc::now())
        .await
        .unwrap();
    assert!(path.is_absolute());
    assert_eq!(path, output);
    assert_eq!(snapshot.admin_address, admin.to_string());
    assert!(path.exists());
}
