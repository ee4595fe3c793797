use anyhow::Context;
use sn_chain::{AdminKeypair, SuiRpcClient};
use sn_types::Network;

use crate::{ADMIN_PRIVATE_KEY_ENV, SUI_RPC_URL_ENV};

/// Connection and signing flags shared by every tool that talks to a node.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ChainArgs {
    /// Full node JSON-RPC URL, overriding the network default
    #[arg(long, global = true, env = SUI_RPC_URL_ENV)]
    pub rpc_url: Option<String>,

    /// Admin Ed25519 key (Sui keystore base64 or 32-byte hex)
    #[arg(long, global = true, env = ADMIN_PRIVATE_KEY_ENV, hide_env_values = true)]
    pub admin_key: Option<String>,
}

impl ChainArgs {
    pub fn client(&self, network: Network) -> SuiRpcClient {
        setup_client(network, self.rpc_url.as_deref())
    }

    pub fn keypair(&self) -> anyhow::Result<AdminKeypair> {
        load_admin_keypair(self.admin_key.as_deref())
    }
}

// Client Setup
// ================================================================================================

pub fn resolve_rpc_url(network: Network, rpc_url: Option<&str>) -> String {
    match rpc_url.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => network.fullnode_url().to_string(),
    }
}

pub fn setup_client(network: Network, rpc_url: Option<&str>) -> SuiRpcClient {
    let url = resolve_rpc_url(network, rpc_url);
    log::info!("using {network} full node at {url}");
    SuiRpcClient::new(url)
}

pub fn load_admin_keypair(encoded: Option<&str>) -> anyhow::Result<AdminKeypair> {
    let encoded = encoded
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .with_context(|| format!("No admin key: set {ADMIN_PRIVATE_KEY_ENV} or pass --admin-key"))?;

    AdminKeypair::decode(encoded).context("Invalid admin key")
}
