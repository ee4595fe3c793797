use std::path::PathBuf;

use anyhow::Context;
use sn_chain::{
    publish_package, AdminKeypair, ChainClient, PackageBuilder, PublishOutcome, SuiCliBuilder,
    DEFAULT_PUBLISH_GAS_BUDGET,
};
use sn_types::{Contract, Network};
use sn_utils_cli::{ChainArgs, CliCommand, DEFAULT_PACKAGES_ROOT};

/// The token package is always published to testnet.
pub const TOKEN_NETWORK: Network = Network::Testnet;

#[derive(clap::Parser, Debug, Clone)]
#[clap(about = "Publish the sentinel-token package to testnet")]
pub struct DeployTokenCmd {
    /// Directory holding the sentinel-token package
    #[arg(long, default_value = DEFAULT_PACKAGES_ROOT)]
    pub packages_root: PathBuf,

    #[arg(long, default_value_t = DEFAULT_PUBLISH_GAS_BUDGET)]
    pub gas_budget: u64,

    #[arg(long, default_value = "sui")]
    pub sui_bin: PathBuf,

    #[command(flatten)]
    pub chain: ChainArgs,
}

impl DeployTokenCmd {
    pub fn package_path(&self) -> PathBuf {
        self.packages_root.join(Contract::SentinelToken.as_str())
    }

    pub async fn deploy<C, B>(
        &self,
        client: &C,
        builder: &B,
        signer: &AdminKeypair,
    ) -> anyhow::Result<PublishOutcome>
    where
        C: ChainClient + ?Sized,
        B: PackageBuilder + ?Sized,
    {
        let package_path = self.package_path();
        publish_package(client, builder, signer, &package_path, self.gas_budget)
            .await
            .with_context(|| format!("Failed to publish {}", package_path.display()))
    }
}

#[async_trait::async_trait]
impl CliCommand for DeployTokenCmd {
    async fn call(&self) -> anyhow::Result<()> {
        let signer = self.chain.keypair()?;
        let client = self.chain.client(TOKEN_NETWORK);
        let builder = SuiCliBuilder {
            sui_binary: self.sui_bin.clone(),
        };

        let outcome = self.deploy(&client, &builder, &signer).await?;
        println!("Package ID: {}", outcome.package_id);

        Ok(())
    }
}
