use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use colored::*;
use sn_chain::{
    publish_package, AdminKeypair, ChainClient, PackageBuilder, SuiCliBuilder,
    DEFAULT_PUBLISH_GAS_BUDGET,
};
use sn_types::{Contract, Network};
use sn_utils_cli::{
    absolute_path, deploy_log_path, iso_timestamp, prompt_choice, write_json_log, ChainArgs,
    CliCommand, DeployRecord, PromptError, DEFAULT_LOGS_DIR, DEFAULT_PACKAGES_ROOT,
};

#[derive(clap::Parser, Debug, Clone)]
#[clap(about = "Publish one of the Sentinel Move packages, chosen interactively")]
pub struct DeployCmd {
    /// Directory holding one sub-directory per Move package
    #[arg(long, default_value = DEFAULT_PACKAGES_ROOT)]
    pub packages_root: PathBuf,

    /// Directory receiving the deploy logs
    #[arg(long, default_value = DEFAULT_LOGS_DIR)]
    pub logs_dir: PathBuf,

    #[arg(long, default_value_t = DEFAULT_PUBLISH_GAS_BUDGET)]
    pub gas_budget: u64,

    /// `sui` binary used to compile the package
    #[arg(long, default_value = "sui")]
    pub sui_bin: PathBuf,

    #[command(flatten)]
    pub chain: ChainArgs,
}

/// Network and package picked by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploySelection {
    pub network: Network,
    pub contract: Contract,
}

/// Asks for the target network, then for the package to publish.
pub fn select_deployment<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<DeploySelection, PromptError> {
    let network = Network::PUBLIC[prompt_choice(input, output, "Select network", &Network::PUBLIC, 0)?];
    let contract =
        Contract::ALL[prompt_choice(input, output, "Select contract to deploy", &Contract::ALL, 0)?];
    Ok(DeploySelection { network, contract })
}

impl DeployCmd {
    /// Publishes the selected package and writes its deploy record.
    ///
    /// Returns the record together with the path of the log file.
    pub async fn deploy_and_log<C, B>(
        &self,
        client: &C,
        builder: &B,
        signer: &AdminKeypair,
        selection: DeploySelection,
        now: DateTime<Utc>,
    ) -> anyhow::Result<(DeployRecord, PathBuf)>
    where
        C: ChainClient + ?Sized,
        B: PackageBuilder + ?Sized,
    {
        let package_path = self.packages_root.join(selection.contract.as_str());
        log::info!(
            "publishing {} to {} from {}",
            selection.contract,
            selection.network,
            package_path.display()
        );

        let outcome = publish_package(client, builder, signer, &package_path, self.gas_budget)
            .await
            .with_context(|| format!("Failed to publish {}", package_path.display()))?;

        let record = DeployRecord {
            timestamp: iso_timestamp(now),
            network: selection.network,
            contract: selection.contract,
            package_path: absolute_path(&package_path).display().to_string(),
            package_id: outcome.package_id,
            publish_response: outcome.response,
        };

        let log_path = deploy_log_path(&self.logs_dir, now, selection.network, selection.contract);
        write_json_log(&log_path, &record)?;

        Ok((record, log_path))
    }
}

#[async_trait::async_trait]
impl CliCommand for DeployCmd {
    async fn call(&self) -> anyhow::Result<()> {
        let selection = {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            select_deployment(&mut input, &mut output)?
        };

        let signer = self.chain.keypair()?;
        let client = self.chain.client(selection.network);
        let builder = SuiCliBuilder {
            sui_binary: self.sui_bin.clone(),
        };

        let (record, log_path) = self
            .deploy_and_log(&client, &builder, &signer, selection, Utc::now())
            .await?;

        println!("{} {}", "Network:".bright_cyan(), record.network);
        println!("{} {}", "Contract:".bright_cyan(), record.contract);
        println!("{} {}", "Package ID:".bright_cyan(), record.package_id.bright_green());
        println!(
            "{} {}",
            "Log file:".bright_cyan(),
            absolute_path(&log_path).display()
        );

        Ok(())
    }
}
