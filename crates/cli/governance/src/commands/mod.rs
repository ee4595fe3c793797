mod print_config;
mod register_enclave;
mod set_canonical_enclave;
mod update_pcrs;

use anyhow::Context;
use clap::Parser;
use colored::*;
use serde_json::Value;
use sn_chain::{
    parse_address, sign_and_execute, AdminKeypair, ChainClient, PlannedArgument, TransactionPlan,
    TypeTag,
};
use sn_utils_cli::{ChainArgs, GovernanceConfig};

pub use print_config::PrintConfigCmd;
pub use register_enclave::RegisterEnclaveCmd;
pub use set_canonical_enclave::SetCanonicalEnclaveCmd;
pub use update_pcrs::UpdatePcrsCmd;

use crate::attestation::resolve_attestation;

#[derive(Debug, Parser, Clone)]
pub enum SubCommand {
    // Update the PCRs of the enclave config
    #[clap(name = "update-pcrs", bin_name = "update-pcrs")]
    UpdatePcrs(UpdatePcrsCmd),
    // Register an enclave from its attestation
    #[clap(name = "register-enclave", bin_name = "register-enclave")]
    RegisterEnclave(RegisterEnclaveCmd),
    // Promote an enclave to canonical
    #[clap(name = "set-canonical-enclave", bin_name = "set-canonical-enclave")]
    SetCanonicalEnclave(SetCanonicalEnclaveCmd),
    // Show the resolved configuration
    #[clap(name = "print-config", bin_name = "print-config")]
    PrintConfig(PrintConfigCmd),
}

impl SubCommand {
    pub async fn call(&self, config: &GovernanceConfig, chain: &ChainArgs) -> anyhow::Result<()> {
        let plan = match self {
            Self::PrintConfig(cmd) => return cmd.call(config),
            Self::UpdatePcrs(cmd) => cmd.build(config)?,
            Self::RegisterEnclave(cmd) => {
                // Fail on a missing witness before contacting the enclave.
                witness_type_tag(config)?;
                let attestation = resolve_attestation(&reqwest::Client::new(), config).await?;
                cmd.build(config, &attestation)?
            }
            Self::SetCanonicalEnclave(cmd) => cmd.build(config)?,
        };

        let signer = chain.keypair()?;
        let client = chain.client(config.network);
        submit_and_report(&client, &signer, plan, config.gas_budget).await?;

        Ok(())
    }
}

/// Signs and submits `plan`, then prints the node's full response.
pub async fn submit_and_report<C>(
    client: &C,
    signer: &AdminKeypair,
    plan: TransactionPlan,
    gas_budget: u64,
) -> anyhow::Result<Value>
where
    C: ChainClient + ?Sized,
{
    let response = sign_and_execute(client, signer, plan, gas_budget)
        .await
        .context("Transaction submission failed")?;

    if let Some(digest) = response.get("digest").and_then(Value::as_str) {
        log::info!("transaction {digest} executed");
    }
    println!("{}", serde_json::to_string_pretty(&response)?);

    if let Some(error) = response
        .pointer("/effects/status/error")
        .and_then(Value::as_str)
    {
        eprintln!("{} {}", "Transaction failed on chain:".red(), error);
    }

    Ok(response)
}

fn object_arg(raw: &str) -> anyhow::Result<PlannedArgument> {
    TransactionPlan::object(raw).with_context(|| format!("Invalid object id: {raw}"))
}

fn witness_type_tag(config: &GovernanceConfig) -> anyhow::Result<TypeTag> {
    let witness = config.witness_type()?;
    let invalid = || anyhow::anyhow!("Invalid witness type: {witness}");

    let (package, path) = witness.split_once("::").ok_or_else(invalid)?;
    let package = parse_address(package).map_err(|_| invalid())?;
    format!("{package}::{path}")
        .parse()
        .map_err(|_| invalid())
}
