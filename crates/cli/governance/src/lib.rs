pub mod attestation;
pub mod commands;

use clap::error::ErrorKind;
use commands::SubCommand;
use sn_utils_cli::{ChainArgs, CliCommand, ConfigArgs, EnvLayer, GovernanceConfig};

#[derive(clap::Parser, Debug)]
#[command(name = "sn-governance")]
#[command(about = "Sentinel governance CLI")]
pub struct GovernanceCli {
    #[command(subcommand)]
    pub command: Option<SubCommand>,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(flatten)]
    pub chain: ChainArgs,
}

impl GovernanceCli {
    /// Flags, then environment, then the config file.
    pub fn resolve_config(&self, env: &EnvLayer) -> anyhow::Result<GovernanceConfig> {
        Ok(GovernanceConfig::load(&self.config, env)?)
    }
}

#[async_trait::async_trait]
impl CliCommand for GovernanceCli {
    async fn call(&self) -> anyhow::Result<()> {
        let Some(command) = &self.command else {
            anyhow::bail!("No command given");
        };
        let config = self.resolve_config(&EnvLayer::from_process())?;
        command.call(&config, &self.chain).await
    }
}

/// Process exit code for a failed argument parse.
///
/// Help and version requests are not failures.
pub fn exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
