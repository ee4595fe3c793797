use clap::Parser;
use sn_deploy_cli::DeployTokenCmd;
use sn_utils_cli::CliCommand;

#[derive(Parser, Debug)]
#[command(name = "sn-deploy-token")]
#[command(about = "Publish the sentinel-token package to testnet")]
struct Cli {
    #[command(flatten)]
    command: DeployTokenCmd,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cli.command.call().await?;
    Ok(())
}
