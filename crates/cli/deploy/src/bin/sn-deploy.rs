use clap::Parser;
use sn_deploy_cli::DeployCmd;
use sn_utils_cli::CliCommand;

#[derive(Parser, Debug)]
#[command(name = "sn-deploy")]
#[command(about = "Interactively publish a Sentinel Move package and log the result")]
struct Cli {
    #[command(flatten)]
    command: DeployCmd,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cli.command.call().await?;
    Ok(())
}
