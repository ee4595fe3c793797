use clap::Parser;
use sn_inventory_cli::InventoryCmd;
use sn_utils_cli::CliCommand;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cmd = InventoryCmd::parse();
    cmd.call().await?;
    Ok(())
}
