use clap::{CommandFactory, Parser};
use sn_governance_cli::{exit_code, GovernanceCli};
use sn_utils_cli::CliCommand;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = match GovernanceCli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = exit_code(&err);
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if cli.command.is_none() {
        let _ = GovernanceCli::command().print_help();
        std::process::exit(1);
    }

    cli.call().await
}
