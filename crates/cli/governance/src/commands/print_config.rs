use sn_utils_cli::GovernanceConfig;

#[derive(clap::Parser, Debug, Clone)]
#[clap(about = "Print the resolved configuration without touching the chain")]
pub struct PrintConfigCmd {}

impl PrintConfigCmd {
    pub fn render(&self, config: &GovernanceConfig) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(config)?)
    }

    pub fn call(&self, config: &GovernanceConfig) -> anyhow::Result<()> {
        println!("{}", self.render(config)?);
        Ok(())
    }
}
