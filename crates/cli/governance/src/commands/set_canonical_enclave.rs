use sn_chain::TransactionPlan;
use sn_utils_cli::GovernanceConfig;

use super::object_arg;

#[derive(clap::Parser, Debug, Clone)]
#[clap(about = "Make an enclave the canonical one in the protocol config")]
pub struct SetCanonicalEnclaveCmd {}

impl SetCanonicalEnclaveCmd {
    pub fn build(&self, config: &GovernanceConfig) -> anyhow::Result<TransactionPlan> {
        let mut plan = TransactionPlan::new();
        plan.move_call(
            &format!("{}::sentinel::set_canonical_enclave", config.app_package_id),
            vec![],
            vec![
                object_arg(&config.protocol_config_id)?,
                object_arg(&config.enclave_object_id)?,
                object_arg(&config.clock_object_id)?,
            ],
        )?;

        Ok(plan)
    }
}
