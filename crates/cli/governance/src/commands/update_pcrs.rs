use sn_chain::TransactionPlan;
use sn_types::hex_to_bytes;
use sn_utils_cli::GovernanceConfig;

use super::{object_arg, witness_type_tag};

#[derive(clap::Parser, Debug, Clone)]
#[clap(about = "Replace the PCR values stored in the enclave config")]
pub struct UpdatePcrsCmd {}

impl UpdatePcrsCmd {
    pub fn build(&self, config: &GovernanceConfig) -> anyhow::Result<TransactionPlan> {
        let [pcr0, pcr1, pcr2] = config.pcrs()?;
        let mut arguments = vec![
            object_arg(&config.enclave_config_object_id)?,
            object_arg(&config.cap_object_id)?,
        ];
        for pcr in [pcr0, pcr1, pcr2] {
            arguments.push(TransactionPlan::pure_bytes(&hex_to_bytes(pcr)?)?);
        }

        let mut plan = TransactionPlan::new();
        plan.move_call(
            &format!("{}::enclave::update_pcrs", config.enclave_package_id),
            vec![witness_type_tag(config)?],
            arguments,
        )?;

        Ok(plan)
    }
}
