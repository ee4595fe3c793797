use sn_chain::{TransactionPlan, SUI_FRAMEWORK_ADDRESS};
use sn_utils_cli::GovernanceConfig;

use super::{object_arg, witness_type_tag};

#[derive(clap::Parser, Debug, Clone)]
#[clap(about = "Register an enclave from its Nitro attestation document")]
pub struct RegisterEnclaveCmd {}

impl RegisterEnclaveCmd {
    /// Loads the attestation on chain and feeds the result to `register_enclave`.
    pub fn build(
        &self,
        config: &GovernanceConfig,
        attestation: &[u8],
    ) -> anyhow::Result<TransactionPlan> {
        let witness = witness_type_tag(config)?;
        let mut plan = TransactionPlan::new();

        let nitro_attestation = plan.move_call(
            &format!("{SUI_FRAMEWORK_ADDRESS}::nitro_attestation::load_nitro_attestation"),
            vec![],
            vec![
                TransactionPlan::pure_bytes(attestation)?,
                object_arg(&config.clock_object_id)?,
            ],
        )?;

        plan.move_call(
            &format!("{}::enclave::register_enclave", config.enclave_package_id),
            vec![witness],
            vec![object_arg(&config.enclave_config_object_id)?, nitro_attestation],
        )?;

        Ok(plan)
    }
}
