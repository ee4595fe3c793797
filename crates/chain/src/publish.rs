use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Deserialize;
use serde_json::Value;
use sui_sdk_types::ObjectId;

use crate::{
    parse_object_id, sign_and_execute, AdminKeypair, ChainClient, ChainError, TransactionPlan,
};

pub const DEFAULT_PUBLISH_GAS_BUDGET: u64 = 500_000_000;

/// Output of `sui move build --dump-bytecode-as-base64`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompiledPackage {
    pub modules: Vec<String>,
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub digest: Vec<u8>,
}

impl CompiledPackage {
    pub fn module_bytes(&self) -> Result<Vec<Vec<u8>>, ChainError> {
        self.modules
            .iter()
            .map(|module| {
                BASE64
                    .decode(module)
                    .map_err(|e| ChainError::Build(format!("module is not valid base64: {e}")))
            })
            .collect()
    }

    pub fn dependency_ids(&self) -> Result<Vec<ObjectId>, ChainError> {
        self.dependencies
            .iter()
            .map(|dep| parse_object_id(dep.as_str()))
            .collect()
    }
}

/// Compiles a Move package into publishable bytecode.
#[async_trait]
pub trait PackageBuilder: Send + Sync {
    async fn build(&self, package_path: &Path) -> Result<CompiledPackage, ChainError>;
}

/// Builds packages with the `sui` command-line tool.
#[derive(Debug, Clone)]
pub struct SuiCliBuilder {
    pub sui_binary: PathBuf,
}

impl Default for SuiCliBuilder {
    fn default() -> Self {
        Self {
            sui_binary: PathBuf::from("sui"),
        }
    }
}

#[async_trait]
impl PackageBuilder for SuiCliBuilder {
    async fn build(&self, package_path: &Path) -> Result<CompiledPackage, ChainError> {
        log::info!("building Move package at {}", package_path.display());

        let output = tokio::process::Command::new(&self.sui_binary)
            .args(["move", "build", "--dump-bytecode-as-base64", "--path"])
            .arg(package_path)
            .output()
            .await?;

        if !output.status.success() {
            return Err(ChainError::Build(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        parse_build_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Extracts the bytecode JSON from the compiler's stdout, ignoring any
/// progress lines printed before it.
pub fn parse_build_output(stdout: &str) -> Result<CompiledPackage, ChainError> {
    let json_line = stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| line.starts_with('{'))
        .ok_or_else(|| ChainError::Build("compiler printed no bytecode".to_string()))?;

    serde_json::from_str(json_line)
        .map_err(|e| ChainError::Build(format!("unreadable compiler output: {e}")))
}

/// Result of a successful publish, handed back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishOutcome {
    pub package_id: String,
    pub response: Value,
}

/// Finds the package id among the object changes of a publish response.
pub fn published_package_id(response: &Value) -> Result<String, ChainError> {
    response
        .get("objectChanges")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .find(|change| change.get("type").and_then(Value::as_str) == Some("published"))
        .and_then(|change| change.get("packageId"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ChainError::MissingPackageId)
}

/// Builds and publishes the package at `package_path`, sending the upgrade
/// cap back to the admin.
pub async fn publish_package<C, B>(
    client: &C,
    package_builder: &B,
    signer: &AdminKeypair,
    package_path: &Path,
    gas_budget: u64,
) -> Result<PublishOutcome, ChainError>
where
    C: ChainClient + ?Sized,
    B: PackageBuilder + ?Sized,
{
    let compiled = package_builder.build(package_path).await?;

    let mut plan = TransactionPlan::new();
    plan.publish(compiled.module_bytes()?, compiled.dependency_ids()?);

    let response = sign_and_execute(client, signer, plan, gas_budget).await?;
    let package_id = published_package_id(&response)?;

    Ok(PublishOutcome {
        package_id,
        response,
    })
}
