use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sn_types::{normalize_hex, normalize_object_id, Network, TypesError};
use thiserror::Error;

use crate::DEFAULT_CONFIG_FILE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration value: pass --{flag}, set {env} or add it to the config file")]
    Missing {
        flag: &'static str,
        env: &'static str,
    },

    #[error("Invalid value for --{flag}: {source}")]
    InvalidHex {
        flag: &'static str,
        #[source]
        source: TypesError,
    },

    #[error("Invalid gas budget: {0}")]
    InvalidGasBudget(String),

    #[error(transparent)]
    InvalidNetwork(#[from] TypesError),

    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Governance flags. Each one overrides the environment and the config file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// testnet, devnet, mainnet or localnet (default: testnet)
    #[arg(long, global = true)]
    pub network: Option<String>,

    #[arg(long, global = true)]
    pub gas_budget: Option<String>,

    /// Config file (default: ./script.config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub pcr0: Option<String>,

    #[arg(long, global = true)]
    pub pcr1: Option<String>,

    #[arg(long, global = true)]
    pub pcr2: Option<String>,

    #[arg(long, global = true)]
    pub enclave_url: Option<String>,

    #[arg(long, global = true)]
    pub module_name: Option<String>,

    #[arg(long, global = true)]
    pub otw_name: Option<String>,

    #[arg(long, global = true)]
    pub enclave_package_id: Option<String>,

    #[arg(long, global = true)]
    pub app_package_id: Option<String>,

    #[arg(long, global = true)]
    pub cap_object_id: Option<String>,

    #[arg(long, global = true)]
    pub enclave_config_object_id: Option<String>,

    #[arg(long, global = true)]
    pub protocol_config_id: Option<String>,

    #[arg(long, global = true)]
    pub enclave_object_id: Option<String>,

    #[arg(long, global = true)]
    pub clock_object_id: Option<String>,

    /// Attestation document, skipping the enclave fetch (register-enclave only)
    #[arg(long, global = true)]
    pub attestation_hex: Option<String>,
}

/// Snapshot of the process environment used as the middle configuration layer.
#[derive(Debug, Clone, Default)]
pub struct EnvLayer(HashMap<String, String>);

impl EnvLayer {
    pub fn from_process() -> Self {
        Self(std::env::vars().collect())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvLayer {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// JSON config file. Keys are upper-case, matching the environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct ConfigFile {
    pub pcr0: Option<String>,
    pub pcr1: Option<String>,
    pub pcr2: Option<String>,
    pub enclave_url: Option<String>,
    pub module_name: Option<String>,
    pub otw_name: Option<String>,
    pub enclave_package_id: Option<String>,
    pub cap_object_id: Option<String>,
    pub enclave_config_object_id: Option<String>,
    pub app_package_id: Option<String>,
    pub agent_registry: Option<String>,
    pub protocol_config_id: Option<String>,
    pub enclave_object_id: Option<String>,
    pub clock_object_id: Option<String>,
    /// Number or numeric string.
    pub gas_budget: Option<Value>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the file named by `--config`, or the default file when present.
    ///
    /// A missing default file is an empty layer; a missing explicit file is an error.
    pub fn load_layer(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) if !path.exists() => Err(ConfigError::FileNotFound(path.to_path_buf())),
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load(default)
                } else {
                    log::debug!("no {DEFAULT_CONFIG_FILE} found, using flags and environment only");
                    Ok(Self::default())
                }
            }
        }
    }

    fn gas_budget(&self) -> Option<String> {
        match self.gas_budget.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Resolved parameters of a governance transaction.
///
/// Object and package ids are needed by every command and are required here.
/// PCRs, the enclave URL and the witness names are only checked by the
/// commands that use them, see [GovernanceConfig::pcrs].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceConfig {
    pub network: Network,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcr0: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcr1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcr2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enclave_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otw_name: Option<String>,
    pub enclave_package_id: String,
    pub app_package_id: String,
    pub cap_object_id: String,
    pub enclave_config_object_id: String,
    pub protocol_config_id: String,
    pub enclave_object_id: String,
    pub clock_object_id: String,
    pub gas_budget: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attestation_hex: Option<String>,
}

impl GovernanceConfig {
    /// Loads the config file named by `args` and resolves every field.
    pub fn load(args: &ConfigArgs, env: &EnvLayer) -> Result<Self, ConfigError> {
        let file = ConfigFile::load_layer(args.config.as_deref())?;
        Self::resolve(args, env, &file)
    }

    /// Merges the layers: flag, then environment variable, then config file.
    pub fn resolve(args: &ConfigArgs, env: &EnvLayer, file: &ConfigFile) -> Result<Self, ConfigError> {
        let layers = Layers { env };

        let network = match layers.pick(args.network.as_deref(), "NETWORK", None) {
            Some(raw) => raw.parse()?,
            None => Network::default(),
        };

        let gas_budget_file = file.gas_budget();
        let raw_gas_budget = layers.require(
            args.gas_budget.as_deref(),
            "gas-budget",
            "GAS_BUDGET",
            gas_budget_file.as_deref(),
        )?;
        let gas_budget = raw_gas_budget
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidGasBudget(raw_gas_budget.clone()))?;

        let hex = |flag: &'static str, env_key: &'static str, cli: &Option<String>, file: &Option<String>| {
            layers
                .pick(cli.as_deref(), env_key, file.as_deref())
                .map(|raw| {
                    normalize_hex(&raw).map_err(|source| ConfigError::InvalidHex { flag, source })
                })
                .transpose()
        };
        let object_id = |flag: &'static str, env_key: &'static str, cli: &Option<String>, file: &Option<String>| {
            layers
                .require(cli.as_deref(), flag, env_key, file.as_deref())
                .map(|raw| normalize_object_id(&raw))
        };
        let text = |env_key: &'static str, cli: &Option<String>, file: &Option<String>| {
            layers
                .pick(cli.as_deref(), env_key, file.as_deref())
                .map(|raw| raw.trim().to_string())
        };

        let attestation_hex = match args.attestation_hex.as_deref().filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(normalize_hex(raw).map_err(|source| ConfigError::InvalidHex {
                flag: "attestation-hex",
                source,
            })?),
            None => None,
        };

        Ok(Self {
            network,
            pcr0: hex("pcr0", "PCR0", &args.pcr0, &file.pcr0)?,
            pcr1: hex("pcr1", "PCR1", &args.pcr1, &file.pcr1)?,
            pcr2: hex("pcr2", "PCR2", &args.pcr2, &file.pcr2)?,
            enclave_url: text("ENCLAVE_URL", &args.enclave_url, &file.enclave_url),
            module_name: text("MODULE_NAME", &args.module_name, &file.module_name),
            otw_name: text("OTW_NAME", &args.otw_name, &file.otw_name),
            enclave_package_id: object_id(
                "enclave-package-id",
                "ENCLAVE_PACKAGE_ID",
                &args.enclave_package_id,
                &file.enclave_package_id,
            )?,
            app_package_id: object_id(
                "app-package-id",
                "APP_PACKAGE_ID",
                &args.app_package_id,
                &file.app_package_id,
            )?,
            cap_object_id: object_id(
                "cap-object-id",
                "CAP_OBJECT_ID",
                &args.cap_object_id,
                &file.cap_object_id,
            )?,
            enclave_config_object_id: object_id(
                "enclave-config-object-id",
                "ENCLAVE_CONFIG_OBJECT_ID",
                &args.enclave_config_object_id,
                &file.enclave_config_object_id,
            )?,
            protocol_config_id: object_id(
                "protocol-config-id",
                "PROTOCOL_CONFIG_ID",
                &args.protocol_config_id,
                &file.protocol_config_id,
            )?,
            enclave_object_id: object_id(
                "enclave-object-id",
                "ENCLAVE_OBJECT_ID",
                &args.enclave_object_id,
                &file.enclave_object_id,
            )?,
            clock_object_id: object_id(
                "clock-object-id",
                "CLOCK_OBJECT_ID",
                &args.clock_object_id,
                &file.clock_object_id,
            )?,
            gas_budget,
            attestation_hex,
        })
    }

    /// The three PCRs, in order. Fails on the first one not configured.
    pub fn pcrs(&self) -> Result<[&str; 3], ConfigError> {
        Ok([
            required(&self.pcr0, "pcr0", "PCR0")?,
            required(&self.pcr1, "pcr1", "PCR1")?,
            required(&self.pcr2, "pcr2", "PCR2")?,
        ])
    }

    pub fn required_enclave_url(&self) -> Result<&str, ConfigError> {
        required(&self.enclave_url, "enclave-url", "ENCLAVE_URL")
    }

    /// One-time witness type of the app package, `<app>::<module>::<otw>`.
    pub fn witness_type(&self) -> Result<String, ConfigError> {
        let module = required(&self.module_name, "module-name", "MODULE_NAME")?;
        let otw = required(&self.otw_name, "otw-name", "OTW_NAME")?;
        Ok(format!("{}::{module}::{otw}", self.app_package_id))
    }
}

fn required<'a>(
    value: &'a Option<String>,
    flag: &'static str,
    env: &'static str,
) -> Result<&'a str, ConfigError> {
    value.as_deref().ok_or(ConfigError::Missing { flag, env })
}

struct Layers<'a> {
    env: &'a EnvLayer,
}

impl Layers<'_> {
    /// First non-empty value among flag, environment and file.
    fn pick(&self, cli: Option<&str>, env_key: &str, file: Option<&str>) -> Option<String> {
        [cli, self.env.get(env_key), file]
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty())
            .map(str::to_string)
    }

    fn require(
        &self,
        cli: Option<&str>,
        flag: &'static str,
        env_key: &'static str,
        file: Option<&str>,
    ) -> Result<String, ConfigError> {
        self.pick(cli, env_key, file)
            .ok_or(ConfigError::Missing { flag, env: env_key })
    }
}
