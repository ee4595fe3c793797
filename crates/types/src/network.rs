use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TypesError;

/// Sui environment targeted by a single tool invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Testnet,
    Devnet,
    Mainnet,
    Localnet,
}

impl Network {
    /// Networks offered by the interactive menus, in menu order.
    pub const PUBLIC: [Network; 3] = [Network::Testnet, Network::Devnet, Network::Mainnet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Mainnet => "mainnet",
            Network::Localnet => "localnet",
        }
    }

    /// Public full-node JSON-RPC endpoint for this network.
    pub fn fullnode_url(&self) -> &'static str {
        match self {
            Network::Testnet => "https://fullnode.testnet.sui.io:443",
            Network::Devnet => "https://fullnode.devnet.sui.io:443",
            Network::Mainnet => "https://fullnode.mainnet.sui.io:443",
            Network::Localnet => "http://127.0.0.1:9000",
        }
    }
}

impl FromStr for Network {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            "mainnet" => Ok(Network::Mainnet),
            "localnet" => Ok(Network::Localnet),
            _ => Err(TypesError::UnknownNetwork(s.to_string())),
        }
    }
}

impl AsRef<str> for Network {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Move packages that the interactive deployer knows how to publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Contract {
    App,
    Enclave,
    SentinelToken,
}

impl Contract {
    pub const ALL: [Contract; 3] = [Contract::App, Contract::Enclave, Contract::SentinelToken];

    /// Directory name of the package, relative to the packages root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Contract::App => "app",
            Contract::Enclave => "enclave",
            Contract::SentinelToken => "sentinel-token",
        }
    }
}

impl FromStr for Contract {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Contract::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TypesError::UnknownContract(s.to_string()))
    }
}

impl AsRef<str> for Contract {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
