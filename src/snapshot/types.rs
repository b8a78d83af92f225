//! Resource entities held by a configuration snapshot.

use serde::{Deserialize, Serialize};

/// Key descriptor attached to an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountKey {
    /// Key encoding type (e.g. "hex", "file", "google-kms")
    #[serde(rename = "type", default = "default_key_type")]
    pub key_type: String,

    /// Key index on the account
    #[serde(default)]
    pub index: u32,

    #[serde(rename = "signatureAlgorithm", default = "default_signature_algorithm")]
    pub signature_algorithm: String,

    #[serde(rename = "hashAlgorithm", default = "default_hash_algorithm")]
    pub hash_algorithm: String,

    /// Private key material or a reference to it (env var, file path, KMS resource)
    #[serde(rename = "privateKey", default)]
    pub private_key: String,
}

fn default_key_type() -> String {
    "hex".to_string()
}

fn default_signature_algorithm() -> String {
    "ECDSA_P256".to_string()
}

fn default_hash_algorithm() -> String {
    "SHA3_256".to_string()
}

impl AccountKey {
    /// Hex key with default algorithms at index 0.
    pub fn hex(private_key: impl Into<String>) -> Self {
        Self {
            key_type: default_key_type(),
            index: 0,
            signature_algorithm: default_signature_algorithm(),
            hash_algorithm: default_hash_algorithm(),
            private_key: private_key.into(),
        }
    }
}

impl Default for AccountKey {
    fn default() -> Self {
        Self::hex(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub key: AccountKey,
}

impl Account {
    pub fn new(name: impl Into<String>, address: impl Into<String>, key: AccountKey) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    pub host: String,
}

impl Network {
    pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub name: String,
    /// Path to the contract source
    pub source: String,
    /// Network the contract targets (by name, not checked)
    #[serde(default)]
    pub network: String,
    /// Address alias on the target network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Contract {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        network: impl Into<String>,
        alias: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            network: network.into(),
            alias,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emulator {
    pub name: String,
    pub port: u16,
    #[serde(rename = "serviceAccount")]
    pub service_account: String,
}

impl Emulator {
    pub fn new(name: impl Into<String>, port: u16, service_account: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            port,
            service_account: service_account.into(),
        }
    }
}

/// Constructor argument for a deployed contract, as a typed Cadence value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractArgument {
    #[serde(rename = "type")]
    pub type_name: String,
    pub value: serde_json::Value,
}

impl ContractArgument {
    pub fn new(type_name: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            type_name: type_name.into(),
            value,
        }
    }
}

/// Reference to a contract inside a deployment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDeployment {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<ContractArgument>,
}

impl ContractDeployment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(name: impl Into<String>, args: Vec<ContractArgument>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// Contracts an account deploys on a network.
///
/// Keyed by `network` for queries; several deployments may share a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    pub network: String,
    pub account: String,
    #[serde(default)]
    pub contracts: Vec<ContractDeployment>,
}

impl Deployment {
    pub fn new(
        network: impl Into<String>,
        account: impl Into<String>,
        contracts: Vec<ContractDeployment>,
    ) -> Self {
        Self {
            network: network.into(),
            account: account.into(),
            contracts,
        }
    }
}
