//! Resource kinds recognized by the resolver.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Account,
    Network,
    Contract,
    Emulator,
    Deployment,
}

impl ResourceKind {
    /// All kinds, in the order they are advertised to users
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Account,
        ResourceKind::Network,
        ResourceKind::Emulator,
        ResourceKind::Contract,
        ResourceKind::Deployment,
    ];

    /// Literal accepted on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Account => "account",
            ResourceKind::Network => "network",
            ResourceKind::Contract => "contract",
            ResourceKind::Emulator => "emulator",
            ResourceKind::Deployment => "deployment",
        }
    }

    /// Capitalized singular used in not-found messages
    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::Account => "Account",
            ResourceKind::Network => "Network",
            ResourceKind::Contract => "Contract",
            ResourceKind::Emulator => "Emulator",
            ResourceKind::Deployment => "Deployment",
        }
    }

    /// Label prefixed to a listing
    pub fn list_label(self) -> &'static str {
        match self {
            ResourceKind::Account => "List of Accounts",
            ResourceKind::Network => "List of Networks",
            ResourceKind::Contract => "List of Contracts",
            ResourceKind::Emulator => "List of Emulators",
            ResourceKind::Deployment => "List of Networks Deployed",
        }
    }

    /// Placeholder shown for the name argument in usage examples
    pub fn name_placeholder(self) -> &'static str {
        match self {
            ResourceKind::Account => "<accountname>",
            ResourceKind::Network => "<networkname>",
            ResourceKind::Contract => "<contractname>",
            ResourceKind::Emulator => "<emulatorname>",
            ResourceKind::Deployment => "<networkname>",
        }
    }

    /// Comma-separated list of valid literals
    pub fn valid_literals() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a kind literal is not one of [`ResourceKind::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource kind '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for ResourceKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
