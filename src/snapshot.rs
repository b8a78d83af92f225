//! Configuration Snapshot
//!
//! Read-only view of a project's resource collections (accounts, networks,
//! contracts, emulators, deployments). A snapshot is built once per invocation
//! by a [`SnapshotProvider`] and handed to the query resolver by reference.
//! Collections keep the order in which they were loaded.

mod provider;
mod types;

pub use provider::{FileSnapshotProvider, InMemorySnapshotProvider, SnapshotProvider};
pub use types::{
    Account, AccountKey, Contract, ContractArgument, ContractDeployment, Deployment, Emulator,
    Network,
};

use serde::{Deserialize, Serialize};

/// Complete set of resource collections available to one command invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationSnapshot {
    #[serde(default)]
    accounts: Vec<Account>,

    #[serde(default)]
    networks: Vec<Network>,

    #[serde(default)]
    contracts: Vec<Contract>,

    #[serde(default)]
    emulators: Vec<Emulator>,

    #[serde(default)]
    deployments: Vec<Deployment>,
}

impl ConfigurationSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(mut self, accounts: Vec<Account>) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn with_networks(mut self, networks: Vec<Network>) -> Self {
        self.networks = networks;
        self
    }

    pub fn with_contracts(mut self, contracts: Vec<Contract>) -> Self {
        self.contracts = contracts;
        self
    }

    pub fn with_emulators(mut self, emulators: Vec<Emulator>) -> Self {
        self.emulators = emulators;
        self
    }

    pub fn with_deployments(mut self, deployments: Vec<Deployment>) -> Self {
        self.deployments = deployments;
        self
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    pub fn emulators(&self) -> &[Emulator] {
        &self.emulators
    }

    pub fn deployments(&self) -> &[Deployment] {
        &self.deployments
    }

    /// Total number of entries across all collections
    pub fn resource_count(&self) -> usize {
        self.accounts.len()
            + self.networks.len()
            + self.contracts.len()
            + self.emulators.len()
            + self.deployments.len()
    }
}
