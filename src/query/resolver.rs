//! Resource Query Resolver
//!
//! Every kind shares the same list / detail-by-name shape. A [`ResourceView`]
//! captures what differs per kind (collection accessor, identifier, detail
//! formatter) and [`view_for`] is the table that selects one by kind.

use super::detail;
use super::kind::ResourceKind;
use super::outcome::QueryOutcome;
use crate::snapshot::{Account, ConfigurationSnapshot, Contract, Deployment, Emulator, Network};
use tracing::debug;

/// Which entries detail mode returns when several share an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchPolicy {
    First,
    All,
}

struct ResourceView<T: 'static> {
    collection: fn(&ConfigurationSnapshot) -> &[T],
    identifier: fn(&T) -> &str,
    detail: fn(&T) -> String,
    matches: MatchPolicy,
}

/// Object-safe face of a [`ResourceView`], so views of different entity types share one table
trait ResourceQuery: Sync {
    fn list(&self, snapshot: &ConfigurationSnapshot) -> Vec<String>;
    fn describe(&self, snapshot: &ConfigurationSnapshot, name: &str) -> Vec<String>;
}

impl<T: 'static> ResourceQuery for ResourceView<T> {
    fn list(&self, snapshot: &ConfigurationSnapshot) -> Vec<String> {
        (self.collection)(snapshot)
            .iter()
            .map(|entry| (self.identifier)(entry).to_string())
            .collect()
    }

    fn describe(&self, snapshot: &ConfigurationSnapshot, name: &str) -> Vec<String> {
        let mut matching = (self.collection)(snapshot)
            .iter()
            .filter(|entry| (self.identifier)(*entry) == name);
        match self.matches {
            MatchPolicy::First => matching.next().map(self.detail).into_iter().collect(),
            MatchPolicy::All => matching.map(self.detail).collect(),
        }
    }
}

fn account_name(account: &Account) -> &str {
    &account.name
}

fn network_name(network: &Network) -> &str {
    &network.name
}

fn contract_name(contract: &Contract) -> &str {
    &contract.name
}

fn emulator_name(emulator: &Emulator) -> &str {
    &emulator.name
}

// Deployments have no name of their own; they are addressed by target network.
fn deployment_network(deployment: &Deployment) -> &str {
    &deployment.network
}

static ACCOUNTS: ResourceView<Account> = ResourceView {
    collection: ConfigurationSnapshot::accounts,
    identifier: account_name,
    detail: detail::format_account,
    matches: MatchPolicy::First,
};

static NETWORKS: ResourceView<Network> = ResourceView {
    collection: ConfigurationSnapshot::networks,
    identifier: network_name,
    detail: detail::format_network,
    matches: MatchPolicy::First,
};

static CONTRACTS: ResourceView<Contract> = ResourceView {
    collection: ConfigurationSnapshot::contracts,
    identifier: contract_name,
    detail: detail::format_contract,
    matches: MatchPolicy::First,
};

static EMULATORS: ResourceView<Emulator> = ResourceView {
    collection: ConfigurationSnapshot::emulators,
    identifier: emulator_name,
    detail: detail::format_emulator,
    matches: MatchPolicy::First,
};

static DEPLOYMENTS: ResourceView<Deployment> = ResourceView {
    collection: ConfigurationSnapshot::deployments,
    identifier: deployment_network,
    detail: detail::format_deployment,
    matches: MatchPolicy::All,
};

fn view_for(kind: ResourceKind) -> &'static dyn ResourceQuery {
    match kind {
        ResourceKind::Account => &ACCOUNTS,
        ResourceKind::Network => &NETWORKS,
        ResourceKind::Contract => &CONTRACTS,
        ResourceKind::Emulator => &EMULATORS,
        ResourceKind::Deployment => &DEPLOYMENTS,
    }
}

/// Resolve a `(kind, name)` request from raw command-line literals.
///
/// A missing kind yields [`QueryOutcome::Usage`] and an unrecognized one
/// [`QueryOutcome::InvalidKind`], whatever the snapshot holds.
pub fn resolve(
    kind: Option<&str>,
    name: Option<&str>,
    snapshot: &ConfigurationSnapshot,
) -> QueryOutcome {
    let Some(kind) = kind else {
        debug!("No resource kind given");
        return QueryOutcome::Usage;
    };
    match kind.parse::<ResourceKind>() {
        Ok(kind) => resolve_kind(kind, name, snapshot),
        Err(_) => {
            debug!(kind, "Unrecognized resource kind");
            QueryOutcome::InvalidKind {
                given: kind.to_string(),
            }
        }
    }
}

/// Resolve a request for an already-parsed kind.
pub fn resolve_kind(
    kind: ResourceKind,
    name: Option<&str>,
    snapshot: &ConfigurationSnapshot,
) -> QueryOutcome {
    let view = view_for(kind);
    match name {
        None => {
            let identifiers = view.list(snapshot);
            debug!(kind = %kind, count = identifiers.len(), "Listing resources");
            QueryOutcome::Listing { kind, identifiers }
        }
        Some(name) => {
            let entries = view.describe(snapshot, name);
            debug!(kind = %kind, name, matches = entries.len(), "Resolving resource by name");
            if entries.is_empty() {
                QueryOutcome::NotFound {
                    kind,
                    name: name.to_string(),
                }
            } else {
                QueryOutcome::Detail {
                    kind,
                    name: name.to_string(),
                    entries,
                }
            }
        }
    }
}
