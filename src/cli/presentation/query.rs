//! Query presentation: text, json and table renderings of a query outcome.

use crate::error::ConfqError;
use crate::query::{format_contract_deployment, QueryOutcome, ResourceKind};
use crate::snapshot::ConfigurationSnapshot;
use comfy_table::Table;
use serde_json::json;

/// The outcome's canonical text; this is what scripts should match on.
pub fn format_outcome_text(outcome: &QueryOutcome) -> String {
    outcome.to_string()
}

pub fn format_outcome_json(outcome: &QueryOutcome) -> Result<String, ConfqError> {
    let mut value = serde_json::to_value(outcome)?;
    if let Some(object) = value.as_object_mut() {
        object.insert("found".to_string(), json!(outcome.is_found()));
        object.insert("text".to_string(), json!(outcome.to_string()));
    }
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Listings become a table of the kind's key columns; other outcomes fall back to text.
pub fn format_outcome_table(outcome: &QueryOutcome, snapshot: &ConfigurationSnapshot) -> String {
    match outcome {
        QueryOutcome::Listing { kind, .. } => format_listing_table(*kind, snapshot),
        other => format_outcome_text(other),
    }
}

fn format_listing_table(kind: ResourceKind, snapshot: &ConfigurationSnapshot) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    match kind {
        ResourceKind::Account => {
            table.set_header(vec!["Name", "Address", "Key Type", "Key Index"]);
            for a in snapshot.accounts() {
                table.add_row(vec![
                    a.name.clone(),
                    a.address.clone(),
                    a.key.key_type.clone(),
                    a.key.index.to_string(),
                ]);
            }
        }
        ResourceKind::Network => {
            table.set_header(vec!["Name", "Host"]);
            for n in snapshot.networks() {
                table.add_row(vec![&n.name, &n.host]);
            }
        }
        ResourceKind::Contract => {
            table.set_header(vec!["Name", "Source", "Network", "Alias"]);
            for c in snapshot.contracts() {
                table.add_row(vec![
                    c.name.clone(),
                    c.source.clone(),
                    c.network.clone(),
                    c.alias.clone().unwrap_or_else(|| "-".to_string()),
                ]);
            }
        }
        ResourceKind::Emulator => {
            table.set_header(vec!["Name", "Port", "Service Account"]);
            for e in snapshot.emulators() {
                table.add_row(vec![
                    e.name.clone(),
                    e.port.to_string(),
                    e.service_account.clone(),
                ]);
            }
        }
        ResourceKind::Deployment => {
            table.set_header(vec!["Network", "Account", "Contracts"]);
            for d in snapshot.deployments() {
                let contracts: Vec<String> =
                    d.contracts.iter().map(format_contract_deployment).collect();
                table.add_row(vec![d.network.clone(), d.account.clone(), contracts.join(", ")]);
            }
        }
    }
    format!("{}\n{}", kind.list_label(), table)
}
