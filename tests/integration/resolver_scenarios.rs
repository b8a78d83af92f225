//! Resolver behavior across all resource kinds, driven through the public API.

use confq::query::{resolve, QueryOutcome, ResourceKind};
use confq::snapshot::{
    Account, AccountKey, ConfigurationSnapshot, Contract, ContractArgument, ContractDeployment,
    Deployment, Emulator, Network,
};
use serde_json::json;

fn populated_snapshot() -> ConfigurationSnapshot {
    ConfigurationSnapshot::new()
        .with_accounts(vec![
            Account::new("alice", "0xf8d6e0586b0a20c7", AccountKey::hex("aa11")),
            Account::new("bob", "0x01cf0e2f2f715450", AccountKey::hex("bb22")),
        ])
        .with_networks(vec![
            Network::new("emulator", "127.0.0.1:3569"),
            Network::new("testnet", "access.testnet.example:9000"),
        ])
        .with_contracts(vec![Contract::new(
            "FungibleToken",
            "./cadence/FungibleToken.cdc",
            "testnet",
            Some("0x9a0766d93b6608b7".to_string()),
        )])
        .with_emulators(vec![Emulator::new("default", 3569, "alice")])
        .with_deployments(vec![Deployment::new(
            "emulator",
            "alice",
            vec![ContractDeployment::with_args(
                "HelloWorld",
                vec![ContractArgument::new("String", json!("Hello"))],
            )],
        )])
}

#[test]
fn test_scenario_account_listing() {
    let snapshot = ConfigurationSnapshot::new().with_accounts(vec![
        Account::new("alice", "0x01", AccountKey::default()),
        Account::new("bob", "0x02", AccountKey::default()),
    ]);
    assert_eq!(
        resolve(Some("account"), None, &snapshot).to_string(),
        "List of Accounts: alice, bob"
    );
}

#[test]
fn test_scenario_missing_account() {
    let outcome = resolve(Some("account"), Some("carol"), &populated_snapshot());
    assert_eq!(outcome.to_string(), "Account carol does not exist");
    assert!(!outcome.is_found());
}

#[test]
fn test_scenario_network_detail() {
    let snapshot = ConfigurationSnapshot::new()
        .with_networks(vec![Network::new("testnet", "access.testnet.example:9000")]);
    let outcome = resolve(Some("network"), Some("testnet"), &snapshot);
    assert!(outcome.is_found());
    let text = outcome.to_string();
    assert!(text.contains("Network Name: testnet"));
    assert!(text.contains("Host: access.testnet.example:9000"));
}

#[test]
fn test_scenario_empty_emulators() {
    let outcome = resolve(Some("emulator"), None, &ConfigurationSnapshot::new());
    assert_eq!(outcome.to_string(), "List of Emulators: ");
}

#[test]
fn test_scenario_usage_lists_examples_for_every_kind() {
    let outcome = resolve(None, None, &populated_snapshot());
    assert_eq!(outcome, QueryOutcome::Usage);
    let text = outcome.to_string();
    for kind in ["account", "network", "contract", "emulator", "deployment"] {
        assert!(
            text.contains(&format!("confq config view {}", kind)),
            "usage should show an example for {}",
            kind
        );
    }
}

#[test]
fn test_scenario_invalid_kind() {
    let text = resolve(Some("widget"), None, &populated_snapshot()).to_string();
    assert!(text.contains("account, network, emulator, contract, deployment"));
}

#[test]
fn test_invalid_kind_ignores_snapshot_contents() {
    let empty = resolve(Some("widget"), Some("x"), &ConfigurationSnapshot::new());
    let full = resolve(Some("widget"), Some("x"), &populated_snapshot());
    assert_eq!(empty.to_string(), full.to_string());
    assert!(matches!(empty, QueryOutcome::InvalidKind { ref given } if given == "widget"));
}

#[test]
fn test_empty_listing_for_every_kind() {
    let snapshot = ConfigurationSnapshot::new();
    for kind in ResourceKind::ALL {
        let outcome = resolve(Some(kind.as_str()), None, &snapshot);
        assert_eq!(outcome.to_string(), format!("{}: ", kind.list_label()));
    }
}

#[test]
fn test_not_found_mentions_kind_and_name_for_every_kind() {
    let snapshot = populated_snapshot();
    for kind in ResourceKind::ALL {
        let outcome = resolve(Some(kind.as_str()), Some("nonexistent"), &snapshot);
        assert!(
            matches!(outcome, QueryOutcome::NotFound { .. }),
            "{} should report not found",
            kind
        );
        let text = outcome.to_string();
        assert!(text.contains(kind.title()));
        assert!(text.contains("nonexistent"));
    }
}

#[test]
fn test_account_detail_has_every_attribute() {
    let text = resolve(Some("account"), Some("bob"), &populated_snapshot()).to_string();
    assert_eq!(
        text,
        "Account Name: bob\nAddress: 0x01cf0e2f2f715450\nKey Properties:\nType: hex, Index: 0, Signature Algorithm: ECDSA_P256, Hash Algorithm: SHA3_256, Private Key: bb22"
    );
}

#[test]
fn test_contract_detail_has_every_attribute() {
    let text = resolve(Some("contract"), Some("FungibleToken"), &populated_snapshot()).to_string();
    assert_eq!(
        text,
        "Contract Name: FungibleToken\nSource: ./cadence/FungibleToken.cdc\nNetwork: testnet\nAlias: 0x9a0766d93b6608b7"
    );
}

#[test]
fn test_emulator_detail_has_every_attribute() {
    let text = resolve(Some("emulator"), Some("default"), &populated_snapshot()).to_string();
    assert_eq!(
        text,
        "Emulator Name: default\nPort: 3569\nService Account: alice"
    );
}

#[test]
fn test_deployment_detail_is_keyed_by_network() {
    let snapshot = populated_snapshot();
    let text = resolve(Some("deployment"), Some("emulator"), &snapshot).to_string();
    assert_eq!(
        text,
        "Network Name: emulator\nAccount: alice\nContracts with Cadence Value: HelloWorld(String: \"Hello\")"
    );
    // The account name is not a deployment key
    let outcome = resolve(Some("deployment"), Some("alice"), &snapshot);
    assert_eq!(outcome.to_string(), "Deployment alice does not exist");
}

#[test]
fn test_resolution_is_deterministic() {
    let snapshot = populated_snapshot();
    for kind in ResourceKind::ALL {
        let first = resolve(Some(kind.as_str()), None, &snapshot);
        let second = resolve(Some(kind.as_str()), None, &snapshot);
        assert_eq!(first, second);
    }
}
