//! Fixed-format attribute rendering, one formatter per resource kind.

use crate::snapshot::{
    Account, Contract, ContractArgument, ContractDeployment, Deployment, Emulator, Network,
};

pub fn format_account(account: &Account) -> String {
    let key = &account.key;
    format!(
        "Account Name: {}\nAddress: {}\nKey Properties:\nType: {}, Index: {}, Signature Algorithm: {}, Hash Algorithm: {}, Private Key: {}",
        account.name,
        account.address,
        key.key_type,
        key.index,
        key.signature_algorithm,
        key.hash_algorithm,
        key.private_key
    )
}

pub fn format_network(network: &Network) -> String {
    format!("Network Name: {}\nHost: {}", network.name, network.host)
}

pub fn format_contract(contract: &Contract) -> String {
    format!(
        "Contract Name: {}\nSource: {}\nNetwork: {}\n{}",
        contract.name,
        contract.source,
        contract.network,
        attribute("Alias", contract.alias.as_deref().unwrap_or(""))
    )
}

pub fn format_emulator(emulator: &Emulator) -> String {
    format!(
        "Emulator Name: {}\nPort: {}\nService Account: {}",
        emulator.name, emulator.port, emulator.service_account
    )
}

pub fn format_deployment(deployment: &Deployment) -> String {
    let contracts: Vec<String> = deployment
        .contracts
        .iter()
        .map(format_contract_deployment)
        .collect();
    format!(
        "Network Name: {}\nAccount: {}\n{}",
        deployment.network,
        deployment.account,
        attribute("Contracts with Cadence Value", &contracts.join(", "))
    )
}

// An empty value leaves no trailing blank after the colon.
fn attribute(label: &str, value: &str) -> String {
    if value.is_empty() {
        format!("{}:", label)
    } else {
        format!("{}: {}", label, value)
    }
}

/// `Name` without arguments, `Name(Type: value, ...)` otherwise.
pub fn format_contract_deployment(contract: &ContractDeployment) -> String {
    if contract.args.is_empty() {
        return contract.name.clone();
    }
    let args: Vec<String> = contract.args.iter().map(format_argument).collect();
    format!("{}({})", contract.name, args.join(", "))
}

fn format_argument(arg: &ContractArgument) -> String {
    format!("{}: {}", arg.type_name, arg.value)
}
