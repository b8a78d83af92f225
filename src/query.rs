//! Resource queries over a configuration snapshot.
//!
//! Listing mode enumerates one kind; detail mode renders the entry (or, for
//! deployments, entries) matching a name. Results are plain values and the
//! same request against the same snapshot always yields the same text.

mod detail;
mod kind;
mod outcome;
mod resolver;

pub use detail::{
    format_account, format_contract, format_contract_deployment, format_deployment,
    format_emulator, format_network,
};
pub use kind::{ResourceKind, UnknownKind};
pub use outcome::{usage_text, QueryOutcome};
pub use resolver::{resolve, resolve_kind};
