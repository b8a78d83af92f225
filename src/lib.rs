//! confq: Configuration Resource Queries
//!
//! Lists the accounts, networks, contracts, emulators and deployments declared
//! in a project configuration, or shows every attribute of one of them, as
//! deterministic text.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod query;
pub mod snapshot;
