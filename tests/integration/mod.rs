//! Integration tests for confq

mod cli_view;
mod resolver_scenarios;
mod test_utils;
