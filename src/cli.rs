//! CLI domain: parse, route, help, output, and presentation only.
//! No domain logic; a single route table dispatches to the snapshot provider and resolver.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands};
pub use presentation::{
    format_outcome_json, format_outcome_table, format_outcome_text, format_settings,
};
pub use route::RunContext;
