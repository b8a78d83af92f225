//! CLI presentation: text, json and table formatters per command family.

mod query;
mod settings;

pub use query::{format_outcome_json, format_outcome_table, format_outcome_text};
pub use settings::format_settings;
