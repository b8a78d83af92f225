//! Environment source: CONFQ_<SECTION>__<KEY>, e.g. CONFQ_PROJECT__FILE.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("CONFQ")
            .prefix_separator("_")
            .separator("__"),
    )
}
