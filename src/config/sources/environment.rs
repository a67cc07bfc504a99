//! Environment source: `UP_ACCOUNT`, `UP_ENDPOINT`, `UP_TOKEN`, `UP_REQUEST_TIMEOUT_SECS`.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Prefix shared by every configuration environment variable.
pub const ENV_PREFIX: &str = "UP";

/// Add the environment source to builder. Logging variables (`UP_LOG*`) are read by the
/// logging system directly and are not part of this source.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .ignore_empty(true),
    )
}
