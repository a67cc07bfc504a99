//! Merge rules: defaults first, then files, then environment. CLI flags are applied last
//! by the caller through `UpConfig::apply_overrides`.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

use crate::config::{DEFAULT_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("endpoint", DEFAULT_ENDPOINT)?
        .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)
}
