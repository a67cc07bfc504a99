//! Config loader: assembles the layered sources into an `UpConfig`.

use crate::config::merge::merge_policy;
use crate::config::sources::{environment, global_file};
use crate::config::UpConfig;
use crate::error::ApiError;
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global config file if present, and the environment.
    pub fn load() -> Result<UpConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder);
        let builder = environment::add_to_builder(builder);
        Self::finish(builder)
    }

    /// Load defaults, the given file (which must exist), and the environment.
    pub fn load_from_file(path: &Path) -> Result<UpConfig, ApiError> {
        debug!(config_path = %path.display(), "loading configuration file");
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_file(builder, path, true);
        let builder = environment::add_to_builder(builder);
        Self::finish(builder)
    }

    /// Load from an explicit path when given, otherwise from the default locations.
    pub fn load_with(path: Option<&Path>) -> Result<UpConfig, ApiError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<UpConfig, ApiError> {
        let config: UpConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
