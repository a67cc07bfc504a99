//! Configuration System
//!
//! Layered configuration for the CLI: built-in defaults, the global config file (or an
//! explicit `--config` file), `UP_*` environment variables, then command-line flags.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

pub const DEFAULT_ENDPOINT: &str = "https://api.upbound.io";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpConfig {
    /// Current account (organization or user) name
    #[serde(default)]
    pub account: Option<String>,

    /// Base URL of the API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bearer token for the API
    #[serde(default)]
    pub token: Option<String>,

    /// Deadline for each remote call
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for UpConfig {
    fn default() -> Self {
        Self {
            account: None,
            endpoint: default_endpoint(),
            token: None,
            request_timeout_secs: default_request_timeout_secs(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Values given on the command line. `None` leaves the configured value in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub account: Option<String>,
    pub endpoint: Option<String>,
}

impl UpConfig {
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(account) = &overrides.account {
            self.account = Some(account.clone());
        }
        if let Some(endpoint) = &overrides.endpoint {
            self.endpoint = endpoint.clone();
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ApiError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ApiError::ConfigError(format!(
                "Endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ApiError::ConfigError(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if let Some(account) = &self.account {
            if account.trim().is_empty() {
                return Err(ApiError::ConfigError("Account cannot be empty".to_string()));
            }
        }
        Ok(())
    }

    /// The current account, required for any robot command.
    pub fn require_account(&self) -> Result<&str, ApiError> {
        self.account.as_deref().ok_or_else(|| {
            ApiError::ConfigError(
                "No account configured. Pass --account or set UP_ACCOUNT.".to_string(),
            )
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
