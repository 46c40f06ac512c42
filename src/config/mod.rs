#[cfg(feature = "cli")]
pub mod cli;

use crate::adapters::brandfetch::DEFAULT_BRANDFETCH_BASE_URL;
use crate::adapters::clearbit::DEFAULT_CLEARBIT_BASE_URL;
use crate::core::placeholder::DEFAULT_AVATAR_BASE_URL;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::env;
use std::time::Duration;

pub const BRANDFETCH_API_KEY_VAR: &str = "BRANDFETCH_API_KEY";
pub const REQUEST_TIMEOUT_VAR: &str = "LOGO_REQUEST_TIMEOUT_SECS";
pub const CLEARBIT_BASE_URL_VAR: &str = "LOGO_CLEARBIT_BASE_URL";
pub const BRANDFETCH_BASE_URL_VAR: &str = "LOGO_BRANDFETCH_BASE_URL";
pub const AVATAR_BASE_URL_VAR: &str = "LOGO_AVATAR_BASE_URL";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Everything the resolver needs, fixed at construction time.
#[derive(Debug, Clone)]
pub struct LogoConfig {
    pub brandfetch_api_key: Option<String>,
    pub request_timeout: Duration,
    pub clearbit_base_url: String,
    pub brandfetch_base_url: String,
    pub avatar_base_url: String,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            brandfetch_api_key: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            clearbit_base_url: DEFAULT_CLEARBIT_BASE_URL.to_string(),
            brandfetch_base_url: DEFAULT_BRANDFETCH_BASE_URL.to_string(),
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
        }
    }
}

impl LogoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            brandfetch_api_key: get(BRANDFETCH_API_KEY_VAR),
            request_timeout: get(REQUEST_TIMEOUT_VAR)
                .and_then(|secs| secs.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            clearbit_base_url: get(CLEARBIT_BASE_URL_VAR).unwrap_or(defaults.clearbit_base_url),
            brandfetch_base_url: get(BRANDFETCH_BASE_URL_VAR)
                .unwrap_or(defaults.brandfetch_base_url),
            avatar_base_url: get(AVATAR_BASE_URL_VAR).unwrap_or(defaults.avatar_base_url),
        }
    }

    pub fn with_brandfetch_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.brandfetch_api_key = Some(api_key.into());
        self
    }

    /// Whether the Brandfetch stage takes part in resolution.
    pub fn secondary_enabled(&self) -> bool {
        self.brandfetch_api_key.is_some()
    }
}

impl Validate for LogoConfig {
    fn validate(&self) -> Result<()> {
        validate_url("clearbit_base_url", &self.clearbit_base_url)?;
        validate_url("brandfetch_base_url", &self.brandfetch_base_url)?;
        validate_url("avatar_base_url", &self.avatar_base_url)?;
        validate_range("request_timeout", self.request_timeout.as_secs(), 1, 60)?;

        tracing::debug!("Logo configuration validation passed");
        Ok(())
    }
}
