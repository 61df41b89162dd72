//! Feature gate configuration.
//!
//! An immutable value holding the rollout percentage, the two stage toggles
//! and the allow-list service parameters. Nothing is validated: a negative
//! percentage simply disables rollout, one above 100 enables everyone.

use crate::{FeatureGateError, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Default environment variable prefix used by [`FeatureGateConfig::from_env`].
pub const DEFAULT_ENV_PREFIX: &str = "FEATUREGATE";

/// Feature gate configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeatureGateConfig {
    /// Rollout threshold compared against a bucket in `[0, 99]`.
    pub rollout_percentage: i32,
    /// Ask the remote allow list before rollout.
    pub use_allow_list: bool,
    /// Apply percentage rollout.
    pub use_rollout: bool,
    /// Allow-list service base URL; `/check` is appended.
    pub base_url: String,
    /// Sent as the `x-api-key` header.
    pub api_key: String,
    /// Connect-phase timeout in milliseconds.
    pub timeout_millis: u64,
    /// Whole-request timeout in milliseconds. `None` leaves it unbounded.
    pub request_timeout_millis: Option<u64>,
}

impl Default for FeatureGateConfig {
    fn default() -> Self {
        Self {
            rollout_percentage: 100,
            use_allow_list: true,
            use_rollout: true,
            base_url: "http://localhost:8080".to_string(),
            api_key: String::new(),
            timeout_millis: 3000,
            request_timeout_millis: None,
        }
    }
}

impl FeatureGateConfig {
    /// Create a new configuration builder.
    pub fn builder() -> FeatureGateConfigBuilder {
        FeatureGateConfigBuilder::default()
    }

    /// Parse a TOML document. Missing keys take their defaults.
    ///
    /// ```
    /// use featuregate_core::FeatureGateConfig;
    ///
    /// let config = FeatureGateConfig::from_toml_str("rollout_percentage = 25").unwrap();
    /// assert_eq!(config.rollout_percentage, 25);
    /// assert!(config.use_allow_list);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FeatureGateError::Config(e.to_string()))
    }

    /// Load a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| FeatureGateError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Load from `FEATUREGATE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_env_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Load from `<PREFIX>_*` environment variables. Unset variables take
    /// their defaults.
    pub fn from_env_prefix(prefix: &str) -> Result<Self> {
        Self::from_lookup(prefix, |key| std::env::var(key).ok())
    }

    /// Load a `.env` file into the process environment, then read
    /// `<PREFIX>_*` variables.
    ///
    /// With a path, the file must exist. Without one, `.env` is searched for
    /// from the working directory upwards and skipped if absent.
    pub fn from_dotenv(path: Option<&Path>, prefix: &str) -> Result<Self> {
        if let Some(path) = path {
            dotenvy::from_path(path)
                .map_err(|e| FeatureGateError::Config(format!("{}: {}", path.display(), e)))?;
        } else {
            dotenvy::dotenv().ok(); // Ignore if .env doesn't exist
        }
        Self::from_env_prefix(prefix)
    }

    fn from_lookup(prefix: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| {
            let key = format!("{}_{}", prefix, name);
            lookup(&key).map(|value| (key, value))
        };
        let defaults = Self::default();

        Ok(Self {
            rollout_percentage: match var("ROLLOUT_PERCENTAGE") {
                Some((key, value)) => parse_var(&key, &value)?,
                None => defaults.rollout_percentage,
            },
            use_allow_list: match var("USE_ALLOW_LIST") {
                Some((key, value)) => parse_bool(&key, &value)?,
                None => defaults.use_allow_list,
            },
            use_rollout: match var("USE_ROLLOUT") {
                Some((key, value)) => parse_bool(&key, &value)?,
                None => defaults.use_rollout,
            },
            base_url: var("BASE_URL").map_or(defaults.base_url, |(_, value)| value),
            api_key: var("API_KEY").map_or(defaults.api_key, |(_, value)| value),
            timeout_millis: match var("TIMEOUT_MILLIS") {
                Some((key, value)) => parse_var(&key, &value)?,
                None => defaults.timeout_millis,
            },
            request_timeout_millis: match var("REQUEST_TIMEOUT_MILLIS") {
                Some((key, value)) => Some(parse_var(&key, &value)?),
                None => defaults.request_timeout_millis,
            },
        })
    }

    /// Connect-phase timeout.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }

    /// Whole-request timeout, if any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_millis.map(Duration::from_millis)
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| FeatureGateError::Config(format!("{}: {}", key, e)))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(FeatureGateError::Config(format!(
            "{}: expected a boolean, got {:?}",
            key, other
        ))),
    }
}

/// Builder for [`FeatureGateConfig`].
#[derive(Debug, Default)]
pub struct FeatureGateConfigBuilder {
    config: FeatureGateConfig,
}

impl FeatureGateConfigBuilder {
    /// Set the rollout percentage.
    pub fn rollout_percentage(mut self, percentage: i32) -> Self {
        self.config.rollout_percentage = percentage;
        self
    }

    /// Enable or disable the allow-list stage.
    pub fn use_allow_list(mut self, enable: bool) -> Self {
        self.config.use_allow_list = enable;
        self
    }

    /// Enable or disable the rollout stage.
    pub fn use_rollout(mut self, enable: bool) -> Self {
        self.config.use_rollout = enable;
        self
    }

    /// Set the allow-list service base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the connect timeout in milliseconds.
    pub fn timeout_millis(mut self, millis: u64) -> Self {
        self.config.timeout_millis = millis;
        self
    }

    /// Set the whole-request timeout in milliseconds.
    pub fn request_timeout_millis(mut self, millis: u64) -> Self {
        self.config.request_timeout_millis = Some(millis);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> FeatureGateConfig {
        self.config
    }
}
