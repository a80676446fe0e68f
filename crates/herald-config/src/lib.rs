//! Configuration for herald.
//!
//! Priority order (lowest to highest):
//! 1. Defaults - Hardcoded sane defaults
//! 2. File config - From herald.toml
//! 3. Environment variables - HERALD__* pattern

use std::time::Duration;

use herald_core::{Matcher, TargetMatch};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "herald.toml";
pub const ENV_PREFIX: &str = "HERALD";

/// Error types for configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config build error: {0}")]
    Build(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ConfigError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HeraldConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
}

impl HeraldConfig {
    pub fn validate(&self) -> Result<()> {
        if url::Url::parse(&self.api.url).is_err() {
            return Err(ConfigError::validation(format!(
                "api.url is not a valid URL: {}",
                self.api.url
            )));
        }
        if self.api.timeout_ms == 0 {
            return Err(ConfigError::validation("api.timeout_ms must be > 0"));
        }
        let lvl = self.logging.level.to_ascii_lowercase();
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&lvl.as_str()) {
            return Err(ConfigError::validation(format!(
                "logging.level must be one of {valid_levels:?}"
            )));
        }
        Ok(())
    }

    pub fn load(path: Option<&str>) -> Result<Self> {
        loader::load_config(path)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub url: String,
    /// Team API key. Prefer HERALD__API__API_KEY over the file.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_api_url() -> String {
    "https://api.herald.example".into()
}
fn default_timeout_ms() -> u64 {
    30_000
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}
fn default_log_level() -> String {
    "warn".into()
}
impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatchingConfig {
    /// Let a locator with an empty target match any target of its type.
    #[serde(default)]
    pub empty_target_wildcard: bool,
}

impl MatchingConfig {
    pub fn matcher(&self) -> Matcher {
        if self.empty_target_wildcard {
            Matcher::with_target_match(TargetMatch::EmptyIsWildcard)
        } else {
            Matcher::new()
        }
    }
}

pub mod loader {
    use super::{DEFAULT_CONFIG_PATH, ENV_PREFIX, HeraldConfig, Result};
    use config::{Config, Environment, File};
    use std::path::PathBuf;

    pub fn load_config(path: Option<&str>) -> Result<HeraldConfig> {
        let mut builder = Config::builder();
        let pathbuf = PathBuf::from(path.unwrap_or(DEFAULT_CONFIG_PATH));
        if pathbuf.exists() {
            tracing::debug!(path = %pathbuf.display(), "loading config file");
            builder = builder.add_source(File::from(pathbuf));
        }
        // Environment variable overrides, e.g., HERALD__API__URL=http://localhost:8080
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .separator("__"),
        );
        let merged: HeraldConfig = builder.build()?.try_deserialize()?;
        merged.validate()?;
        Ok(merged)
    }
}
