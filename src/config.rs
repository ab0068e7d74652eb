use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

use crate::models::ScoringPoints;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub points: ScoringPoints,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    #[serde(default = "default_true")]
    pub require_mutual_interest: bool,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            require_mutual_interest: default_true(),
        }
    }
}

impl MatchingSettings {
    /// Resolve a requested limit against the configured default and cap
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}

fn default_limit() -> usize { 20 }
fn default_max_limit() -> usize { 100 }
fn default_true() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_profiles_path")]
    pub profiles_path: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            profiles_path: default_profiles_path(),
        }
    }
}

fn default_profiles_path() -> String { "data/profiles.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CAMPUS_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Self = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CAMPUS__MATCHING__MAX_LIMIT -> matching.max_limit
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        settings.validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        settings.validated()
    }

    /// Parse settings from an inline TOML document, without environment overrides
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(toml).map_err(|e| ConfigError::Foreign(Box::new(e)))?;
        settings.validated()
    }

    /// Reject point values the scorer would saturate on
    fn validated(self) -> Result<Self, ConfigError> {
        self.scoring
            .points
            .validate()
            .map_err(|e| ConfigError::Message(format!("Invalid scoring.points: {}", e)))?;
        Ok(self)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("CAMPUS")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
