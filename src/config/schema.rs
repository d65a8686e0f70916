//! Configuration schema
//!
//! Type-safe configuration structs parsed from `altnames.toml`. Every field
//! has a default so the tool runs without a configuration file at all; flags
//! on the command line override whatever is loaded here.

use crate::domain::result::Result;
use crate::domain::AltNamesError;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AltNamesConfig {
    /// Application settings (name, log level)
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Name-substitution engine settings
    #[serde(default)]
    pub engine: EngineConfig,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AltNamesConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.application.validate()?;
        self.engine.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Apply environment variable overrides (ALTNAMES_* prefix)
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.application.apply_env_overrides()?;
        self.engine.apply_env_overrides()?;
        self.output.apply_env_overrides()?;
        Ok(())
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name used in log output
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_app_name() -> String {
    "altnames".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    /// Validate application settings
    pub fn validate(&self) -> Result<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(AltNamesError::Configuration(format!(
                "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("ALTNAMES_LOG_LEVEL") {
            self.log_level = val;
        }
        Ok(())
    }
}

/// Name-substitution engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for deterministic pseudonym generation
    #[serde(default = "default_seed")]
    pub seed: String,

    /// Split compound names on separators before renaming
    #[serde(default = "default_tokenize")]
    pub tokenize: bool,

    /// Columns used when none are specified on the command line
    #[serde(default = "default_name_columns")]
    pub default_columns: Vec<String>,

    /// Emit a diagnostic when the generation attempt budget is exhausted
    #[serde(default = "default_warn_exhausted")]
    pub warn_exhausted: bool,
}

fn default_seed() -> String {
    "safenames".to_string()
}

fn default_tokenize() -> bool {
    true
}

fn default_name_columns() -> Vec<String> {
    ["First Name", "Last Name", "Preferred Name", "Camper"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn default_warn_exhausted() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            tokenize: default_tokenize(),
            default_columns: default_name_columns(),
            warn_exhausted: default_warn_exhausted(),
        }
    }
}

impl EngineConfig {
    /// Validate engine settings
    pub fn validate(&self) -> Result<()> {
        if self.seed.is_empty() {
            return Err(AltNamesError::Configuration(
                "Engine seed must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("ALTNAMES_SEED") {
            self.seed = val;
        }
        if let Ok(val) = std::env::var("ALTNAMES_TOKENIZE") {
            self.tokenize = val.parse().map_err(|_| {
                AltNamesError::Configuration(format!("Invalid ALTNAMES_TOKENIZE value: {val}"))
            })?;
        }
        if let Ok(val) = std::env::var("ALTNAMES_WARN_EXHAUSTED") {
            self.warn_exhausted = val.parse().map_err(|_| {
                AltNamesError::Configuration(format!(
                    "Invalid ALTNAMES_WARN_EXHAUSTED value: {val}"
                ))
            })?;
        }
        Ok(())
    }
}

/// Output file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Prefix prepended to output file names
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    "renamed".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

impl OutputConfig {
    /// Validate output settings
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(AltNamesError::Configuration(
                "Output prefix must not be empty".to_string(),
            ));
        }
        if self.prefix.contains(std::path::MAIN_SEPARATOR) {
            return Err(AltNamesError::Configuration(format!(
                "Output prefix must not contain a path separator: {}",
                self.prefix
            )));
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("ALTNAMES_PREFIX") {
            self.prefix = val;
        }
        Ok(())
    }
}

/// Logging settings
///
/// Console logging is always on; these settings control the optional
/// rolling JSON log file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub file_path: String,

    /// Log rotation schedule (daily or hourly)
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_enabled: false,
            file_path: default_log_path(),
            rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    /// Validate logging settings
    pub fn validate(&self) -> Result<()> {
        if !["daily", "hourly"].contains(&self.rotation.as_str()) {
            return Err(AltNamesError::Configuration(format!(
                "Invalid log rotation: {}. Must be daily or hourly",
                self.rotation
            )));
        }
        Ok(())
    }
}
