//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AltNamesConfig;
use crate::domain::errors::AltNamesError;
use crate::domain::result::Result;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Parses the TOML into [`AltNamesConfig`]
/// 3. Applies environment variable overrides (ALTNAMES_* prefix)
/// 4. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, or
/// validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<AltNamesConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AltNamesError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AltNamesError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut config: AltNamesConfig = toml::from_str(&contents)
        .map_err(|e| AltNamesError::Configuration(format!("Failed to parse TOML: {e}")))?;

    config.apply_env_overrides()?;
    config.validate()?;

    Ok(config)
}

/// Loads configuration, falling back to defaults when the file is absent
///
/// The configuration file is optional: a missing file means defaults plus
/// environment overrides. A file that exists but fails to parse or validate
/// is still an error.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<AltNamesConfig> {
    let path = path.as_ref();

    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    let mut config = AltNamesConfig::default();
    config.apply_env_overrides()?;
    config.validate()?;
    Ok(config)
}
