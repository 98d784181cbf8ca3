//! Configuration loading and persistence.
//!
//! The config lives at `~/.config/zcalc/config.toml`. A missing file means
//! defaults; a broken one is logged and also falls back to defaults.

mod types;
mod validation;

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub use types::AppConfig;
pub use validation::{ValidationWarning, validate_config};

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("zcalc"))
}

/// Get the config file path.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Parse config from TOML text. Missing fields take their defaults.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str::<AppConfig>(content).map_err(ConfigError::ParseFailed)
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    parse_config(&content)
}

/// Load application config from `~/.config/zcalc/config.toml`.
///
/// Returns `None` if the config file doesn't exist.
/// Logs warning and returns `None` if reading or parsing fails.
pub fn load_app_config() -> Option<AppConfig> {
    let config_path = config_path()?;

    if !config_path.exists() {
        tracing::debug!("Config file not found at {:?}, using defaults", config_path);
        return None;
    }

    match read_config(&config_path) {
        Ok(config) => {
            tracing::info!("Loaded app config from {:?}", config_path);
            Some(config)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load config file at {:?}: {}, using defaults",
                config_path,
                e
            );
            None
        }
    }
}

/// Apply command-line overrides to a loaded config, then validate the result.
pub fn effective_config(
    mut config: AppConfig,
    precision: Option<u32>,
) -> (AppConfig, Vec<ValidationWarning>) {
    if let Some(precision) = precision {
        config.precision = precision;
    }
    let warnings = validate_config(&config);
    (config, warnings)
}

/// Load the config (or defaults), apply overrides and log any validation
/// warnings.
pub fn init_config(precision: Option<u32>) -> AppConfig {
    let loaded = load_app_config().unwrap_or_default();
    let (config, warnings) = effective_config(loaded, precision);
    for warning in warnings {
        tracing::warn!("Config validation: {} - {}", warning.field, warning.message);
    }
    config
}

/// Save config to the config file, creating the directory if needed.
///
/// Returns the path written to.
pub fn save_config(config: &AppConfig) -> Result<PathBuf, ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoDirFound)?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(ConfigError::SaveFailed)?;
    }

    let path = dir.join("config.toml");
    let content = to_toml(config)?;
    std::fs::write(&path, content).map_err(ConfigError::SaveFailed)?;
    tracing::info!("Saved config to {:?}", path);
    Ok(path)
}

/// Serialize config to pretty TOML.
pub fn to_toml(config: &AppConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(ConfigError::SerializeFailed)
}
