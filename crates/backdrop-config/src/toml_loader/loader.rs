//! Read config from a path or the platform default location.

use std::path::Path;

use backdrop_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::BackdropConfig;
use crate::validation;

/// Load config from a specific TOML file.
///
/// Missing keys take their defaults. A file that parses but fails
/// validation is logged and returned as-is.
pub fn load_from_path(path: &Path) -> Result<BackdropConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: BackdropConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path, creating a commented
/// default file when none exists.
///
/// On Linux: `~/.config/backdrop/config.toml`
pub fn load_default() -> Result<BackdropConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(BackdropConfig::default())
        }
        other => other,
    }
}
