//! Backdrop configuration.
//!
//! TOML configuration with per-section defaults so partial files work, plus
//! the persisted light/dark theme preference used by the front end.

pub mod schema;
pub mod theme;
pub mod toml_loader;
pub mod validation;

pub use schema::{BackdropConfig, CatalogConfig, CatalogSourceKind, LoggingConfig, OutputConfig};
pub use theme::{FileThemeStore, MemoryThemeStore, ThemePreference, ThemePreferenceStore, ThemeService};
pub use toml_loader::{create_default_config, default_config_path, load_default, load_from_path};

use std::path::Path;

use backdrop_common::ConfigError;

/// Load from `path` when given, otherwise from the platform default path
/// (creating a documented default file on first run).
pub fn load_config(path: Option<&Path>) -> Result<BackdropConfig, ConfigError> {
    match path {
        Some(path) => load_from_path(path),
        None => load_default(),
    }
}
