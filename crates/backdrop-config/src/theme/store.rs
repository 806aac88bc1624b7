//! Backends for the theme preference.

use std::path::{Path, PathBuf};

use backdrop_common::ConfigError;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ThemePreference;
use crate::toml_loader::config_dir;

pub trait ThemePreferenceStore {
    /// The persisted preference, or `None` when nothing usable is stored.
    fn load(&self) -> Option<ThemePreference>;

    fn save(&mut self, preference: ThemePreference) -> Result<(), ConfigError>;
}

/// Keeps the preference for the lifetime of the process only.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Option<ThemePreference>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(preference: ThemePreference) -> Self {
        Self {
            value: Some(preference),
        }
    }
}

impl ThemePreferenceStore for MemoryThemeStore {
    fn load(&self) -> Option<ThemePreference> {
        self.value
    }

    fn save(&mut self, preference: ThemePreference) -> Result<(), ConfigError> {
        self.value = Some(preference);
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct PreferencesFile {
    theme: ThemePreference,
}

/// TOML file store, `theme = "dark"`.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/backdrop/preferences.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("preferences.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemePreferenceStore for FileThemeStore {
    fn load(&self) -> Option<ThemePreference> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match toml::from_str::<PreferencesFile>(&content) {
            Ok(file) => Some(file.theme),
            Err(e) => {
                warn!("ignoring unreadable preferences at {}: {e}", self.path.display());
                None
            }
        }
    }

    fn save(&mut self, preference: ThemePreference) -> Result<(), ConfigError> {
        let content = toml::to_string(&PreferencesFile { theme: preference }).map_err(|e| {
            ConfigError::ParseError(format!("failed to serialize preferences: {e}"))
        })?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::ParseError(format!(
                    "failed to create config directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        // Atomic write: write to .tmp, then rename
        let tmp_path = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp_path, &content).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to write preferences to {}: {e}",
                tmp_path.display()
            ))
        })?;

        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            warn!("atomic rename failed ({e}), falling back to direct write");
            std::fs::write(&self.path, &content).map_err(|e2| {
                ConfigError::ParseError(format!(
                    "failed to write preferences to {}: {e2}",
                    self.path.display()
                ))
            })?;
        }

        Ok(())
    }
}
