use backdrop_common::ConfigError;
use tracing::debug;

use super::{ThemePreference, ThemePreferenceStore};

/// Current theme preference backed by a store.
pub struct ThemeService<S> {
    store: S,
    current: ThemePreference,
}

impl<S: ThemePreferenceStore> ThemeService<S> {
    /// Read the persisted preference; light when nothing is stored.
    pub fn init(store: S) -> Self {
        let current = store.load().unwrap_or_default();
        debug!(theme = %current, "theme preference initialised");
        Self { store, current }
    }

    pub fn preference(&self) -> ThemePreference {
        self.current
    }

    pub fn is_dark(&self) -> bool {
        self.current == ThemePreference::Dark
    }

    /// Flip the preference and persist it. The in-memory value flips even
    /// when persisting fails; the error is returned for the caller to log.
    pub fn toggle(&mut self) -> Result<ThemePreference, ConfigError> {
        self.current = self.current.toggled();
        self.store.save(self.current)?;
        Ok(self.current)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
