//! Configuration schema.
//!
//! Every section uses `serde(default)`; missing keys take the values below.

use std::path::PathBuf;

use backdrop_common::GeneratorMode;
use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Where template catalogs come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSourceKind {
    /// Compiled-in templates only.
    #[default]
    Builtin,
    /// `patterns.json` and `gradients.json` in a local directory.
    Directory,
    /// The same two files under an HTTP base URL.
    Url,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub source: CatalogSourceKind,
    pub directory: Option<PathBuf>,
    pub base_url: Option<String>,
    /// HTTP request timeout, 1-60 seconds.
    pub timeout_secs: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: CatalogSourceKind::Builtin,
            directory: None,
            base_url: None,
            timeout_secs: 10,
        }
    }
}

/// Class selectors for the generated rule blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pattern_selector: String,
    pub gradient_selector: String,
    pub hybrid_selector: String,
}

impl OutputConfig {
    pub fn selector(&self, mode: GeneratorMode) -> &str {
        match mode {
            GeneratorMode::Pattern => &self.pattern_selector,
            GeneratorMode::Gradient => &self.gradient_selector,
            GeneratorMode::Hybrid => &self.hybrid_selector,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pattern_selector: GeneratorMode::Pattern.default_selector().into(),
            gradient_selector: GeneratorMode::Gradient.default_selector().into(),
            hybrid_selector: GeneratorMode::Hybrid.default_selector().into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
