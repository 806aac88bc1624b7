//! Where catalog payloads come from.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use backdrop_common::CatalogError;
use tracing::debug;

use crate::fallback;
use crate::template::CatalogKind;

/// A source of raw catalog payloads.
///
/// Implementations only fetch text; parsing, validation and the fallback
/// policy live in [`crate::load`].
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self, kind: CatalogKind) -> Result<String, CatalogError>;

    /// Short human-readable description for log lines.
    fn describe(&self) -> String;
}

/// Serves the built-in catalogs as payload text.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

#[async_trait]
impl CatalogSource for BuiltinSource {
    async fn fetch(&self, kind: CatalogKind) -> Result<String, CatalogError> {
        let templates = serde_json::to_value(fallback::templates(kind))
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        let mut payload = serde_json::Map::new();
        payload.insert(kind.field_name().to_string(), templates);
        serde_json::to_string(&payload).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    fn describe(&self) -> String {
        "builtin".into()
    }
}

/// Reads `patterns.json` / `gradients.json` from a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl CatalogSource for DirectorySource {
    async fn fetch(&self, kind: CatalogKind) -> Result<String, CatalogError> {
        let path = self.dir.join(kind.file_name());
        debug!(path = %path.display(), "reading catalog file");
        Ok(tokio::fs::read_to_string(&path).await?)
    }

    fn describe(&self) -> String {
        format!("directory {}", self.dir.display())
    }
}

/// Fetches `<base_url>/patterns.json` / `<base_url>/gradients.json` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, kind: CatalogKind) -> String {
        format!("{}/{}", self.base_url, kind.file_name())
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self, kind: CatalogKind) -> Result<String, CatalogError> {
        let url = self.url_for(kind);
        debug!(%url, "fetching catalog");

        let response = self
            .http
            .get(&url)
            .header("User-Agent", "backdrop-catalog")
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
