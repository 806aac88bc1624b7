//! Catalog loading with built-in fallback.

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::payload::parse_payload;
use crate::source::CatalogSource;
use crate::template::CatalogKind;

/// Load one catalog from `source`.
///
/// Never fails: fetch errors, malformed JSON and structurally invalid
/// payloads all resolve to the built-in catalog for `kind`.
pub async fn load(kind: CatalogKind, source: &dyn CatalogSource) -> Catalog {
    let text = match source.fetch(kind).await {
        Ok(text) => text,
        Err(e) => {
            warn!(
                %kind,
                source = %source.describe(),
                error = %e,
                "catalog fetch failed, using built-in templates"
            );
            return Catalog::builtin(kind);
        }
    };

    match parse_payload(kind, &text) {
        Ok(templates) => {
            info!(%kind, count = templates.len(), source = %source.describe(), "loaded catalog");
            Catalog::new(templates)
        }
        Err(e) => {
            warn!(
                %kind,
                source = %source.describe(),
                error = %e,
                "invalid catalog payload, using built-in templates"
            );
            Catalog::builtin(kind)
        }
    }
}

/// Load the pattern and gradient catalogs concurrently.
///
/// Each falls back independently, so a broken gradient file does not cost
/// the pattern catalog.
pub async fn load_both(source: &dyn CatalogSource) -> (Catalog, Catalog) {
    tokio::join!(
        load(CatalogKind::Patterns, source),
        load(CatalogKind::Gradients, source)
    )
}
