//! Catalog source selection from flags and config.

use std::time::Duration;

use backdrop_catalog::{BuiltinSource, CatalogSource, DirectorySource, HttpSource};
use backdrop_config::{CatalogConfig, CatalogSourceKind};
use tracing::warn;

use crate::cli::Args;

/// Flags win over the config file; an unusable source degrades to the
/// built-in catalogs.
pub fn select(args: &Args, config: &CatalogConfig) -> Box<dyn CatalogSource> {
    if let Some(dir) = &args.catalog_dir {
        return Box::new(DirectorySource::new(dir.clone()));
    }
    if let Some(url) = &args.catalog_url {
        return http(url, config.timeout_secs);
    }

    match config.source {
        CatalogSourceKind::Builtin => Box::new(BuiltinSource),
        CatalogSourceKind::Directory => match &config.directory {
            Some(dir) => Box::new(DirectorySource::new(dir.clone())),
            None => {
                warn!("catalog.source is \"directory\" but no directory is set, using built-in templates");
                Box::new(BuiltinSource)
            }
        },
        CatalogSourceKind::Url => match &config.base_url {
            Some(url) => http(url, config.timeout_secs),
            None => {
                warn!("catalog.source is \"url\" but no base_url is set, using built-in templates");
                Box::new(BuiltinSource)
            }
        },
    }
}

fn http(url: &str, timeout_secs: u32) -> Box<dyn CatalogSource> {
    let timeout = Duration::from_secs(u64::from(timeout_secs.clamp(1, 60)));
    match HttpSource::new(url, timeout) {
        Ok(source) => Box::new(source),
        Err(e) => {
            warn!("failed to build HTTP catalog client: {e}, using built-in templates");
            Box::new(BuiltinSource)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["backdrop", "list", "patterns"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_to_builtin() {
        let source = select(&args(&[]), &CatalogConfig::default());
        assert_eq!(source.describe(), "builtin");
    }

    #[test]
    fn flag_overrides_config() {
        let config = CatalogConfig {
            source: CatalogSourceKind::Url,
            base_url: Some("https://example.com".into()),
            ..CatalogConfig::default()
        };
        let source = select(&args(&["--catalog-dir", "data"]), &config);
        assert_eq!(source.describe(), "directory data");
    }

    #[test]
    fn configured_directory_is_used() {
        let config = CatalogConfig {
            source: CatalogSourceKind::Directory,
            directory: Some(PathBuf::from("/srv/data")),
            ..CatalogConfig::default()
        };
        assert_eq!(select(&args(&[]), &config).describe(), "directory /srv/data");
    }

    #[test]
    fn incomplete_config_degrades_to_builtin() {
        let config = CatalogConfig {
            source: CatalogSourceKind::Url,
            ..CatalogConfig::default()
        };
        assert_eq!(select(&args(&[]), &config).describe(), "builtin");
    }

    #[test]
    fn url_flag_builds_http_source() {
        let source = select(&args(&["--catalog-url", "https://example.com/data/"]), &CatalogConfig::default());
        assert_eq!(source.describe(), "https://example.com/data");
    }
}
