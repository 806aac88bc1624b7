//! Configuration validation.
//!
//! Each section has its own check; all problems are collected into a single
//! `ConfigError::ValidationError`.

mod helpers;

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

use backdrop_common::{ConfigError, GeneratorMode};
use regex::Regex;

use crate::schema::{BackdropConfig, CatalogSourceKind};
use helpers::validate_range;

/// A single class selector: `.` followed by word characters or dashes.
static SELECTOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.[A-Za-z0-9_-]+$").unwrap());

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BackdropConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_catalog(&mut errors, config);
    validate_output(&mut errors, config);
    validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

pub fn is_valid_selector(selector: &str) -> bool {
    SELECTOR_RE.is_match(selector)
}

fn validate_catalog(errors: &mut Vec<String>, config: &BackdropConfig) {
    let catalog = &config.catalog;
    validate_range(errors, "catalog.timeout_secs", catalog.timeout_secs, 1, 60);

    match catalog.source {
        CatalogSourceKind::Builtin => {}
        CatalogSourceKind::Directory => {
            if catalog.directory.is_none() {
                errors.push("catalog.directory is required when source = \"directory\"".into());
            }
        }
        CatalogSourceKind::Url => match catalog.base_url.as_deref() {
            None => errors.push("catalog.base_url is required when source = \"url\"".into()),
            Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                errors.push(format!("catalog.base_url = {url} must be an http(s) URL"));
            }
            Some(_) => {}
        },
    }
}

fn validate_output(errors: &mut Vec<String>, config: &BackdropConfig) {
    for mode in GeneratorMode::ALL {
        let selector = config.output.selector(mode);
        if !is_valid_selector(selector) {
            errors.push(format!(
                "output.{mode}_selector = {selector:?} is not a class selector"
            ));
        }
    }
}

fn validate_logging(errors: &mut Vec<String>, config: &BackdropConfig) {
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
