use super::*;
use std::path::PathBuf;

fn errors_of(config: &BackdropConfig) -> String {
    match validate(config) {
        Err(ConfigError::ValidationError(msg)) => msg,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn default_config_is_valid() {
    assert!(validate(&BackdropConfig::default()).is_ok());
}

#[test]
fn timeout_out_of_range() {
    let mut config = BackdropConfig::default();
    config.catalog.timeout_secs = 0;
    assert!(errors_of(&config).contains("catalog.timeout_secs = 0 is out of range [1, 60]"));
}

#[test]
fn directory_source_needs_directory() {
    let mut config = BackdropConfig::default();
    config.catalog.source = CatalogSourceKind::Directory;
    assert!(errors_of(&config).contains("catalog.directory is required"));

    config.catalog.directory = Some(PathBuf::from("data"));
    assert!(validate(&config).is_ok());
}

#[test]
fn url_source_needs_http_url() {
    let mut config = BackdropConfig::default();
    config.catalog.source = CatalogSourceKind::Url;
    assert!(errors_of(&config).contains("catalog.base_url is required"));

    config.catalog.base_url = Some("ftp://example.com".into());
    assert!(errors_of(&config).contains("must be an http(s) URL"));

    config.catalog.base_url = Some("https://example.com/data".into());
    assert!(validate(&config).is_ok());
}

#[test]
fn selectors_must_be_simple_classes() {
    assert!(is_valid_selector(".pattern-background"));
    assert!(is_valid_selector(".bg_2"));
    assert!(!is_valid_selector("pattern"));
    assert!(!is_valid_selector(".a .b"));
    assert!(!is_valid_selector(".a{}"));
    assert!(!is_valid_selector("."));

    let mut config = BackdropConfig::default();
    config.output.hybrid_selector = "#hero".into();
    assert!(errors_of(&config).contains("output.hybrid_selector = \"#hero\""));
}

#[test]
fn log_level_is_checked() {
    let mut config = BackdropConfig::default();
    config.logging.level = "WARN".into();
    assert!(validate(&config).is_ok());
    config.logging.level = "loud".into();
    assert!(errors_of(&config).contains("logging.level = loud"));
}

#[test]
fn all_errors_are_collected() {
    let mut config = BackdropConfig::default();
    config.catalog.timeout_secs = 90;
    config.output.pattern_selector = String::new();
    config.logging.level = "verbose".into();
    let msg = errors_of(&config);
    assert_eq!(msg.split("; ").count(), 3);
}
