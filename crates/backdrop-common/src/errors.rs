use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog network error: {0}")]
    Network(String),

    #[error("catalog request failed with HTTP {0}")]
    Status(u16),

    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error("catalog validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    #[error("invalid rgb color: {0}")]
    InvalidRgb(String),

    #[error("unrecognized color format: {0}")]
    Unrecognized(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("clipboard error: {0}")]
    ClipboardError(String),

    #[error("path error: {0}")]
    PathError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BackdropError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_display() {
        let err = CatalogError::Status(404);
        assert_eq!(err.to_string(), "catalog request failed with HTTP 404");

        let err = CatalogError::Validation("empty `patterns` array".into());
        assert_eq!(
            err.to_string(),
            "catalog validation error: empty `patterns` array"
        );

        let err = CatalogError::Network("connection refused".into());
        assert_eq!(err.to_string(), "catalog network error: connection refused");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ValidationError("catalog.timeout_secs".into());
        assert_eq!(
            err.to_string(),
            "config validation error: catalog.timeout_secs"
        );
    }

    #[test]
    fn color_error_display() {
        let err = ColorError::InvalidHex("#12".into());
        assert_eq!(err.to_string(), "invalid hex color: #12");

        let err = ColorError::Unrecognized("teal".into());
        assert_eq!(err.to_string(), "unrecognized color format: teal");
    }

    #[test]
    fn backdrop_error_from_catalog() {
        let err: BackdropError = CatalogError::Parse("expected value".into()).into();
        assert!(matches!(err, BackdropError::Catalog(_)));
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn backdrop_error_from_platform() {
        let err: BackdropError = PlatformError::ClipboardError("no display".into()).into();
        assert!(matches!(err, BackdropError::Platform(_)));
        assert_eq!(err.to_string(), "clipboard error: no display");
    }

    #[test]
    fn backdrop_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BackdropError = io_err.into();
        assert!(matches!(err, BackdropError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn catalog_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
