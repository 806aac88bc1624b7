pub mod colors;
pub mod errors;
pub mod types;

pub use colors::{parse_color, validate_color};
pub use errors::{BackdropError, CatalogError, ColorError, ConfigError, PlatformError};
pub use types::{AnimationDirection, Color, GeneratorMode};

pub type Result<T> = std::result::Result<T, BackdropError>;
