//! Template catalogs for the background generator.
//!
//! Provides:
//! - The [`Template`] model and its [`GradientKind`] tag
//! - Built-in pattern and gradient catalogs
//! - Payload validation for `{"patterns": [...]}` / `{"gradients": [...]}`
//! - Async loading from built-in, directory or HTTP sources, falling back
//!   to the built-in catalog on any failure

pub mod catalog;
pub mod fallback;
pub mod loader;
pub mod payload;
pub mod source;
pub mod template;

pub use catalog::Catalog;
pub use loader::{load, load_both};
pub use payload::parse_payload;
pub use source::{BuiltinSource, CatalogSource, DirectorySource, HttpSource};
pub use template::{CatalogKind, GradientKind, Template};
