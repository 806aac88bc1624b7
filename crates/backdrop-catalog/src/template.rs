//! Template and catalog-kind definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// CSS image function a template is built on.
///
/// Drives every kind-specific decision in the style compiler (angle
/// substitution, keyframe selection), so it is matched on in exactly one
/// place rather than compared as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradientKind {
    #[serde(rename = "linear-gradient")]
    Linear,
    #[serde(rename = "radial-gradient")]
    Radial,
    #[serde(rename = "conic-gradient")]
    Conic,
}

impl GradientKind {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Linear => "linear-gradient",
            Self::Radial => "radial-gradient",
            Self::Conic => "conic-gradient",
        }
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// A named, parameterized `background-image` value.
///
/// `base_pattern` carries placeholder tokens such as `{fg}` or `{color1}`
/// that the compiler substitutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GradientKind,
    #[serde(default)]
    pub description: String,
    pub base_pattern: String,
}

impl Template {
    pub fn new(
        id: &str,
        name: &str,
        kind: GradientKind,
        description: &str,
        base_pattern: &str,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            description: description.into(),
            base_pattern: base_pattern.into(),
        }
    }
}

/// Which of the two independently loadable catalogs is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Patterns,
    Gradients,
}

impl CatalogKind {
    /// Array field holding the templates in a catalog payload.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Patterns => "patterns",
            Self::Gradients => "gradients",
        }
    }

    /// Resource name relative to a directory or base URL.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Patterns => "patterns.json",
            Self::Gradients => "gradients.json",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}
