use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three generator modes. Each owns an independent parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorMode {
    Pattern,
    Gradient,
    Hybrid,
}

impl GeneratorMode {
    pub const ALL: [GeneratorMode; 3] = [Self::Pattern, Self::Gradient, Self::Hybrid];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pattern => "pattern",
            Self::Gradient => "gradient",
            Self::Hybrid => "hybrid",
        }
    }

    /// Class selector used for the generated rule block unless overridden.
    pub fn default_selector(self) -> &'static str {
        match self {
            Self::Pattern => ".pattern-background",
            Self::Gradient => ".gradient-background",
            Self::Hybrid => ".hybrid-background",
        }
    }
}

impl fmt::Display for GeneratorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CSS `animation-direction` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationDirection {
    #[default]
    Normal,
    Reverse,
    Alternate,
    AlternateReverse,
}

impl AnimationDirection {
    pub const ALL: [AnimationDirection; 4] = [
        Self::Normal,
        Self::Reverse,
        Self::Alternate,
        Self::AlternateReverse,
    ];

    pub fn as_css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Reverse => "reverse",
            Self::Alternate => "alternate",
            Self::AlternateReverse => "alternate-reverse",
        }
    }
}

impl fmt::Display for AnimationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl FromStr for AnimationDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_css() == s.trim())
            .ok_or_else(|| format!("unknown animation direction: {s}"))
    }
}
