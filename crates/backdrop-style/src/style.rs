//! The renderable style object.
//!
//! A [`BackgroundStyle`] is the single source of truth for a derivation:
//! both the JSON style object and the CSS text are rendered from its
//! [`declarations`](BackgroundStyle::declarations), so the two can never
//! disagree about a value.

use std::fmt;

use backdrop_catalog::GradientKind;
use backdrop_common::{AnimationDirection, Color};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::contrast::{self, Theming};

pub const TRANSITION: &str = "all 0.3s ease-in-out";
pub const ATTACHMENT_FIXED: &str = "fixed";

// =============================================================================
// VALUE TYPES
// =============================================================================

/// Opacity held as an integer percent, rendered as `percent / 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opacity(u8);

impl Opacity {
    pub fn from_percent(percent: u8) -> Self {
        Self(percent.min(100))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}

/// One layer's `background-size`. Sizes are always square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundSize {
    Auto,
    Pixels(u32),
    Percent(u32),
}

impl fmt::Display for BackgroundSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Pixels(px) => write!(f, "{px}px {px}px"),
            Self::Percent(pct) => write!(f, "{pct}% {pct}%"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timing {
    Linear,
    EaseInOut,
}

impl Timing {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// The named keyframe animations the compiler can attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyframes {
    /// Translates `background-position` by one tile.
    PatternMove { spacing: u32 },
    /// Rotates the element a full turn.
    GradientSpin,
    /// Sweeps `background-position` across and back.
    GradientShift,
}

impl Keyframes {
    /// Keyframes for an animated gradient of the given kind. Conic gradients
    /// spin; linear and radial gradients shift.
    pub fn for_gradient(kind: GradientKind) -> Self {
        match kind {
            GradientKind::Conic => Self::GradientSpin,
            GradientKind::Linear | GradientKind::Radial => Self::GradientShift,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::PatternMove { .. } => "patternMove",
            Self::GradientSpin => "gradientSpin",
            Self::GradientShift => "gradientShift",
        }
    }

    pub fn timing(self) -> Timing {
        match self {
            Self::PatternMove { .. } | Self::GradientSpin => Timing::Linear,
            Self::GradientShift => Timing::EaseInOut,
        }
    }

    /// `(offset, declaration)` pairs of the `@keyframes` block.
    pub fn frames(self) -> Vec<(&'static str, String)> {
        match self {
            Self::PatternMove { spacing } => vec![
                ("0%", "background-position: 0 0".to_string()),
                (
                    "100%",
                    format!("background-position: {spacing}px {spacing}px"),
                ),
            ],
            Self::GradientSpin => vec![
                ("0%", "transform: rotate(0deg)".to_string()),
                ("100%", "transform: rotate(360deg)".to_string()),
            ],
            Self::GradientShift => vec![
                ("0%", "background-position: 0% 50%".to_string()),
                ("50%", "background-position: 100% 50%".to_string()),
                ("100%", "background-position: 0% 50%".to_string()),
            ],
        }
    }
}

/// An `animation` shorthand: always infinite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Animation {
    pub keyframes: Keyframes,
    pub duration_secs: u32,
    pub direction: AnimationDirection,
}

impl Animation {
    pub fn timing(&self) -> Timing {
        self.keyframes.timing()
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}s {} infinite {}",
            self.keyframes.name(),
            self.duration_secs,
            self.timing().as_css(),
            self.direction.as_css()
        )
    }
}

// =============================================================================
// DECLARATIONS
// =============================================================================

/// CSS properties a background style may set, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    BackgroundColor,
    BackgroundImage,
    BackgroundSize,
    Opacity,
    Transition,
    BackgroundAttachment,
    BackgroundRepeat,
    BackgroundPosition,
    Animation,
}

impl Property {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::BackgroundColor => "background-color",
            Self::BackgroundImage => "background-image",
            Self::BackgroundSize => "background-size",
            Self::Opacity => "opacity",
            Self::Transition => "transition",
            Self::BackgroundAttachment => "background-attachment",
            Self::BackgroundRepeat => "background-repeat",
            Self::BackgroundPosition => "background-position",
            Self::Animation => "animation",
        }
    }

    /// Name used in the JSON style object.
    pub fn style_key(self) -> &'static str {
        match self {
            Self::BackgroundColor => "backgroundColor",
            Self::BackgroundImage => "backgroundImage",
            Self::BackgroundSize => "backgroundSize",
            Self::Opacity => "opacity",
            Self::Transition => "transition",
            Self::BackgroundAttachment => "backgroundAttachment",
            Self::BackgroundRepeat => "backgroundRepeat",
            Self::BackgroundPosition => "backgroundPosition",
            Self::Animation => "animation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: Property,
    pub value: String,
}

// =============================================================================
// BACKGROUND STYLE
// =============================================================================

/// A derived background. Multi-layer fields list the top layer first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BackgroundStyle {
    pub background_color: Color,
    pub background_image: Vec<String>,
    pub background_size: Vec<BackgroundSize>,
    pub opacity: Option<Opacity>,
    pub transition: Option<&'static str>,
    pub background_attachment: Option<&'static str>,
    pub background_repeat: Vec<&'static str>,
    pub background_position: Vec<&'static str>,
    pub animation: Option<Animation>,
}

impl BackgroundStyle {
    /// Solid white with nothing else set. Returned whenever a template
    /// cannot be resolved.
    pub fn neutral() -> Self {
        Self {
            background_color: Color::WHITE,
            background_image: Vec::new(),
            background_size: Vec::new(),
            opacity: None,
            transition: None,
            background_attachment: None,
            background_repeat: Vec::new(),
            background_position: Vec::new(),
            animation: None,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }

    /// Keyframes the CSS text must carry alongside the rule block.
    pub fn keyframes(&self) -> Option<Keyframes> {
        self.animation.map(|a| a.keyframes)
    }

    /// The comma-joined `background-image` value, if any layer is set.
    pub fn background_image_value(&self) -> Option<String> {
        join(&self.background_image)
    }

    pub fn background_size_value(&self) -> Option<String> {
        join(&self.background_size)
    }

    /// Every set property with its rendered value, in emission order.
    pub fn declarations(&self) -> Vec<Declaration> {
        let mut out = Vec::with_capacity(9);
        let mut push = |property, value: Option<String>| {
            if let Some(value) = value {
                out.push(Declaration { property, value });
            }
        };

        push(
            Property::BackgroundColor,
            Some(self.background_color.to_hex()),
        );
        push(Property::BackgroundImage, self.background_image_value());
        push(Property::BackgroundSize, self.background_size_value());
        push(Property::Opacity, self.opacity.map(|o| o.to_string()));
        push(Property::Transition, self.transition.map(str::to_string));
        push(
            Property::BackgroundAttachment,
            self.background_attachment.map(str::to_string),
        );
        push(Property::BackgroundRepeat, join(&self.background_repeat));
        push(Property::BackgroundPosition, join(&self.background_position));
        push(Property::Animation, self.animation.map(|a| a.to_string()));

        out
    }

    /// Contrast theming for chrome drawn over this background.
    pub fn theming(&self) -> Theming {
        let image = self.background_image_value();
        let color = self.background_color.to_hex();
        Theming::for_color(contrast::dominant_color(Some(&color), image.as_deref()))
    }
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self::neutral()
    }
}

impl Serialize for BackgroundStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let declarations = self.declarations();
        let mut map = serializer.serialize_map(Some(declarations.len()))?;
        for decl in &declarations {
            match (decl.property, self.opacity) {
                (Property::Opacity, Some(opacity)) => {
                    map.serialize_entry(decl.property.style_key(), &opacity.as_f64())?
                }
                _ => map.serialize_entry(decl.property.style_key(), &decl.value)?,
            }
        }
        map.end()
    }
}

fn join<T: fmt::Display>(items: &[T]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    Some(
        items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    )
}
