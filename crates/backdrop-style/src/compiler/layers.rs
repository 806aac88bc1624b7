//! Layer builders shared by the three compiler variants.

use std::sync::LazyLock;

use backdrop_catalog::{GradientKind, Template};
use backdrop_common::Color;
use regex::Regex;

use crate::params::{ANGLE_MAX, SPACING_MAX, SPACING_MIN};
use crate::style::BackgroundSize;
use crate::tokens::{substitute, Bindings, Token};

/// First `Ndeg` angle in a gradient string.
static ANGLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+deg").unwrap());

/// How a pattern layer is tiled, keyed by pattern id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSizing {
    /// Sized by the image itself.
    Auto,
    /// One spacing per tile (`dots`, `grid`).
    Spacing,
    /// Two spacings per tile (`hexagon`, `circles`).
    DoubleSpacing,
}

impl TileSizing {
    pub fn for_pattern(id: &str) -> Self {
        match id {
            "dots" | "grid" => Self::Spacing,
            "hexagon" | "circles" => Self::DoubleSpacing,
            _ => Self::Auto,
        }
    }

    pub fn size(self, spacing: u32) -> BackgroundSize {
        match self {
            Self::Auto => BackgroundSize::Auto,
            Self::Spacing => BackgroundSize::Pixels(spacing),
            Self::DoubleSpacing => BackgroundSize::Pixels(spacing * 2),
        }
    }
}

pub(crate) fn clamp_spacing(spacing: u32) -> u32 {
    spacing.clamp(SPACING_MIN, SPACING_MAX)
}

/// Substitute pattern tokens. `spacing` must already be clamped.
pub(crate) fn pattern_layer(template: &Template, fg: &str, bg: &str, spacing: u32) -> String {
    let bindings = Bindings::new()
        .bind(Token::Fg, fg)
        .bind(Token::Bg, bg)
        .bind(Token::Spacing, spacing.to_string())
        .bind(Token::DoubleSpacing, (spacing * 2).to_string());
    substitute(&template.base_pattern, &bindings)
}

/// Substitute gradient stops, then the angle for linear templates.
pub(crate) fn gradient_layer(template: &Template, colors: &[Color; 4], angle: u16) -> String {
    let bindings = colors
        .iter()
        .enumerate()
        .filter_map(|(i, c)| Token::color(i).map(|t| (t, c.to_hex())))
        .fold(Bindings::new(), |b, (t, hex)| b.bind(t, hex));
    let layer = substitute(&template.base_pattern, &bindings);

    match template.kind {
        GradientKind::Linear => {
            let angle = angle.min(ANGLE_MAX);
            ANGLE_RE
                .replacen(&layer, 1, format!("{angle}deg").as_str())
                .into_owned()
        }
        GradientKind::Radial | GradientKind::Conic => layer,
    }
}
