//! Contrast theming for chrome drawn over a generated background.
//!
//! The dominant color is the explicit background color when it parses,
//! otherwise the first color found in the background image, otherwise
//! white. Theming is a binary function of that color's relative luminance.

use std::sync::LazyLock;

use backdrop_common::{parse_color, Color};
use regex::Regex;
use serde::Serialize;

/// First hex color or `rgb()`/`rgba()` call in a background-image value.
static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#[a-fA-F0-9]{6}|#[a-fA-F0-9]{3}|rgba?\([^)]+\)").unwrap()
});

static INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Luminance above which a background counts as bright.
pub const BRIGHTNESS_THRESHOLD: f64 = 0.5;

/// Representative color for a background. Never fails; malformed or
/// missing input yields white.
pub fn dominant_color(background_color: Option<&str>, background_image: Option<&str>) -> Color {
    if let Some(color) = background_color.and_then(|c| parse_color(c).ok()) {
        return color;
    }

    background_image
        .and_then(first_image_color)
        .unwrap_or(Color::WHITE)
}

fn first_image_color(image: &str) -> Option<Color> {
    let found = COLOR_RE.find(image)?.as_str();
    if found.starts_with('#') {
        return Color::from_hex(found);
    }

    let channels: Vec<u8> = INT_RE
        .find_iter(found)
        .take(3)
        .map(|m| m.as_str().parse::<u32>().map_or(255, |v| v.min(255) as u8))
        .collect();
    match channels[..] {
        [r, g, b] => Some(Color::from_rgb(r, g, b)),
        _ => None,
    }
}

/// WCAG relative luminance in `0.0..=1.0`. Alpha is ignored.
pub fn relative_luminance(color: Color) -> f64 {
    fn linear(channel: u8) -> f64 {
        let c = f64::from(channel) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linear(color.r) + 0.7152 * linear(color.g) + 0.0722 * linear(color.b)
}

pub fn is_bright(color: Color) -> bool {
    relative_luminance(color) > BRIGHTNESS_THRESHOLD
}

/// Colors for text and controls placed over a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theming {
    pub text: &'static str,
    pub border: &'static str,
    pub hover_bg: &'static str,
    pub shadow: &'static str,
}

impl Theming {
    pub const ON_BRIGHT: Theming = Theming {
        text: "#000000",
        border: "#000000",
        hover_bg: "rgba(0, 0, 0, 0.1)",
        shadow: "rgba(0, 0, 0, 0.2)",
    };

    pub const ON_DARK: Theming = Theming {
        text: "#ffffff",
        border: "#ffffff",
        hover_bg: "rgba(255, 255, 255, 0.1)",
        shadow: "rgba(255, 255, 255, 0.2)",
    };

    pub fn for_luminance(luminance: f64) -> Self {
        if luminance > BRIGHTNESS_THRESHOLD {
            Self::ON_BRIGHT
        } else {
            Self::ON_DARK
        }
    }

    pub fn for_color(color: Color) -> Self {
        Self::for_luminance(relative_luminance(color))
    }
}
