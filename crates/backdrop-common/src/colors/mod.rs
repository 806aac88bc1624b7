//! Color parsing and validation utilities.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r,g,b)` and `rgba(r,g,b,a)`.
//! In the `rgba()` format, the alpha component can be either 0-255 (integer)
//! or 0.0-1.0 (float), matching CSS conventions.

mod parse;


use crate::errors::ColorError;
use crate::types::Color;

pub(crate) use parse::{parse_rgb_function, HEX_RE, RGB_RE};

/// Parse a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim();

    if s.starts_with('#') {
        if HEX_RE.is_match(s) {
            if let Some(color) = Color::from_hex(s) {
                return Ok(color);
            }
        }
        return Err(ColorError::InvalidHex(s.to_string()));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return parse_rgb_function(s).ok_or_else(|| ColorError::InvalidRgb(s.to_string()));
    }

    Err(ColorError::Unrecognized(s.to_string()))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGB_RE.is_match(s);
    }
    false
}
