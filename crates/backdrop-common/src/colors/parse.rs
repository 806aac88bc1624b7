//! Internal color parsing helpers.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::Color;

/// Regex for hex color: #RGB, #RRGGBB, or #RRGGBBAA.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// Regex for rgb()/rgba() with an optional float or int alpha.
pub(crate) static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap()
});

/// Parse an `rgb(r,g,b)` or `rgba(r,g,b,a)` string.
/// A fractional alpha is read as 0.0-1.0 and scaled to 0-255.
pub(crate) fn parse_rgb_function(s: &str) -> Option<Color> {
    let caps = RGB_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;

    let a: u8 = match caps.get(4).map(|m| m.as_str()) {
        None => 255,
        Some(a_str) if a_str.contains('.') => {
            let a_float: f64 = a_str.parse().ok()?;
            if !(0.0..=1.0).contains(&a_float) {
                return None;
            }
            (a_float * 255.0).round() as u8
        }
        Some(a_str) => {
            let a_int: u32 = a_str.parse().ok()?;
            if a_int > 255 {
                return None;
            }
            a_int as u8
        }
    };

    Some(Color::from_rgba(r, g, b, a))
}
