//! The style compiler: (template, parameters) to (style, CSS text).
//!
//! Three variants share the layer builders in [`layers`]:
//! - [`compile_pattern`]: one pattern layer over a solid color
//! - [`compile_gradient`]: one gradient layer
//! - [`compile_hybrid`]: a translucent pattern layer over a gradient layer
//!
//! Compilation never fails. An id that does not resolve in the supplied
//! catalog yields the neutral style (solid white, nothing else).

mod gradient;
mod hybrid;
mod layers;
mod pattern;

pub use gradient::{compile_gradient, gradient_style};
pub use hybrid::{alpha_byte, compile_hybrid, hybrid_style};
pub use layers::TileSizing;
pub use pattern::{compile_pattern, pattern_style};

use serde::Serialize;

use crate::css::generate_css;
use crate::style::BackgroundStyle;

/// A derived style and the CSS text rendered from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compiled {
    pub style: BackgroundStyle,
    pub css: String,
}

impl Compiled {
    pub fn new(style: BackgroundStyle, selector: &str) -> Self {
        let css = generate_css(selector, &style);
        Self { style, css }
    }

    pub fn neutral(selector: &str) -> Self {
        Self::new(BackgroundStyle::neutral(), selector)
    }
}
