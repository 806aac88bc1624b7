//! Style compiler and contrast engine for the background generator.
//!
//! Turns a template plus a mode's parameter set into a [`BackgroundStyle`]
//! and the CSS text rendered from it, and derives contrast [`Theming`] for
//! chrome placed over the result. Everything here is pure and
//! deterministic; the only logging is a `debug!` when a template id does
//! not resolve.

pub mod compiler;
pub mod contrast;
pub mod css;
pub mod params;
pub mod style;
pub mod tokens;

pub use compiler::{
    alpha_byte, compile_gradient, compile_hybrid, compile_pattern, gradient_style, hybrid_style,
    pattern_style, Compiled, TileSizing,
};
pub use contrast::{dominant_color, is_bright, relative_luminance, Theming};
pub use css::{generate_css, generate_keyframes};
pub use params::{AnimationParams, GradientParams, HybridParams, PatternParams};
pub use style::{Animation, BackgroundSize, BackgroundStyle, Keyframes, Opacity, Property};
