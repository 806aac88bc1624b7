//! Hybrid variant: a translucent pattern layer painted over a gradient.
//!
//! Pattern opacity is baked into the pattern color as an alpha byte so it
//! does not dim the gradient underneath. The element's `opacity` is the
//! gradient opacity and applies to the composite.

use backdrop_catalog::{Catalog, Template};
use backdrop_common::Color;
use tracing::debug;

use super::gradient::{gradient_animation, gradient_size};
use super::layers::{clamp_spacing, gradient_layer, pattern_layer, TileSizing};
use super::Compiled;
use crate::params::{HybridParams, OPACITY_MAX};
use crate::style::{BackgroundStyle, Opacity, ATTACHMENT_FIXED, TRANSITION};

/// Compile a hybrid parameter set. Both ids must resolve, otherwise the
/// result is the neutral style.
pub fn compile_hybrid(
    patterns: &Catalog,
    gradients: &Catalog,
    params: &HybridParams,
    selector: &str,
) -> Compiled {
    let pattern = patterns.get(&params.pattern_id);
    let gradient = gradients.get(&params.gradient_id);

    match (pattern, gradient) {
        (Some(pattern), Some(gradient)) => {
            Compiled::new(hybrid_style(pattern, gradient, params), selector)
        }
        _ => {
            debug!(
                pattern = %params.pattern_id,
                gradient = %params.gradient_id,
                "hybrid template not in catalog, using neutral style"
            );
            Compiled::neutral(selector)
        }
    }
}

/// Build the style for an already-resolved pattern/gradient pair.
pub fn hybrid_style(
    pattern: &Template,
    gradient: &Template,
    params: &HybridParams,
) -> BackgroundStyle {
    let spacing = clamp_spacing(params.spacing);
    let fg = params.pattern_color.to_rgb_hex();
    let pattern_image = pattern_layer(pattern, &fg, "transparent", spacing)
        .replace(&fg, &format!("{fg}{:02x}", alpha_byte(params.pattern_opacity)));

    let animation = gradient_animation(gradient, &params.animation);

    BackgroundStyle {
        background_color: Color::WHITE,
        background_image: vec![
            pattern_image,
            gradient_layer(gradient, &params.gradient_colors, params.angle),
        ],
        background_size: vec![
            TileSizing::for_pattern(&pattern.id).size(spacing),
            gradient_size(animation),
        ],
        opacity: Some(Opacity::from_percent(params.gradient_opacity)),
        transition: Some(TRANSITION),
        background_attachment: Some(ATTACHMENT_FIXED),
        background_repeat: vec!["repeat", "no-repeat"],
        background_position: vec!["center", "center"],
        animation,
    }
}

/// Alpha byte for a percent opacity, `round(percent * 2.55)` with halves
/// rounded up. Percent is clamped to 100.
pub fn alpha_byte(percent: u8) -> u8 {
    let percent = u32::from(percent.min(OPACITY_MAX));
    // percent <= 100 keeps the result within 0..=255
    ((percent * 255 + 50) / 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::AnimationParams;
    use crate::style::BackgroundSize;
    use backdrop_catalog::CatalogKind;
    use backdrop_common::AnimationDirection;

    fn patterns() -> Catalog {
        Catalog::builtin(CatalogKind::Patterns)
    }

    fn gradients() -> Catalog {
        Catalog::builtin(CatalogKind::Gradients)
    }

    fn compile(params: &HybridParams) -> Compiled {
        compile_hybrid(&patterns(), &gradients(), params, ".hybrid-background")
    }

    #[test]
    fn alpha_byte_encoding() {
        assert_eq!(format!("{:02x}", alpha_byte(100)), "ff");
        assert_eq!(format!("{:02x}", alpha_byte(0)), "00");
        assert_eq!(format!("{:02x}", alpha_byte(50)), "80");
        assert_eq!(alpha_byte(1), 3);
        assert_eq!(alpha_byte(63), 161);
        assert_eq!(alpha_byte(200), 255);
    }

    #[test]
    fn pattern_color_carries_alpha_everywhere_in_its_layer() {
        let params = HybridParams {
            pattern_color: Color::from_rgb(0x3b, 0x82, 0xf6),
            pattern_opacity: 50,
            ..HybridParams::default()
        };
        let compiled = compile(&params);
        let layer = &compiled.style.background_image[0];

        assert!(layer.contains("#3b82f680"));
        assert!(!layer.replace("#3b82f680", "").contains("#3b82f6"));
        assert!(layer.contains("transparent"));
    }

    #[test]
    fn alpha_is_not_applied_to_gradient_layer() {
        let params = HybridParams {
            pattern_color: Color::from_rgb(0xfe, 0xca, 0x57),
            pattern_opacity: 0,
            ..HybridParams::default()
        };
        let compiled = compile(&params);
        assert!(compiled.style.background_image[0].contains("#feca5700"));
        assert_eq!(
            compiled.style.background_image[1],
            "linear-gradient(0deg, #a55eea, #0abde3, #54a0ff, #feca57)"
        );
    }

    #[test]
    fn layers_are_pattern_over_gradient() {
        let compiled = compile(&HybridParams::default());
        let image = compiled.style.background_image_value().unwrap();

        assert!(image.starts_with("repeating-linear-gradient(45deg, #feca57a1"));
        assert!(image.ends_with(", linear-gradient(0deg, #a55eea, #0abde3, #54a0ff, #feca57)"));
        assert!(compiled.css.contains(&format!("background-image: {image};")));
        assert!(compiled.css.contains("background-size: auto, 100% 100%;"));
        assert!(compiled.css.contains("background-repeat: repeat, no-repeat;"));
    }

    #[test]
    fn element_opacity_is_gradient_opacity() {
        let compiled = compile(&HybridParams::default());
        assert_eq!(compiled.style.opacity, Some(Opacity::from_percent(54)));
        assert!(compiled.css.contains("opacity: 0.54;"));
    }

    #[test]
    fn tiled_pattern_sizes_first_layer() {
        let params = HybridParams {
            pattern_id: "circles".into(),
            spacing: 25,
            ..HybridParams::default()
        };
        let compiled = compile(&params);
        assert_eq!(
            compiled.style.background_size,
            vec![BackgroundSize::Pixels(50), BackgroundSize::Percent(100)]
        );
    }

    #[test]
    fn animation_follows_gradient_kind() {
        let animation = AnimationParams {
            enabled: true,
            speed: 14,
            direction: AnimationDirection::AlternateReverse,
        };

        let conic = compile(&HybridParams {
            gradient_id: "conic-center".into(),
            animation,
            ..HybridParams::default()
        });
        assert!(conic
            .css
            .contains("animation: gradientSpin 7s linear infinite alternate-reverse;"));
        assert!(conic.css.contains("@keyframes gradientSpin"));
        assert!(conic.css.contains("background-size: auto, 100% 100%;"));

        let linear = compile(&HybridParams {
            animation,
            ..HybridParams::default()
        });
        assert!(linear.css.contains("@keyframes gradientShift"));
        assert!(linear.css.contains("background-size: auto, 400% 400%;"));
        assert!(linear.css.contains("background-position: center, center;"));
        assert!(!linear.css.contains("patternMove"));
    }

    #[test]
    fn either_stale_id_yields_neutral_style() {
        let bad_pattern = HybridParams {
            pattern_id: "nope".into(),
            ..HybridParams::default()
        };
        let bad_gradient = HybridParams {
            gradient_id: "nope".into(),
            ..HybridParams::default()
        };
        assert!(compile(&bad_pattern).style.is_neutral());
        assert!(compile(&bad_gradient).style.is_neutral());
        assert!(compile_hybrid(&Catalog::empty(), &gradients(), &HybridParams::default(), ".h")
            .style
            .is_neutral());
    }

    #[test]
    fn compilation_is_deterministic() {
        let params = HybridParams {
            animation: AnimationParams {
                enabled: true,
                speed: 3,
                direction: AnimationDirection::Reverse,
            },
            ..HybridParams::default()
        };
        assert_eq!(compile(&params), compile(&params));
    }
}
