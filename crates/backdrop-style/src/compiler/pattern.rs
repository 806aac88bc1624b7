//! Pattern-only variant: one tiled layer over a solid background color.

use backdrop_catalog::{Catalog, Template};
use tracing::debug;

use super::layers::{clamp_spacing, pattern_layer, TileSizing};
use super::Compiled;
use crate::params::PatternParams;
use crate::style::{
    Animation, BackgroundStyle, Keyframes, Opacity, ATTACHMENT_FIXED, TRANSITION,
};

/// Compile a pattern parameter set against `catalog`.
pub fn compile_pattern(catalog: &Catalog, params: &PatternParams, selector: &str) -> Compiled {
    match catalog.get(&params.template_id) {
        Some(template) => Compiled::new(pattern_style(template, params), selector),
        None => {
            debug!(id = %params.template_id, "pattern template not in catalog, using neutral style");
            Compiled::neutral(selector)
        }
    }
}

/// Build the style for an already-resolved pattern template.
pub fn pattern_style(template: &Template, params: &PatternParams) -> BackgroundStyle {
    let spacing = clamp_spacing(params.spacing);
    let image = pattern_layer(
        template,
        &params.foreground.to_hex(),
        &params.background.to_hex(),
        spacing,
    );

    let animation = params.animation.enabled.then(|| Animation {
        keyframes: Keyframes::PatternMove { spacing },
        duration_secs: params.animation.duration_secs(),
        direction: params.animation.direction,
    });

    BackgroundStyle {
        background_color: params.background,
        background_image: vec![image],
        background_size: vec![TileSizing::for_pattern(&template.id).size(spacing)],
        opacity: Some(Opacity::from_percent(params.opacity)),
        transition: Some(TRANSITION),
        background_attachment: Some(ATTACHMENT_FIXED),
        background_repeat: vec!["repeat"],
        background_position: vec!["center"],
        animation,
    }
}
