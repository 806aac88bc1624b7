//! Gradient-only variant.

use backdrop_catalog::{Catalog, Template};
use backdrop_common::Color;
use tracing::debug;

use super::layers::gradient_layer;
use super::Compiled;
use crate::params::{AnimationParams, GradientParams};
use crate::style::{
    Animation, BackgroundSize, BackgroundStyle, Keyframes, Opacity, ATTACHMENT_FIXED, TRANSITION,
};

/// Compile a gradient parameter set against `catalog`.
pub fn compile_gradient(catalog: &Catalog, params: &GradientParams, selector: &str) -> Compiled {
    match catalog.get(&params.template_id) {
        Some(template) => Compiled::new(gradient_style(template, params), selector),
        None => {
            debug!(id = %params.template_id, "gradient template not in catalog, using neutral style");
            Compiled::neutral(selector)
        }
    }
}

/// Build the style for an already-resolved gradient template.
pub fn gradient_style(template: &Template, params: &GradientParams) -> BackgroundStyle {
    let animation = gradient_animation(template, &params.animation);
    let shifting = is_shifting(animation);

    BackgroundStyle {
        background_color: Color::WHITE,
        background_image: vec![gradient_layer(template, &params.colors, params.angle)],
        background_size: vec![gradient_size(animation)],
        opacity: Some(Opacity::from_percent(params.opacity)),
        transition: Some(TRANSITION),
        background_attachment: Some(ATTACHMENT_FIXED),
        background_repeat: vec!["no-repeat"],
        background_position: vec![if shifting { "0% 50%" } else { "center" }],
        animation,
    }
}

/// Animation for a gradient layer; the keyframes follow the template kind.
pub(crate) fn gradient_animation(
    template: &Template,
    params: &AnimationParams,
) -> Option<Animation> {
    params.enabled.then(|| Animation {
        keyframes: Keyframes::for_gradient(template.kind),
        duration_secs: params.duration_secs(),
        direction: params.direction,
    })
}

/// Gradient layers are stretched to 400% while shifting so the sweep has
/// room to travel; a spinning gradient rotates the element instead.
pub(crate) fn gradient_size(animation: Option<Animation>) -> BackgroundSize {
    if is_shifting(animation) {
        BackgroundSize::Percent(400)
    } else {
        BackgroundSize::Percent(100)
    }
}

fn is_shifting(animation: Option<Animation>) -> bool {
    matches!(animation.map(|a| a.keyframes), Some(Keyframes::GradientShift))
}
