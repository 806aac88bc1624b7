//! Hybrid mode: pattern over gradient, each from its own catalog.

use std::ops::RangeInclusive;

use backdrop_catalog::Catalog;
use backdrop_common::{AnimationDirection, Color, GeneratorMode};
use backdrop_style::params::{
    ANGLE_MAX, ANGLE_MIN, OPACITY_MAX, OPACITY_MIN, SPACING_MAX, SPACING_MIN, SPEED_MAX, SPEED_MIN,
};
use backdrop_style::{compile_hybrid, Compiled, HybridParams};
use rand::{Rng, RngCore};
use tracing::debug;

use crate::cache::Memo;
use crate::random;
use crate::Generator;

const RANDOM_PATTERN_OPACITY: RangeInclusive<u8> = 40..=69;
const RANDOM_GRADIENT_OPACITY: RangeInclusive<u8> = 70..=94;
const RANDOM_SPACING: RangeInclusive<u32> = 15..=54;
const RANDOM_ANIMATED: f64 = 0.35;
const RANDOM_SPEED: RangeInclusive<u8> = 7..=14;

pub struct HybridGenerator {
    patterns: Catalog,
    gradients: Catalog,
    revision: u64,
    params: HybridParams,
    selector: String,
    memo: Memo<HybridParams>,
}

impl HybridGenerator {
    pub fn new(patterns: Catalog, gradients: Catalog) -> Self {
        Self {
            patterns,
            gradients,
            revision: 0,
            params: HybridParams::default(),
            selector: GeneratorMode::Hybrid.default_selector().to_string(),
            memo: Memo::new(),
        }
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self.revision += 1;
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn params(&self) -> &HybridParams {
        &self.params
    }

    pub fn patterns(&self) -> &Catalog {
        &self.patterns
    }

    pub fn gradients(&self) -> &Catalog {
        &self.gradients
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn set_patterns(&mut self, catalog: Catalog) {
        self.patterns = catalog;
        self.revision += 1;
    }

    pub fn set_gradients(&mut self, catalog: Catalog) {
        self.gradients = catalog;
        self.revision += 1;
    }

    // -----------------------------------------------------------------------
    // Setters
    // -----------------------------------------------------------------------

    pub fn set_pattern(&mut self, id: impl Into<String>) {
        self.params.pattern_id = id.into();
    }

    pub fn set_gradient(&mut self, id: impl Into<String>) {
        self.params.gradient_id = id.into();
    }

    pub fn set_pattern_color(&mut self, color: Color) {
        self.params.pattern_color = color;
    }

    pub fn set_gradient_color(&mut self, index: usize, color: Color) {
        if let Some(slot) = self.params.gradient_colors.get_mut(index) {
            *slot = color;
        }
    }

    pub fn set_gradient_colors(&mut self, colors: [Color; 4]) {
        self.params.gradient_colors = colors;
    }

    pub fn set_pattern_opacity(&mut self, percent: u8) {
        self.params.pattern_opacity = percent.clamp(OPACITY_MIN, OPACITY_MAX);
    }

    pub fn set_gradient_opacity(&mut self, percent: u8) {
        self.params.gradient_opacity = percent.clamp(OPACITY_MIN, OPACITY_MAX);
    }

    pub fn set_spacing(&mut self, px: u32) {
        self.params.spacing = px.clamp(SPACING_MIN, SPACING_MAX);
    }

    pub fn set_angle(&mut self, degrees: u16) {
        self.params.angle = degrees.clamp(ANGLE_MIN, ANGLE_MAX);
    }

    pub fn set_animated(&mut self, enabled: bool) {
        self.params.animation.enabled = enabled;
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.params.animation.speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    }

    pub fn set_direction(&mut self, direction: AnimationDirection) {
        self.params.animation.direction = direction;
    }

    pub fn set_params(&mut self, params: HybridParams) {
        let HybridParams {
            pattern_id,
            gradient_id,
            pattern_color,
            gradient_colors,
            pattern_opacity,
            gradient_opacity,
            spacing,
            angle,
            animation,
        } = params;
        self.set_pattern(pattern_id);
        self.set_gradient(gradient_id);
        self.set_pattern_color(pattern_color);
        self.set_gradient_colors(gradient_colors);
        self.set_pattern_opacity(pattern_opacity);
        self.set_gradient_opacity(gradient_opacity);
        self.set_spacing(spacing);
        self.set_angle(angle);
        self.set_animated(animation.enabled);
        self.set_speed(animation.speed);
        self.set_direction(animation.direction);
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<HybridParams> {
        let pattern_id = random::template_id(&self.patterns, rng)?;
        let gradient_id = random::template_id(&self.gradients, rng)?;
        Some(HybridParams {
            pattern_id,
            gradient_id,
            pattern_color: random::color(rng),
            gradient_colors: random::colors(rng),
            pattern_opacity: rng.gen_range(RANDOM_PATTERN_OPACITY),
            gradient_opacity: rng.gen_range(RANDOM_GRADIENT_OPACITY),
            spacing: rng.gen_range(RANDOM_SPACING),
            angle: random::angle(rng),
            animation: random::animation(rng, RANDOM_ANIMATED, RANDOM_SPEED),
        })
    }
}

impl Generator for HybridGenerator {
    fn mode(&self) -> GeneratorMode {
        GeneratorMode::Hybrid
    }

    fn reset(&mut self) {
        self.params = HybridParams::default();
    }

    fn randomize(&mut self, rng: &mut dyn RngCore) {
        match self.draw(rng) {
            Some(params) => {
                debug!(
                    pattern = %params.pattern_id,
                    gradient = %params.gradient_id,
                    "randomized hybrid"
                );
                self.params = params;
            }
            None => debug!("hybrid catalogs not both loaded, randomize skipped"),
        }
    }

    fn output(&mut self) -> &Compiled {
        self.memo.get_or_derive(&self.params, self.revision, || {
            compile_hybrid(&self.patterns, &self.gradients, &self.params, &self.selector)
        })
    }

    fn derive(&self) -> Compiled {
        compile_hybrid(&self.patterns, &self.gradients, &self.params, &self.selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_catalog::CatalogKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generator() -> HybridGenerator {
        HybridGenerator::new(
            Catalog::builtin(CatalogKind::Patterns),
            Catalog::builtin(CatalogKind::Gradients),
        )
    }

    #[test]
    fn opacities_are_independent() {
        let mut gen = generator();
        gen.set_pattern_opacity(0);
        gen.set_gradient_opacity(100);
        let css = gen.output().css.clone();
        assert!(css.contains("#feca5700"));
        assert!(css.contains("opacity: 1;"));

        gen.set_pattern_opacity(100);
        gen.set_gradient_opacity(0);
        let css = gen.output().css.clone();
        assert!(css.contains("#feca57ff"));
        assert!(css.contains("opacity: 0;"));
    }

    #[test]
    fn randomize_stays_in_range() {
        let mut gen = generator();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            gen.randomize(&mut rng);
            let p = gen.params();
            assert!(gen.patterns().contains(&p.pattern_id));
            assert!(gen.gradients().contains(&p.gradient_id));
            assert!(RANDOM_PATTERN_OPACITY.contains(&p.pattern_opacity));
            assert!(RANDOM_GRADIENT_OPACITY.contains(&p.gradient_opacity));
            assert!(RANDOM_SPACING.contains(&p.spacing));
            assert!(RANDOM_SPEED.contains(&p.animation.speed));
        }
    }

    #[test]
    fn randomize_needs_both_catalogs() {
        let mut gen = HybridGenerator::new(
            Catalog::builtin(CatalogKind::Patterns),
            Catalog::empty(),
        );
        gen.randomize(&mut StdRng::seed_from_u64(4));
        assert_eq!(gen.params(), &HybridParams::default());
    }

    #[test]
    fn swapping_either_catalog_invalidates_output() {
        let mut gen = generator();
        assert!(!gen.output().style.is_neutral());
        gen.set_gradients(Catalog::empty());
        assert!(gen.output().style.is_neutral());
        gen.set_gradients(Catalog::builtin(CatalogKind::Gradients));
        gen.set_patterns(Catalog::empty());
        assert!(gen.output().style.is_neutral());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut gen = generator();
        gen.set_spacing(77);
        gen.reset();
        let once = gen.params().clone();
        gen.reset();
        assert_eq!(gen.params(), &once);
    }

    #[test]
    fn theming_uses_white_backing_color() {
        assert_eq!(generator().theming().text, "#000000");
    }
}
