//! Gradient mode.

use std::ops::RangeInclusive;

use backdrop_catalog::Catalog;
use backdrop_common::{AnimationDirection, Color, GeneratorMode};
use backdrop_style::params::{ANGLE_MAX, ANGLE_MIN, OPACITY_MAX, OPACITY_MIN, SPEED_MAX, SPEED_MIN};
use backdrop_style::{compile_gradient, Compiled, GradientParams};
use rand::{Rng, RngCore};
use tracing::debug;

use crate::cache::Memo;
use crate::random;
use crate::Generator;

const RANDOM_OPACITY: RangeInclusive<u8> = 70..=95;
const RANDOM_ANIMATED: f64 = 0.3;
const RANDOM_SPEED: RangeInclusive<u8> = 6..=13;

pub struct GradientGenerator {
    catalog: Catalog,
    revision: u64,
    params: GradientParams,
    selector: String,
    memo: Memo<GradientParams>,
}

impl GradientGenerator {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            revision: 0,
            params: GradientParams::default(),
            selector: GeneratorMode::Gradient.default_selector().to_string(),
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

    pub fn params(&self) -> &GradientParams {
        &self.params
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.revision += 1;
    }

    // -----------------------------------------------------------------------
    // Setters
    // -----------------------------------------------------------------------

    pub fn set_template(&mut self, id: impl Into<String>) {
        self.params.template_id = id.into();
    }

    /// Set one of the four stops. `index` is zero-based; out-of-range
    /// indices are ignored.
    pub fn set_color(&mut self, index: usize, color: Color) {
        if let Some(slot) = self.params.colors.get_mut(index) {
            *slot = color;
        }
    }

    pub fn set_colors(&mut self, colors: [Color; 4]) {
        self.params.colors = colors;
    }

    pub fn set_opacity(&mut self, percent: u8) {
        self.params.opacity = percent.clamp(OPACITY_MIN, OPACITY_MAX);
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

    pub fn set_params(&mut self, params: GradientParams) {
        let GradientParams {
            template_id,
            colors,
            opacity,
            angle,
            animation,
        } = params;
        self.set_template(template_id);
        self.set_colors(colors);
        self.set_opacity(opacity);
        self.set_angle(angle);
        self.set_animated(animation.enabled);
        self.set_speed(animation.speed);
        self.set_direction(animation.direction);
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<GradientParams> {
        let template_id = random::template_id(&self.catalog, rng)?;
        Some(GradientParams {
            template_id,
            colors: random::colors(rng),
            opacity: rng.gen_range(RANDOM_OPACITY),
            angle: random::angle(rng),
            animation: random::animation(rng, RANDOM_ANIMATED, RANDOM_SPEED),
        })
    }
}

impl Generator for GradientGenerator {
    fn mode(&self) -> GeneratorMode {
        GeneratorMode::Gradient
    }

    fn reset(&mut self) {
        self.params = GradientParams::default();
    }

    fn randomize(&mut self, rng: &mut dyn RngCore) {
        match self.draw(rng) {
            Some(params) => {
                debug!(template = %params.template_id, "randomized gradient");
                self.params = params;
            }
            None => debug!("gradient catalog empty, randomize skipped"),
        }
    }

    fn output(&mut self) -> &Compiled {
        self.memo.get_or_derive(&self.params, self.revision, || {
            compile_gradient(&self.catalog, &self.params, &self.selector)
        })
    }

    fn derive(&self) -> Compiled {
        compile_gradient(&self.catalog, &self.params, &self.selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_catalog::CatalogKind;
    use backdrop_style::params::ANGLE_STEP;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generator() -> GradientGenerator {
        GradientGenerator::new(Catalog::builtin(CatalogKind::Gradients))
    }

    #[test]
    fn setters_clamp_and_ignore_bad_index() {
        let mut gen = generator();
        gen.set_angle(720);
        gen.set_opacity(180);
        gen.set_speed(25);
        assert_eq!(gen.params().angle, 360);
        assert_eq!(gen.params().opacity, 100);
        assert_eq!(gen.params().animation.speed, 20);

        let before = gen.params().colors;
        gen.set_color(4, Color::BLACK);
        assert_eq!(gen.params().colors, before);
        gen.set_color(2, Color::BLACK);
        assert_eq!(gen.params().colors[2], Color::BLACK);
    }

    #[test]
    fn angle_change_reaches_linear_css() {
        let mut gen = generator();
        gen.set_template("linear-horizontal");
        gen.set_angle(135);
        assert!(gen.output().css.contains("linear-gradient(135deg, "));
        gen.set_angle(270);
        assert!(gen.output().css.contains("linear-gradient(270deg, "));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut gen = generator();
        gen.randomize(&mut StdRng::seed_from_u64(77));
        gen.reset();
        gen.reset();
        assert_eq!(gen.params(), &GradientParams::default());
    }

    #[test]
    fn randomize_stays_in_range() {
        let mut gen = generator();
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..200 {
            gen.randomize(&mut rng);
            let p = gen.params();
            assert!(gen.catalog().contains(&p.template_id));
            assert!(RANDOM_OPACITY.contains(&p.opacity));
            assert!(RANDOM_SPEED.contains(&p.animation.speed));
            assert_eq!(p.angle % ANGLE_STEP, 0);
            assert!(p.angle < 360);
        }
    }

    #[test]
    fn randomize_on_empty_catalog_is_noop() {
        let mut gen = GradientGenerator::new(Catalog::empty());
        gen.randomize(&mut StdRng::seed_from_u64(1));
        assert_eq!(gen.params(), &GradientParams::default());
        assert!(gen.output().style.is_neutral());
    }

    #[test]
    fn spin_and_shift_switch_with_template() {
        let mut gen = generator();
        gen.set_animated(true);
        assert!(gen.output().css.contains("@keyframes gradientSpin"));
        gen.set_template("radial-center");
        assert!(gen.output().css.contains("@keyframes gradientShift"));
    }

    #[test]
    fn theming_uses_white_backing_color() {
        let mut gen = generator();
        gen.set_colors([Color::BLACK; 4]);
        assert_eq!(gen.theming().text, "#000000");
    }
}
