//! Pattern mode: one tiled layer over a solid color.

use std::ops::RangeInclusive;

use backdrop_catalog::Catalog;
use backdrop_common::{AnimationDirection, Color, GeneratorMode};
use backdrop_style::params::{
    OPACITY_MAX, OPACITY_MIN, SPACING_MAX, SPACING_MIN, SPEED_MAX, SPEED_MIN,
};
use backdrop_style::{compile_pattern, Compiled, PatternParams};
use rand::{Rng, RngCore};
use tracing::debug;

use crate::cache::Memo;
use crate::random;
use crate::Generator;

const RANDOM_OPACITY: RangeInclusive<u8> = 60..=95;
const RANDOM_SPACING: RangeInclusive<u32> = 15..=64;
const RANDOM_ANIMATED: f64 = 0.4;
const RANDOM_SPEED: RangeInclusive<u8> = 8..=17;

pub struct PatternGenerator {
    catalog: Catalog,
    revision: u64,
    params: PatternParams,
    selector: String,
    memo: Memo<PatternParams>,
}

impl PatternGenerator {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            revision: 0,
            params: PatternParams::default(),
            selector: GeneratorMode::Pattern.default_selector().to_string(),
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

    pub fn params(&self) -> &PatternParams {
        &self.params
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Replace the catalog wholesale. The selected id is kept even if the
    /// new catalog lacks it; derivation then yields the neutral style.
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

    pub fn set_foreground(&mut self, color: Color) {
        self.params.foreground = color;
    }

    pub fn set_background(&mut self, color: Color) {
        self.params.background = color;
    }

    pub fn set_opacity(&mut self, percent: u8) {
        self.params.opacity = percent.clamp(OPACITY_MIN, OPACITY_MAX);
    }

    pub fn set_spacing(&mut self, px: u32) {
        self.params.spacing = px.clamp(SPACING_MIN, SPACING_MAX);
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

    /// Replace the whole parameter set, clamping numeric fields.
    pub fn set_params(&mut self, params: PatternParams) {
        let PatternParams {
            template_id,
            foreground,
            background,
            opacity,
            spacing,
            animation,
        } = params;
        self.set_template(template_id);
        self.set_foreground(foreground);
        self.set_background(background);
        self.set_opacity(opacity);
        self.set_spacing(spacing);
        self.set_animated(animation.enabled);
        self.set_speed(animation.speed);
        self.set_direction(animation.direction);
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<PatternParams> {
        let template_id = random::template_id(&self.catalog, rng)?;
        Some(PatternParams {
            template_id,
            foreground: random::color(rng),
            background: random::color(rng),
            opacity: rng.gen_range(RANDOM_OPACITY),
            spacing: rng.gen_range(RANDOM_SPACING),
            animation: random::animation(rng, RANDOM_ANIMATED, RANDOM_SPEED),
        })
    }
}

impl Generator for PatternGenerator {
    fn mode(&self) -> GeneratorMode {
        GeneratorMode::Pattern
    }

    fn reset(&mut self) {
        self.params = PatternParams::default();
    }

    fn randomize(&mut self, rng: &mut dyn RngCore) {
        match self.draw(rng) {
            Some(params) => {
                debug!(template = %params.template_id, "randomized pattern");
                self.params = params;
            }
            None => debug!("pattern catalog empty, randomize skipped"),
        }
    }

    fn output(&mut self) -> &Compiled {
        self.memo.get_or_derive(&self.params, self.revision, || {
            compile_pattern(&self.catalog, &self.params, &self.selector)
        })
    }

    fn derive(&self) -> Compiled {
        compile_pattern(&self.catalog, &self.params, &self.selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_catalog::CatalogKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generator() -> PatternGenerator {
        PatternGenerator::new(Catalog::builtin(CatalogKind::Patterns))
    }

    #[test]
    fn starts_at_defaults() {
        let gen = generator();
        assert_eq!(gen.params(), &PatternParams::default());
        assert_eq!(gen.selector(), ".pattern-background");
    }

    #[test]
    fn setters_clamp_numeric_fields() {
        let mut gen = generator();
        gen.set_opacity(250);
        gen.set_spacing(1);
        gen.set_speed(0);
        assert_eq!(gen.params().opacity, 100);
        assert_eq!(gen.params().spacing, 5);
        assert_eq!(gen.params().animation.speed, 1);

        gen.set_spacing(500);
        gen.set_speed(99);
        assert_eq!(gen.params().spacing, 100);
        assert_eq!(gen.params().animation.speed, 20);
    }

    #[test]
    fn set_params_clamps_too() {
        let mut gen = generator();
        gen.set_params(PatternParams {
            spacing: 0,
            opacity: 101,
            ..PatternParams::default()
        });
        assert_eq!(gen.params().spacing, 5);
        assert_eq!(gen.params().opacity, 100);
    }

    #[test]
    fn setter_change_is_visible_on_next_read() {
        let mut gen = generator();
        assert!(gen.output().css.contains("background-size: 30px 30px;"));
        gen.set_spacing(42);
        assert!(gen.output().css.contains("background-size: 42px 42px;"));
    }

    #[test]
    fn output_matches_uncached_derivation() {
        let mut gen = generator();
        gen.set_animated(true);
        gen.set_direction(AnimationDirection::Reverse);
        let fresh = gen.derive();
        assert_eq!(gen.output(), &fresh);
        assert_eq!(gen.output(), &fresh);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut gen = generator();
        gen.set_template("grid");
        gen.set_opacity(10);
        gen.reset();
        let once = gen.params().clone();
        gen.reset();
        assert_eq!(gen.params(), &once);
        assert_eq!(once, PatternParams::default());
    }

    #[test]
    fn randomize_stays_in_range() {
        let mut gen = generator();
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            gen.randomize(&mut rng);
            let p = gen.params();
            assert!(gen.catalog().contains(&p.template_id));
            assert!(RANDOM_OPACITY.contains(&p.opacity));
            assert!(RANDOM_SPACING.contains(&p.spacing));
            assert!(RANDOM_SPEED.contains(&p.animation.speed));
        }
    }

    #[test]
    fn randomize_is_reproducible_with_seed() {
        let mut a = generator();
        let mut b = generator();
        a.randomize(&mut StdRng::seed_from_u64(9));
        b.randomize(&mut StdRng::seed_from_u64(9));
        assert_eq!(a.params(), b.params());
    }

    #[test]
    fn randomize_on_empty_catalog_is_noop() {
        let mut gen = PatternGenerator::new(Catalog::empty());
        gen.set_opacity(12);
        let before = gen.params().clone();
        gen.randomize(&mut StdRng::seed_from_u64(1));
        assert_eq!(gen.params(), &before);
    }

    #[test]
    fn catalog_swap_invalidates_cached_output() {
        let mut gen = generator();
        assert!(!gen.output().style.is_neutral());
        gen.set_catalog(Catalog::empty());
        assert!(gen.output().style.is_neutral());
        gen.set_catalog(Catalog::builtin(CatalogKind::Patterns));
        assert!(!gen.output().style.is_neutral());
    }

    #[test]
    fn custom_selector_is_used() {
        let mut gen = generator().with_selector(".hero");
        assert!(gen.output().css.starts_with(".hero {\n"));
    }

    #[test]
    fn theming_follows_background_color() {
        let mut gen = generator();
        gen.set_background(Color::BLACK);
        assert_eq!(gen.theming().text, "#ffffff");
        gen.set_background(Color::WHITE);
        assert_eq!(gen.theming().text, "#000000");
    }
}
