//! Random draws shared by the generators.
//!
//! Every function takes the random source explicitly so callers can seed it.

use std::ops::RangeInclusive;

use backdrop_catalog::Catalog;
use backdrop_common::{AnimationDirection, Color};
use backdrop_style::params::ANGLE_STEP;
use backdrop_style::AnimationParams;
use rand::seq::SliceRandom;
use rand::Rng;

/// Colors drawn by `randomize`: 24 vibrant followed by 18 pastel. A few
/// appear in both halves and are drawn twice as often.
pub const PALETTE: [u32; 42] = [
    // vibrant
    0xff6b6b, 0x4ecdc4, 0x45b7d1, 0x96ceb4, 0xfeca57, 0xff9ff3,
    0x54a0ff, 0x5f27cd, 0x00d2d3, 0xff9f43, 0x10ac84, 0xee5a24,
    0x0abde3, 0x3867d6, 0x8854d0, 0xa55eea, 0x26de81, 0xfd79a8,
    0xfdcb6e, 0x6c5ce7, 0x74b9ff, 0x00b894, 0xe17055, 0x81ecec,
    // pastel
    0xffeaa7, 0xfab1a0, 0xff7675, 0xfd79a8, 0xfdcb6e, 0xe17055,
    0x74b9ff, 0x0984e3, 0x00b894, 0x00cec9, 0x6c5ce7, 0xa29bfe,
    0xddd6fe, 0xfecaca, 0xfed7d7, 0xd1fae5, 0xdbeafe, 0xe0e7ff,
];

/// Angles are drawn from `0..=345` in whole steps.
const ANGLE_STEPS: u16 = 24;

pub fn palette_color(rgb: u32) -> Color {
    Color::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

pub fn color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    palette_color(PALETTE[rng.gen_range(0..PALETTE.len())])
}

pub fn colors<R: Rng + ?Sized>(rng: &mut R) -> [Color; 4] {
    [color(rng), color(rng), color(rng), color(rng)]
}

/// A uniformly chosen template id, or `None` for an empty catalog.
pub fn template_id<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Option<String> {
    catalog.templates().choose(rng).map(|t| t.id.clone())
}

pub fn angle<R: Rng + ?Sized>(rng: &mut R) -> u16 {
    rng.gen_range(0..ANGLE_STEPS) * ANGLE_STEP
}

pub fn direction<R: Rng + ?Sized>(rng: &mut R) -> AnimationDirection {
    AnimationDirection::ALL[rng.gen_range(0..AnimationDirection::ALL.len())]
}

/// Animation enabled with probability `p`, speed and direction drawn
/// independently of the toggle.
pub fn animation<R: Rng + ?Sized>(
    rng: &mut R,
    p: f64,
    speeds: RangeInclusive<u8>,
) -> AnimationParams {
    AnimationParams {
        enabled: rng.gen_bool(p),
        speed: rng.gen_range(speeds),
        direction: direction(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_catalog::CatalogKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn palette_unpacks_to_hex() {
        assert_eq!(palette_color(PALETTE[0]).to_hex(), "#ff6b6b");
        assert_eq!(palette_color(PALETTE[41]).to_hex(), "#e0e7ff");
        assert_eq!(palette_color(0x0984e3).to_hex(), "#0984e3");
    }

    #[test]
    fn angles_are_whole_steps_below_360() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let angle = angle(&mut rng);
            assert_eq!(angle % ANGLE_STEP, 0);
            assert!(angle <= 345);
        }
    }

    #[test]
    fn every_direction_is_reachable() {
        let mut rng = StdRng::seed_from_u64(11);
        let drawn: Vec<_> = (0..200).map(|_| direction(&mut rng)).collect();
        for d in AnimationDirection::ALL {
            assert!(drawn.contains(&d), "{d} never drawn");
        }
    }

    #[test]
    fn template_id_comes_from_catalog() {
        let catalog = Catalog::builtin(CatalogKind::Patterns);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let id = template_id(&catalog, &mut rng).unwrap();
            assert!(catalog.contains(&id));
        }
        assert!(template_id(&Catalog::empty(), &mut rng).is_none());
    }

    #[test]
    fn animation_probability_is_roughly_honoured() {
        let mut rng = StdRng::seed_from_u64(42);
        let enabled = (0..2000)
            .filter(|_| animation(&mut rng, 0.3, 6..=13).enabled)
            .count();
        assert!((450..=750).contains(&enabled), "enabled {enabled} of 2000");
    }

    #[test]
    fn colors_come_from_palette() {
        let mut rng = StdRng::seed_from_u64(5);
        let allowed: Vec<Color> = PALETTE.iter().map(|&c| palette_color(c)).collect();
        for c in colors(&mut rng) {
            assert!(allowed.contains(&c));
        }
    }
}
