//! Parameter sets consumed by the style compiler.
//!
//! Each mode has its own set with fixed defaults. Ranges are enforced by the
//! generator setters; the compiler clamps again so a hand-built set can never
//! produce out-of-range CSS.

use backdrop_common::{AnimationDirection, Color};
use serde::{Deserialize, Serialize};

pub const OPACITY_MIN: u8 = 0;
pub const OPACITY_MAX: u8 = 100;
pub const SPACING_MIN: u32 = 5;
pub const SPACING_MAX: u32 = 100;
pub const SPEED_MIN: u8 = 1;
pub const SPEED_MAX: u8 = 20;
pub const ANGLE_MIN: u16 = 0;
pub const ANGLE_MAX: u16 = 360;
pub const ANGLE_STEP: u16 = 15;

/// Animation toggle, speed (1 slowest, 20 fastest) and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationParams {
    pub enabled: bool,
    pub speed: u8,
    pub direction: AnimationDirection,
}

impl AnimationParams {
    pub const fn off(speed: u8) -> Self {
        Self {
            enabled: false,
            speed,
            direction: AnimationDirection::Normal,
        }
    }

    /// Seconds per cycle: `21 - speed`, so speed 1 is 20s and speed 20 is 1s.
    pub fn duration_secs(&self) -> u32 {
        21 - u32::from(self.speed.clamp(SPEED_MIN, SPEED_MAX))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternParams {
    pub template_id: String,
    pub foreground: Color,
    pub background: Color,
    /// Percent, 0-100.
    pub opacity: u8,
    /// Pixels, 5-100.
    pub spacing: u32,
    pub animation: AnimationParams,
}

impl Default for PatternParams {
    fn default() -> Self {
        Self {
            template_id: "dots".into(),
            foreground: Color::from_rgb(0x25, 0x4e, 0xf4),
            background: Color::from_rgb(0xf0, 0xff, 0xf1),
            opacity: 100,
            spacing: 30,
            animation: AnimationParams::off(10),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientParams {
    pub template_id: String,
    pub colors: [Color; 4],
    /// Percent, 0-100.
    pub opacity: u8,
    /// Degrees, 0-360. Only linear templates use it.
    pub angle: u16,
    pub animation: AnimationParams,
}

impl Default for GradientParams {
    fn default() -> Self {
        Self {
            template_id: "conic-center".into(),
            colors: [
                Color::from_rgb(0xee, 0x7c, 0xd9),
                Color::from_rgb(0x8a, 0xd1, 0xf5),
                Color::from_rgb(0xe0, 0xf9, 0xff),
                Color::from_rgb(0x4d, 0x4e, 0x5c),
            ],
            opacity: 100,
            angle: 45,
            animation: AnimationParams::off(5),
        }
    }
}

/// Pattern layered over a gradient. The two opacities are independent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridParams {
    pub pattern_id: String,
    pub gradient_id: String,
    pub pattern_color: Color,
    pub gradient_colors: [Color; 4],
    pub pattern_opacity: u8,
    pub gradient_opacity: u8,
    pub spacing: u32,
    pub angle: u16,
    pub animation: AnimationParams,
}

impl Default for HybridParams {
    fn default() -> Self {
        Self {
            pattern_id: "stripes".into(),
            gradient_id: "linear-vertical".into(),
            pattern_color: Color::from_rgb(0xfe, 0xca, 0x57),
            gradient_colors: [
                Color::from_rgb(0xa5, 0x5e, 0xea),
                Color::from_rgb(0x0a, 0xbd, 0xe3),
                Color::from_rgb(0x54, 0xa0, 0xff),
                Color::from_rgb(0xfe, 0xca, 0x57),
            ],
            pattern_opacity: 63,
            gradient_opacity: 54,
            spacing: 5,
            angle: 0,
            animation: AnimationParams::off(5),
        }
    }
}
