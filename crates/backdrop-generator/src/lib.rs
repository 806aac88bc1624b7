//! Per-mode generator state.
//!
//! Each generator owns its catalog(s) and current parameter set, exposes one
//! setter per field plus `reset` and `randomize`, and derives style and CSS
//! on read. The last derivation is memoised until a field changes or a
//! catalog is swapped in.

mod cache;
pub mod gradient;
pub mod hybrid;
pub mod pattern;
pub mod random;

pub use gradient::GradientGenerator;
pub use hybrid::HybridGenerator;
pub use pattern::PatternGenerator;

use backdrop_common::GeneratorMode;
use backdrop_style::{Compiled, Theming};
use rand::RngCore;

/// Operations shared by the three mode generators.
pub trait Generator {
    fn mode(&self) -> GeneratorMode;

    /// Restore the mode's default parameter set. Catalogs are kept.
    fn reset(&mut self);

    /// Draw a new parameter set from `rng`. No-op while a catalog is empty.
    fn randomize(&mut self, rng: &mut dyn RngCore);

    /// Current style and CSS, re-derived only when inputs changed.
    fn output(&mut self) -> &Compiled;

    /// Derive without touching the cache.
    fn derive(&self) -> Compiled;

    fn theming(&mut self) -> Theming {
        self.output().style.theming()
    }
}
