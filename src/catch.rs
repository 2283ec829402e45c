//! Catch rolls
//!
//! Whether a thrown ball succeeds depends on the Pokemon's base experience:
//! the higher it is, the less likely the catch.

use rand::Rng;

/// A roll within this distance of the base experience succeeds
pub const CATCH_WINDOW: u32 = 30;

/// Rolls a catch attempt against `base_experience`.
///
/// Draws `r` uniformly from `[0, base_experience)` and succeeds when
/// `base_experience - r <= CATCH_WINDOW`. Pokemon at or below the window
/// (including those with no base experience) are always caught.
pub fn attempt_catch<R: Rng>(base_experience: u32, rng: &mut R) -> bool {
    if base_experience <= CATCH_WINDOW {
        return true;
    }

    let roll = rng.random_range(0..base_experience);
    base_experience - roll <= CATCH_WINDOW
}
