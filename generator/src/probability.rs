//! Percentage coin flips

use rand::Rng;

/// True with probability `percent / 100`.
///
/// Draws in `[0, 100)` and compares, so anything `<= 0` never fires and
/// anything `>= 100` always fires. Out-of-range values are not rejected.
/// One draw is consumed either way.
pub fn percent_chance<R: Rng + ?Sized>(percent: i32, rng: &mut R) -> bool {
    rng.gen_range(0..100) < percent
}

/// `percent_chance` as 0 or 1, for "1 + maybe one more" counts
pub fn extra_one<R: Rng + ?Sized>(percent: i32, rng: &mut R) -> usize {
    usize::from(percent_chance(percent, rng))
}
