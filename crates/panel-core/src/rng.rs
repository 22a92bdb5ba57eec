//! Weighted-choice helpers over an injected random source.
//!
//! Every probabilistic branch in the panel goes through these so a seeded
//! `StdRng` reproduces a run exactly.

use rand::prelude::*;

/// Deterministic generator for tests and `?seed=` runs.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from the platform entropy source.
pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Uniform sample in `[0, 1)`.
#[inline]
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>()
}

/// True with probability `p`. One sample is always drawn so the stream
/// position does not depend on `p`.
#[inline]
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    unit(rng) < p
}

#[inline]
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// Uniform sample in `[lo, hi)`.
#[inline]
pub fn between<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    lo + unit(rng) * (hi - lo)
}
