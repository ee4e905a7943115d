//! Seedable random source shared by every stochastic operator.
//!
//! Randomness is never global: the driver owns one generator and threads
//! it by `&mut` through initialization, selection, crossover and mutation,
//! so a fixed seed reproduces a full run.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from fresh OS entropy.
///
/// Runs started this way are not reproducible across processes.
pub fn create_unseeded_rng() -> StdRng {
    create_rng(rand::random())
}
