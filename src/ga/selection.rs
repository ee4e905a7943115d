//! Fitness-proportionate (roulette wheel) parent selection.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use log::trace;
use rand::Rng;

/// Roulette wheel selection over a parallel slice of fitness scores.
///
/// Draws `pick` uniformly from `[0, total)` and returns the first index
/// whose running fitness sum exceeds it, so index `i` is chosen with
/// probability `fitnesses[i] / total`. Sampling is with replacement:
/// consecutive calls may return the same index.
///
/// When every score is zero the wheel has no area; the index is then drawn
/// uniformly from the whole population instead.
///
/// Sums are accumulated in `u128`, so even `2^32`-wide chromosomes in a
/// large population cannot overflow.
///
/// # Complexity
/// O(n) per selection (linear scan)
///
/// # Panics
/// Panics if `fitnesses` is empty.
///
/// # Examples
///
/// ```
/// use bitga::ga::roulette;
/// use bitga::random::create_rng;
///
/// let mut rng = create_rng(42);
/// // Only index 2 has any fitness, so it always wins.
/// assert_eq!(roulette(&[0, 0, 9, 0], &mut rng), 2);
/// ```
pub fn roulette<R: Rng>(fitnesses: &[u64], rng: &mut R) -> usize {
    assert!(
        !fitnesses.is_empty(),
        "cannot select from empty population"
    );

    let n = fitnesses.len();
    let total: u128 = fitnesses.iter().map(|&f| u128::from(f)).sum();
    if total == 0 {
        trace!("zero total fitness over {n} individuals, selecting uniformly");
        return rng.random_range(0..n);
    }

    let pick = rng.random_range(0..total);
    let mut cumulative = 0u128;
    for (i, &f) in fitnesses.iter().enumerate() {
        cumulative += u128::from(f);
        if cumulative > pick {
            return i;
        }
    }

    n - 1 // fallback
}
