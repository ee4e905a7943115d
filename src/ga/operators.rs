//! Bit-string genetic operators.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: swap gene suffixes at a random split point
//! - [`crossover_at`]: the same recombination at a caller-chosen point
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: flip each gene independently with probability `r`
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

use super::types::Chromosome;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover at an explicit split `point`.
///
/// `child1` takes `parent1[..point]` followed by `parent2[point..]`;
/// `child2` takes `parent2[..point]` followed by `parent1[point..]`.
/// A point of 0 swaps the parents whole; a point of `L` clones them.
///
/// # Panics
/// Panics if `point > L`.
pub fn crossover_at<const L: usize>(
    parent1: &Chromosome<L>,
    parent2: &Chromosome<L>,
    point: usize,
) -> (Chromosome<L>, Chromosome<L>) {
    assert!(point <= L, "crossover point {point} exceeds length {L}");

    let (a, b) = (parent1.genes(), parent2.genes());
    let child1 = std::array::from_fn(|i| if i < point { a[i] } else { b[i] });
    let child2 = std::array::from_fn(|i| if i < point { b[i] } else { a[i] });

    (Chromosome::new(child1), Chromosome::new(child2))
}

/// Single-point crossover with the split drawn uniformly from `[0, L)`.
///
/// Randomness enters only through the split point; see [`crossover_at`].
///
/// # Complexity
/// O(L) time
pub fn single_point_crossover<const L: usize, R: Rng>(
    parent1: &Chromosome<L>,
    parent2: &Chromosome<L>,
    rng: &mut R,
) -> (Chromosome<L>, Chromosome<L>) {
    let point = rng.random_range(0..L);
    crossover_at(parent1, parent2, point)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Bit-flip mutation: each gene flips independently with probability `rate`.
///
/// One uniform draw in `[0, 1)` is consumed per gene, in gene order, and
/// the gene flips when the draw is below `rate`. A rate of 0 never flips;
/// a rate of 1 flips every gene. The number of flips is Binomial(L, rate).
///
/// Returns the number of genes flipped.
pub fn bit_flip_mutation<const L: usize, R: Rng>(
    chromosome: &mut Chromosome<L>,
    rate: f64,
    rng: &mut R,
) -> usize {
    let mut flipped = 0;
    for i in 0..L {
        if rng.random::<f64>() < rate {
            chromosome.flip(i);
            flipped += 1;
        }
    }
    flipped
}

// ============================================================================
// Tests
// ============================================================================
