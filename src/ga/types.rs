//! Chromosome encoding and the x² fitness function.
//!
//! A [`Chromosome`] is a fixed-length array of binary genes read as a
//! big-endian unsigned integer. Its length is a const generic, so every
//! individual of a run has the same length by construction.

use rand::Rng;
use std::fmt;

/// Chromosome length used by the reference configuration (values 0..=31).
pub const DEFAULT_CHROMOSOME_LENGTH: usize = 5;

/// Longest supported chromosome.
///
/// `decode` yields at most `2^32 - 1`, whose square still fits in `u64`.
pub const MAX_CHROMOSOME_LENGTH: usize = 32;

/// A candidate solution: `L` binary genes, most significant gene first.
///
/// Chromosomes are plain values. Cloning (or copying) produces an
/// independent gene array, so no two individuals ever share genes.
///
/// Fitness is never cached on the chromosome; it is recomputed from the
/// current genes whenever [`fitness`](Chromosome::fitness) is called.
///
/// # Examples
///
/// ```
/// use bitga::ga::Chromosome;
///
/// let c = Chromosome::<5>::new([true, false, false, true, true]);
/// assert_eq!(c.decode(), 0b10011);
/// assert_eq!(c.fitness(), 19 * 19);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chromosome<const L: usize> {
    genes: [bool; L],
}

impl<const L: usize> Chromosome<L> {
    const LENGTH_IN_RANGE: () = assert!(
        L >= 1 && L <= MAX_CHROMOSOME_LENGTH,
        "chromosome length must be in 1..=32"
    );

    /// Creates a chromosome from an explicit gene array.
    pub fn new(genes: [bool; L]) -> Self {
        let () = Self::LENGTH_IN_RANGE;
        Self { genes }
    }

    /// Encodes `value` as `L` big-endian bits.
    ///
    /// Bits above position `L - 1` are discarded.
    pub fn from_value(value: u64) -> Self {
        Self::new(std::array::from_fn(|i| (value >> (L - 1 - i)) & 1 == 1))
    }

    /// Creates a chromosome whose genes are independent fair coin flips.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::new(std::array::from_fn(|_| rng.random_bool(0.5)))
    }

    /// Returns the gene array.
    pub fn genes(&self) -> &[bool; L] {
        &self.genes
    }

    /// Number of genes (always `L`).
    pub const fn len(&self) -> usize {
        L
    }

    /// Always `false`: a chromosome has at least one gene.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Flips the gene at `index`.
    ///
    /// # Panics
    /// Panics if `index >= L`.
    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }

    /// Interprets the genes as an unsigned integer in `[0, 2^L - 1]`.
    pub fn decode(&self) -> u64 {
        self.genes
            .iter()
            .fold(0u64, |value, &bit| (value << 1) | u64::from(bit))
    }

    /// Fitness `f(x) = x²` of the decoded value. Higher is better.
    pub fn fitness(&self) -> u64 {
        let x = self.decode();
        x * x
    }
}

impl<const L: usize> fmt::Display for Chromosome<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.genes {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Largest value representable by `length` genes.
pub const fn max_value(length: usize) -> u64 {
    if length >= 64 {
        u64::MAX
    } else {
        (1u64 << length) - 1
    }
}
