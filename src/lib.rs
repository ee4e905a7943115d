//! Canonical bit-string genetic algorithm.
//!
//! Maximizes `f(x) = x²` over the integers representable by a fixed number
//! of bits, using the textbook evolutionary loop:
//!
//! - **Encoding**: fixed-length big-endian bit strings
//! - **Selection**: fitness-proportionate (roulette wheel)
//! - **Crossover**: single-point
//! - **Mutation**: independent per-gene bit flips
//! - **Replacement**: fully generational, fixed generation count
//!
//! All randomness flows through one explicitly passed generator (see
//! [`random`]), so a seeded run is fully reproducible.

pub mod ga;
pub mod random;
