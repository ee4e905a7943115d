//! Bit-string Genetic Algorithm.
//!
//! Searches the integers `[0, 2^L - 1]` for the maximum of `f(x) = x²`.
//! Candidates are fixed-length bit strings ([`Chromosome`]), parents are
//! chosen by roulette wheel, recombined by single-point crossover and
//! perturbed by independent bit-flip mutation. Every generation is
//! replaced wholesale; there is no elitism and no early stopping.
//!
//! # Key Types
//!
//! - [`Chromosome`]: Fixed-length big-endian bit string with x² fitness
//! - [`GaConfig`]: Population size, generation count, mutation rate, seed
//! - [`Evolution`]: One run's state, advanced a generation at a time
//! - [`GaRunner`]: Drives an `Evolution` to completion
//! - [`GaResult`] / [`GenerationStats`]: Per-generation reports and outcome
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and bit-flip mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::{
    ConfigError, GaConfig, DEFAULT_MAX_GENERATIONS, DEFAULT_MUTATION_RATE,
    DEFAULT_POPULATION_SIZE,
};
pub use runner::{
    breed_next_generation, evaluate_population, find_best, initialize_population, Evolution,
    GaResult, GaRunner, GenerationStats,
};
pub use selection::roulette;
pub use types::{max_value, Chromosome, DEFAULT_CHROMOSOME_LENGTH, MAX_CHROMOSOME_LENGTH};
