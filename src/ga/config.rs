//! GA configuration.
//!
//! [`GaConfig`] holds the parameters of the evolutionary loop. The
//! chromosome length is not here: it is the const generic `L` of
//! [`Chromosome`](super::Chromosome).

/// Population size of the reference configuration.
pub const DEFAULT_POPULATION_SIZE: usize = 6;

/// Generation count of the reference configuration.
pub const DEFAULT_MAX_GENERATIONS: usize = 20;

/// Per-gene mutation probability of the reference configuration.
pub const DEFAULT_MUTATION_RATE: f64 = 0.1;

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,
    #[error("mutation_rate must be a finite number in [0, 1], got {0}")]
    InvalidMutationRate(f64),
}

/// Configuration for the bit-string Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use bitga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 6);
/// assert_eq!(config.max_generations, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use bitga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(7)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of generations to run. The loop never stops early.
    pub max_generations: usize,

    /// Probability of flipping each gene of an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            max_generations: DEFAULT_MAX_GENERATIONS,
            mutation_rate: DEFAULT_MUTATION_RATE,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// `max_generations == 0` is valid and produces an empty run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        Ok(())
    }
}
