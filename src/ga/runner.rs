//! GA evolutionary loop execution.
//!
//! [`Evolution`] holds the state of one run and advances it a generation
//! at a time: evaluate → report → select/crossover/mutate → replace.
//! [`GaRunner`] drives an `Evolution` to completion.
//!
//! Replacement is fully generational. The next population is built from
//! scratch and the previous one is discarded; nothing survives unchanged
//! (no elitism), so the reported best fitness may drop between generations.

use super::config::{ConfigError, GaConfig};
use super::operators::{bit_flip_mutation, single_point_crossover};
use super::selection::roulette;
use super::types::Chromosome;
use crate::random::{create_rng, create_unseeded_rng};
use log::{debug, info};
use rand::Rng;
use std::fmt;

/// Summary of one evaluated generation, taken before replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationStats<const L: usize> {
    /// Zero-based generation number.
    pub generation: usize,

    /// Index of the best individual (lowest index on ties).
    pub best_index: usize,

    /// Copy of the best individual.
    pub best: Chromosome<L>,

    /// Fitness of the best individual.
    pub best_fitness: u64,

    /// Sum of all fitness scores in the generation.
    pub total_fitness: u128,
}

impl<const L: usize> GenerationStats<L> {
    /// Decoded value `x` of the best individual.
    pub fn best_value(&self) -> u64 {
        self.best.decode()
    }
}

impl<const L: usize> fmt::Display for GenerationStats<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gen {} Best Fitness: {} (x = {})",
            self.generation,
            self.best_fitness,
            self.best_value()
        )
    }
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<const L: usize> {
    /// The best individual reported in any generation.
    ///
    /// Tracked for reporting only; it is never reinserted into the
    /// population. When no generation ran, this is the best individual
    /// of the initial population.
    pub best: Chromosome<L>,

    /// Fitness of `best`.
    pub best_fitness: u64,

    /// Number of generations executed (always `max_generations`).
    pub generations: usize,

    /// Per-generation statistics in generation order.
    pub history: Vec<GenerationStats<L>>,

    /// The population left after the last replacement (never evaluated).
    pub final_population: Vec<Chromosome<L>>,
}

/// State of a single evolutionary run.
///
/// Created once with a random initial population, then advanced with
/// [`step`](Evolution::step) until [`is_done`](Evolution::is_done).
/// The random source is owned here and threaded through every operator.
///
/// ```
/// use bitga::ga::{Evolution, GaConfig};
/// use bitga::random::create_rng;
///
/// let config = GaConfig::default().with_max_generations(3);
/// let mut evolution = Evolution::<5, _>::new(config, create_rng(42)).unwrap();
/// while let Some(stats) = evolution.step() {
///     assert!(stats.best_fitness <= 961);
/// }
/// assert!(evolution.is_done());
/// assert_eq!(evolution.population().len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Evolution<const L: usize, R: Rng> {
    config: GaConfig,
    rng: R,
    population: Vec<Chromosome<L>>,
    generation: usize,
}

impl<const L: usize, R: Rng> Evolution<L, R> {
    /// Validates `config` and draws the initial population from `rng`.
    pub fn new(config: GaConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let population = initialize_population(config.population_size, &mut rng);
        Ok(Self {
            config,
            rng,
            population,
            generation: 0,
        })
    }

    /// Number of generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The current population.
    pub fn population(&self) -> &[Chromosome<L>] {
        &self.population
    }

    /// The configuration this run was created with.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Whether all `max_generations` generations have run.
    pub fn is_done(&self) -> bool {
        self.generation >= self.config.max_generations
    }

    /// Runs one generation and returns its statistics.
    ///
    /// Returns `None` without consuming randomness once the run is done.
    pub fn step(&mut self) -> Option<GenerationStats<L>> {
        if self.is_done() {
            return None;
        }

        let fitnesses = evaluate_population(&self.population);
        let (best_index, best_fitness) = find_best(&fitnesses);
        let total_fitness = fitnesses.iter().map(|&f| u128::from(f)).sum();
        let stats = GenerationStats {
            generation: self.generation,
            best_index,
            best: self.population[best_index],
            best_fitness,
            total_fitness,
        };
        debug!(
            "generation {}: best {} at index {}, total {}",
            stats.generation, stats.best, best_index, total_fitness
        );

        self.population = breed_next_generation(
            &self.population,
            &fitnesses,
            self.config.mutation_rate,
            &mut self.rng,
        );
        self.generation += 1;

        Some(stats)
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use bitga::ga::{GaConfig, GaResult, GaRunner};
///
/// let config = GaConfig::default().with_seed(42);
/// let result: GaResult<5> = GaRunner::run(&config);
/// assert_eq!(result.history.len(), 20);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`] first
    /// to get a descriptive error).
    pub fn run<const L: usize>(config: &GaConfig) -> GaResult<L> {
        Self::run_with_observer(config, |_| {})
    }

    /// Runs the GA, calling `on_generation` with each generation's report
    /// in increasing generation order.
    ///
    /// Uses `config.seed` when set, otherwise a fresh entropy seed.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run_with_observer<const L: usize, F>(
        config: &GaConfig,
        on_generation: F,
    ) -> GaResult<L>
    where
        F: FnMut(&GenerationStats<L>),
    {
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_unseeded_rng(),
        };
        Self::run_with_rng(config, rng, on_generation)
    }

    /// Runs the GA with a caller-supplied random source.
    ///
    /// `config.seed` is ignored; all randomness comes from `rng`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run_with_rng<const L: usize, R, F>(
        config: &GaConfig,
        rng: R,
        mut on_generation: F,
    ) -> GaResult<L>
    where
        R: Rng,
        F: FnMut(&GenerationStats<L>),
    {
        let mut evolution =
            Evolution::<L, R>::new(config.clone(), rng).expect("invalid GaConfig");
        info!(
            "starting GA: {} individuals of {} genes, {} generations, mutation rate {}",
            config.population_size, L, config.max_generations, config.mutation_rate
        );

        let mut history = Vec::with_capacity(config.max_generations);
        while let Some(stats) = evolution.step() {
            on_generation(&stats);
            history.push(stats);
        }

        let (best, best_fitness) = best_reported(&history).unwrap_or_else(|| {
            let fitnesses = evaluate_population(evolution.population());
            let (idx, fitness) = find_best(&fitnesses);
            (evolution.population()[idx], fitness)
        });
        info!(
            "finished after {} generations: best x = {} (fitness {})",
            evolution.generation(),
            best.decode(),
            best_fitness
        );

        GaResult {
            best,
            best_fitness,
            generations: evolution.generation(),
            history,
            final_population: evolution.population,
        }
    }
}

/// Creates `size` independent random chromosomes.
pub fn initialize_population<const L: usize, R: Rng>(
    size: usize,
    rng: &mut R,
) -> Vec<Chromosome<L>> {
    (0..size).map(|_| Chromosome::random(rng)).collect()
}

/// Fitness of every individual, index-aligned with `population`.
pub fn evaluate_population<const L: usize>(population: &[Chromosome<L>]) -> Vec<u64> {
    population.iter().map(Chromosome::<L>::fitness).collect()
}

/// Index and value of the highest fitness.
///
/// Scans in index order and only moves on a strictly greater score, so
/// the lowest index wins ties.
///
/// # Panics
/// Panics if `fitnesses` is empty.
pub fn find_best(fitnesses: &[u64]) -> (usize, u64) {
    assert!(!fitnesses.is_empty(), "population must not be empty");

    let mut best_idx = 0;
    for (i, &f) in fitnesses.iter().enumerate().skip(1) {
        if f > fitnesses[best_idx] {
            best_idx = i;
        }
    }
    (best_idx, fitnesses[best_idx])
}

/// Builds the next generation from `population` and its fitness scores.
///
/// Each round selects two parents by roulette wheel, recombines them with
/// single-point crossover and mutates both children. Children are appended
/// until the new population has `population.len()` members; with an odd
/// size the last round keeps only its first child.
///
/// The input population is never modified.
///
/// # Panics
/// Panics if `population` is empty or `fitnesses` has a different length.
pub fn breed_next_generation<const L: usize, R: Rng>(
    population: &[Chromosome<L>],
    fitnesses: &[u64],
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<Chromosome<L>> {
    assert_eq!(
        population.len(),
        fitnesses.len(),
        "fitness scores must align with the population"
    );

    let size = population.len();
    let mut next = Vec::with_capacity(size);
    while next.len() < size {
        let p1_idx = roulette(fitnesses, rng);
        let p2_idx = roulette(fitnesses, rng);

        let (mut child1, mut child2) =
            single_point_crossover(&population[p1_idx], &population[p2_idx], rng);

        bit_flip_mutation(&mut child1, mutation_rate, rng);
        bit_flip_mutation(&mut child2, mutation_rate, rng);

        next.push(child1);
        if next.len() < size {
            next.push(child2);
        }
    }
    next
}

/// Best individual across reported generations; earliest wins ties.
fn best_reported<const L: usize>(
    history: &[GenerationStats<L>],
) -> Option<(Chromosome<L>, u64)> {
    let mut best: Option<&GenerationStats<L>> = None;
    for stats in history {
        match best {
            Some(b) if b.best_fitness >= stats.best_fitness => {}
            _ => best = Some(stats),
        }
    }
    best.map(|s| (s.best, s.best_fitness))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_population_size() {
        let mut rng = create_rng(42);
        let pop: Vec<Chromosome<5>> = initialize_population(6, &mut rng);
        assert_eq!(pop.len(), 6);
    }

    #[test]
    fn test_evaluate_preserves_order() {
        let pop = vec![
            Chromosome::<5>::from_value(3),
            Chromosome::from_value(0),
            Chromosome::from_value(31),
        ];
        assert_eq!(evaluate_population(&pop), vec![9, 0, 961]);
    }

    #[test]
    fn test_find_best_first_index_wins_ties() {
        assert_eq!(find_best(&[4, 9, 1, 9]), (1, 9));
        assert_eq!(find_best(&[0, 0, 0]), (0, 0));
        assert_eq!(find_best(&[7]), (0, 7));
    }

    #[test]
    #[should_panic(expected = "population must not be empty")]
    fn test_find_best_empty_panics() {
        find_best(&[]);
    }

    #[test]
    fn test_breed_sizes() {
        let mut rng = create_rng(42);
        for size in [1usize, 2, 6, 7] {
            let pop: Vec<Chromosome<5>> = initialize_population(size, &mut rng);
            let fitnesses = evaluate_population(&pop);
            let next = breed_next_generation(&pop, &fitnesses, 0.1, &mut rng);
            assert_eq!(next.len(), size, "size {size}");
        }
    }

    #[test]
    fn test_breed_all_zero_fitness() {
        let mut rng = create_rng(42);
        let pop = vec![Chromosome::<5>::from_value(0); 6];
        let fitnesses = evaluate_population(&pop);
        let next = breed_next_generation(&pop, &fitnesses, 0.0, &mut rng);
        assert_eq!(next, pop);
    }

    #[test]
    fn test_breed_without_mutation_keeps_genes_of_parents() {
        // Crossover only rearranges genes by position, so with a single
        // non-zero parent every child is a clone of it.
        let mut rng = create_rng(9);
        let winner = Chromosome::<5>::from_value(22);
        let pop = vec![Chromosome::from_value(0), winner, Chromosome::from_value(0)];
        let fitnesses = evaluate_population(&pop);
        let next = breed_next_generation(&pop, &fitnesses, 0.0, &mut rng);
        assert!(next.iter().all(|c| *c == winner));
    }

    #[test]
    fn test_step_reports_then_replaces() {
        let config = GaConfig::default().with_max_generations(2);
        let mut evolution = Evolution::<5, _>::new(config, create_rng(42)).unwrap();

        let before = evolution.population().to_vec();
        let stats = evolution.step().unwrap();
        let expected = find_best(&evaluate_population(&before));

        assert_eq!(stats.generation, 0);
        assert_eq!((stats.best_index, stats.best_fitness), expected);
        assert_eq!(stats.best, before[expected.0]);
        assert_eq!(evolution.generation(), 1);
        assert_eq!(evolution.population().len(), 6);
    }

    #[test]
    fn test_step_after_done() {
        let config = GaConfig::default().with_max_generations(1);
        let mut evolution = Evolution::<5, _>::new(config, create_rng(1)).unwrap();
        assert!(evolution.step().is_some());
        assert!(evolution.is_done());
        assert!(evolution.step().is_none());
        assert_eq!(evolution.generation(), 1);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GaConfig::default().with_population_size(0);
        let err = Evolution::<5, _>::new(config, create_rng(1)).unwrap_err();
        assert_eq!(err, ConfigError::EmptyPopulation);
    }

    #[test]
    fn test_display_format() {
        let stats = GenerationStats {
            generation: 3,
            best_index: 0,
            best: Chromosome::<5>::from_value(29),
            best_fitness: 841,
            total_fitness: 2000,
        };
        assert_eq!(stats.to_string(), "Gen 3 Best Fitness: 841 (x = 29)");
    }

    #[test]
    fn test_run_is_deterministic_for_seed() {
        let config = GaConfig::default().with_seed(123);
        let a: GaResult<5> = GaRunner::run(&config);
        let b: GaResult<5> = GaRunner::run(&config);
        assert_eq!(a.history, b.history);
        assert_eq!(a.final_population, b.final_population);
    }

    #[test]
    fn test_run_observer_sees_every_generation_in_order() {
        let config = GaConfig::default().with_seed(5);
        let mut seen = Vec::new();
        let result: GaResult<5> =
            GaRunner::run_with_observer(&config, |s| seen.push(s.generation));
        assert_eq!(seen, (0..20).collect::<Vec<_>>());
        assert_eq!(result.generations, 20);
    }

    #[test]
    fn test_run_best_matches_history() {
        let config = GaConfig::default().with_seed(77);
        let result: GaResult<5> = GaRunner::run(&config);
        let max = result.history.iter().map(|s| s.best_fitness).max().unwrap();
        assert_eq!(result.best_fitness, max);
        assert_eq!(result.best.fitness(), max);
    }

    #[test]
    fn test_zero_generations() {
        let config = GaConfig::default().with_max_generations(0).with_seed(3);
        let result: GaResult<5> = GaRunner::run(&config);
        assert!(result.history.is_empty());
        assert_eq!(result.generations, 0);
        assert_eq!(result.final_population.len(), 6);
        let (_, best) = find_best(&evaluate_population(&result.final_population));
        assert_eq!(result.best_fitness, best);
    }

    #[test]
    #[should_panic(expected = "invalid GaConfig")]
    fn test_run_panics_on_invalid_config() {
        let config = GaConfig::default().with_population_size(0);
        let _: GaResult<5> = GaRunner::run(&config);
    }
}
