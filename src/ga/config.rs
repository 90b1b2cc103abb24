//! Genetic algorithm configuration.

use serde::{Deserialize, Serialize};

use crate::error::SolverError;

/// How the initial population is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartingType {
    /// Clone the Clarke-Wright savings solution.
    ClarkeWright,
    /// Clone the nearest-neighbor solution.
    NearestNeighbours,
    /// Independent uniformly random solutions.
    Random,
    /// A third random individuals, the rest alternating savings and
    /// nearest-neighbor clones.
    Mixed,
}

/// Tunable parameters of the genetic solver.
///
/// Build one with [`Default`] and the `with_*` methods:
///
/// ```
/// use vrp_solver::ga::{GaConfig, StartingType};
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_max_generations(200)
///     .with_starting_type(StartingType::Mixed)
///     .with_seed(42);
/// assert_eq!(config.population_size, 30);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of individuals per generation.
    pub population_size: usize,
    /// Number of generations to run.
    pub max_generations: usize,
    /// Probability that a child is mutated after crossover, in `[0, 1]`.
    pub mutation_probability: f64,
    /// Initial population strategy.
    pub starting_type: StartingType,
    /// Base RNG seed; `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            mutation_probability: 0.5,
            starting_type: StartingType::ClarkeWright,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, max_generations: usize) -> Self {
        self.max_generations = max_generations;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_probability(mut self, mutation_probability: f64) -> Self {
        self.mutation_probability = mutation_probability;
        self
    }

    /// Sets the initial population strategy.
    pub fn with_starting_type(mut self, starting_type: StartingType) -> Self {
        self.starting_type = starting_type;
        self
    }

    /// Sets a fixed RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the parameter ranges, returning the first violation.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(SolverError::InvalidMutationProbability(
                self.mutation_probability,
            ));
        }
        if self.population_size == 0 {
            return Err(SolverError::EmptyPopulation);
        }
        Ok(())
    }
}
