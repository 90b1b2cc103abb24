//! Generational loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::distance::DistanceMatrix;
use crate::error::SolverError;
use crate::models::{best_of, RouteSet};

use super::reproduction::create_child;
use super::seeding::seed_population;
use super::selection::select_parents;
use super::GaConfig;

/// Smallest usable capacity: the crossover and mutation operators need room
/// for at least two stops per route.
const MIN_ROUTE_LENGTH: usize = 2;

const TOURNAMENT_CANDIDATES: usize = 3;
const NUM_PARENTS: usize = 2;

/// Runs the genetic algorithm and returns the best-solution progress history.
///
/// The first entry is the best individual of the initial population; a new
/// entry is appended only when a generation strictly improves on the best
/// distance seen so far, so the last entry is the final solution and the
/// recomputed distances across entries are strictly decreasing.
///
/// Each generation builds a full replacement population: every child slot
/// independently selects two parents by tournament and runs
/// crossover-mutate-2-opt. Slots are fanned out with rayon; each gets its own
/// seeded generator, so runs with a fixed [`GaConfig::seed`] are reproducible
/// regardless of thread scheduling.
///
/// # Errors
///
/// Fails before any work on an out-of-range mutation probability, a zero
/// population size, `max_route_length < 2`, or an empty distance matrix.
///
/// # Examples
///
/// ```
/// use vrp_solver::distance::DistanceMatrix;
/// use vrp_solver::ga::{genetic_solver, GaConfig};
/// use vrp_solver::models::Point;
///
/// let dm = DistanceMatrix::from_points(
///     &[Point::new(0.0, 0.0)],
///     &[Point::new(1.0, 1.0), Point::new(2.0, 0.5), Point::new(0.5, 2.0)],
/// );
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_max_generations(20)
///     .with_seed(7);
/// let progress = genetic_solver(&dm, 5, &config)?;
/// assert!(!progress.is_empty());
/// # Ok::<(), vrp_solver::SolverError>(())
/// ```
pub fn genetic_solver(
    distances: &DistanceMatrix,
    max_route_length: usize,
    config: &GaConfig,
) -> Result<Vec<RouteSet>, SolverError> {
    config.validate()?;
    if max_route_length < MIN_ROUTE_LENGTH {
        return Err(SolverError::MaxRouteLengthTooSmall {
            value: max_route_length,
            min: MIN_ROUTE_LENGTH,
        });
    }
    if distances.size() == 0 {
        return Err(SolverError::EmptyDistanceMatrix);
    }

    let base_seed = match config.seed {
        Some(seed) => seed,
        None => StdRng::from_os_rng().random(),
    };
    let mut seed_rng = StdRng::seed_from_u64(base_seed);

    let mut population = seed_population(
        config.starting_type,
        config.population_size,
        distances,
        max_route_length,
        &mut seed_rng,
    );

    let mut best = best_of(&population)
        .cloned()
        .ok_or(SolverError::EmptyPopulation)?;
    let mut progress = vec![best.routes().clone()];

    for generation in 0..config.max_generations {
        population = (0..config.population_size)
            .into_par_iter()
            .map(|slot| {
                let mut rng =
                    StdRng::seed_from_u64(task_seed(base_seed, generation as u64, slot as u64));
                let parents =
                    select_parents(&population, TOURNAMENT_CANDIDATES, NUM_PARENTS, &mut rng);
                create_child(
                    &parents,
                    max_route_length,
                    config.mutation_probability,
                    distances,
                    &mut rng,
                )
            })
            .collect();

        if let Some(challenger) = best_of(&population) {
            if challenger.total_distance() < best.total_distance() {
                best = challenger.clone();
                progress.push(best.routes().clone());
            }
        }
    }

    Ok(progress)
}

/// Derives an independent stream seed for one child slot of one generation.
///
/// splitmix64 output mixing keeps nearby (generation, slot) pairs
/// statistically unrelated.
fn task_seed(base_seed: u64, generation: u64, slot: u64) -> u64 {
    splitmix64(splitmix64(base_seed.wrapping_add(generation)).wrapping_add(slot))
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
