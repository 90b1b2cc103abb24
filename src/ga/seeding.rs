//! Initial population construction.

use rand::Rng;

use crate::constructive::{clarke_wright_solver, nearest_neighbor_routes, random_routes};
use crate::distance::DistanceMatrix;
use crate::models::{Individual, Population};

use super::StartingType;

/// Builds an individual from the Clarke-Wright savings solution, discarding
/// the construction progress log.
pub fn clarke_wright_individual(
    distances: &DistanceMatrix,
    max_route_length: usize,
) -> Individual {
    let (routes, _) = clarke_wright_solver(distances, max_route_length);
    Individual::new(routes, distances)
}

/// Builds an individual from the nearest-neighbor solution.
pub fn nearest_neighbor_individual(
    distances: &DistanceMatrix,
    max_route_length: usize,
) -> Individual {
    Individual::new(
        nearest_neighbor_routes(distances, max_route_length),
        distances,
    )
}

/// Builds the initial population for the requested strategy.
///
/// Heuristic strategies clone one constructed individual `size` times;
/// `Random` draws `size` independent individuals; `Mixed` fills a third of
/// the slots randomly and alternates savings and nearest-neighbor clones for
/// the rest.
pub fn seed_population<R: Rng>(
    starting_type: StartingType,
    size: usize,
    distances: &DistanceMatrix,
    max_route_length: usize,
    rng: &mut R,
) -> Population {
    match starting_type {
        StartingType::ClarkeWright => {
            vec![clarke_wright_individual(distances, max_route_length); size]
        }
        StartingType::NearestNeighbours => {
            vec![nearest_neighbor_individual(distances, max_route_length); size]
        }
        StartingType::Random => (0..size)
            .map(|_| {
                Individual::new(
                    random_routes(distances.num_customers(), max_route_length, rng),
                    distances,
                )
            })
            .collect(),
        StartingType::Mixed => {
            let mut population = Vec::with_capacity(size);
            for _ in 0..size / 3 {
                population.push(Individual::new(
                    random_routes(distances.num_customers(), max_route_length, rng),
                    distances,
                ));
            }
            let savings = clarke_wright_individual(distances, max_route_length);
            let nearest = nearest_neighbor_individual(distances, max_route_length);
            while population.len() < size {
                population.push(savings.clone());
                if population.len() < size {
                    population.push(nearest.clone());
                }
            }
            population
        }
    }
}
