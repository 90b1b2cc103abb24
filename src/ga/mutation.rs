//! Relocation mutation.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::models::{Individual, Route};

/// With probability `probability`, relocates one random interior stop.
///
/// Returns `true` if the individual changed. The cached distance is
/// recomputed on success.
pub fn mutate<R: Rng>(
    individual: &mut Individual,
    probability: f64,
    max_route_length: usize,
    distances: &DistanceMatrix,
    rng: &mut R,
) -> bool {
    if rng.random::<f64>() >= probability {
        return false;
    }
    relocate_random_stop(individual, max_route_length, distances, rng)
}

/// Moves a uniformly chosen stop out of its route and into a different route
/// (or a fresh singleton route), reverting entirely if the destination would
/// exceed capacity.
///
/// A source route emptied by the move is dropped.
fn relocate_random_stop<R: Rng>(
    individual: &mut Individual,
    max_route_length: usize,
    distances: &DistanceMatrix,
    rng: &mut R,
) -> bool {
    let routes = individual.routes_mut();
    if routes.is_empty() {
        return false;
    }
    let snapshot = routes.clone();

    let source = rng.random_range(0..routes.len());
    let stop_index = rng.random_range(0..routes[source].num_stops());
    let customer = routes[source].remove_stop(stop_index);

    let source_survived = routes[source].num_stops() > 0;
    if !source_survived {
        routes.remove(source);
    }

    // Destination choices: any other existing route, plus one slot for a
    // fresh singleton route.
    let mut choices: Vec<Option<usize>> = (0..routes.len())
        .filter(|&idx| !(source_survived && idx == source))
        .map(Some)
        .collect();
    choices.push(None);

    match choices[rng.random_range(0..choices.len())] {
        None => routes.push(Route::singleton(customer)),
        Some(destination) => {
            if routes[destination].num_stops() >= max_route_length {
                *routes = snapshot;
                return false;
            }
            let position = rng.random_range(0..=routes[destination].num_stops());
            routes[destination].insert_stop(position, customer);
        }
    }

    individual.update_distance(distances);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::routes_distance;
    use crate::models::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line_matrix(n: usize) -> DistanceMatrix {
        let customers: Vec<Point> = (1..=n).map(|i| Point::new(i as f64, 0.0)).collect();
        DistanceMatrix::from_points(&[Point::new(0.0, 0.0)], &customers)
    }

    fn assert_partition(individual: &Individual, num_customers: usize) {
        let mut served: Vec<usize> = individual
            .routes()
            .iter()
            .flat_map(|r| r.interior().to_vec())
            .collect();
        served.sort();
        assert_eq!(served, (1..=num_customers).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_probability_never_mutates() {
        let dm = line_matrix(4);
        let mut ind = Individual::new(
            vec![
                Route::from_interior(vec![1, 2]),
                Route::from_interior(vec![3, 4]),
            ],
            &dm,
        );
        let before = ind.routes().clone();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            assert!(!mutate(&mut ind, 0.0, 8, &dm, &mut rng));
        }
        assert_eq!(ind.routes(), &before);
    }

    #[test]
    fn test_mutation_preserves_partition_and_capacity() {
        let dm = line_matrix(8);
        let mut rng = StdRng::seed_from_u64(5);
        let mut ind = Individual::new(
            vec![
                Route::from_interior(vec![1, 2, 3]),
                Route::from_interior(vec![4, 5, 6]),
                Route::from_interior(vec![7, 8]),
            ],
            &dm,
        );
        for _ in 0..200 {
            mutate(&mut ind, 1.0, 4, &dm, &mut rng);
            assert_partition(&ind, 8);
            for route in ind.routes() {
                assert!(route.num_stops() <= 4);
            }
        }
    }

    #[test]
    fn test_distance_cache_stays_consistent() {
        let dm = line_matrix(6);
        let mut rng = StdRng::seed_from_u64(17);
        let mut ind = Individual::new(
            vec![
                Route::from_interior(vec![1, 2, 3]),
                Route::from_interior(vec![4, 5, 6]),
            ],
            &dm,
        );
        for _ in 0..100 {
            mutate(&mut ind, 1.0, 5, &dm, &mut rng);
            let recomputed = routes_distance(ind.routes(), &dm);
            assert!((ind.total_distance() - recomputed).abs() < 1e-9);
        }
    }

    #[test]
    fn test_full_destinations_revert() {
        let dm = line_matrix(4);
        let mut rng = StdRng::seed_from_u64(2);
        // Both routes at capacity 2; any cross-route move must revert, and
        // any singleton split still partitions.
        let mut ind = Individual::new(
            vec![
                Route::from_interior(vec![1, 2]),
                Route::from_interior(vec![3, 4]),
            ],
            &dm,
        );
        for _ in 0..100 {
            mutate(&mut ind, 1.0, 2, &dm, &mut rng);
            assert_partition(&ind, 4);
            for route in ind.routes() {
                assert!(route.num_stops() <= 2);
            }
        }
    }

    #[test]
    fn test_single_customer_instance() {
        let dm = line_matrix(1);
        let mut rng = StdRng::seed_from_u64(4);
        let mut ind = Individual::new(vec![Route::singleton(1)], &dm);
        for _ in 0..20 {
            mutate(&mut ind, 1.0, 3, &dm, &mut rng);
            assert_partition(&ind, 1);
        }
    }
}
