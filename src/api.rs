//! Coordinate-array entry points.
//!
//! These wrap the solvers behind a flat-array surface: a depot location,
//! parallel x/y customer arrays, and an optional CSV export path for the
//! progress history.

use std::path::Path;

use crate::constructive::clarke_wright_solver;
use crate::distance::DistanceMatrix;
use crate::error::SolverError;
use crate::export::export_routes_progress;
use crate::ga::{genetic_solver, GaConfig};
use crate::models::{Point, RouteSet};

fn build_locations(
    depot: Point,
    customers_x: &[f64],
    customers_y: &[f64],
) -> Result<Vec<Point>, SolverError> {
    if customers_x.len() != customers_y.len() {
        return Err(SolverError::MismatchedCoordinates {
            x_len: customers_x.len(),
            y_len: customers_y.len(),
        });
    }
    let mut locations = Vec::with_capacity(customers_x.len() + 1);
    locations.push(depot);
    locations.extend(
        customers_x
            .iter()
            .zip(customers_y)
            .map(|(&x, &y)| Point::new(x, y)),
    );
    Ok(locations)
}

/// Runs the Clarke-Wright savings solver on raw coordinates.
///
/// Returns the construction progress history; the last entry is the final
/// solution. When `export_path` is given, the history is also written in the
/// animation CSV format.
///
/// # Errors
///
/// Fails when the coordinate arrays differ in length, or on I/O problems
/// while exporting.
///
/// # Examples
///
/// ```
/// use vrp_solver::api::solve_clarke_wright;
/// use vrp_solver::models::Point;
///
/// let progress = solve_clarke_wright(
///     Point::new(0.0, 0.0),
///     &[1.0, 2.0, 3.0],
///     &[0.0, 0.0, 0.0],
///     10,
///     None,
/// )?;
/// let routes = progress.last().expect("non-empty history");
/// assert_eq!(routes[0].stops(), &[0, 1, 2, 3, 0]);
/// # Ok::<(), vrp_solver::SolverError>(())
/// ```
pub fn solve_clarke_wright(
    depot: Point,
    customers_x: &[f64],
    customers_y: &[f64],
    max_route_length: usize,
    export_path: Option<&Path>,
) -> Result<Vec<RouteSet>, SolverError> {
    let locations = build_locations(depot, customers_x, customers_y)?;
    let distances = DistanceMatrix::from_points(&locations[..1], &locations[1..]);

    let (_, progress) = clarke_wright_solver(&distances, max_route_length);

    if let Some(path) = export_path {
        export_routes_progress(&progress, &locations, path)?;
    }
    Ok(progress)
}

/// Runs the genetic solver on raw coordinates.
///
/// Returns the best-solution progress history (see
/// [`genetic_solver`](crate::ga::genetic_solver)). When `export_path` is
/// given, the history is also written in the animation CSV format.
///
/// # Errors
///
/// Fails when the coordinate arrays differ in length, on invalid solver
/// parameters, or on I/O problems while exporting.
pub fn solve_genetic(
    depot: Point,
    customers_x: &[f64],
    customers_y: &[f64],
    max_route_length: usize,
    config: &GaConfig,
    export_path: Option<&Path>,
) -> Result<Vec<RouteSet>, SolverError> {
    let locations = build_locations(depot, customers_x, customers_y)?;
    let distances = DistanceMatrix::from_points(&locations[..1], &locations[1..]);

    let progress = genetic_solver(&distances, max_route_length, config)?;

    if let Some(path) = export_path {
        export_routes_progress(&progress, &locations, path)?;
    }
    Ok(progress)
}
