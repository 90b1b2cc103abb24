//! Dense distance matrix.

use crate::models::Point;

/// A dense n×n travel-cost matrix stored in row-major order.
///
/// Rows and columns are indexed `[depots..., customers...]`; the routing
/// logic assumes exactly one depot at index 0. Forbidden edges (self-loops
/// and depot-to-depot) carry `f64::INFINITY` so they can never look
/// attractive to a solver.
///
/// The matrix is built once per solve and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use vrp_solver::distance::DistanceMatrix;
/// use vrp_solver::models::Point;
///
/// let dm = DistanceMatrix::from_points(
///     &[Point::new(0.0, 0.0)],
///     &[Point::new(3.0, 4.0)],
/// );
/// assert_eq!(dm.size(), 2);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!(dm.get(0, 0).is_infinite());
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes a Euclidean distance matrix over `[depots..., customers...]`.
    ///
    /// Self-loops and depot-to-depot edges are set to `f64::INFINITY`.
    pub fn from_points(depots: &[Point], customers: &[Point]) -> Self {
        let num_depots = depots.len();
        let n = num_depots + customers.len();
        let locations: Vec<Point> = depots.iter().chain(customers.iter()).copied().collect();

        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                data[i * n + j] = if i == j || (i < num_depots && j < num_depots) {
                    f64::INFINITY
                } else {
                    locations[i].distance_to(&locations[j])
                };
            }
        }
        Self { data, size: n }
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the travel cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations (depot + customers) in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of customers, assuming a single depot at index 0.
    pub fn num_customers(&self) -> usize {
        self.size.saturating_sub(1)
    }
}
