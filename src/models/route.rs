//! Route and route-set types.

use serde::{Deserialize, Serialize};

/// Index of the depot in every distance matrix and route.
pub const DEPOT: usize = 0;

/// An ordered sequence of location indices served by one vehicle.
///
/// Every route starts and ends at the depot (index 0); the stops in between
/// are distinct customer indices. The constructors enforce the depot framing
/// so it cannot be broken from outside this module.
///
/// A route's "length" for capacity purposes is its interior stop count,
/// [`num_stops`](Route::num_stops).
///
/// # Examples
///
/// ```
/// use vrp_solver::models::Route;
///
/// let route = Route::from_interior(vec![3, 1, 2]);
/// assert_eq!(route.stops(), &[0, 3, 1, 2, 0]);
/// assert_eq!(route.interior(), &[3, 1, 2]);
/// assert_eq!(route.num_stops(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    stops: Vec<usize>,
}

/// An ordered collection of routes whose interiors partition the customer set.
pub type RouteSet = Vec<Route>;

impl Route {
    /// Creates a route from its interior customer sequence, framing it with
    /// the depot at both ends.
    pub fn from_interior(mut interior: Vec<usize>) -> Self {
        debug_assert!(!interior.is_empty(), "route must serve at least one customer");
        debug_assert!(interior.iter().all(|&c| c != DEPOT));
        interior.insert(0, DEPOT);
        interior.push(DEPOT);
        Self { stops: interior }
    }

    /// Creates a route serving a single customer.
    pub fn singleton(customer: usize) -> Self {
        Self::from_interior(vec![customer])
    }

    /// Returns the full depot-framed stop sequence.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Returns the interior stops (customers only, no depot).
    pub fn interior(&self) -> &[usize] {
        &self.stops[1..self.stops.len() - 1]
    }

    /// Returns the number of customers served (the capacity-relevant length).
    pub fn num_stops(&self) -> usize {
        self.stops.len() - 2
    }

    /// First interior stop.
    pub fn first_stop(&self) -> usize {
        self.stops[1]
    }

    /// Last interior stop.
    pub fn last_stop(&self) -> usize {
        self.stops[self.stops.len() - 2]
    }

    /// Removes and returns the interior stop at `index` (0-based within the
    /// interior).
    pub fn remove_stop(&mut self, index: usize) -> usize {
        debug_assert!(index < self.num_stops());
        self.stops.remove(index + 1)
    }

    /// Inserts `customer` at interior position `index` (0-based within the
    /// interior; `index == num_stops()` appends before the closing depot).
    pub fn insert_stop(&mut self, index: usize, customer: usize) {
        debug_assert!(index <= self.num_stops());
        debug_assert!(customer != DEPOT);
        self.stops.insert(index + 1, customer);
    }

    /// Reverses the interior segment `[start, end]` (inclusive, 0-based
    /// within the interior).
    pub fn reverse_segment(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end < self.num_stops());
        self.stops[start + 1..=end + 1].reverse();
    }
}
