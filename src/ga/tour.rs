//! Tour chromosome.
//!
//! A [`Tour`] encodes a candidate solution as a permutation of city
//! indices, interpreted as a closed visiting order: after the last city
//! the salesman returns to the first.

use rand::Rng;

use crate::distance::DistanceMatrix;

/// A closed tour: a permutation of city indices `0..n`.
///
/// The fitness slot caches the total cyclic length of the route. It starts
/// at `f64::INFINITY` and is written by the engine's evaluation pass, so a
/// freshly created or recombined tour is never mistaken for an evaluated
/// one. Lower fitness = shorter tour.
///
/// # Examples
///
/// ```
/// use tsp_evo::ga::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1]);
/// assert_eq!(tour.route(), &[2, 0, 1]);
/// assert_eq!(tour.fitness(), f64::INFINITY);
/// ```
#[derive(Debug, Clone)]
pub struct Tour {
    route: Vec<usize>,
    fitness: f64,
}

impl Tour {
    /// Creates a tour from a city permutation.
    pub fn new(route: Vec<usize>) -> Self {
        Self {
            route,
            fitness: f64::INFINITY,
        }
    }

    /// Creates a uniformly random tour over `n` cities.
    ///
    /// Uses a Fisher–Yates shuffle, so every permutation is equally likely.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut route: Vec<usize> = (0..n).collect();
        for i in (1..n).rev() {
            let j = rng.random_range(0..=i);
            route.swap(i, j);
        }
        Self::new(route)
    }

    /// Returns the city permutation.
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// Returns a mutable view of the city permutation.
    pub fn route_mut(&mut self) -> &mut [usize] {
        &mut self.route
    }

    /// Number of cities in this tour.
    pub fn len(&self) -> usize {
        self.route.len()
    }

    /// Returns `true` if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// Total length of the closed route under the given distance matrix.
    ///
    /// Sums the edges between consecutive cities plus the closing edge back
    /// to the start. A tour over zero or one cities has length 0.
    pub fn length(&self, distances: &DistanceMatrix) -> f64 {
        let n = self.route.len();
        if n <= 1 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..n - 1 {
            total += distances.get(self.route[i], self.route[i + 1]);
        }
        total + distances.get(self.route[n - 1], self.route[0])
    }

    /// Returns the cached fitness of this tour.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Sets the cached fitness. Called by the engine after evaluation.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}
