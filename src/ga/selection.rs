//! Tournament parent selection.
//!
//! Selection determines which tours are chosen as parents for crossover.
//! Tournament selection gives tunable pressure without the scaling
//! problems of fitness-proportionate schemes: with widely varying tour
//! lengths, only the *ordering* of fitness values matters.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::tour::Tour;
use rand::Rng;

/// Tournament selection: sample `k` tours uniformly at random with
/// replacement, return the index of the one with the lowest fitness.
///
/// Higher `k` = stronger selection pressure:
/// - k=2: light pressure (good for diversity)
/// - k=3-5: moderate pressure (typical default)
/// - k>5: strong pressure (risk of premature convergence)
///
/// Sampling is with replacement, so `k` may exceed the population size.
/// At least one draw is always made. The population must already carry
/// fitness values from the current evaluation pass.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Tour], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() < population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}
