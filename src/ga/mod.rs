//! Genetic algorithm for closed tours.
//!
//! The search evolves a fixed-size population of [`Tour`] permutations
//! against a shared read-only [`DistanceMatrix`](crate::distance::DistanceMatrix):
//! evaluate, select parents by tournament, recombine with order crossover,
//! swap-mutate, replace the population wholesale, repeat for a fixed
//! number of generations.
//!
//! # Key Types
//!
//! - [`Tour`]: a permutation chromosome with a cached length
//! - [`GaConfig`]: algorithm parameters (population, generations, rates)
//! - [`GaRunner`]: executes the generational loop
//! - [`GaResult`]: best tour found plus the per-generation fitness trace
//!
//! # Submodules
//!
//! - [`operators`]: order crossover (OX) and per-position swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
pub mod operators;
mod runner;
mod selection;
mod tour;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::tournament;
pub use tour::Tour;
