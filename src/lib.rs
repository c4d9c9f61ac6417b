//! Genetic algorithm solver for the Euclidean travelling salesman problem.
//!
//! Given a set of labelled 2D points, the crate searches for a short
//! closed tour visiting every point exactly once: a distance matrix is
//! built once, a population of random tours is seeded, and a generational
//! loop of tournament selection, order crossover, and swap mutation drives
//! convergence toward shorter tours.
//!
//! ## Modules
//!
//! - [`model`] — City: a labelled point in the plane
//! - [`distance`] — Dense Euclidean distance matrix, built once per run
//! - [`ga`] — Tour chromosome, operators, configuration, and the
//!   generational runner
//! - [`loader`] — `label x y` text parsing
//! - [`negotiation`] — Fuel cost and counter-offer reporting on the final
//!   tour length
//!
//! ## Example
//!
//! ```
//! use tsp_evo::distance::DistanceMatrix;
//! use tsp_evo::ga::{GaConfig, GaRunner};
//! use tsp_evo::loader::parse_cities;
//! use tsp_evo::negotiation::CostModel;
//!
//! let cities = parse_cities("A 0.0 0.0\nB 0.0 1.0\nC 1.0 1.0\nD 1.0 0.0\n").unwrap();
//! let distances = DistanceMatrix::from_cities(&cities);
//!
//! let config = GaConfig::default()
//!     .with_population_size(50)
//!     .with_max_generations(100)
//!     .with_seed(42);
//! let result = GaRunner::run(&distances, &config).unwrap();
//!
//! let offer = CostModel::default().counter_offer(result.best_fitness);
//! assert!((result.best_fitness - 4.0).abs() < 1e-9);
//! assert!(offer <= 100.0);
//! ```

pub mod distance;
pub mod ga;
pub mod loader;
pub mod model;
pub mod negotiation;
