//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → replace.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use super::selection::tournament;
use super::tour::Tour;
use crate::distance::DistanceMatrix;

/// Result of a tour evolution run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best tour observed during the entire run, not just in the final
    /// generation. Without elitism the final population may have lost it.
    pub best: Tour,

    /// Best tour length (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness within each population: entry 0 is the seeded
    /// population, followed by one entry per generation. Without elitism
    /// consecutive entries may regress.
    pub fitness_history: Vec<f64>,
}

/// Executes the generational loop.
///
/// Each generation evaluates every tour against the shared distance
/// matrix, then builds a full replacement population: per offspring slot,
/// two parents are picked by tournament, recombined with order crossover,
/// and swap-mutated in place. With `elite_count > 0` the best tours of the
/// current generation are copied over unchanged first.
///
/// A single seedable RNG drives every stochastic step, so a fixed
/// [`GaConfig::seed`] reproduces a run exactly. Fitness evaluation is the
/// only parallelized phase; it reads the matrix and writes each tour's own
/// cached fitness, with no shared mutable state.
///
/// # Usage
///
/// ```
/// use tsp_evo::distance::DistanceMatrix;
/// use tsp_evo::ga::{GaConfig, GaRunner};
/// use tsp_evo::model::City;
///
/// let cities = vec![
///     City::new("A", 0.0, 0.0),
///     City::new("B", 0.0, 1.0),
///     City::new("C", 1.0, 1.0),
///     City::new("D", 1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_max_generations(100)
///     .with_seed(42);
///
/// let result = GaRunner::run(&dm, &config).unwrap();
/// assert!((result.best_fitness - 4.0).abs() < 1e-9);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the evolution and returns the best tour found.
    ///
    /// Returns `Err` before any evolution starts if the configuration is
    /// invalid or the matrix is empty.
    pub fn run(distances: &DistanceMatrix, config: &GaConfig) -> Result<GaResult, String> {
        Self::run_with_observer(distances, config, |_, _| {})
    }

    /// Runs the evolution, invoking `observer(generation, best_fitness)`
    /// after each generation with that generation's own best tour length.
    ///
    /// Generations are numbered from 1. The reported value is the best of
    /// the generation, not the running incumbent, so without elitism an
    /// observer may see the value regress.
    pub fn run_with_observer<F>(
        distances: &DistanceMatrix,
        config: &GaConfig,
        mut observer: F,
    ) -> Result<GaResult, String>
    where
        F: FnMut(usize, f64),
    {
        config.validate()?;
        let n = distances.size();
        if n == 0 {
            return Err("cannot evolve tours over an empty city set".into());
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // 1. Seed and evaluate the initial population
        let mut population: Vec<Tour> = (0..config.population_size)
            .map(|_| Tour::random(n, &mut rng))
            .collect();
        evaluate_population(distances, &mut population, config.parallel);

        // 2. The incumbent is carried across generations explicitly; the
        //    final population is not trusted to still contain it.
        let mut best = find_best(&population).clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness());

        // 3. Generational loop
        for gen in 0..config.max_generations {
            let mut next_gen: Vec<Tour> = Vec::with_capacity(config.population_size);

            if config.elite_count > 0 {
                population.sort_by(|a, b| {
                    a.fitness()
                        .partial_cmp(&b.fitness())
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                next_gen.extend_from_slice(&population[..config.elite_count]);
            }

            while next_gen.len() < config.population_size {
                let p1 = tournament(&population, config.tournament_size, &mut rng);
                let p2 = tournament(&population, config.tournament_size, &mut rng);

                let route =
                    order_crossover(population[p1].route(), population[p2].route(), &mut rng);
                let mut child = Tour::new(route);
                swap_mutation(child.route_mut(), config.mutation_rate, &mut rng);

                next_gen.push(child);
            }

            // Evaluate new offspring (elites keep their fitness)
            evaluate_population(
                distances,
                &mut next_gen[config.elite_count..],
                config.parallel,
            );
            population = next_gen;

            let gen_best = find_best(&population);
            let gen_best_fitness = gen_best.fitness();
            if gen_best_fitness < best.fitness() {
                best = gen_best.clone();
            }

            fitness_history.push(gen_best_fitness);
            observer(gen + 1, gen_best_fitness);
        }

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: config.max_generations,
            fitness_history,
        })
    }
}

/// Evaluate every tour in the slice against the distance matrix.
fn evaluate_population(distances: &DistanceMatrix, tours: &mut [Tour], parallel: bool) {
    if parallel {
        tours.par_iter_mut().for_each(|tour| {
            let f = tour.length(distances);
            tour.set_fitness(f);
        });
    } else {
        for tour in tours.iter_mut() {
            let f = tour.length(distances);
            tour.set_fitness(f);
        }
    }
}

/// Find the tour with the best (lowest) fitness.
fn find_best(population: &[Tour]) -> &Tour {
    population
        .iter()
        .min_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
