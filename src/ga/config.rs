//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the genetic tour search.
///
/// Controls population size, generation count, operator rates, elitism,
/// parallelism, and seeding.
///
/// Builder methods store values verbatim; out-of-range parameters are
/// rejected by [`validate`](GaConfig::validate) (which the runner calls
/// before any evolution starts) rather than silently clamped.
///
/// # Defaults
///
/// ```
/// use tsp_evo::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// assert_eq!(config.tournament_size, 5);
/// assert_eq!(config.elite_count, 0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_evo::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(3)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours in the population.
    ///
    /// Larger populations increase diversity but slow down each generation.
    /// Typical range: 50–500.
    pub population_size: usize,

    /// Number of generations to run. The loop always executes exactly this
    /// many generations; there is no stagnation or time-based cutoff.
    pub max_generations: usize,

    /// Per-position swap probability applied to every offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of tours sampled per tournament.
    ///
    /// Larger values bias selection more strongly toward short tours.
    /// Sampling is with replacement, so values above `population_size`
    /// are legal.
    pub tournament_size: usize,

    /// Number of best tours copied unchanged into the next generation.
    ///
    /// 0 (the default) is pure generational replacement: the best tour of
    /// a generation may be lost, and per-generation best fitness can
    /// regress. Any positive value makes the best fitness monotone
    /// non-increasing across generations.
    pub elite_count: usize,

    /// Whether to evaluate tours in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            mutation_rate: 0.01,
            tournament_size: 5,
            elite_count: 0,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-position mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the number of elite tours carried over unchanged.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if !self.mutation_rate.is_finite() || !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if self.elite_count >= self.population_size {
            return Err("elite_count must be smaller than population_size".into());
        }
        Ok(())
    }
}
