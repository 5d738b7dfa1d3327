//! Search configuration.
//!
//! [`SearchConfig`] holds every parameter that controls the generational loop.

use crate::error::{Result, TourError};
use crate::local_search::LocalSearchConfig;

/// Which generational loop to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Selection, crossover, mutation, renewal.
    #[default]
    Genetic,
    /// As [`Variant::Genetic`], with every offspring refined by local search
    /// before it enters the population.
    Memetic,
}

/// Configuration for the genetic and memetic searches.
///
/// # Defaults
///
/// ```
/// use u_tour::ga::{SearchConfig, Variant};
///
/// let config = SearchConfig::default();
/// assert_eq!(config.population_size, 500);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.variant, Variant::Genetic);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tour::ga::{SearchConfig, Variant};
/// use u_tour::local_search::{Improvement, LocalSearchConfig, MoveOperator};
///
/// let config = SearchConfig::default()
///     .with_variant(Variant::Memetic)
///     .with_population_size(100)
///     .with_mutation_rate(0.3)
///     .with_local_search(LocalSearchConfig::new(MoveOperator::Invert, Improvement::Best))
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Genetic or memetic loop.
    pub variant: Variant,

    /// Number of individuals. Constant for the whole run.
    pub population_size: usize,

    /// Maximum number of breeding rounds.
    pub max_iterations: usize,

    /// Consecutive rounds without a new best tour before stopping.
    pub max_stagnant_iterations: usize,

    /// Probability of mutating each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Refinement applied to offspring in the memetic loop.
    ///
    /// Ignored by [`Variant::Genetic`].
    pub local_search: LocalSearchConfig,

    /// Node the two heuristic seed tours start from.
    pub start_node: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses [`DEFAULT_SEED`](crate::random::DEFAULT_SEED).
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Genetic,
            population_size: 500,
            max_iterations: 1000,
            max_stagnant_iterations: 200,
            mutation_rate: 0.5,
            local_search: LocalSearchConfig::default(),
            start_node: 0,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Default configuration for the memetic loop.
    pub fn memetic() -> Self {
        Self::default().with_variant(Variant::Memetic)
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of breeding rounds.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_max_stagnant_iterations(mut self, n: usize) -> Self {
        self.max_stagnant_iterations = n;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the memetic refinement.
    pub fn with_local_search(mut self, local_search: LocalSearchConfig) -> Self {
        self.local_search = local_search;
        self
    }

    pub fn with_start_node(mut self, node: usize) -> Self {
        self.start_node = node;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick runs on small instances.
    ///
    /// - Population: 50, Iterations: 500, Stagnation limit: 50
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            max_iterations: 500,
            max_stagnant_iterations: 50,
            ..Self::default()
        }
    }

    /// Preset trading solution quality against run time.
    ///
    /// - Population: 200, Iterations: 2000, Stagnation limit: 200
    pub fn balanced() -> Self {
        Self {
            population_size: 200,
            max_iterations: 2000,
            max_stagnant_iterations: 200,
            ..Self::default()
        }
    }

    /// Preset for the best tours at the cost of longer runs.
    ///
    /// - Population: 500, Iterations: 10000, Stagnation limit: 1000
    pub fn quality() -> Self {
        Self {
            population_size: 500,
            max_iterations: 10_000,
            max_stagnant_iterations: 1000,
            ..Self::default()
        }
    }

    /// Selects a preset from the number of nodes.
    ///
    /// - `node_count < 20` → [`fast()`](Self::fast)
    /// - `20 ≤ node_count < 100` → [`balanced()`](Self::balanced)
    /// - `node_count ≥ 100` → [`quality()`](Self::quality)
    pub fn auto_select(node_count: usize) -> Self {
        if node_count < 20 {
            Self::fast()
        } else if node_count < 100 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(TourError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(TourError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TourError::InvalidConfig(
                "mutation_rate must be within [0, 1]".into(),
            ));
        }
        self.local_search.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_search::{Improvement, MoveOperator};

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.variant, Variant::Genetic);
        assert_eq!(config.population_size, 500);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.max_stagnant_iterations, 200);
        assert!((config.mutation_rate - 0.5).abs() < 1e-10);
        assert_eq!(config.local_search.operator, MoveOperator::Swap);
        assert_eq!(config.local_search.improvement, Improvement::First);
        assert_eq!(config.start_node, 0);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::memetic()
            .with_population_size(64)
            .with_max_iterations(300)
            .with_max_stagnant_iterations(40)
            .with_mutation_rate(0.2)
            .with_local_search(LocalSearchConfig::new(MoveOperator::Shift, Improvement::Best))
            .with_start_node(3)
            .with_seed(9);

        assert_eq!(config.variant, Variant::Memetic);
        assert_eq!(config.population_size, 64);
        assert_eq!(config.max_iterations, 300);
        assert_eq!(config.max_stagnant_iterations, 40);
        assert!((config.mutation_rate - 0.2).abs() < 1e-10);
        assert_eq!(config.local_search.operator, MoveOperator::Shift);
        assert_eq!(config.start_node, 3);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = SearchConfig::default().with_population_size(1);
        assert!(matches!(config.validate(), Err(TourError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = SearchConfig::default().with_max_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nan_mutation_rate() {
        let mut config = SearchConfig::default();
        config.mutation_rate = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_checks_local_search() {
        let local_search = LocalSearchConfig::default().with_max_passes(0);
        let config = SearchConfig::memetic().with_local_search(local_search);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamp_mutation_rate() {
        let high = SearchConfig::default().with_mutation_rate(1.5);
        let low = SearchConfig::default().with_mutation_rate(-0.5);
        assert!((high.mutation_rate - 1.0).abs() < 1e-10);
        assert!(low.mutation_rate.abs() < 1e-10);
    }

    #[test]
    fn test_presets_validate() {
        for config in [SearchConfig::fast(), SearchConfig::balanced(), SearchConfig::quality()] {
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_auto_select_boundaries() {
        assert_eq!(SearchConfig::auto_select(19), SearchConfig::fast());
        assert_eq!(SearchConfig::auto_select(20), SearchConfig::balanced());
        assert_eq!(SearchConfig::auto_select(99), SearchConfig::balanced());
        assert_eq!(SearchConfig::auto_select(100), SearchConfig::quality());
    }

    #[test]
    fn test_preset_chainable() {
        let config = SearchConfig::fast().with_population_size(75).with_seed(42);
        assert_eq!(config.population_size, 75);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_iterations, 500);
    }
}
