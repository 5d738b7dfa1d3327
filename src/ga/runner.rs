//! Generational loop execution.
//!
//! [`SearchRunner`] drives both variants:
//! seeding → evaluation → selection → crossover → mutation →
//! (local search) → renewal → repeat.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};

use super::config::{SearchConfig, Variant};
use super::operators::{apply_mutation, order_crossover};
use super::population::Population;
use super::selection::HybridSelection;
use super::types::Individual;
use crate::constructive::{CheapestInsertion, NearestNeighbor, TourBuilder};
use crate::error::{Result, TourError};
use crate::local_search::LocalSearch;
use crate::random::{create_rng, DEFAULT_SEED};
use crate::tour::{Tour, WeightMatrix};

/// Result of a search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best tour found during the entire run.
    pub best: Tour,

    /// Cyclic cost of `best`.
    pub best_cost: f64,

    /// Breeding rounds executed.
    pub iterations: usize,

    /// Whether the run stopped on the stagnation limit.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best cost after each round; entry 0 is the seeded population.
    pub cost_history: Vec<f64>,
}

/// Executes the genetic or memetic search.
///
/// # Usage
///
/// ```
/// use u_tour::ga::{SearchConfig, SearchRunner};
/// use u_tour::tour::WeightMatrix;
///
/// let wm = WeightMatrix::from_rows(vec![
///     vec![0.0, 10.0, 100.0, 10.0],
///     vec![10.0, 0.0, 10.0, 100.0],
///     vec![100.0, 10.0, 0.0, 10.0],
///     vec![10.0, 100.0, 10.0, 0.0],
/// ]).unwrap();
///
/// let config = SearchConfig::fast().with_seed(42);
/// let result = SearchRunner::run(&wm, &config).unwrap();
/// assert_eq!(result.best_cost, 40.0);
/// ```
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search seeded with [`NearestNeighbor`] and [`CheapestInsertion`].
    pub fn run(weights: &WeightMatrix, config: &SearchConfig) -> Result<SearchResult> {
        Self::run_with_builders(weights, config, &NearestNeighbor, &CheapestInsertion, None)
    }

    /// Runs the default-seeded search with a cancellation flag.
    ///
    /// The flag is checked at the start of every round. When it is set, the
    /// run stops and returns the best tour found so far.
    pub fn run_with_cancel(
        weights: &WeightMatrix,
        config: &SearchConfig,
        cancel: Arc<AtomicBool>,
    ) -> Result<SearchResult> {
        Self::run_with_builders(weights, config, &NearestNeighbor, &CheapestInsertion, Some(cancel))
    }

    /// Runs the search with caller-supplied seed builders.
    ///
    /// `first` and `second` each contribute one individual, both started at
    /// `config.start_node`; the rest of the population is random.
    ///
    /// # Errors
    ///
    /// - [`TourError::InvalidConfig`] if `config` fails validation
    /// - [`TourError::TooFewNodes`] if `weights` has fewer than two nodes
    /// - [`TourError::StartNodeOutOfRange`] if `config.start_node >= n`
    /// - [`TourError::InvalidPermutation`] if a builder returns a non-tour
    pub fn run_with_builders<A, B>(
        weights: &WeightMatrix,
        config: &SearchConfig,
        first: &A,
        second: &B,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult>
    where
        A: TourBuilder + ?Sized,
        B: TourBuilder + ?Sized,
    {
        config.validate()?;
        let n = weights.size();
        if n < 2 {
            return Err(TourError::TooFewNodes(n));
        }

        let mut rng = create_rng(config.seed.unwrap_or(DEFAULT_SEED));

        // 1. Seed and evaluate
        let mut population = Population::seed(
            weights,
            first,
            second,
            config.population_size,
            config.start_node,
            &mut rng,
        )?;
        population.evaluate(weights);

        // 2. Track best
        let mut best = population.best().clone();
        let mut cost_history = Vec::with_capacity(config.max_iterations + 1);
        cost_history.push(best.cost());

        info!(
            variant = ?config.variant,
            nodes = n,
            population = config.population_size,
            initial_cost = best.cost(),
            "search started"
        );

        let mut selector = HybridSelection::new();
        let mut stagnation = 0usize;
        let mut iterations = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;

        // 3. Generational loop
        while iterations < config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if config.max_stagnant_iterations > 0 && stagnation >= config.max_stagnant_iterations {
                stagnated = true;
                break;
            }

            let (a, b) = selector.select_parents(&population, iterations, &mut rng);
            let offspring = breed(
                weights,
                config,
                population[a].tour(),
                population[b].tour(),
                &mut rng,
            );
            population.renew(offspring);
            iterations += 1;

            let round_best = population.best();
            if round_best.cost() < best.cost() {
                best = round_best.clone();
                stagnation = 0;
                debug!(iteration = iterations, cost = best.cost(), "new best tour");
            } else {
                stagnation += 1;
            }
            cost_history.push(best.cost());
        }

        // The limit can also be reached on the final round.
        if !cancelled
            && config.max_stagnant_iterations > 0
            && stagnation >= config.max_stagnant_iterations
        {
            stagnated = true;
        }

        info!(
            iterations,
            best_cost = best.cost(),
            stagnated,
            cancelled,
            "search finished"
        );

        let best_cost = best.cost();
        Ok(SearchResult {
            best: best.into_tour(),
            best_cost,
            iterations,
            stagnated,
            cancelled,
            cost_history,
        })
    }
}

/// Two evaluated children of `p1` and `p2`: OX in both parent roles, then
/// mutation, then (memetic only) local search.
fn breed<R: Rng>(
    weights: &WeightMatrix,
    config: &SearchConfig,
    p1: &Tour,
    p2: &Tour,
    rng: &mut R,
) -> Vec<Individual> {
    let mut children = Vec::with_capacity(2);
    for (template, donor) in [(p1, p2), (p2, p1)] {
        let mut child = order_crossover(template, donor, rng);
        apply_mutation(&mut child, config.mutation_rate, rng);
        children.push(match config.variant {
            Variant::Genetic => Individual::evaluated(child, weights),
            Variant::Memetic => {
                let refined = LocalSearch::run(weights, child, &config.local_search);
                Individual::with_cost(refined.solution, refined.cost)
            }
        });
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_search::{Improvement, LocalSearchConfig, MoveOperator};
    use crate::tour::{is_permutation, tour_cost};

    fn square() -> WeightMatrix {
        WeightMatrix::from_rows(vec![
            vec![0.0, 10.0, 100.0, 10.0],
            vec![10.0, 0.0, 10.0, 100.0],
            vec![100.0, 10.0, 0.0, 10.0],
            vec![10.0, 100.0, 10.0, 0.0],
        ])
        .expect("valid")
    }

    /// Regular octagon with labels scattered around the ring.
    fn octagon() -> (WeightMatrix, f64) {
        let points: Vec<(f64, f64)> = (0..8)
            .map(|i| {
                let angle = ((3 * i) % 8) as f64 * std::f64::consts::TAU / 8.0;
                (angle.cos(), angle.sin())
            })
            .collect();
        let wm = WeightMatrix::from_fn(8, |i, j| {
            let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
            (dx * dx + dy * dy).sqrt()
        })
        .expect("valid");
        let optimum = 8.0 * 2.0 * (std::f64::consts::PI / 8.0).sin();
        (wm, optimum)
    }

    /// Deterministic pseudo-random instance.
    fn scattered(n: usize) -> WeightMatrix {
        WeightMatrix::from_fn(n, |i, j| {
            if i == j {
                0.0
            } else {
                (((i * 31 + j * 17) % 23) + 1) as f64
            }
        })
        .expect("valid")
    }

    fn identity_builder(weights: &WeightMatrix, _start: usize) -> Vec<usize> {
        (0..weights.size()).collect()
    }

    #[test]
    fn test_square_reaches_optimum() {
        let config = SearchConfig::fast().with_seed(42);
        let result = SearchRunner::run(&square(), &config).expect("valid run");
        assert!((result.best_cost - 40.0).abs() < 1e-10);
        assert!(is_permutation(&result.best));
        assert!((tour_cost(&square(), &result.best) - result.best_cost).abs() < 1e-10);
    }

    #[test]
    fn test_memetic_two_opt_finds_octagon_optimum() {
        let (wm, optimum) = octagon();
        let config = SearchConfig::memetic()
            .with_population_size(20)
            .with_max_iterations(30)
            .with_local_search(LocalSearchConfig::new(MoveOperator::Invert, Improvement::Best))
            .with_seed(42);

        let result = SearchRunner::run_with_builders(
            &wm,
            &config,
            &identity_builder,
            &identity_builder,
            None,
        )
        .expect("valid run");

        // every refined child is 2-opt optimal, which is globally optimal on
        // points in convex position
        assert!((result.best_cost - optimum).abs() < 1e-9, "got {}", result.best_cost);
    }

    #[test]
    fn test_genetic_never_beats_optimum() {
        let (wm, optimum) = octagon();
        let config = SearchConfig::fast().with_population_size(20).with_seed(3);
        let result = SearchRunner::run_with_builders(
            &wm,
            &config,
            &identity_builder,
            &identity_builder,
            None,
        )
        .expect("valid run");
        assert!(result.best_cost >= optimum - 1e-9);
        assert!(result.best_cost <= result.cost_history[0]);
    }

    #[test]
    fn test_cost_history_non_increasing() {
        for variant in [Variant::Genetic, Variant::Memetic] {
            let config = SearchConfig::fast().with_variant(variant).with_seed(7);
            let result = SearchRunner::run(&scattered(12), &config).expect("valid run");
            assert_eq!(result.cost_history.len(), result.iterations + 1);
            for w in result.cost_history.windows(2) {
                assert!(w[1] <= w[0], "history increased: {} -> {}", w[0], w[1]);
            }
            assert_eq!(result.cost_history.last().copied(), Some(result.best_cost));
        }
    }

    #[test]
    fn test_stagnation_termination() {
        // the nearest-neighbor seed is already optimal, so nothing improves
        let config = SearchConfig::default()
            .with_population_size(10)
            .with_max_iterations(10_000)
            .with_max_stagnant_iterations(5)
            .with_seed(42);
        let result = SearchRunner::run(&square(), &config).expect("valid run");
        assert!(result.stagnated);
        assert!(!result.cancelled);
        assert_eq!(result.iterations, 5);
        assert_eq!(result.cost_history.len(), 6);
    }

    #[test]
    fn test_iteration_budget() {
        let config = SearchConfig::default()
            .with_population_size(10)
            .with_max_iterations(7)
            .with_max_stagnant_iterations(0)
            .with_seed(42);
        let result = SearchRunner::run(&square(), &config).expect("valid run");
        assert_eq!(result.iterations, 7);
        assert!(!result.stagnated);
        assert_eq!(result.cost_history.len(), 8);
    }

    #[test]
    fn test_reproducible_with_seed() {
        let wm = scattered(15);
        let config = SearchConfig::fast().with_seed(11);
        let a = SearchRunner::run(&wm, &config).expect("valid run");
        let b = SearchRunner::run(&wm, &config).expect("valid run");
        assert_eq!(a, b);
    }

    #[test]
    fn test_cancellation() {
        let cancel = Arc::new(AtomicBool::new(true));
        let config = SearchConfig::fast().with_seed(42);
        let result = SearchRunner::run_with_cancel(&square(), &config, cancel).expect("valid run");
        assert!(result.cancelled);
        assert!(!result.stagnated);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.cost_history.len(), 1);
        assert!((result.best_cost - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_avoids_forbidden_edges() {
        // only the ring 0 -> 1 -> 2 -> 3 -> 4 -> 0 is finite
        let wm = WeightMatrix::from_fn(5, |i, j| {
            if i == j {
                0.0
            } else if j == (i + 1) % 5 {
                1.0
            } else {
                f64::INFINITY
            }
        })
        .expect("valid");
        let config = SearchConfig::fast().with_seed(42);
        let result = SearchRunner::run(&wm, &config).expect("valid run");
        assert!((result.best_cost - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_two_nodes() {
        let wm = WeightMatrix::from_rows(vec![vec![0.0, 3.0], vec![4.0, 0.0]]).expect("valid");
        let config = SearchConfig::memetic().with_population_size(4).with_max_iterations(5);
        let result = SearchRunner::run(&wm, &config).expect("valid run");
        assert!((result.best_cost - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_too_few_nodes() {
        let wm = WeightMatrix::from_rows(vec![vec![0.0]]).expect("valid");
        assert_eq!(
            SearchRunner::run(&wm, &SearchConfig::fast()),
            Err(TourError::TooFewNodes(1))
        );
    }

    #[test]
    fn test_start_node_out_of_range() {
        let config = SearchConfig::fast().with_start_node(4);
        assert_eq!(
            SearchRunner::run(&square(), &config),
            Err(TourError::StartNodeOutOfRange { start: 4, nodes: 4 })
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SearchConfig::fast().with_population_size(1);
        assert!(matches!(
            SearchRunner::run(&square(), &config),
            Err(TourError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_builder_output_rejected() {
        let broken = |_: &WeightMatrix, _: usize| vec![0, 0, 1, 2];
        let result = SearchRunner::run_with_builders(
            &square(),
            &SearchConfig::fast(),
            &broken,
            &NearestNeighbor,
            None,
        );
        assert!(matches!(result, Err(TourError::InvalidPermutation { .. })));
    }
}
