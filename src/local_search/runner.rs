//! Neighborhood descent on a single tour.
//!
//! # Algorithm
//!
//! 1. Evaluate the starting tour
//! 2. Scan the operator's neighborhood, applying each move in place and
//!    undoing it after evaluation
//! 3. Accept the first (or best) improving move and rescan
//! 4. Stop when a full scan finds no improving move (local optimum) or the
//!    pass budget is spent
//!
//! # Complexity
//!
//! O(n³) per scan: O(n²) neighbors, each evaluated in O(n).

use tracing::trace;

use super::config::{Improvement, LocalSearchConfig, MoveOperator};
use crate::tour::{tour_cost, Tour, WeightMatrix};

/// Result of a local search run.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSearchResult {
    /// The refined tour.
    pub solution: Tour,
    /// Cost of `solution`.
    pub cost: f64,
    /// Neighborhood scans performed.
    pub passes: usize,
    /// Improving moves accepted.
    pub moves_applied: usize,
    /// Whether the last scan found no improving move.
    pub converged: bool,
}

/// Local search runner.
pub struct LocalSearch;

impl LocalSearch {
    /// Refines `initial` until it is a local optimum for the configured
    /// operator, or until `max_passes` scans have run.
    ///
    /// Tours with fewer than three nodes have no cost-changing move and are
    /// returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tour::local_search::{Improvement, LocalSearch, LocalSearchConfig, MoveOperator};
    /// use u_tour::tour::{Tour, WeightMatrix};
    ///
    /// let wm = WeightMatrix::from_rows(vec![
    ///     vec![0.0, 10.0, 100.0, 10.0],
    ///     vec![10.0, 0.0, 10.0, 100.0],
    ///     vec![100.0, 10.0, 0.0, 10.0],
    ///     vec![10.0, 100.0, 10.0, 0.0],
    /// ]).unwrap();
    /// let start = Tour::new(vec![0, 2, 1, 3]).unwrap();
    /// let config = LocalSearchConfig::new(MoveOperator::Swap, Improvement::Best);
    ///
    /// let result = LocalSearch::run(&wm, start, &config);
    /// assert_eq!(result.cost, 40.0);
    /// assert!(result.converged);
    /// ```
    pub fn run(
        weights: &WeightMatrix,
        initial: Tour,
        config: &LocalSearchConfig,
    ) -> LocalSearchResult {
        let n = initial.len();
        let mut current = initial;
        let mut cost = tour_cost(weights, &current);

        if n < 3 {
            return LocalSearchResult {
                solution: current,
                cost,
                passes: 0,
                moves_applied: 0,
                converged: true,
            };
        }

        let mut passes = 0;
        let mut moves_applied = 0;
        let mut converged = false;

        while config.max_passes.map_or(true, |max| passes < max) {
            passes += 1;
            let op = config.operator;
            let step = match config.improvement {
                Improvement::First => first_improvement_step(weights, &mut current, cost, op),
                Improvement::Best => best_improvement_step(weights, &mut current, cost, op),
            };
            match step {
                Some(new_cost) => {
                    cost = new_cost;
                    moves_applied += 1;
                }
                None => {
                    converged = true;
                    break;
                }
            }
        }

        trace!(
            operator = ?config.operator,
            improvement = ?config.improvement,
            passes,
            moves_applied,
            cost,
            "local search finished"
        );

        LocalSearchResult {
            solution: current,
            cost,
            passes,
            moves_applied,
            converged,
        }
    }
}

/// Returns `true` if `candidate` is strictly better than `current`.
#[inline]
fn improves(candidate: f64, current: f64) -> bool {
    candidate < current - 1e-12
}

/// Applies the first improving move in scan order. Returns its cost.
fn first_improvement_step(
    weights: &WeightMatrix,
    tour: &mut Tour,
    cost: f64,
    op: MoveOperator,
) -> Option<f64> {
    for (i, j) in op.neighborhood(tour.len()) {
        op.apply(tour, i, j);
        let candidate = tour_cost(weights, tour);
        if improves(candidate, cost) {
            return Some(candidate);
        }
        op.undo(tour, i, j);
    }
    None
}

/// Applies the best improving move of the full neighborhood. Returns its cost.
///
/// Ties keep the move found first.
fn best_improvement_step(
    weights: &WeightMatrix,
    tour: &mut Tour,
    cost: f64,
    op: MoveOperator,
) -> Option<f64> {
    let mut best: Option<(usize, usize, f64)> = None;
    for (i, j) in op.neighborhood(tour.len()) {
        op.apply(tour, i, j);
        let candidate = tour_cost(weights, tour);
        op.undo(tour, i, j);
        let threshold = best.map_or(cost, |(_, _, c)| c);
        if improves(candidate, threshold) {
            best = Some((i, j, candidate));
        }
    }

    let (i, j, best_cost) = best?;
    op.apply(tour, i, j);
    Some(best_cost)
}
