//! Individuals of the tour population.
//!
//! An [`Individual`] pairs a [`Tour`] with its cyclic cost and fitness.
//! Cost is lower-is-better; fitness is `1 / cost`, higher-is-better.

use crate::tour::{tour_cost, Tour, WeightMatrix};

/// Sentinel cost and fitness of an individual that has not been evaluated.
pub const UNSET: f64 = -1.0;

/// Converts a tour cost into fitness.
///
/// - `cost == 0` (an all-zero instance) maps to `f64::INFINITY`
/// - `cost == ∞` (a forbidden edge in the tour) maps to `0.0`
/// - otherwise `1 / cost`
pub fn fitness_from_cost(cost: f64) -> f64 {
    if cost == 0.0 {
        f64::INFINITY
    } else {
        1.0 / cost
    }
}

/// A candidate tour with its cost and fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    tour: Tour,
    cost: f64,
    fitness: f64,
}

impl Individual {
    /// Wraps a tour without evaluating it.
    pub fn new(tour: Tour) -> Self {
        Self {
            tour,
            cost: UNSET,
            fitness: UNSET,
        }
    }

    /// Wraps a tour and evaluates it against `weights`.
    pub fn evaluated(tour: Tour, weights: &WeightMatrix) -> Self {
        let cost = tour_cost(weights, &tour);
        Self::with_cost(tour, cost)
    }

    /// Wraps a tour whose cost is already known.
    pub(crate) fn with_cost(tour: Tour, cost: f64) -> Self {
        Self {
            tour,
            cost,
            fitness: fitness_from_cost(cost),
        }
    }

    /// Recomputes cost and fitness.
    pub fn evaluate(&mut self, weights: &WeightMatrix) {
        self.cost = tour_cost(weights, &self.tour);
        self.fitness = fitness_from_cost(self.cost);
    }

    /// Whether cost and fitness have been computed.
    pub fn is_evaluated(&self) -> bool {
        self.cost != UNSET
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    pub fn into_tour(self) -> Tour {
        self.tour
    }

    /// Cyclic tour cost, or [`UNSET`].
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Reciprocal cost, or [`UNSET`].
    pub fn fitness(&self) -> f64 {
        self.fitness
    }
}
