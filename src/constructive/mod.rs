//! Constructive heuristics that produce seed tours.
//!
//! The search treats seed builders as black boxes behind [`TourBuilder`].
//! Two reference builders are provided:
//!
//! - [`NearestNeighbor`]: greedy nearest unvisited node, O(n²)
//! - [`CheapestInsertion`]: insert the node with the lowest detour, O(n³)

mod cheapest_insertion;
mod nearest_neighbor;

pub use cheapest_insertion::CheapestInsertion;
pub use nearest_neighbor::NearestNeighbor;

use crate::tour::WeightMatrix;

/// Produces one visiting order over all nodes of `weights`, starting at `start`.
///
/// Implementations are expected to return a permutation of
/// `0..weights.size()`; the population seeding step validates the result.
pub trait TourBuilder {
    /// Builds a tour beginning at node `start`.
    fn build(&self, weights: &WeightMatrix, start: usize) -> Vec<usize>;
}

impl<F> TourBuilder for F
where
    F: Fn(&WeightMatrix, usize) -> Vec<usize>,
{
    fn build(&self, weights: &WeightMatrix, start: usize) -> Vec<usize> {
        self(weights, start)
    }
}
