//! Nearest-neighbor tour construction.
//!
//! Starting from the given node, always travel to the cheapest unvisited
//! node. When every remaining edge is forbidden the lowest-indexed
//! unvisited node is taken, so the result always covers all nodes.

use super::TourBuilder;
use crate::tour::WeightMatrix;

/// Greedy nearest-neighbor seed builder.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::{NearestNeighbor, TourBuilder};
/// use u_tour::tour::WeightMatrix;
///
/// let wm = WeightMatrix::from_fn(4, |i, j| (i as f64 - j as f64).abs()).unwrap();
/// assert_eq!(NearestNeighbor.build(&wm, 0), vec![0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl TourBuilder for NearestNeighbor {
    fn build(&self, weights: &WeightMatrix, start: usize) -> Vec<usize> {
        let n = weights.size();
        if n == 0 {
            return Vec::new();
        }

        let mut visited = vec![false; n];
        let mut path = Vec::with_capacity(n);
        let mut current = start;
        visited[current] = true;
        path.push(current);

        while path.len() < n {
            let unvisited = (0..n).filter(|&i| !visited[i]);
            let Some(next) = weights.nearest(current, unvisited) else {
                break;
            };
            visited[next] = true;
            path.push(next);
            current = next;
        }

        path
    }
}
