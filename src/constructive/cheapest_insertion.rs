//! Cheapest-insertion tour construction.
//!
//! Begins with the start node and its nearest neighbor, then repeatedly
//! inserts the unrouted node whose cheapest insertion point adds the
//! least cost:
//!
//! ```text
//! increase(k, a→b) = w(a, k) + w(k, b) - w(a, b)
//! ```
//!
//! # Complexity
//!
//! O(n³).

use super::TourBuilder;
use crate::tour::WeightMatrix;

/// Cheapest-insertion seed builder.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::{CheapestInsertion, TourBuilder};
/// use u_tour::tour::{tour_cost, WeightMatrix};
///
/// let wm = WeightMatrix::from_fn(5, |i, j| (i as f64 - j as f64).abs()).unwrap();
/// let path = CheapestInsertion.build(&wm, 0);
/// assert_eq!(path.len(), 5);
/// assert_eq!(tour_cost(&wm, &path), 8.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CheapestInsertion;

impl TourBuilder for CheapestInsertion {
    fn build(&self, weights: &WeightMatrix, start: usize) -> Vec<usize> {
        let n = weights.size();
        if n == 0 {
            return Vec::new();
        }

        let mut routed = vec![false; n];
        let mut path = Vec::with_capacity(n);
        path.push(start);
        routed[start] = true;

        let Some(first) = weights.nearest(start, (0..n).filter(|&i| i != start)) else {
            return path;
        };
        path.push(first);
        routed[first] = true;

        while path.len() < n {
            let (node, position) = cheapest_insertion(weights, &path, &routed);
            path.insert(position, node);
            routed[node] = true;
        }

        path
    }
}

/// Finds the unrouted node and insertion position with the lowest cost increase.
///
/// Ties go to the lowest node index, then the earliest position. When every
/// increase is undefined (forbidden edges on both sides), the first unrouted
/// node is appended at the end.
fn cheapest_insertion(weights: &WeightMatrix, path: &[usize], routed: &[bool]) -> (usize, usize) {
    let len = path.len();
    let mut best: Option<(usize, usize, f64)> = None;

    for node in (0..routed.len()).filter(|&k| !routed[k]) {
        for pos in 0..len {
            let a = path[pos];
            let b = path[(pos + 1) % len];
            let increase = weights.get(a, node) + weights.get(node, b) - weights.get(a, b);
            match best {
                Some((_, _, inc)) if !(increase < inc) => {}
                _ if increase.is_nan() => {}
                _ => best = Some((node, pos + 1, increase)),
            }
        }
    }

    match best {
        Some((node, pos, _)) => (node, pos),
        None => {
            let node = routed
                .iter()
                .position(|&r| !r)
                .expect("caller guarantees an unrouted node");
            (node, len)
        }
    }
}
