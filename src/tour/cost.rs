//! Cyclic tour cost.

use super::matrix::WeightMatrix;

/// Computes the cyclic cost of visiting `path` in order and returning to
/// the first node.
///
/// Paths with fewer than two nodes cost 0. Forbidden edges propagate as
/// `f64::INFINITY`.
///
/// # Examples
///
/// ```
/// use u_tour::tour::{tour_cost, WeightMatrix};
///
/// let wm = WeightMatrix::from_rows(vec![
///     vec![0.0, 10.0, 100.0, 10.0],
///     vec![10.0, 0.0, 10.0, 100.0],
///     vec![100.0, 10.0, 0.0, 10.0],
///     vec![10.0, 100.0, 10.0, 0.0],
/// ]).unwrap();
/// assert_eq!(tour_cost(&wm, &[0, 2, 1, 3]), 220.0);
/// ```
pub fn tour_cost(weights: &WeightMatrix, path: &[usize]) -> f64 {
    let n = path.len();
    if n < 2 {
        return 0.0;
    }
    let open: f64 = path.windows(2).map(|e| weights.get(e[0], e[1])).sum();
    open + weights.get(path[n - 1], path[0])
}
