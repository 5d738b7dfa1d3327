//! Tour representation and cost model.
//!
//! - [`WeightMatrix`]: validated, possibly asymmetric n×n edge costs
//! - [`Tour`]: permutation of `0..n` with invariant-preserving mutators
//! - [`tour_cost`]: cyclic cost of a visiting order

mod cost;
mod matrix;
mod permutation;

pub use cost::tour_cost;
pub use matrix::WeightMatrix;
pub use permutation::{is_permutation, Tour};
