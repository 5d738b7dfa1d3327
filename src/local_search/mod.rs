//! Neighborhood local search over tours.
//!
//! A [`LocalSearch`] run refines one tour with a single [`MoveOperator`]
//! (swap, shift or invert) and a single [`Improvement`] strategy
//! (first or best improvement) until no move in the neighborhood lowers
//! the cyclic cost.
//!
//! Moves are applied in place and reverted with [`MoveOperator::undo`],
//! so evaluating a neighbor allocates nothing.

mod config;
mod moves;
mod runner;

pub use config::{Improvement, LocalSearchConfig, MoveOperator};
pub use runner::{LocalSearch, LocalSearchResult};
