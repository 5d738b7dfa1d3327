//! Genetic and memetic search for the Traveling Salesman Problem.
//!
//! Given an n×n weight matrix (possibly asymmetric, with `f64::INFINITY`
//! marking forbidden edges), the crate searches for a short closed tour
//! visiting every node exactly once.
//!
//! - [`tour`]: weight matrix, tour permutation and cyclic cost
//! - [`constructive`]: nearest-neighbor and cheapest-insertion seed tours
//! - [`local_search`]: swap / shift / invert neighborhoods with first- or
//!   best-improvement
//! - [`ga`]: population, selection, crossover, mutation and the search loop
//!
//! # Example
//!
//! ```
//! use u_tour::ga::{SearchConfig, SearchRunner};
//! use u_tour::tour::WeightMatrix;
//!
//! let wm = WeightMatrix::from_fn(6, |i, j| (i as f64 - j as f64).abs()).unwrap();
//! let result = SearchRunner::run(&wm, &SearchConfig::memetic().with_seed(1)).unwrap();
//! assert_eq!(result.best_cost, 10.0);
//! ```

pub mod constructive;
pub mod error;
pub mod ga;
pub mod local_search;
pub mod random;
pub mod tour;

pub use error::{Result, TourError};
