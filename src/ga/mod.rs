//! Genetic and memetic tour search.
//!
//! A steady-state genetic algorithm over permutations. Each round breeds
//! two children from one parent pair, and the children replace the two
//! worst members of the population. The memetic variant refines every
//! child with [`local_search`](crate::local_search) before it is inserted.
//!
//! # Key Types
//!
//! - [`SearchConfig`]: Algorithm parameters (population size, budgets, presets)
//! - [`SearchRunner`]: Executes the generational loop
//! - [`SearchResult`]: Best tour with run statistics
//! - [`Population`]: Fixed-size pool of evaluated [`Individual`]s
//! - [`HybridSelection`]: Elitist parent selection with a periodic random round
//!
//! # Submodules
//!
//! - [`operators`]: Order crossover and the swap / inversion / scramble mutations
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Moscato (1989), "On Evolution, Search, Optimization, Genetic Algorithms
//!   and Martial Arts: Towards Memetic Algorithms"

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::{SearchConfig, Variant};
pub use population::{renew, Population};
pub use runner::{SearchResult, SearchRunner};
pub use selection::{elitist_pair, random_pair, HybridSelection, RANDOM_ROUND_PERIOD};
pub use types::{fitness_from_cost, Individual, UNSET};
