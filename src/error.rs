//! Crate-wide error type.
//!
//! Every failure the engine can report is structural: a malformed input
//! or an invalid configuration detected before the search loop starts.

/// Errors reported by tour construction, configuration and search entry points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TourError {
    #[error("weight matrix is not square: expected {expected} entries, got {actual}")]
    NotSquare { expected: usize, actual: usize },

    #[error("weight matrix entry ({from}, {to}) is NaN")]
    NanWeight { from: usize, to: usize },

    #[error("weight matrix entry ({from}, {to}) is negative: {weight}")]
    NegativeWeight { from: usize, to: usize, weight: f64 },

    #[error("at least 2 nodes are required, got {0}")]
    TooFewNodes(usize),

    #[error("not a permutation of 0..{len}: {reason}")]
    InvalidPermutation { len: usize, reason: String },

    #[error("start node {start} is out of range for {nodes} nodes")]
    StartNodeOutOfRange { start: usize, nodes: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Shorthand result type.
pub type Result<T> = std::result::Result<T, TourError>;
