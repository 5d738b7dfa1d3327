//! Tour value type.
//!
//! A [`Tour`] is a permutation of `0..n`. Every constructor validates or
//! guarantees the bijection, and every mutator only relocates existing
//! elements, so a `Tour` can never hold a duplicate or miss a node.

use std::fmt;
use std::ops::Deref;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, TourError};

/// A cyclic visiting order over nodes `0..n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// A uniformly random tour, produced by shuffling `0..n`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut nodes: Vec<usize> = (0..n).collect();
        nodes.shuffle(rng);
        Self(nodes)
    }

    /// Validates `nodes` as a permutation of `0..nodes.len()`.
    pub fn new(nodes: Vec<usize>) -> Result<Self> {
        check_permutation(&nodes)?;
        Ok(Self(nodes))
    }

    /// Wraps a vector the caller has built as a permutation by construction.
    pub(crate) fn from_vec_unchecked(nodes: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&nodes), "not a permutation: {nodes:?}");
        Self(nodes)
    }

    /// Read-only view of the visiting order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consumes the tour and returns the visiting order.
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Exchanges the nodes at positions `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Reverses the inclusive range between `i` and `j` (order-normalized).
    pub fn reverse(&mut self, i: usize, j: usize) {
        let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
        self.0[lo..=hi].reverse();
    }

    /// Removes the node at position `from` and re-inserts it at position `to`,
    /// shifting the nodes in between by one.
    pub fn shift(&mut self, from: usize, to: usize) {
        if from < to {
            self.0[from..=to].rotate_left(1);
        } else if from > to {
            self.0[to..=from].rotate_right(1);
        }
    }

    /// Applies `f` to the underlying slice.
    ///
    /// The closure may only reorder elements (swaps, rotations, reversals);
    /// this is checked in debug builds.
    pub(crate) fn reorder_with<F: FnOnce(&mut [usize])>(&mut self, f: F) {
        f(&mut self.0);
        debug_assert!(is_permutation(&self.0));
    }
}

impl Deref for Tour {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = TourError;

    fn try_from(nodes: Vec<usize>) -> Result<Self> {
        Self::new(nodes)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.0
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for node in &self.0 {
            if !first {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
            first = false;
        }
        Ok(())
    }
}

/// Returns `true` if `nodes` contains every index in `0..nodes.len()` exactly once.
pub fn is_permutation(nodes: &[usize]) -> bool {
    check_permutation(nodes).is_ok()
}

fn check_permutation(nodes: &[usize]) -> Result<()> {
    let n = nodes.len();
    let mut seen = vec![false; n];
    for &node in nodes {
        if node >= n {
            return Err(TourError::InvalidPermutation {
                len: n,
                reason: format!("node {node} out of range"),
            });
        }
        if seen[node] {
            return Err(TourError::InvalidPermutation {
                len: n,
                reason: format!("node {node} appears twice"),
            });
        }
        seen[node] = true;
    }
    Ok(())
}
