//! Permutation-preserving genetic operators for tours.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX): Davis (1985), preserves relative order
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two random positions, O(1)
//! - [`inversion_mutation`]: reverse a random segment (2-opt), O(n)
//! - [`scramble_mutation`]: random pairwise swaps inside a segment, O(n)
//!
//! Every operator only relocates existing nodes, so its output is always a
//! permutation of `0..n`.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Syswerda (1991), "Schedule Optimization Using Genetic Algorithms"

use rand::Rng;

use crate::tour::Tour;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) producing one child.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Draw two cut points in `0..n` and order them so `start <= end`
/// 2. Copy `template[start..=end]` into the child at the same positions
/// 3. Walk `donor` circularly from `end + 1`, writing every node not yet
///    placed into the next free child position (also circular from `end + 1`)
///
/// Call twice with the parents swapped to breed two children.
///
/// Tours with fewer than two nodes have nothing to recombine: a clone of
/// `template` is returned and no random numbers are drawn.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn order_crossover<R: Rng>(template: &Tour, donor: &Tour, rng: &mut R) -> Tour {
    let n = template.len();
    assert_eq!(n, donor.len(), "parents must have equal length");
    if n < 2 {
        return template.clone();
    }
    let (start, end) = random_segment(n, rng);
    order_crossover_with_cuts(template, donor, start, end)
}

/// Order Crossover with fixed cut points `start <= end < n`.
///
/// # Panics
/// Panics if the parents have different lengths or the cuts are out of order
/// or out of range.
///
/// # Examples
///
/// ```
/// use u_tour::ga::operators::order_crossover_with_cuts;
/// use u_tour::tour::Tour;
///
/// let a = Tour::new(vec![0, 1, 2, 3, 4, 5, 6, 7]).unwrap();
/// let b = Tour::new(vec![7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
/// let child = order_crossover_with_cuts(&a, &b, 2, 4);
/// assert_eq!(child.as_slice(), &[6, 5, 2, 3, 4, 1, 0, 7]);
/// ```
pub fn order_crossover_with_cuts(template: &Tour, donor: &Tour, start: usize, end: usize) -> Tour {
    let n = template.len();
    assert_eq!(n, donor.len(), "parents must have equal length");
    assert!(start <= end && end < n, "invalid cut points {start}..={end} for length {n}");

    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        placed[template[i]] = true;
    }

    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let node = donor[(end + 1 + offset) % n];
        if !placed[node] {
            child[pos] = node;
            placed[node] = true;
            pos = (pos + 1) % n;
        }
    }

    Tour::from_vec_unchecked(child)
}

// ============================================================================
// Mutation
// ============================================================================

/// The three perturbation moves, drawn uniformly by [`apply_mutation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    Swap,
    Inversion,
    Scramble,
}

impl Mutation {
    pub const ALL: [Mutation; 3] = [Mutation::Swap, Mutation::Inversion, Mutation::Scramble];

    /// Applies this move to `tour`.
    pub fn apply<R: Rng>(self, tour: &mut Tour, rng: &mut R) {
        match self {
            Mutation::Swap => swap_mutation(tour, rng),
            Mutation::Inversion => inversion_mutation(tour, rng),
            Mutation::Scramble => scramble_mutation(tour, rng),
        }
    }
}

/// With probability `mutation_rate`, applies one uniformly chosen
/// [`Mutation`] to `tour`. Returns the move applied, if any.
pub fn apply_mutation<R: Rng>(
    tour: &mut Tour,
    mutation_rate: f64,
    rng: &mut R,
) -> Option<Mutation> {
    if rng.random::<f64>() >= mutation_rate {
        return None;
    }
    let mutation = Mutation::ALL[rng.random_range(0..Mutation::ALL.len())];
    mutation.apply(tour, rng);
    Some(mutation)
}

/// Swap mutation: exchange two uniformly random positions.
///
/// The positions may coincide, in which case the tour is unchanged.
/// Tours with fewer than two nodes are left as they are.
pub fn swap_mutation<R: Rng>(tour: &mut Tour, rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    tour.swap(i, j);
}

/// Inversion mutation: reverse the segment between two random positions.
///
/// Tours with fewer than two nodes are left as they are.
pub fn inversion_mutation<R: Rng>(tour: &mut Tour, rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }
    let (start, end) = random_segment(n, rng);
    tour.reverse(start, end);
}

/// Scramble mutation: inside a random segment `[start, end]`, perform
/// `end - start` swaps of positions drawn uniformly from the segment.
///
/// Not every node of the segment is guaranteed to move. Tours with fewer
/// than two nodes are left as they are.
pub fn scramble_mutation<R: Rng>(tour: &mut Tour, rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }
    let (start, end) = random_segment(n, rng);
    tour.reorder_with(|nodes| {
        for _ in 0..(end - start) {
            let a = rng.random_range(start..=end);
            let b = rng.random_range(start..=end);
            nodes.swap(a, b);
        }
    });
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
