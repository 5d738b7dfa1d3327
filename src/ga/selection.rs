//! Hybrid elitist/random parent selection.
//!
//! Three rounds out of four breed the two fittest individuals; every fourth
//! round breeds a uniformly random pair to keep diversity in the gene pool.
//! Consecutive elitist rounds never return the same pair twice in a row.

use rand::Rng;

use super::population::Population;

/// Every `RANDOM_ROUND_PERIOD`-th round (when
/// `iteration % RANDOM_ROUND_PERIOD == RANDOM_ROUND_PERIOD - 1`) is random.
pub const RANDOM_ROUND_PERIOD: usize = 4;

/// Parent selector that remembers the previous elitist pair.
///
/// # Examples
///
/// ```ignore
/// let mut selector = HybridSelection::new();
/// let (a, b) = selector.select_parents(&population, iteration, &mut rng);
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HybridSelection {
    last_elitist_pair: Option<(usize, usize)>,
}

impl HybridSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pair returned by the most recent elitist round.
    pub fn last_elitist_pair(&self) -> Option<(usize, usize)> {
        self.last_elitist_pair
    }

    /// Chooses two distinct parent indices for breeding round `iteration`.
    ///
    /// # Panics
    /// Panics if the population has fewer than two members.
    pub fn select_parents<R: Rng>(
        &mut self,
        population: &Population,
        iteration: usize,
        rng: &mut R,
    ) -> (usize, usize) {
        assert!(
            population.len() >= 2,
            "selection needs at least two individuals"
        );

        if iteration % RANDOM_ROUND_PERIOD == RANDOM_ROUND_PERIOD - 1 {
            return random_pair(population.len(), rng);
        }

        let pair = elitist_pair(population, self.last_elitist_pair);
        self.last_elitist_pair = Some(pair);
        pair
    }
}

/// Two distinct uniformly random indices in `0..size`.
///
/// The second index is the first shifted by a random non-zero offset.
pub fn random_pair<R: Rng>(size: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..size);
    let offset = rng.random_range(1..size);
    (a, (a + offset) % size)
}

/// The two highest-fitness individuals, fittest first, skipping the indices
/// of `exclude`.
///
/// Ties go to the individual met first in index order. When the exclusion
/// would leave fewer than two candidates, the whole population is scanned.
pub fn elitist_pair(population: &Population, exclude: Option<(usize, usize)>) -> (usize, usize) {
    let excluded = |i: usize| exclude.is_some_and(|(a, b)| i == a || i == b);
    let excluded_count = (0..population.len()).filter(|&i| excluded(i)).count();

    if population.len() - excluded_count >= 2 {
        top_two(population, excluded)
    } else {
        top_two(population, |_| false)
    }
}

fn top_two<F: Fn(usize) -> bool>(population: &Population, skip: F) -> (usize, usize) {
    let mut first: Option<usize> = None;
    let mut second: Option<usize> = None;

    for (i, ind) in population.iter().enumerate() {
        if skip(i) {
            continue;
        }
        let f = ind.fitness();
        match first {
            Some(b) if f <= population[b].fitness() => match second {
                Some(s) if f <= population[s].fitness() => {}
                _ => second = Some(i),
            },
            _ => {
                second = first;
                first = Some(i);
            }
        }
    }

    match (first, second) {
        (Some(a), Some(b)) => (a, b),
        _ => unreachable!("caller guarantees at least two candidates"),
    }
}
