//! Fixed-size population of tours.

use std::ops::Index;

use rand::Rng;
use tracing::debug;

use super::types::Individual;
use crate::constructive::TourBuilder;
use crate::error::{Result, TourError};
use crate::tour::{Tour, WeightMatrix};

/// An ordered, fixed-size collection of individuals.
///
/// The size never changes after seeding: [`renew`](Population::renew)
/// replaces members, it never adds or removes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Builds a population of `size` unevaluated individuals.
    ///
    /// The first two members come from `first` and `second`, both started
    /// at `start`; the rest are uniformly random tours. Builder outputs are
    /// validated as permutations of `0..weights.size()`.
    ///
    /// Call [`evaluate`](Population::evaluate) before ranking or selecting.
    pub fn seed<A, B, R>(
        weights: &WeightMatrix,
        first: &A,
        second: &B,
        size: usize,
        start: usize,
        rng: &mut R,
    ) -> Result<Self>
    where
        A: TourBuilder + ?Sized,
        B: TourBuilder + ?Sized,
        R: Rng,
    {
        let n = weights.size();
        if start >= n {
            return Err(TourError::StartNodeOutOfRange { start, nodes: n });
        }

        let mut individuals = Vec::with_capacity(size);
        for nodes in [first.build(weights, start), second.build(weights, start)]
            .into_iter()
            .take(size)
        {
            individuals.push(Individual::new(seed_tour(nodes, n)?));
        }
        while individuals.len() < size {
            individuals.push(Individual::new(Tour::random(n, rng)));
        }

        debug!(size, nodes = n, start, "population seeded");
        Ok(Self { individuals })
    }

    /// Wraps existing individuals.
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Sets cost and fitness on every member.
    pub fn evaluate(&mut self, weights: &WeightMatrix) {
        for ind in &mut self.individuals {
            ind.evaluate(weights);
        }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }

    /// Index of the lowest-cost member. Ties go to the lowest index.
    ///
    /// Returns `None` for an empty population.
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, ind) in self.individuals.iter().enumerate() {
            match best {
                Some(b) if ind.cost() >= self.individuals[b].cost() => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// The lowest-cost member.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn best(&self) -> &Individual {
        let idx = self.best_index().expect("population must not be empty");
        &self.individuals[idx]
    }

    /// Member indices ordered by ascending cost, ties in index order.
    ///
    /// Members must be evaluated; an unevaluated member carries the
    /// [`UNSET`](super::types::UNSET) cost and would rank first.
    pub fn ranking(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.individuals.len()).collect();
        order.sort_by(|&a, &b| {
            self.individuals[a]
                .cost()
                .total_cmp(&self.individuals[b].cost())
        });
        order
    }

    /// Replaces the worst-ranked members with `offspring`, in place.
    ///
    /// Offspring `i` takes the slot of the `i`-th worst member. At most
    /// `len()` offspring are used. Returns the number of replacements.
    ///
    /// Both the members and the offspring must be evaluated.
    pub fn renew(&mut self, offspring: Vec<Individual>) -> usize {
        debug_assert!(
            self.individuals.iter().chain(&offspring).all(Individual::is_evaluated),
            "renew requires evaluated individuals"
        );
        let ranking = self.ranking();
        let size = self.individuals.len();
        let mut replaced = 0;
        for (child, &slot) in offspring.into_iter().zip(ranking.iter().rev()) {
            self.individuals[slot] = child;
            replaced += 1;
        }
        debug_assert_eq!(self.individuals.len(), size);
        replaced
    }
}

impl Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Individual {
        &self.individuals[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}

/// Steady-state elitist renewal.
///
/// Returns a copy of `population` in which the `min(|offspring|, |population|)`
/// highest-cost members are replaced by `offspring`, the worst slot
/// receiving the first offspring. The current best member is never
/// displaced unless every other slot is already taken by offspring.
pub fn renew(population: &Population, offspring: Vec<Individual>) -> Population {
    let mut next = population.clone();
    next.renew(offspring);
    next
}

fn seed_tour(nodes: Vec<usize>, n: usize) -> Result<Tour> {
    if nodes.len() != n {
        return Err(TourError::InvalidPermutation {
            len: n,
            reason: format!("seed builder returned {} nodes", nodes.len()),
        });
    }
    Tour::new(nodes)
}
