//! # Selection
//!
//! Elitist random pruning: each generation is reduced to a survivor subset
//! of half the population (at least one individual), and the best
//! individual of the generation is always among the survivors. The
//! remaining survivor slots are filled by uniform sampling without
//! replacement, so the identity of the other survivors is intentionally
//! random.

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Reduces a population to its survivor subset, always keeping the best.
#[derive(Debug, Clone, Default)]
pub struct ElitistRandomPruning;

impl ElitistRandomPruning {
    /// Creates a new `ElitistRandomPruning` instance.
    pub fn new() -> Self {
        Self
    }

    /// Selects the survivor index set for a generation.
    ///
    /// The survivor set has size `max(1, n / 2)` for a population of `n`
    /// individuals. The index of the largest signed fitness (first
    /// occurrence on ties) is always included; the remaining slots are
    /// drawn uniformly, without replacement, from the other indices. If
    /// fewer non-best indices exist than requested, all of them are taken.
    ///
    /// ## Arguments
    ///
    /// * `signed_fitness` - Signed fitness of each individual, larger is better.
    /// * `rng` - The random number generator used for the uniform fill.
    ///
    /// ## Returns
    ///
    /// The survivor indices, best first.
    ///
    /// ## Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if `signed_fitness` is empty.
    pub fn select_survivors(
        &self,
        signed_fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        if signed_fitness.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut best = 0;
        for (index, &score) in signed_fitness.iter().enumerate().skip(1) {
            if score > signed_fitness[best] {
                best = index;
            }
        }

        let keep = (signed_fitness.len() / 2).max(1);
        let fill = (keep - 1).min(signed_fitness.len() - 1);

        let mut survivors = Vec::with_capacity(1 + fill);
        survivors.push(best);
        // Sample from the non-best indices; position p maps to index p,
        // shifted past the best slot.
        for position in rng.sample_indices(signed_fitness.len() - 1, fill) {
            survivors.push(if position < best { position } else { position + 1 });
        }

        Ok(survivors)
    }
}
