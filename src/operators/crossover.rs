//! # ThreePointCrossover
//!
//! Recombination with three cut points: the segments between consecutive
//! cut points alternate between the two parents, starting with "no swap"
//! for the leading segment.

use crate::chromosome::Chromosome;
use crate::rng::RandomNumberGenerator;

/// Probability-gated three-point crossover.
#[derive(Debug, Clone)]
pub struct ThreePointCrossover {
    prob_crossover: f64,
}

impl ThreePointCrossover {
    /// Creates the operator with the given crossover probability.
    pub fn new(prob_crossover: f64) -> Self {
        Self { prob_crossover }
    }

    /// Produces two children from a parent pair.
    ///
    /// With probability `prob_crossover`, and only for chromosomes of at
    /// least 4 bits, three distinct cut points are drawn from
    /// `[1, n_bits)`, sorted, and the segments between consecutive cut
    /// points (with an implicit final boundary at `n_bits`) are
    /// alternately exchanged between the children, starting with no swap.
    /// If the probability gate fails or the chromosome is shorter than 4
    /// bits, both children are exact copies of their parents.
    pub fn recombine(
        &self,
        parent_a: &Chromosome,
        parent_b: &Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> (Chromosome, Chromosome) {
        let mut child_a = parent_a.clone();
        let mut child_b = parent_b.clone();

        let n_bits = parent_a.len();
        if rng.gen_probability() < self.prob_crossover && n_bits >= 4 {
            // Three distinct cut points in [1, n_bits)
            let mut cuts = rng.sample_indices(n_bits - 1, 3);
            for cut in &mut cuts {
                *cut += 1;
            }
            cuts.sort_unstable();

            let mut swap = false;
            let mut prev = 0;
            for cut in cuts.into_iter().chain(std::iter::once(n_bits)) {
                if swap {
                    child_a.swap_segment(&mut child_b, prev, cut);
                }
                swap = !swap;
                prev = cut;
            }
        }

        (child_a, child_b)
    }
}
