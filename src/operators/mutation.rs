//! # TwoLevelMutation
//!
//! Two-level probabilistic bit-flip mutation. An individual-level gate
//! (PMI) decides whether a child mutates at all; within a gated-in child,
//! each gene flips independently with the per-gene probability (PMG). This
//! limits how many individuals experience any mutation while controlling
//! intensity within those that do.

use crate::chromosome::Chromosome;
use crate::rng::RandomNumberGenerator;

/// Two-level (individual gate, then per-gene) bit-flip mutation.
#[derive(Debug, Clone)]
pub struct TwoLevelMutation {
    prob_individual: f64,
    prob_gene: f64,
}

impl TwoLevelMutation {
    /// Creates the operator with the individual-level and gene-level
    /// mutation probabilities.
    pub fn new(prob_individual: f64, prob_gene: f64) -> Self {
        Self {
            prob_individual,
            prob_gene,
        }
    }

    /// Mutates a child in place.
    ///
    /// One uniform draw gates the individual: only if it falls below the
    /// individual-level probability is the chromosome considered at all.
    /// Each bit of a gated-in chromosome then flips independently with the
    /// gene-level probability. No gate, no mutation.
    pub fn mutate(&self, chromosome: &mut Chromosome, rng: &mut RandomNumberGenerator) {
        if rng.gen_probability() < self.prob_individual {
            for index in 0..chromosome.len() {
                if rng.gen_probability() < self.prob_gene {
                    chromosome.flip(index);
                }
            }
        }
    }
}
