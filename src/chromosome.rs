//! # Chromosome
//!
//! A fixed-length bit string encoding one candidate solution. The length is
//! fixed at `n_bits` for an entire run: chromosomes are created randomly at
//! population initialization or produced by crossover and mutation, and are
//! never resized.

use std::fmt;

use crate::rng::RandomNumberGenerator;

/// Fixed-length bit string individual.
///
/// Bit 0 is the most significant position of the encoded index, matching
/// the big-endian interpretation used by the codec.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Creates a chromosome from the given bits.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Creates a random chromosome of `n_bits` bits.
    pub fn random(n_bits: usize, rng: &mut RandomNumberGenerator) -> Self {
        Self {
            bits: (0..n_bits).map(|_| rng.gen_bit()).collect(),
        }
    }

    /// Returns the number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the chromosome has no bits.
    ///
    /// This is the degenerate single-point encoding, not an error state.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bits as a slice.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Flips the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    /// Swaps the bits in `[start, end)` with the same segment of `other`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds for either chromosome.
    pub fn swap_segment(&mut self, other: &mut Self, start: usize, end: usize) {
        self.bits[start..end].swap_with_slice(&mut other.bits[start..end]);
    }

    /// Interprets the bits as a big-endian unsigned integer (most
    /// significant bit first).
    pub fn to_index(&self) -> u64 {
        debug_assert!(self.bits.len() <= 64);
        self.bits
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", u8::from(bit))?;
        }
        Ok(())
    }
}
