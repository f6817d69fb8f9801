//! # Encoding
//!
//! Interval-to-bit-width planning and the chromosome codec. A bounded
//! interval `[x_min, x_max]` with step resolution `delta_x` is mapped onto
//! fixed-length bit strings: the planner picks the smallest chromosome
//! length whose index range covers the requested resolution, and
//! [`SearchDomain`] converts between bit strings and real values.
//!
//! ## Example
//!
//! ```rust
//! use bitga::encoding::{plan_bit_width, SearchDomain};
//!
//! assert_eq!(plan_bit_width(0.0, 31.0, 1.0), 5);
//!
//! let domain = SearchDomain::new(0.0, 31.0, 1.0);
//! let chromosome = domain.encode(31);
//! assert_eq!(domain.decode(&chromosome), 31.0);
//! ```

use crate::chromosome::Chromosome;

/// Derives the chromosome length in bits from the interval and resolution.
///
/// With `divisions = round((x_max - x_min) / delta_x)`, the result is the
/// smallest `n` such that `2^n - 1 >= divisions`, computed through the
/// integer bit length of `divisions` so the width is exact for any division
/// count.
///
/// A degenerate interval with a single representable point needs no bits at
/// all; a non-degenerate interval is always given at least one bit, even
/// when the resolution rounds the division count down to zero.
///
/// This is a pure function. Malformed input (`delta_x <= 0`,
/// `x_max < x_min`) must be rejected by the caller before invocation; the
/// engine does so in its configuration validation.
pub fn plan_bit_width(x_min: f64, x_max: f64, delta_x: f64) -> usize {
    let divisions = ((x_max - x_min) / delta_x).round();
    if divisions < 1.0 {
        return if x_max > x_min { 1 } else { 0 };
    }
    let divisions = divisions as u64;
    let width = (u64::BITS - divisions.leading_zeros()) as usize;
    width.max(1)
}

/// The bounded search interval together with its planned bit width.
///
/// Decoding interprets a chromosome as a big-endian index `d` and maps it
/// linearly onto the interval:
/// `x = x_min + (d / (2^n_bits - 1)) * (x_max - x_min)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchDomain {
    x_min: f64,
    x_max: f64,
    n_bits: usize,
}

impl SearchDomain {
    /// Plans the bit width for the interval and resolution and returns the
    /// resulting domain.
    pub fn new(x_min: f64, x_max: f64, delta_x: f64) -> Self {
        Self {
            x_min,
            x_max,
            n_bits: plan_bit_width(x_min, x_max, delta_x),
        }
    }

    /// Returns the lower interval bound.
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Returns the upper interval bound.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Returns the chromosome length in bits.
    pub fn n_bits(&self) -> usize {
        self.n_bits
    }

    /// Returns the largest representable step index, `2^n_bits - 1`.
    pub fn max_index(&self) -> u64 {
        if self.n_bits == 0 {
            0
        } else {
            u64::MAX >> (64 - self.n_bits as u32)
        }
    }

    /// Decodes a chromosome to its real value in `[x_min, x_max]`.
    ///
    /// A zero-bit domain has a single representable point, so decoding
    /// returns `x_min` directly.
    pub fn decode(&self, chromosome: &Chromosome) -> f64 {
        let max_index = self.max_index();
        if max_index == 0 {
            return self.x_min;
        }
        let index = chromosome.to_index();
        self.x_min + (index as f64 / max_index as f64) * (self.x_max - self.x_min)
    }

    /// Encodes a step index as its `n_bits`-bit big-endian chromosome.
    ///
    /// The generation loop never encodes (chromosomes are born as random
    /// bit strings or through crossover and mutation); this is the inverse
    /// mapping for diagnostics and testing.
    pub fn encode(&self, index: u64) -> Chromosome {
        let bits = (0..self.n_bits)
            .rev()
            .map(|bit| (index >> bit) & 1 == 1)
            .collect();
        Chromosome::new(bits)
    }
}
