//! # Genetic Operators
//!
//! The recombination and mutation operators applied during breeding:
//! probability-gated three-point crossover and two-level (individual gate,
//! then per-gene) bit-flip mutation.

pub mod crossover;
pub mod mutation;

pub use crossover::ThreePointCrossover;
pub use mutation::TwoLevelMutation;
