//! # RunResult
//!
//! The output structure of a run. Consumers (report writers, plotters)
//! only read these fields; nothing is ever fed back into the engine.

use crate::chromosome::Chromosome;
use crate::engine::history::RunHistory;

/// The packaged outcome of a genetic algorithm run: the best individual
/// found, the echoed configuration, the final population, and the full
/// per-generation histories.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// The best individual of the final population, by raw fitness.
    pub best_individual: Chromosome,
    /// The decoded value of the best individual.
    pub best_x: f64,
    /// The raw fitness at `best_x`.
    pub best_fitness: f64,
    /// Echoed configuration: lower interval bound.
    pub x_min: f64,
    /// Echoed configuration: upper interval bound.
    pub x_max: f64,
    /// Echoed configuration: step resolution.
    pub delta_x: f64,
    /// The planned chromosome length in bits.
    pub n_bits: usize,
    /// Echoed configuration: population size.
    pub pop_size: usize,
    /// Echoed configuration: number of generations requested.
    pub generations: usize,
    /// Echoed configuration: crossover probability.
    pub prob_crossover: f64,
    /// Echoed configuration: individual-level mutation probability.
    pub prob_mutation_individual: f64,
    /// Echoed configuration: gene-level mutation probability.
    pub prob_mutation_gene: f64,
    /// Echoed configuration: optimization direction.
    pub minimize: bool,
    /// Best raw fitness of the first generation minus that of the final
    /// best (or the reverse when maximizing), so a non-negative value means
    /// the run improved.
    pub improvement: f64,
    /// The final population, in order.
    pub final_population: Vec<Chromosome>,
    /// The raw fitness of each individual in the final population.
    pub final_fitness: Vec<f64>,
    /// The full per-generation record.
    pub history: RunHistory,
}
