//! # RunConfig
//!
//! The `RunConfig` struct carries every parameter of a run: the search
//! interval and resolution, the population and generation counts, the
//! operator probabilities and the optimization direction. It is validated
//! once before the generation loop starts and is immutable thereafter.
//!
//! ## Example
//!
//! ```rust
//! use bitga::engine::RunConfig;
//!
//! let config = RunConfig::builder()
//!     .interval(-43.90, -35.70)
//!     .delta_x(0.08)
//!     .pop_size(30)
//!     .max_generations(50)
//!     .prob_crossover(0.9)
//!     .prob_mutation_individual(0.25)
//!     .prob_mutation_gene(0.25)
//!     .minimize(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.get_pop_size(), 30);
//! ```

use crate::error::{GeneticError, Result};

/// Configuration for a genetic algorithm run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    x_min: f64,
    x_max: f64,
    delta_x: f64,
    pop_size: usize,
    max_generations: usize,
    prob_crossover: f64,
    prob_mutation_individual: f64,
    prob_mutation_gene: f64,
    minimize: bool,
}

impl RunConfig {
    /// Creates a new `RunConfig` with the specified parameters.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x_min: f64,
        x_max: f64,
        delta_x: f64,
        pop_size: usize,
        max_generations: usize,
        prob_crossover: f64,
        prob_mutation_individual: f64,
        prob_mutation_gene: f64,
        minimize: bool,
    ) -> Self {
        Self {
            x_min,
            x_max,
            delta_x,
            pop_size,
            max_generations,
            prob_crossover,
            prob_mutation_individual,
            prob_mutation_gene,
            minimize,
        }
    }

    /// Returns a builder for creating a `RunConfig` instance.
    ///
    /// The interval and resolution have no meaningful defaults and must be
    /// set explicitly; the remaining parameters default to the values of a
    /// typical run.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Returns the lower interval bound.
    pub fn get_x_min(&self) -> f64 {
        self.x_min
    }

    /// Returns the upper interval bound.
    pub fn get_x_max(&self) -> f64 {
        self.x_max
    }

    /// Returns the step resolution.
    pub fn get_delta_x(&self) -> f64 {
        self.delta_x
    }

    /// Returns the population size.
    pub fn get_pop_size(&self) -> usize {
        self.pop_size
    }

    /// Returns the number of generations to run.
    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    /// Returns the crossover probability.
    pub fn get_prob_crossover(&self) -> f64 {
        self.prob_crossover
    }

    /// Returns the individual-level mutation probability (PMI).
    pub fn get_prob_mutation_individual(&self) -> f64 {
        self.prob_mutation_individual
    }

    /// Returns the gene-level mutation probability (PMG).
    pub fn get_prob_mutation_gene(&self) -> f64 {
        self.prob_mutation_gene
    }

    /// Returns `true` when minimizing, `false` when maximizing.
    pub fn get_minimize(&self) -> bool {
        self.minimize
    }

    /// Validates the configuration.
    ///
    /// ## Errors
    ///
    /// Returns `GeneticError::Configuration` if:
    /// - `x_min >= x_max`
    /// - `delta_x <= 0` (a NaN resolution fails the same check)
    /// - `pop_size < 1`
    /// - `max_generations < 1`
    pub fn validate(&self) -> Result<()> {
        if !(self.x_max > self.x_min) {
            return Err(GeneticError::Configuration(format!(
                "x_min ({}) must be strictly less than x_max ({})",
                self.x_min, self.x_max
            )));
        }
        if !(self.delta_x > 0.0) {
            return Err(GeneticError::Configuration(format!(
                "delta_x must be positive, got {}",
                self.delta_x
            )));
        }
        if self.pop_size < 1 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        if self.max_generations < 1 {
            return Err(GeneticError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for `RunConfig`.
///
/// Provides a fluent interface for constructing `RunConfig` instances.
#[derive(Debug, Clone, Default)]
pub struct RunConfigBuilder {
    x_min: Option<f64>,
    x_max: Option<f64>,
    delta_x: Option<f64>,
    pop_size: Option<usize>,
    max_generations: Option<usize>,
    prob_crossover: Option<f64>,
    prob_mutation_individual: Option<f64>,
    prob_mutation_gene: Option<f64>,
    minimize: Option<bool>,
}

impl RunConfigBuilder {
    /// Sets the search interval bounds.
    pub fn interval(mut self, x_min: f64, x_max: f64) -> Self {
        self.x_min = Some(x_min);
        self.x_max = Some(x_max);
        self
    }

    /// Sets the step resolution.
    pub fn delta_x(mut self, value: f64) -> Self {
        self.delta_x = Some(value);
        self
    }

    /// Sets the population size.
    pub fn pop_size(mut self, value: usize) -> Self {
        self.pop_size = Some(value);
        self
    }

    /// Sets the number of generations.
    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    /// Sets the crossover probability.
    pub fn prob_crossover(mut self, value: f64) -> Self {
        self.prob_crossover = Some(value);
        self
    }

    /// Sets the individual-level mutation probability (PMI).
    pub fn prob_mutation_individual(mut self, value: f64) -> Self {
        self.prob_mutation_individual = Some(value);
        self
    }

    /// Sets the gene-level mutation probability (PMG).
    pub fn prob_mutation_gene(mut self, value: f64) -> Self {
        self.prob_mutation_gene = Some(value);
        self
    }

    /// Sets the optimization direction.
    pub fn minimize(mut self, value: bool) -> Self {
        self.minimize = Some(value);
        self
    }

    /// Builds and validates the `RunConfig` instance.
    ///
    /// ## Errors
    ///
    /// Returns `GeneticError::Configuration` if the interval or resolution
    /// was not specified, or if the resulting configuration fails
    /// [`RunConfig::validate`].
    pub fn build(self) -> Result<RunConfig> {
        let x_min = self
            .x_min
            .ok_or_else(|| GeneticError::Configuration("Interval not specified".to_string()))?;
        let x_max = self
            .x_max
            .ok_or_else(|| GeneticError::Configuration("Interval not specified".to_string()))?;
        let delta_x = self
            .delta_x
            .ok_or_else(|| GeneticError::Configuration("Resolution not specified".to_string()))?;

        let config = RunConfig {
            x_min,
            x_max,
            delta_x,
            pop_size: self.pop_size.unwrap_or(20),
            max_generations: self.max_generations.unwrap_or(100),
            prob_crossover: self.prob_crossover.unwrap_or(0.90),
            prob_mutation_individual: self.prob_mutation_individual.unwrap_or(0.25),
            prob_mutation_gene: self.prob_mutation_gene.unwrap_or(0.25),
            minimize: self.minimize.unwrap_or(true),
        };
        config.validate()?;
        Ok(config)
    }
}
