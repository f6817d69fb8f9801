//! # GeneticEngine
//!
//! The generation loop. A run moves through evaluation, history recording,
//! elitist pruning and breeding for a fixed number of generations, then
//! finalizes by re-evaluating the last population and packaging the best
//! individual with the full history.
//!
//! The engine owns no ambient state: the objective facade is injected at
//! construction, and the random stream and optional progress sink are
//! passed into [`run`](GeneticEngine::run) by the caller. Execution is
//! single-threaded and synchronous; the progress callback is the only
//! suspension point, invoked once per generation boundary.

use tracing::debug;

use crate::chromosome::Chromosome;
use crate::encoding::SearchDomain;
use crate::engine::config::RunConfig;
use crate::engine::history::RunHistory;
use crate::engine::progress::{ProgressSignal, ProgressSink};
use crate::engine::result::RunResult;
use crate::error::{GeneticError, OptionExt, Result};
use crate::objective::{FitnessPair, Objective};
use crate::operators::{ThreePointCrossover, TwoLevelMutation};
use crate::rng::RandomNumberGenerator;
use crate::selection::ElitistRandomPruning;

/// Drives a genetic algorithm run against an injected objective facade.
#[derive(Debug, Clone)]
pub struct GeneticEngine<O: Objective> {
    objective: O,
    pruning: ElitistRandomPruning,
}

impl<O: Objective> GeneticEngine<O> {
    /// Creates a new `GeneticEngine` for the given objective.
    pub fn new(objective: O) -> Self {
        Self {
            objective,
            pruning: ElitistRandomPruning::new(),
        }
    }

    /// Runs the genetic algorithm to completion.
    ///
    /// ## Arguments
    ///
    /// * `config` - The run parameters, validated before the loop starts.
    /// * `rng` - The single pseudo-random stream of the run. Two runs with
    ///   the same seed and configuration produce identical results.
    /// * `progress` - Optional sink notified once per generation boundary;
    ///   returning [`ProgressSignal::Cancel`] finalizes the run with the
    ///   generations completed so far.
    ///
    /// ## Returns
    ///
    /// The [`RunResult`] with the best individual of the final population,
    /// the echoed configuration, and the per-generation histories.
    ///
    /// ## Errors
    ///
    /// Returns `GeneticError::Configuration` if the configuration is
    /// invalid. Evaluation anomalies (non-finite objective values) are
    /// absorbed by the objective facade and never abort the run.
    pub fn run(
        &self,
        config: &RunConfig,
        rng: &mut RandomNumberGenerator,
        mut progress: Option<&mut dyn ProgressSink>,
    ) -> Result<RunResult> {
        config.validate()?;

        let domain = SearchDomain::new(
            config.get_x_min(),
            config.get_x_max(),
            config.get_delta_x(),
        );
        let crossover = ThreePointCrossover::new(config.get_prob_crossover());
        let mutation = TwoLevelMutation::new(
            config.get_prob_mutation_individual(),
            config.get_prob_mutation_gene(),
        );

        let pop_size = config.get_pop_size();
        let max_generations = config.get_max_generations();
        let minimize = config.get_minimize();

        debug!(
            n_bits = domain.n_bits(),
            pop_size, max_generations, minimize, "starting run"
        );

        let mut population: Vec<Chromosome> = (0..pop_size)
            .map(|_| Chromosome::random(domain.n_bits(), rng))
            .collect();
        let mut history = RunHistory::new();

        for generation in 0..max_generations {
            let evaluation = self.evaluate(&domain, &population, minimize);
            let raw_fitness: Vec<f64> = evaluation.iter().map(|pair| pair.raw).collect();
            let signed_fitness: Vec<f64> = evaluation.iter().map(|pair| pair.signed).collect();

            history.record(&population, &raw_fitness, minimize);
            debug!(
                generation,
                best_raw = history.best_raw_fitness[generation],
                "generation evaluated"
            );

            if let Some(sink) = progress.as_mut() {
                if sink.on_generation(generation, max_generations) == ProgressSignal::Cancel {
                    debug!(generation, "run cancelled by progress sink");
                    break;
                }
            }

            let survivor_indices = self.pruning.select_survivors(&signed_fitness, rng)?;
            let survivors: Vec<&Chromosome> =
                survivor_indices.iter().map(|&i| &population[i]).collect();

            let mut next_population = Vec::with_capacity(pop_size);
            while next_population.len() < pop_size {
                let parent_a = survivors[next_population.len() % survivors.len()];
                let parent_b = survivors[rng.gen_index(survivors.len())];

                let (mut child_a, mut child_b) = crossover.recombine(parent_a, parent_b, rng);
                mutation.mutate(&mut child_a, rng);
                mutation.mutate(&mut child_b, rng);

                next_population.push(child_a);
                if next_population.len() < pop_size {
                    next_population.push(child_b);
                }
            }
            population = next_population;
        }

        self.finalize(config, &domain, population, history)
    }

    /// Decodes and scores every individual through the objective facade.
    fn evaluate(
        &self,
        domain: &SearchDomain,
        population: &[Chromosome],
        minimize: bool,
    ) -> Vec<FitnessPair> {
        population
            .iter()
            .map(|chromosome| {
                let x = domain.decode(chromosome);
                FitnessPair {
                    signed: self.objective.signed_fitness(x, minimize),
                    raw: self.objective.guarded_raw_value(x, minimize),
                }
            })
            .collect()
    }

    /// Re-evaluates the final population and assembles the result.
    fn finalize(
        &self,
        config: &RunConfig,
        domain: &SearchDomain,
        population: Vec<Chromosome>,
        history: RunHistory,
    ) -> Result<RunResult> {
        let minimize = config.get_minimize();
        let evaluation = self.evaluate(domain, &population, minimize);
        let final_fitness: Vec<f64> = evaluation.iter().map(|pair| pair.raw).collect();

        let best = best_index(&evaluation).ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let best_individual = population[best].clone();
        let best_x = domain.decode(&best_individual);
        let best_fitness = final_fitness[best];

        let improvement = match history.first_best() {
            Some(first) if minimize => first - best_fitness,
            Some(first) => best_fitness - first,
            None => 0.0,
        };

        debug!(best_x, best_fitness, improvement, "run finished");

        Ok(RunResult {
            best_individual,
            best_x,
            best_fitness,
            x_min: config.get_x_min(),
            x_max: config.get_x_max(),
            delta_x: config.get_delta_x(),
            n_bits: domain.n_bits(),
            pop_size: config.get_pop_size(),
            generations: config.get_max_generations(),
            prob_crossover: config.get_prob_crossover(),
            prob_mutation_individual: config.get_prob_mutation_individual(),
            prob_mutation_gene: config.get_prob_mutation_gene(),
            minimize,
            improvement,
            final_population: population,
            final_fitness,
            history,
        })
    }
}

/// Index of the largest signed fitness, first occurrence on ties.
fn best_index(evaluation: &[FitnessPair]) -> Option<usize> {
    if evaluation.is_empty() {
        return None;
    }
    let mut best = 0;
    for (index, pair) in evaluation.iter().enumerate().skip(1) {
        if pair.signed > evaluation[best].signed {
            best = index;
        }
    }
    Some(best)
}
