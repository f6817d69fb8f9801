use bitga::engine::{GeneticEngine, ProgressSignal, ProgressSink, RunConfig};
use bitga::error::GeneticError;
use bitga::objective::Objective;
use bitga::rng::RandomNumberGenerator;

struct Parabola;

impl Objective for Parabola {
    fn raw_value(&self, x: f64) -> f64 {
        x * x
    }
}

fn quadratic_config() -> RunConfig {
    RunConfig::builder()
        .interval(-5.0, 5.0)
        .delta_x(0.01)
        .pop_size(30)
        .max_generations(60)
        .prob_crossover(0.9)
        .prob_mutation_individual(0.25)
        .prob_mutation_gene(0.1)
        .minimize(true)
        .build()
        .unwrap()
}

#[test]
fn test_minimizing_run_finds_the_valley() {
    let engine = GeneticEngine::new(Parabola);
    let config = quadratic_config();
    let mut rng = RandomNumberGenerator::from_seed(42);

    let result = engine.run(&config, &mut rng, None).unwrap();

    assert!(
        result.best_fitness < 1.0,
        "x^2 minimum not approached: best_fitness = {}",
        result.best_fitness
    );
    assert!(result.best_x.abs() < 1.0);
    assert_eq!(result.best_fitness, result.best_x * result.best_x);
}

#[test]
fn test_population_and_chromosome_invariants_hold_every_generation() {
    let engine = GeneticEngine::new(Parabola);
    let config = quadratic_config();
    let mut rng = RandomNumberGenerator::from_seed(43);

    let result = engine.run(&config, &mut rng, None).unwrap();

    assert_eq!(result.history.generations.len(), 60);
    assert_eq!(result.history.best_raw_fitness.len(), 60);
    for snapshot in &result.history.generations {
        assert_eq!(snapshot.population.len(), 30);
        assert_eq!(snapshot.raw_fitness.len(), 30);
        for chromosome in &snapshot.population {
            assert_eq!(chromosome.len(), result.n_bits);
        }
    }
    assert_eq!(result.final_population.len(), 30);
    assert_eq!(result.final_fitness.len(), 30);
    for chromosome in &result.final_population {
        assert_eq!(chromosome.len(), result.n_bits);
    }
}

#[test]
fn test_result_echoes_configuration() {
    let engine = GeneticEngine::new(Parabola);
    let config = quadratic_config();
    let mut rng = RandomNumberGenerator::from_seed(44);

    let result = engine.run(&config, &mut rng, None).unwrap();

    assert_eq!(result.x_min, -5.0);
    assert_eq!(result.x_max, 5.0);
    assert_eq!(result.delta_x, 0.01);
    assert_eq!(result.pop_size, 30);
    assert_eq!(result.generations, 60);
    assert_eq!(result.prob_crossover, 0.9);
    assert_eq!(result.prob_mutation_individual, 0.25);
    assert_eq!(result.prob_mutation_gene, 0.1);
    assert!(result.minimize);
    // 1000 divisions over [-5, 5] need 10 bits
    assert_eq!(result.n_bits, 10);
}

#[test]
fn test_improvement_matches_direction() {
    let engine = GeneticEngine::new(Parabola);
    let config = quadratic_config();
    let mut rng = RandomNumberGenerator::from_seed(45);

    let result = engine.run(&config, &mut rng, None).unwrap();

    let first = result.history.best_raw_fitness[0];
    assert_eq!(result.improvement, first - result.best_fitness);
    if result.best_fitness <= first {
        assert!(result.improvement >= 0.0);
    }
}

#[test]
fn test_maximizing_run() {
    // Peak at x = 2
    let engine = GeneticEngine::new(|x: f64| -(x - 2.0) * (x - 2.0));
    let config = RunConfig::builder()
        .interval(-5.0, 5.0)
        .delta_x(0.01)
        .pop_size(30)
        .max_generations(60)
        .minimize(false)
        .build()
        .unwrap();
    let mut rng = RandomNumberGenerator::from_seed(46);

    let result = engine.run(&config, &mut rng, None).unwrap();

    assert!((result.best_x - 2.0).abs() < 1.0);
    let first = result.history.best_raw_fitness[0];
    assert_eq!(result.improvement, result.best_fitness - first);
}

#[test]
fn test_same_seed_reproduces_the_run_exactly() {
    let engine = GeneticEngine::new(Parabola);
    let config = quadratic_config();

    let mut rng1 = RandomNumberGenerator::from_seed(47);
    let mut rng2 = RandomNumberGenerator::from_seed(47);
    let result1 = engine.run(&config, &mut rng1, None).unwrap();
    let result2 = engine.run(&config, &mut rng2, None).unwrap();

    assert_eq!(result1, result2);
}

#[test]
fn test_progress_sink_sees_every_generation() {
    let engine = GeneticEngine::new(Parabola);
    let config = quadratic_config();
    let mut rng = RandomNumberGenerator::from_seed(48);

    let mut notified = Vec::new();
    let mut sink = |generation: usize, total: usize| {
        notified.push((generation, total));
        ProgressSignal::Continue
    };
    engine
        .run(&config, &mut rng, Some(&mut sink as &mut dyn ProgressSink))
        .unwrap();

    assert_eq!(notified.len(), 60);
    assert_eq!(notified[0], (0, 60));
    assert_eq!(notified[59], (59, 60));
}

#[test]
fn test_cancellation_jumps_to_finalization() {
    let engine = GeneticEngine::new(Parabola);
    let config = quadratic_config();
    let mut rng = RandomNumberGenerator::from_seed(49);

    let mut sink = |generation: usize, _total: usize| {
        if generation >= 3 {
            ProgressSignal::Cancel
        } else {
            ProgressSignal::Continue
        }
    };
    let result = engine
        .run(&config, &mut rng, Some(&mut sink as &mut dyn ProgressSink))
        .unwrap();

    // Generations 0..=3 were evaluated and recorded; breeding stopped at 3
    assert_eq!(result.history.generations.len(), 4);
    assert_eq!(result.history.best_raw_fitness.len(), 4);
    assert_eq!(result.final_population.len(), 30);
    // The final population is the one recorded at the cancelled generation
    assert_eq!(
        result.final_population,
        result.history.generations[3].population
    );
}

#[test]
fn test_non_finite_objective_values_never_abort_the_run() {
    // NaN for every negative x
    let engine = GeneticEngine::new(|x: f64| x.sqrt());
    let config = RunConfig::builder()
        .interval(-5.0, 5.0)
        .delta_x(0.01)
        .pop_size(40)
        .max_generations(40)
        .minimize(true)
        .build()
        .unwrap();
    let mut rng = RandomNumberGenerator::from_seed(50);

    let result = engine.run(&config, &mut rng, None).unwrap();

    // The anomalous region is mapped to the worst value for the
    // direction, so nothing in the histories is NaN and the run settles
    // in the finite half of the interval
    assert!(result
        .history
        .best_raw_fitness
        .iter()
        .all(|value| !value.is_nan()));
    assert!(result.best_x >= 0.0);
    assert!(result.best_fitness.is_finite());
}

#[test]
fn test_coarse_resolution_still_runs() {
    // The division count rounds to zero; the planner still produces a
    // one-bit chromosome covering both interval endpoints
    let engine = GeneticEngine::new(Parabola);
    let config = RunConfig::builder()
        .interval(0.0, 0.1)
        .delta_x(1.0)
        .pop_size(4)
        .max_generations(5)
        .minimize(true)
        .build()
        .unwrap();
    let mut rng = RandomNumberGenerator::from_seed(51);

    let result = engine.run(&config, &mut rng, None).unwrap();

    assert_eq!(result.n_bits, 1);
    assert!(result.best_x == 0.0 || result.best_x == 0.1);
}

#[test]
fn test_invalid_configurations_are_rejected_before_the_loop() {
    let engine = GeneticEngine::new(Parabola);
    let mut rng = RandomNumberGenerator::from_seed(52);

    let inverted = RunConfig::new(5.0, -5.0, 0.01, 30, 60, 0.9, 0.25, 0.1, true);
    match engine.run(&inverted, &mut rng, None) {
        Err(GeneticError::Configuration(msg)) => {
            assert!(msg.contains("x_min"));
        }
        _ => panic!("Expected Configuration error"),
    }

    let flat = RunConfig::new(-5.0, 5.0, 0.0, 30, 60, 0.9, 0.25, 0.1, true);
    match engine.run(&flat, &mut rng, None) {
        Err(GeneticError::Configuration(msg)) => {
            assert!(msg.contains("delta_x"));
        }
        _ => panic!("Expected Configuration error"),
    }

    let nobody = RunConfig::new(-5.0, 5.0, 0.01, 0, 60, 0.9, 0.25, 0.1, true);
    match engine.run(&nobody, &mut rng, None) {
        Err(GeneticError::Configuration(msg)) => {
            assert!(msg.contains("Population size"));
        }
        _ => panic!("Expected Configuration error"),
    }

    let instant = RunConfig::new(-5.0, 5.0, 0.01, 30, 0, 0.9, 0.25, 0.1, true);
    match engine.run(&instant, &mut rng, None) {
        Err(GeneticError::Configuration(msg)) => {
            assert!(msg.contains("generations"));
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_builder_requires_the_interval() {
    let result = RunConfig::builder().delta_x(0.01).build();
    assert!(matches!(result, Err(GeneticError::Configuration(_))));
}
