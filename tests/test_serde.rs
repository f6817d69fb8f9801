#![cfg(feature = "serde")]

use bitga::chromosome::Chromosome;
use bitga::engine::{GeneticEngine, RunConfig, RunResult};
use bitga::rng::RandomNumberGenerator;

#[test]
fn test_chromosome_round_trips_through_json() {
    let chromosome = Chromosome::new(vec![true, false, true, true, false]);
    let json = serde_json::to_string(&chromosome).unwrap();
    let back: Chromosome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, chromosome);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = RunConfig::builder()
        .interval(-43.90, -35.70)
        .delta_x(0.08)
        .pop_size(20)
        .max_generations(100)
        .build()
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let back: RunConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_result_serializes_for_report_writers() {
    let engine = GeneticEngine::new(|x: f64| x * x);
    let config = RunConfig::builder()
        .interval(-5.0, 5.0)
        .delta_x(0.1)
        .pop_size(10)
        .max_generations(10)
        .build()
        .unwrap();
    let mut rng = RandomNumberGenerator::from_seed(61);

    let result = engine.run(&config, &mut rng, None).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: RunResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
