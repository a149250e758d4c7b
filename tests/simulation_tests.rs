mod common;

use common::{DICE_SEVEN, JAIL};
use monosim_core::config::SimulationConfig;
use monosim_core::model::occupancy::Occupancy;
use monosim_core::sampling::ScriptedSource;
use monosim_core::simulation::Simulation;
use monosim_core::SimulationError;

#[test]
fn test_seeded_runs_are_reproducible() {
    let parallel = Simulation::new(SimulationConfig::new(40, 16).with_seed(42))
        .expect("Failed to build simulation.");
    let sequential = Simulation::new(SimulationConfig::new(40, 16).with_seed(42).sequential())
        .expect("Failed to build simulation.");

    let first = parallel.run();
    let second = sequential.run();

    assert!(parallel.config().parallel);
    assert!(!sequential.config().parallel);
    assert_eq!(first, second, "Run order must not change the aggregate");
    assert_eq!(first.completed_runs, 16);
    assert_eq!(first.failed_runs, 0);
}

#[test]
fn test_aggregate_is_sum_of_runs() {
    let config = SimulationConfig::new(30, 5).with_seed(7).sequential();
    let simulation = Simulation::new(config).expect("Failed to build simulation.");

    let mut expected = Occupancy::new(simulation.board().len());
    for run in 0..5u64 {
        let mut rng = fastrand::Rng::with_seed(7 + run);
        let occupancy = simulation
            .run_single(&mut rng)
            .expect("Failed to play a single run.");
        expected.merge(&occupancy).expect("Failed to merge occupancy.");
    }

    assert_eq!(simulation.run().occupancy, expected);
}

#[test]
fn test_failed_runs_are_isolated() {
    let config = SimulationConfig::new(5, 6).sequential();
    let simulation = Simulation::new(config).expect("Failed to build simulation.");

    // every draw is a seven onto chance at 7, then "advance to go"
    let summary = simulation.run_with(|run| {
        let draws = if run % 2 == 0 { 100 } else { 3 };
        ScriptedSource::new(std::iter::repeat(DICE_SEVEN).take(draws))
    });

    assert_eq!(summary.completed_runs, 3);
    assert_eq!(summary.failed_runs, 3);
    assert_eq!(summary.occupancy.count(7), 15);
    assert_eq!(summary.occupancy.count(0), 15);
    assert_eq!(summary.occupancy.total(), 30);
}

#[test]
fn test_invalid_config_rejected() {
    assert!(matches!(
        Simulation::new(SimulationConfig::new(0, 10)),
        Err(SimulationError::InvalidConfig(_))
    ));
}

#[test]
fn test_jail_is_most_visited() {
    let simulation = Simulation::new(SimulationConfig::new(100, 500).with_seed(2024))
        .expect("Failed to build simulation.");
    let summary = simulation.run();
    let report = summary.report(simulation.board(), true);

    let frequency_sum: f64 = report.squares.iter().map(|square| square.frequency).sum();
    assert!((frequency_sum - 1.0).abs() < 1e-9);

    let most_visited = report
        .squares
        .iter()
        .max_by_key(|square| square.count)
        .expect("Report must list squares");
    assert_eq!(most_visited.index, JAIL);
    assert_eq!(report.square(30).map(|square| square.count), Some(summary.occupancy.count(30)));
}
