use pyo3::{exceptions::PyValueError, prelude::*};

use crate::config::SimulationConfig;
use crate::simulation::Simulation;

fn run_report(config: SimulationConfig, include_unnamed: bool) -> PyResult<String> {
    let simulation =
        Simulation::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let summary = simulation.run();
    summary
        .report(simulation.board(), include_unnamed)
        .to_json()
        .map_err(|e| PyValueError::new_err(format!("{e}")))
}

/// Runs the simulation and returns the occupancy report as JSON.
#[pyfunction]
#[pyo3(signature = (turns_per_run, number_of_runs, seed=None, include_unnamed=false))]
fn simulate(
    turns_per_run: u32,
    number_of_runs: u32,
    seed: Option<u64>,
    include_unnamed: bool,
) -> PyResult<String> {
    let mut config = SimulationConfig::new(turns_per_run, number_of_runs);
    config.seed = seed;
    run_report(config, include_unnamed)
}

#[pyfunction]
#[pyo3(signature = (config, include_unnamed=false))]
fn simulate_config(config: &str, include_unnamed: bool) -> PyResult<String> {
    match SimulationConfig::from_json(config) {
        Ok(config) => run_report(config, include_unnamed),
        Err(e) => Err(PyValueError::new_err(format!(
            "Invalid simulation config provided: {e}"
        ))),
    }
}

/// A Python module implemented in Rust.
#[pymodule]
fn monosim_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(simulate, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_config, m)?)?;
    Ok(())
}
