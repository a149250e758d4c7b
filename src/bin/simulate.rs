use clap::Parser;
use log::error;
use std::time::Instant;

use monosim_core::config::SimulationConfig;
use monosim_core::simulation::Simulation;

/// Estimates how often each Monopoly square is visited.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Turns played in every run
    #[arg(short, long)]
    turns: Option<u32>,
    /// Number of independent runs
    #[arg(short, long)]
    runs: Option<u32>,
    /// Base seed, run i uses seed + i
    #[arg(short, long)]
    seed: Option<u64>,
    /// Play runs one after the other on the current thread
    #[arg(long)]
    sequential: bool,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Also list squares without a name
    #[arg(long)]
    all_squares: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut config = match SimulationConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };
    if let Some(turns) = args.turns {
        config.turns_per_run = turns;
    }
    if let Some(runs) = args.runs {
        config.number_of_runs = runs;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.sequential {
        config.parallel = false;
    }

    let simulation = match Simulation::new(config) {
        Ok(simulation) => simulation,
        Err(e) => {
            error!("Failed to set up simulation: {e}");
            std::process::exit(2);
        }
    };

    let start = Instant::now();
    let summary = simulation.run();
    let report = summary.report(simulation.board(), args.all_squares);

    if args.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Failed to serialize report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{report}");
        println!(
            "runs: {} completed, {} failed in {:.2?}",
            summary.completed_runs,
            summary.failed_runs,
            start.elapsed()
        );
    }

    if summary.completed_runs == 0 {
        std::process::exit(1);
    }
}
