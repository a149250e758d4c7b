pub mod report;

pub use report::{OccupancyReport, SquareReport};

use log::{info, warn};
use rayon::prelude::*;

use crate::board::Board;
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::game::Game;
use crate::model::occupancy::Occupancy;
use crate::sampling::{DiceDistribution, RandomSource};

/// Aggregate of a batch of independent games.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SimulationSummary {
    pub occupancy: Occupancy,
    pub completed_runs: u32,
    pub failed_runs: u32,
}

impl SimulationSummary {
    pub fn empty(squares: usize) -> Self {
        SimulationSummary {
            occupancy: Occupancy::new(squares),
            completed_runs: 0,
            failed_runs: 0,
        }
    }

    fn from_run(squares: usize, run: u64, result: Result<Occupancy>) -> Self {
        match result {
            Ok(occupancy) => SimulationSummary {
                occupancy,
                completed_runs: 1,
                failed_runs: 0,
            },
            Err(e) => {
                warn!("Run {run} aborted: {e}");
                SimulationSummary {
                    failed_runs: 1,
                    ..SimulationSummary::empty(squares)
                }
            }
        }
    }

    fn combine(mut self, other: SimulationSummary) -> Self {
        match self.occupancy.merge(&other.occupancy) {
            Ok(()) => self.completed_runs += other.completed_runs,
            Err(e) => {
                warn!("Dropping {} runs: {e}", other.completed_runs);
                self.failed_runs += other.completed_runs;
            }
        }
        self.failed_runs += other.failed_runs;
        self
    }

    pub fn report(&self, board: &Board, include_unnamed: bool) -> OccupancyReport {
        OccupancyReport::new(board, &self.occupancy, include_unnamed)
    }
}

/// Repeats independent games and sums their occupancy.
///
/// Runs share only the board, its decks and the dice, all read-only, so
/// they can be played on any number of threads.
pub struct Simulation {
    board: Board,
    dice: DiceDistribution,
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Simulation::with_parts(Board::standard()?, DiceDistribution::new()?, config)
    }

    pub fn with_parts(board: Board, dice: DiceDistribution, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Simulation {
            board,
            dice,
            config,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Plays one game of `turns_per_run` turns from Go.
    pub fn run_single<R: RandomSource + ?Sized>(&self, source: &mut R) -> Result<Occupancy> {
        let mut game = Game::new(&self.board, &self.dice);
        game.play(self.config.turns_per_run, source)?;
        Ok(game.into_occupancy())
    }

    /// Runs the batch with run `i` seeded by `seed + i`.
    pub fn run(&self) -> SimulationSummary {
        let base_seed = self.config.seed.unwrap_or_else(|| fastrand::u64(..));
        info!(
            "Simulating {} runs of {} turns (seed {base_seed}, parallel: {})",
            self.config.number_of_runs, self.config.turns_per_run, self.config.parallel
        );
        let summary = self.run_with(|run| fastrand::Rng::with_seed(base_seed.wrapping_add(run)));
        info!(
            "Simulation finished: {} runs completed, {} failed, {} visits",
            summary.completed_runs,
            summary.failed_runs,
            summary.occupancy.total()
        );
        summary
    }

    /// Runs the batch drawing randomness from `make_source(run_index)`.
    /// A run whose source or resolution fails is dropped and counted in
    /// `failed_runs`; the rest of the batch is unaffected.
    pub fn run_with<F, R>(&self, make_source: F) -> SimulationSummary
    where
        F: Fn(u64) -> R + Sync,
        R: RandomSource,
    {
        let squares = self.board.len();
        let runs = u64::from(self.config.number_of_runs);
        let play = |run: u64| {
            let mut source = make_source(run);
            SimulationSummary::from_run(squares, run, self.run_single(&mut source))
        };

        if self.config.parallel {
            (0..runs)
                .into_par_iter()
                .map(play)
                .reduce(|| SimulationSummary::empty(squares), SimulationSummary::combine)
        } else {
            (0..runs)
                .map(play)
                .fold(SimulationSummary::empty(squares), SimulationSummary::combine)
        }
    }
}
