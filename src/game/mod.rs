pub mod outcome;

pub use outcome::TurnOutcome;

use log::debug;

use crate::board::Board;
use crate::error::{Result, SimulationError};
use crate::model::constants::MAX_JAIL;
use crate::model::dice::DiceRoll;
use crate::model::occupancy::Occupancy;
use crate::model::player::{JailState, PlayerState};
use crate::sampling::{DiceDistribution, RandomSource};

/// A single simulated game: one token, rolling until the turn budget is
/// spent, tallying every square it visits.
pub struct Game<'a> {
    board: &'a Board,
    dice: &'a DiceDistribution,
    player: PlayerState,
    turn: u32,
    occupancy: Occupancy,
}

impl<'a> Game<'a> {
    pub fn new(board: &'a Board, dice: &'a DiceDistribution) -> Self {
        Game::with_player(board, dice, PlayerState::default())
    }

    pub fn with_player(board: &'a Board, dice: &'a DiceDistribution, player: PlayerState) -> Self {
        Game {
            board,
            dice,
            player,
            turn: 0,
            occupancy: Occupancy::new(board.len()),
        }
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    pub fn into_occupancy(self) -> Occupancy {
        self.occupancy
    }

    /// Rolls until `target_turns` turns have been consumed.
    pub fn play<R: RandomSource + ?Sized>(&mut self, target_turns: u32, source: &mut R) -> Result<()> {
        while self.turn < target_turns {
            self.play_turn(source)?;
        }
        Ok(())
    }

    pub fn play_turn<R: RandomSource + ?Sized>(&mut self, source: &mut R) -> Result<TurnOutcome> {
        let roll = self.dice.roll(source)?;
        self.apply_roll(roll, source)
    }

    /// Applies one roll of the dice. Card draws triggered by the move are
    /// taken from `source`.
    pub fn apply_roll<R: RandomSource + ?Sized>(
        &mut self,
        roll: DiceRoll,
        source: &mut R,
    ) -> Result<TurnOutcome> {
        if let JailState::InJail { turns_waited } = self.player.jail {
            let released = self.player.free_from_jail || roll.is_double;
            // the credential is spent on the first jail check it meets
            self.player.free_from_jail = false;

            if !released && turns_waited < MAX_JAIL {
                self.occupancy.record(self.player.position)?;
                self.player.jail = JailState::InJail {
                    turns_waited: turns_waited + 1,
                };
                self.turn += 1;
                debug!(
                    "Turn {}: waiting in jail on square {} ({} of {MAX_JAIL})",
                    self.turn,
                    self.player.position,
                    turns_waited + 1
                );
                return Ok(TurnOutcome::Waited {
                    roll,
                    position: self.player.position,
                });
            }
            self.player.jail = JailState::Free;
        }

        let outcome = self
            .board
            .move_token(self.player.position, i64::from(roll.sum), source)?;
        self.player.free_from_jail |= outcome.free_from_jail;
        self.occupancy.record_path(&outcome.path)?;
        self.player.position = outcome.final_position().ok_or_else(|| {
            SimulationError::InvalidBoard("move resolved to an empty path".to_string())
        })?;

        let in_jail = self.board.is_jail(self.player.position);
        self.player.jail = if in_jail {
            JailState::InJail { turns_waited: 0 }
        } else {
            JailState::Free
        };

        let extra_roll = roll.is_double && !in_jail;
        if !extra_roll {
            self.turn += 1;
        }
        debug!(
            "Turn {}: rolled {} (double: {}), path {:?}",
            self.turn, roll.sum, roll.is_double, outcome.path
        );

        Ok(TurnOutcome::Moved {
            roll,
            path: outcome.path,
            extra_roll,
        })
    }
}
