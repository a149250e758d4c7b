use log::debug;

use super::{Board, MoveOutcome};
use crate::error::{Result, SimulationError};
use crate::model::constants::MAX_RESOLUTION_DEPTH;
use crate::model::enums::{ChanceCard, CommunityCard, Landmark, SquareKind};
use crate::sampling::RandomSource;

const GO_BACK_STEPS: i64 = -3;

impl Board {
    /// Moves the token `steps` squares from `from` and resolves whatever
    /// the landing square triggers.
    ///
    /// Negative steps move backwards and wrap around Go. Card effects are
    /// appended to the path in the order they happen, so the last entry of
    /// the path is the final position of the token.
    pub fn move_token<R: RandomSource + ?Sized>(
        &self,
        from: usize,
        steps: i64,
        source: &mut R,
    ) -> Result<MoveOutcome> {
        self.resolve_move(from, steps, source, 0)
    }

    fn resolve_move<R: RandomSource + ?Sized>(
        &self,
        from: usize,
        steps: i64,
        source: &mut R,
        depth: usize,
    ) -> Result<MoveOutcome> {
        if depth > MAX_RESOLUTION_DEPTH {
            return Err(SimulationError::ResolutionDepthExceeded(depth));
        }

        let next = self.target_square(from, steps)?;
        let mut outcome = MoveOutcome::landing(next);

        match self.squares[next].kind {
            SquareKind::GoToJail => outcome.path.push(self.jail_index()?),
            SquareKind::Chance => {
                let card = self.decks.chance.draw(source)?;
                debug!("Chance card {card:?} drawn on square {next}");
                outcome.merge(self.execute_chance(next, card, source, depth)?);
            }
            SquareKind::CommunityChest => {
                let card = self.decks.community.draw(source)?;
                debug!("Community chest card {card:?} drawn on square {next}");
                outcome.merge(self.execute_community(card)?);
            }
            _ => (),
        }

        Ok(outcome)
    }

    fn target_square(&self, from: usize, steps: i64) -> Result<usize> {
        let invalid = || SimulationError::InvalidStepCount { from, steps };
        if from >= self.len() {
            return Err(invalid());
        }
        let length = i64::try_from(self.len()).map_err(|_| invalid())?;
        let from_signed = i64::try_from(from).map_err(|_| invalid())?;
        let next = from_signed.checked_add(steps).ok_or_else(invalid)?;
        usize::try_from(next.rem_euclid(length)).map_err(|_| invalid())
    }

    fn execute_chance<R: RandomSource + ?Sized>(
        &self,
        position: usize,
        card: ChanceCard,
        source: &mut R,
        depth: usize,
    ) -> Result<MoveOutcome> {
        let destination = match card {
            ChanceCard::Stay => return Ok(MoveOutcome::default()),
            ChanceCard::GoToJail => self.landmark_index(Landmark::Jail)?,
            ChanceCard::AdvanceToGo => self.landmark_index(Landmark::Go)?,
            ChanceCard::AdvanceToIllinoisAvenue => {
                self.landmark_index(Landmark::IllinoisAvenue)?
            }
            ChanceCard::AdvanceToStCharlesPlace => {
                self.landmark_index(Landmark::StCharlesPlace)?
            }
            ChanceCard::AdvanceToReadingRailroad => {
                self.landmark_index(Landmark::ReadingRailroad)?
            }
            ChanceCard::AdvanceToBoardwalk => self.landmark_index(Landmark::Boardwalk)?,
            ChanceCard::AdvanceToNearestRailroad => self.nearest_railroad(position)?,
            ChanceCard::AdvanceToNearestUtility => self.nearest_utility(position)?,
            ChanceCard::GoBackThree => {
                return self.resolve_move(position, GO_BACK_STEPS, source, depth + 1);
            }
        };
        Ok(MoveOutcome::landing(destination))
    }

    fn execute_community(&self, card: CommunityCard) -> Result<MoveOutcome> {
        match card {
            CommunityCard::GoToJail => Ok(MoveOutcome::landing(self.jail_index()?)),
            CommunityCard::AdvanceToGo => {
                Ok(MoveOutcome::landing(self.landmark_index(Landmark::Go)?))
            }
            CommunityCard::GetOutOfJailFree => Ok(MoveOutcome {
                free_from_jail: true,
                path: vec![],
            }),
            // money is not modelled
            CommunityCard::CollectMoney | CommunityCard::PayMoney => Ok(MoveOutcome::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::ScriptedSource;

    #[test]
    fn test_target_square_wraps_both_ways() {
        let board = Board::standard().unwrap();
        assert_eq!(board.target_square(38, 5).unwrap(), 3);
        assert_eq!(board.target_square(1, -3).unwrap(), 38);
        assert_eq!(board.target_square(4, -83).unwrap(), 1);
    }

    #[test]
    fn test_target_square_guards() {
        let board = Board::standard().unwrap();
        assert_eq!(
            board.target_square(40, 1),
            Err(SimulationError::InvalidStepCount { from: 40, steps: 1 })
        );
        assert!(board.target_square(1, i64::MAX).is_err());
    }

    #[test]
    fn test_stay_card_keeps_token_on_chance() {
        let board = Board::standard().unwrap();
        let mut source = ScriptedSource::new([0.0]);
        let outcome = board.move_token(0, 7, &mut source).unwrap();
        assert_eq!(outcome.path, vec![7]);
        assert!(!outcome.free_from_jail);
    }
}
