use crate::model::dice::DiceRoll;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnOutcome {
    /// Stayed in jail for this roll.
    Waited { roll: DiceRoll, position: usize },
    /// Token moved along `path`. `extra_roll` is set when a double lets the
    /// player roll again without spending a turn.
    Moved {
        roll: DiceRoll,
        path: Vec<usize>,
        extra_roll: bool,
    },
}

impl TurnOutcome {
    pub fn roll(&self) -> DiceRoll {
        match self {
            TurnOutcome::Waited { roll, .. } | TurnOutcome::Moved { roll, .. } => *roll,
        }
    }

    pub fn consumed_turn(&self) -> bool {
        match self {
            TurnOutcome::Waited { .. } => true,
            TurnOutcome::Moved { extra_roll, .. } => !extra_roll,
        }
    }
}
