use super::constants::MAX_JAIL;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JailState {
    #[default]
    Free,
    InJail {
        turns_waited: u8,
    },
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: usize,
    pub jail: JailState,
    /// Get out of jail free card, held until the next jail check uses it
    pub free_from_jail: bool,
}

impl PlayerState {
    pub fn new(position: usize) -> Self {
        PlayerState {
            position,
            ..Default::default()
        }
    }

    pub fn jailed(position: usize, turns_waited: u8) -> Self {
        PlayerState {
            position,
            jail: JailState::InJail {
                turns_waited: turns_waited.min(MAX_JAIL),
            },
            free_from_jail: false,
        }
    }

    pub fn in_jail(&self) -> bool {
        matches!(self.jail, JailState::InJail { .. })
    }

    pub fn turns_waited(&self) -> u8 {
        match self.jail {
            JailState::InJail { turns_waited } => turns_waited,
            JailState::Free => 0,
        }
    }
}
