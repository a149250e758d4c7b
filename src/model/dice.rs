use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct DiceRoll {
    pub sum: u8,
    pub is_double: bool,
}

impl DiceRoll {
    pub fn new(sum: u8, is_double: bool) -> Self {
        DiceRoll { sum, is_double }
    }
}
