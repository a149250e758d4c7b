use serde::{Deserialize, Serialize};

/// Result of resolving a move, including every chained card effect.
///
/// `path` lists the squares visited in order; the last entry is where the
/// token ends up.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub free_from_jail: bool,
    pub path: Vec<usize>,
}

impl MoveOutcome {
    pub fn landing(position: usize) -> Self {
        MoveOutcome {
            free_from_jail: false,
            path: vec![position],
        }
    }

    /// Appends the effect of a card or a chained move
    pub fn merge(&mut self, other: MoveOutcome) {
        self.free_from_jail |= other.free_from_jail;
        self.path.extend(other.path);
    }

    pub fn final_position(&self) -> Option<usize> {
        self.path.last().copied()
    }
}
