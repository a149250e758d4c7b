pub mod layout;
pub mod outcome;
mod resolve;

pub use outcome::MoveOutcome;

use crate::error::{Result, SimulationError};
use crate::model::enums::{Landmark, SquareKind};
use crate::model::square::BoardSquare;
use crate::sampling::Decks;
use std::collections::HashMap;

/// The cyclic board together with the decks its card squares draw from.
///
/// Railroad and utility indices, as well as the index of every landmark,
/// are computed once so card effects are plain lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    squares: Vec<BoardSquare>,
    decks: Decks,
    railroads: Vec<usize>,
    utilities: Vec<usize>,
    landmarks: HashMap<Landmark, usize>,
}

impl Board {
    pub fn new(squares: Vec<BoardSquare>, decks: Decks) -> Result<Self> {
        if squares.is_empty() {
            return Err(SimulationError::InvalidBoard(
                "board has no squares".to_string(),
            ));
        }

        let mut landmarks = HashMap::new();
        for (index, square) in squares.iter().enumerate() {
            // the jail square is found both by kind and by landmark
            let jail_kind = square.kind == SquareKind::Jail;
            if jail_kind != (square.landmark == Some(Landmark::Jail)) {
                return Err(SimulationError::InvalidBoard(format!(
                    "square {index} must be both of kind Jail and tagged as the Jail landmark"
                )));
            }
            if let Some(landmark) = square.landmark {
                if let Some(previous) = landmarks.insert(landmark, index) {
                    return Err(SimulationError::InvalidBoard(format!(
                        "{landmark:?} appears on squares {previous} and {index}"
                    )));
                }
            }
        }

        let indices_of = |kind: SquareKind| -> Vec<usize> {
            squares
                .iter()
                .enumerate()
                .filter(|(_, square)| square.kind == kind)
                .map(|(index, _)| index)
                .collect()
        };
        let railroads = indices_of(SquareKind::Railroad);
        let utilities = indices_of(SquareKind::Utility);

        Ok(Board {
            squares,
            decks,
            railroads,
            utilities,
            landmarks,
        })
    }

    pub fn standard() -> Result<Self> {
        Board::new(layout::STANDARD_LAYOUT.to_vec(), Decks::standard()?)
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn squares(&self) -> &[BoardSquare] {
        &self.squares
    }

    pub fn square(&self, index: usize) -> Option<&BoardSquare> {
        self.squares.get(index)
    }

    pub fn is_jail(&self, index: usize) -> bool {
        self.square(index)
            .is_some_and(|square| square.kind == SquareKind::Jail)
    }

    pub fn landmark_index(&self, landmark: Landmark) -> Result<usize> {
        self.landmarks.get(&landmark).copied().ok_or_else(|| {
            SimulationError::InvalidBoard(format!("board has no {landmark:?} square"))
        })
    }

    pub fn jail_index(&self) -> Result<usize> {
        self.landmark_index(Landmark::Jail)
    }

    pub fn nearest_railroad(&self, after: usize) -> Result<usize> {
        nearest_ahead(&self.railroads, after).ok_or_else(|| {
            SimulationError::InvalidBoard("board has no railroad".to_string())
        })
    }

    pub fn nearest_utility(&self, after: usize) -> Result<usize> {
        nearest_ahead(&self.utilities, after).ok_or_else(|| {
            SimulationError::InvalidBoard("board has no utility".to_string())
        })
    }
}

/// First index strictly greater than `after`, wrapping around to the
/// first one. `indices` must be ascending.
fn nearest_ahead(indices: &[usize], after: usize) -> Option<usize> {
    indices
        .iter()
        .copied()
        .find(|&index| index > after)
        .or_else(|| indices.first().copied())
}
