#![allow(dead_code)]

use monosim_core::board::Board;
use monosim_core::model::enums::{ChanceCard, Landmark, SquareKind};
use monosim_core::model::square::BoardSquare;
use monosim_core::sampling::{Deck, Decks, DiceDistribution};

// Draws that select a given outcome from the standard distributions.
pub const DICE_SEVEN: f64 = 0.5;
pub const DICE_TEN: f64 = 0.85;
pub const NOT_DOUBLE: f64 = 0.99;

pub const CHANCE_STAY: f64 = 0.0;
pub const CHANCE_GO_TO_JAIL: f64 = 0.45;
pub const CHANCE_ADVANCE_TO_GO: f64 = 0.52;
pub const CHANCE_ILLINOIS: f64 = 0.6;
pub const CHANCE_ST_CHARLES: f64 = 0.65;
pub const CHANCE_NEAREST_RAILROAD: f64 = 0.7;
pub const CHANCE_GO_BACK_THREE: f64 = 0.78;
pub const CHANCE_READING: f64 = 0.85;
pub const CHANCE_BOARDWALK: f64 = 0.9;
pub const CHANCE_NEAREST_UTILITY: f64 = 0.95;

pub const COMMUNITY_OUT_OF_JAIL: f64 = 0.01;
pub const COMMUNITY_COLLECT: f64 = 0.1;
pub const COMMUNITY_ADVANCE_TO_GO: f64 = 0.5;
pub const COMMUNITY_PAY: f64 = 0.8;
pub const COMMUNITY_GO_TO_JAIL: f64 = 0.99;

pub const JAIL: usize = 10;
pub const GO_TO_JAIL: usize = 30;

pub fn standard_board() -> Board {
    Board::standard().expect("Failed to build the standard board.")
}

pub fn dice() -> DiceDistribution {
    DiceDistribution::new().expect("Failed to build the dice distribution.")
}

/// Decks whose chance pile only holds "go back 3 spaces".
pub fn go_back_decks() -> Decks {
    Decks::new(
        Deck::single(ChanceCard::GoBackThree),
        Deck::community().expect("Failed to build the community deck."),
    )
}

/// Board of `length` plain squares with chance squares at `chances`.
/// Square 0 is Go; `jail`, when given, is the jail square.
pub fn chance_board(length: usize, chances: &[usize], jail: Option<usize>) -> Board {
    let squares = (0..length)
        .map(|index| {
            if chances.contains(&index) {
                BoardSquare::named(SquareKind::Chance, "Chance")
            } else if Some(index) == jail {
                BoardSquare::landmark(SquareKind::Jail, "Jail", Landmark::Jail)
            } else if index == 0 {
                BoardSquare::landmark(SquareKind::Go, "Go", Landmark::Go)
            } else {
                BoardSquare::plain()
            }
        })
        .collect();
    Board::new(squares, go_back_decks()).expect("Failed to build the test board.")
}
