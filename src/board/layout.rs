use crate::model::constants::BOARD_LENGTH;
use crate::model::enums::{Landmark, SquareKind};
use crate::model::square::BoardSquare;

const COMMUNITY_CHEST: BoardSquare =
    BoardSquare::named(SquareKind::CommunityChest, "Community Chest");
const CHANCE: BoardSquare = BoardSquare::named(SquareKind::Chance, "Chance");
const RAILROAD: BoardSquare = BoardSquare::named(SquareKind::Railroad, "Railroad");
const UTILITY: BoardSquare = BoardSquare::named(SquareKind::Utility, "Utility");
const PLAIN: BoardSquare = BoardSquare::plain();

/// Standard Monopoly board, starting at Go and running clockwise.
/// Only squares that matter for movement carry a name.
pub const STANDARD_LAYOUT: [BoardSquare; BOARD_LENGTH] = [
    BoardSquare::landmark(SquareKind::Go, "Go", Landmark::Go), // 0
    BoardSquare::named(SquareKind::Plain, "Mediterranean Avenue"),
    COMMUNITY_CHEST,
    PLAIN,
    PLAIN,
    BoardSquare::landmark(
        SquareKind::Railroad,
        "Reading Railroad",
        Landmark::ReadingRailroad,
    ), // 5
    PLAIN,
    CHANCE,
    PLAIN,
    PLAIN,
    BoardSquare::landmark(SquareKind::Jail, "Jail", Landmark::Jail), // 10
    BoardSquare::landmark(
        SquareKind::Plain,
        "St. Charles Place",
        Landmark::StCharlesPlace,
    ),
    UTILITY,
    PLAIN,
    PLAIN,
    RAILROAD, // 15
    PLAIN,
    COMMUNITY_CHEST,
    PLAIN,
    PLAIN,
    PLAIN, // 20
    PLAIN,
    CHANCE,
    PLAIN,
    BoardSquare::landmark(
        SquareKind::Plain,
        "Illinois Avenue",
        Landmark::IllinoisAvenue,
    ),
    RAILROAD, // 25
    PLAIN,
    PLAIN,
    UTILITY,
    PLAIN,
    BoardSquare::named(SquareKind::GoToJail, "Go to Jail"), // 30
    PLAIN,
    PLAIN,
    COMMUNITY_CHEST,
    PLAIN,
    RAILROAD, // 35
    CHANCE,
    PLAIN,
    PLAIN,
    BoardSquare::landmark(SquareKind::Plain, "Boardwalk", Landmark::Boardwalk),
];
