use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SquareKind {
    Chance,
    CommunityChest,
    Go,
    GoToJail,
    Jail,
    Plain,
    Railroad,
    Utility,
}

/// Squares that cards send the token to by name.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Landmark {
    Boardwalk,
    Go,
    IllinoisAvenue,
    Jail,
    ReadingRailroad,
    StCharlesPlace,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChanceCard {
    Stay,
    GoToJail,
    AdvanceToGo,
    AdvanceToIllinoisAvenue,
    AdvanceToStCharlesPlace,
    AdvanceToNearestRailroad,
    GoBackThree,
    AdvanceToReadingRailroad,
    AdvanceToBoardwalk,
    AdvanceToNearestUtility,
}

impl ChanceCard {
    pub const ALL: [ChanceCard; 10] = [
        ChanceCard::Stay,
        ChanceCard::GoToJail,
        ChanceCard::AdvanceToGo,
        ChanceCard::AdvanceToIllinoisAvenue,
        ChanceCard::AdvanceToStCharlesPlace,
        ChanceCard::AdvanceToNearestRailroad,
        ChanceCard::GoBackThree,
        ChanceCard::AdvanceToReadingRailroad,
        ChanceCard::AdvanceToBoardwalk,
        ChanceCard::AdvanceToNearestUtility,
    ];
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommunityCard {
    GetOutOfJailFree,
    CollectMoney,
    AdvanceToGo,
    PayMoney,
    GoToJail,
}

impl CommunityCard {
    pub const ALL: [CommunityCard; 5] = [
        CommunityCard::GetOutOfJailFree,
        CommunityCard::CollectMoney,
        CommunityCard::AdvanceToGo,
        CommunityCard::PayMoney,
        CommunityCard::GoToJail,
    ];
}
