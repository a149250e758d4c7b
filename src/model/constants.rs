pub const BOARD_LENGTH: usize = 40;

// Rolls a player may spend waiting in jail before paying the fine
pub const MAX_JAIL: u8 = 3;

// Tolerance used when checking that a probability vector sums to one
pub const DISTRIBUTION_EPSILON: f64 = 1e-9;

// Chained card effects (go back 3 spaces onto another card square) are
// resolved recursively; this bounds the chain on adversarial layouts.
pub const MAX_RESOLUTION_DEPTH: usize = 16;

// Two dice sum probabilities, indexed by the sum itself.
// Sums 0 and 1 are unused but included for direct indexing.
pub const DICE_SUM_PROBABILITIES: [f64; 13] = [
    0.0,        // 0 (unused, for indexing)
    0.0,        // 1 (unused, for indexing)
    1.0 / 36.0, // 2
    2.0 / 36.0, // 3
    3.0 / 36.0, // 4
    4.0 / 36.0, // 5
    5.0 / 36.0, // 6
    6.0 / 36.0, // 7
    5.0 / 36.0, // 8
    4.0 / 36.0, // 9
    3.0 / 36.0, // 10
    2.0 / 36.0, // 11
    1.0 / 36.0, // 12
];

// Probability that both dice show the same face given their sum.
// Odd sums can never be doubles.
pub const DOUBLE_PROBABILITIES: [f64; 13] = [
    0.0,       // 0
    0.0,       // 1
    1.0,       // 2: 1+1
    0.0,       // 3
    1.0 / 3.0, // 4: 2+2 out of (1,3) (2,2) (3,1)
    0.0,       // 5
    1.0 / 5.0, // 6
    0.0,       // 7
    1.0 / 5.0, // 8
    0.0,       // 9
    1.0 / 3.0, // 10
    0.0,       // 11
    1.0,       // 12: 6+6
];

// Chance deck, in the order of ChanceCard::ALL. Cards without a board
// effect are merged into "stay".
pub const CHANCE_PROBABILITIES: [f64; 10] = [
    7.0 / 16.0,
    1.0 / 16.0,
    1.0 / 16.0,
    1.0 / 16.0,
    1.0 / 16.0,
    1.0 / 16.0,
    1.0 / 16.0,
    1.0 / 16.0,
    1.0 / 16.0,
    1.0 / 16.0,
];

// Community chest deck, in the order of CommunityCard::ALL.
pub const COMMUNITY_PROBABILITIES: [f64; 5] = [
    1.0 / 16.0, // get out of jail free
    3.0 / 16.0, // collect money
    8.0 / 16.0, // advance to go
    3.0 / 16.0, // pay money
    1.0 / 16.0, // go to jail
];
