pub mod constants;
pub mod dice;
pub mod enums;
pub mod occupancy;
pub mod player;
pub mod square;
