pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod model;
pub mod sampling;
pub mod simulation;

#[cfg(feature = "python")]
mod python;

pub use error::{Result, SimulationError};
