pub mod deck;
pub mod dice;
pub mod sampler;

pub use deck::{Deck, Decks};
pub use dice::DiceDistribution;
pub use sampler::WeightedSampler;

use crate::error::{Result, SimulationError};
use std::collections::VecDeque;

/// Source of uniform draws in `[0, 1)`.
///
/// Every random decision of the simulation goes through this trait, so a
/// seeded or scripted source makes a whole game reproducible.
pub trait RandomSource {
    fn next_unit(&mut self) -> Result<f64>;
}

impl RandomSource for fastrand::Rng {
    fn next_unit(&mut self) -> Result<f64> {
        Ok(self.f64())
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> Result<f64> {
        (**self).next_unit()
    }
}

/// Replays a fixed sequence of draws, then fails.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: VecDeque<f64>,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        ScriptedSource {
            draws: draws.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> Result<f64> {
        self.draws
            .pop_front()
            .ok_or(SimulationError::RandomSourceExhausted)
    }
}
