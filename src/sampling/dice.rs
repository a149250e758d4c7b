use super::{RandomSource, WeightedSampler};
use crate::error::Result;
use crate::model::constants::{DICE_SUM_PROBABILITIES, DOUBLE_PROBABILITIES};
use crate::model::dice::DiceRoll;

/// Two six-sided dice, drawn as a sum plus a double flag.
#[derive(Debug, Clone, PartialEq)]
pub struct DiceDistribution {
    sums: WeightedSampler,
}

impl DiceDistribution {
    pub fn new() -> Result<Self> {
        Ok(DiceDistribution {
            sums: WeightedSampler::new(&DICE_SUM_PROBABILITIES)?,
        })
    }

    /// Probability that a roll with this sum is a double
    pub fn double_probability(sum: u8) -> f64 {
        DOUBLE_PROBABILITIES
            .get(sum as usize)
            .copied()
            .unwrap_or(0.0)
    }

    /// Draws the sum, then, only for sums that can be doubles, a second
    /// draw decides whether both dice show the same face.
    pub fn roll<R: RandomSource + ?Sized>(&self, source: &mut R) -> Result<DiceRoll> {
        let sum = self.sums.draw(source)? as u8;
        let double_probability = Self::double_probability(sum);

        let is_double = if double_probability > 0.0 {
            source.next_unit()? < double_probability
        } else {
            false
        };

        Ok(DiceRoll::new(sum, is_double))
    }
}
