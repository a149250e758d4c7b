use super::{RandomSource, WeightedSampler};
use crate::error::{Result, SimulationError};
use crate::model::constants::{CHANCE_PROBABILITIES, COMMUNITY_PROBABILITIES};
use crate::model::enums::{ChanceCard, CommunityCard};

/// A card table paired with the probability of drawing each card.
///
/// Draws are with replacement: the deck is a fixed distribution, not a
/// shuffled pile.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck<C> {
    cards: Vec<C>,
    sampler: WeightedSampler,
}

impl<C: Copy> Deck<C> {
    pub fn new(cards: Vec<C>, probabilities: &[f64]) -> Result<Self> {
        if cards.len() != probabilities.len() {
            return Err(SimulationError::InvalidDistribution(format!(
                "{} cards but {} probabilities",
                cards.len(),
                probabilities.len()
            )));
        }
        Ok(Deck {
            cards,
            sampler: WeightedSampler::new(probabilities)?,
        })
    }

    /// A deck that always draws the same card.
    pub fn single(card: C) -> Self {
        Deck {
            cards: vec![card],
            sampler: WeightedSampler::certain(),
        }
    }

    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    pub fn draw<R: RandomSource + ?Sized>(&self, source: &mut R) -> Result<C> {
        let index = self.sampler.draw(source)?;
        Ok(self.cards[index])
    }
}

impl Deck<ChanceCard> {
    pub fn chance() -> Result<Self> {
        Deck::new(ChanceCard::ALL.to_vec(), &CHANCE_PROBABILITIES)
    }
}

impl Deck<CommunityCard> {
    pub fn community() -> Result<Self> {
        Deck::new(CommunityCard::ALL.to_vec(), &COMMUNITY_PROBABILITIES)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decks {
    pub chance: Deck<ChanceCard>,
    pub community: Deck<CommunityCard>,
}

impl Decks {
    pub fn new(chance: Deck<ChanceCard>, community: Deck<CommunityCard>) -> Self {
        Decks { chance, community }
    }

    pub fn standard() -> Result<Self> {
        Ok(Decks::new(Deck::chance()?, Deck::community()?))
    }
}
