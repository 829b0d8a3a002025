//! Random card sources.
//!
//! The engine never samples randomness directly; it asks a [`CardSource`]
//! for the next card. [`RandomCards`] samples rank and suit independently
//! (with replacement), while [`ScriptedCards`] replays a fixed sequence for
//! deterministic play.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank, Suit};

/// A source of cards for the round engine.
pub trait CardSource {
    /// Produces the next card.
    fn next_card(&mut self) -> Card;
}

impl<S: CardSource + ?Sized> CardSource for &mut S {
    fn next_card(&mut self) -> Card {
        (**self).next_card()
    }
}

/// Uniform card sampler backed by any [`Rng`].
///
/// Each draw picks one of 13 ranks and one of 4 suits independently, so all
/// 52 combinations are equally likely and the same card may repeat.
#[derive(Debug, Clone)]
pub struct RandomCards<R = ChaCha8Rng> {
    rng: R,
}

impl RandomCards<ChaCha8Rng> {
    /// Creates a seeded sampler.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomCards<R> {
    /// Wraps an existing random number generator.
    #[must_use]
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CardSource for RandomCards<R> {
    fn next_card(&mut self) -> Card {
        let rank = Rank::ALL[self.rng.random_range(0..Rank::ALL.len())];
        let suit = Suit::ALL[self.rng.random_range(0..Suit::ALL.len())];
        Card::new(rank, suit)
    }
}

/// Replays a fixed list of cards, starting over once it runs out.
///
/// An empty script yields the two of spades forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedCards {
    cards: Vec<Card>,
    position: usize,
}

impl ScriptedCards {
    /// Creates a script from the cards to hand out, in order.
    #[must_use]
    pub fn new(cards: impl Into<Vec<Card>>) -> Self {
        Self {
            cards: cards.into(),
            position: 0,
        }
    }

    /// Returns how many cards have been handed out so far.
    #[must_use]
    pub const fn drawn(&self) -> usize {
        self.position
    }
}

impl CardSource for ScriptedCards {
    fn next_card(&mut self) -> Card {
        let card = if self.cards.is_empty() {
            Card::new(Rank::Two, Suit::Spades)
        } else {
            self.cards[self.position % self.cards.len()]
        };
        self.position += 1;
        card
    }
}

/// Draws a single card.
pub fn draw_card<S: CardSource + ?Sized>(source: &mut S) -> Card {
    source.next_card()
}

/// Draws a card whose rank differs from `current`'s rank.
///
/// Rejection sampling with no retry bound: at least 12 of 13 ranks are
/// accepted on each attempt. The suit may coincide with `current`'s.
pub fn draw_different_card<S: CardSource + ?Sized>(current: &Card, source: &mut S) -> Card {
    loop {
        let card = draw_card(source);
        if !card.same_rank(current) {
            return card;
        }
    }
}
