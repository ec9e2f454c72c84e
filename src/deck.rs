//! The 52-card deck used for dealing.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered deck of cards, dispensed front first.
///
/// A deck only lives for the dealing phase. It is drained by [`Iterator::next`]
/// and dropped once both hands are populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Returns every card in canonical order (ranks ascending, then suits).
    #[must_use]
    pub fn ordered() -> Self {
        Self {
            cards: canonical_cards().into(),
        }
    }

    /// Builds the canonical deck and shuffles it with the given random source.
    ///
    /// Cards are drawn one at a time from the shrinking source: pick a
    /// uniform index `j` in `[0, remaining)`, emit the card at `j`, and move
    /// the last remaining card into its slot. Every permutation is reachable
    /// and each card appears exactly once.
    #[must_use]
    pub fn build_and_shuffle<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut source = canonical_cards();
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        while !source.is_empty() {
            let j = rng.random_range(0..source.len());
            cards.push_back(source.swap_remove(j));
        }

        Self { cards }
    }

    /// Shuffles a fresh deck with a `ChaCha8Rng` seeded from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::build_and_shuffle(&mut rng)
    }

    /// Creates a deck holding exactly the given cards, front first.
    ///
    /// No validation is performed here; [`Game::from_deck`](crate::Game::from_deck)
    /// rejects duplicate cards.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Returns the cards still in the deck, front first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns `true` once every card has been dispensed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Iterator for Deck {
    type Item = Card;

    /// Removes and returns the front-most card.
    fn next(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cards.len(), Some(self.cards.len()))
    }
}

impl ExactSizeIterator for Deck {}

fn canonical_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}
