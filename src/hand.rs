//! Player hand representation.

use alloc::collections::VecDeque;

use crate::card::Card;

/// A player's hand: a FIFO queue of cards.
///
/// Cards are played from the front and won cards are added to the back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: VecDeque<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates a hand holding the given cards, front first.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Adds a card to the back of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Adds cards to the back of the hand, preserving their order.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Removes and returns the front card, or `None` if the hand is empty.
    pub fn play_card(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in the hand, front first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
