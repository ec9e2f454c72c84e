//! Game events and the sink that receives them.
//!
//! The engine never formats text. Every observable step is reported as a
//! [`GameEvent`] to an [`EventSink`], which is free to print, record or
//! ignore it.

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::{Outcome, Player};

/// A single step of the game, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The deck has been dealt.
    Dealt {
        /// Cards in Player 1's hand.
        player1: usize,
        /// Cards in Player 2's hand.
        player2: usize,
    },
    /// The first round is about to start.
    GameStarted,
    /// A new round has started.
    RoundStarted {
        /// One-based round number.
        round: u32,
    },
    /// A player turned over a card to open a round.
    CardPlayed {
        /// Who played.
        player: Player,
        /// The card played.
        card: Card,
    },
    /// A player won the pile.
    RoundWon {
        /// The winner of the round.
        player: Player,
        /// Number of cards won.
        pile: usize,
        /// Cards in Player 1's hand afterwards.
        player1: usize,
        /// Cards in Player 2's hand afterwards.
        player2: usize,
    },
    /// The compared cards tied and a war begins.
    WarDeclared,
    /// A player cannot afford the war and loses the game.
    NotEnoughCardsForWar {
        /// The player short of cards.
        player: Player,
    },
    /// A player committed cards face down.
    CardsFaceDown {
        /// Who committed the cards.
        player: Player,
        /// How many cards were committed.
        count: usize,
    },
    /// A hand ran dry before the war comparison card.
    OutOfCardsDuringWar {
        /// The player who ran out, or `None` when both did.
        player: Option<Player>,
    },
    /// A player turned over a war comparison card.
    WarCardPlayed {
        /// Who played.
        player: Player,
        /// The card played.
        card: Card,
    },
    /// The round limit was hit; hand sizes decide the game.
    RoundLimitReached {
        /// The limit that was hit.
        limit: u32,
    },
    /// The game is over.
    GameOver {
        /// The final outcome.
        outcome: Outcome,
        /// Number of rounds started.
        rounds: u32,
    },
}

/// Receives game events as they happen.
pub trait EventSink {
    /// Handles one event.
    fn emit(&mut self, event: GameEvent);
}

/// A sink that drops every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}
