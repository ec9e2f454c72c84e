use crate::deck::Deck;
use crate::event::{EventSink, GameEvent};
use crate::result::Player;

use super::{Game, GameState};

impl<S: EventSink> Game<S> {
    /// Deals the deck alternately, Player 1 first, until it is drained.
    ///
    /// A full deck gives each player 26 cards.
    pub(super) fn deal(&mut self, deck: Deck) {
        self.state = GameState::Dealing;

        for (i, card) in deck.enumerate() {
            let player = if i % 2 == 0 { Player::One } else { Player::Two };
            self.hand_mut(player).add_card(card);
        }

        self.finish_dealing();
    }

    pub(super) fn finish_dealing(&mut self) {
        self.total = self.cards_in_hands();
        self.state = GameState::RoundStart;

        let (player1, player2) = (self.player1.count(), self.player2.count());
        log::debug!("dealt {player1} cards to player 1 and {player2} cards to player 2");
        self.sink.emit(GameEvent::Dealt { player1, player2 });
    }
}
