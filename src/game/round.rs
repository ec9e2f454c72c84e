use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::card::Card;
use crate::event::{EventSink, GameEvent};
use crate::result::{GameResult, Outcome, Player, Termination};

use super::{Game, GameState};

/// Result of drawing one card from each hand.
enum Draw {
    /// Both players produced a card.
    Both(Card, Card),
    /// A player's hand was empty, or both were (`None`).
    Short(Option<Player>),
}

/// Result of one war exchange.
enum War {
    /// The new comparison cards, to be compared with the grown pile.
    Continue(Card, Card),
    /// The war ended the game.
    Decided(Outcome),
}

impl<S: EventSink> Game<S> {
    /// Plays one round.
    ///
    /// Returns `None` while the game goes on, or the terminal outcome once a
    /// hand runs out or a war cannot be fought. Calling this after the game
    /// is over returns the stored outcome without starting a new round.
    pub fn play_round(&mut self) -> Option<Outcome> {
        if let Some((outcome, _)) = self.finished {
            return Some(outcome);
        }

        self.rounds += 1;
        self.state = GameState::RoundStart;
        self.sink.emit(GameEvent::RoundStarted { round: self.rounds });

        let mut pile = Vec::with_capacity(2);
        let outcome = match self.draw(&mut pile) {
            // Player 1's empty hand is checked first, so two empty hands
            // at the start of a round go to Player 2.
            Draw::Short(short) => {
                let loser = short.unwrap_or(Player::One);
                Some(self.finish(Outcome::Winner(loser.opponent()), pile))
            }
            Draw::Both(card1, card2) => {
                log::trace!("round {}: {card1} vs {card2}", self.rounds);
                self.sink.emit(GameEvent::CardPlayed {
                    player: Player::One,
                    card: card1,
                });
                self.sink.emit(GameEvent::CardPlayed {
                    player: Player::Two,
                    card: card2,
                });
                pile.extend([card1, card2]);
                self.compare_cards(card1, card2, pile)
            }
        };

        debug_assert_eq!(
            self.cards_in_hands() + self.discarded,
            self.total,
            "cards were created or lost during round {}",
            self.rounds
        );

        outcome
    }

    /// Plays rounds until the game is decided or the round limit is hit.
    ///
    /// On hitting the limit, the player holding more cards wins; equal hands
    /// are a tie. The result records which of the two happened.
    pub fn play_game(&mut self) -> GameResult {
        if let Some(result) = self.result() {
            return result;
        }

        self.sink.emit(GameEvent::GameStarted);
        let limit = self.options.round_limit.max(1);

        let (outcome, termination) = loop {
            if let Some(outcome) = self.play_round() {
                break (outcome, Termination::Natural);
            }
            if self.rounds >= limit {
                break (self.decide_by_hand_size(limit), Termination::RoundLimit);
            }
        };

        log::info!(
            "game over after {} rounds: {outcome:?} ({termination:?})",
            self.rounds
        );
        self.sink.emit(GameEvent::GameOver {
            outcome,
            rounds: self.rounds,
        });

        self.summary(outcome, termination)
    }

    /// Compares two cards and settles the pile, fighting wars on ties.
    ///
    /// Ties are resolved in a loop that grows the pile, so arbitrarily long
    /// chains of wars run in constant stack space.
    fn compare_cards(
        &mut self,
        mut card1: Card,
        mut card2: Card,
        mut pile: Vec<Card>,
    ) -> Option<Outcome> {
        loop {
            let winner = match card1.rank.cmp(&card2.rank) {
                Ordering::Greater => Player::One,
                Ordering::Less => Player::Two,
                Ordering::Equal => match self.handle_war(&mut pile) {
                    War::Continue(next1, next2) => {
                        card1 = next1;
                        card2 = next2;
                        continue;
                    }
                    War::Decided(outcome) => return Some(self.finish(outcome, pile)),
                },
            };

            self.award(winner, pile);
            return None;
        }
    }

    /// Runs one war exchange, adding the committed cards to `pile`.
    fn handle_war(&mut self, pile: &mut Vec<Card>) -> War {
        self.state = GameState::War;
        log::debug!("round {}: war over a pile of {}", self.rounds, pile.len());
        self.sink.emit(GameEvent::WarDeclared);

        if self.options.require_full_war {
            let threshold = self.options.war_threshold();
            // Player 1 is checked first and loses even if Player 2 is short too.
            for player in [Player::One, Player::Two] {
                if self.hand(player).count() < threshold {
                    self.sink.emit(GameEvent::NotEnoughCardsForWar { player });
                    return War::Decided(Outcome::Winner(player.opponent()));
                }
            }
        }

        let face_down = self.options.war_face_down;
        for player in [Player::One, Player::Two] {
            let before = pile.len();
            let hand = self.hand_mut(player);
            pile.extend(core::iter::from_fn(|| hand.play_card()).take(face_down));
            self.sink.emit(GameEvent::CardsFaceDown {
                player,
                count: pile.len() - before,
            });
        }

        match self.draw(pile) {
            Draw::Short(short) => {
                self.sink
                    .emit(GameEvent::OutOfCardsDuringWar { player: short });
                War::Decided(short.map_or(Outcome::Tie, |player| {
                    Outcome::Winner(player.opponent())
                }))
            }
            Draw::Both(card1, card2) => {
                log::trace!("round {}: war {card1} vs {card2}", self.rounds);
                self.sink.emit(GameEvent::WarCardPlayed {
                    player: Player::One,
                    card: card1,
                });
                self.sink.emit(GameEvent::WarCardPlayed {
                    player: Player::Two,
                    card: card2,
                });
                pile.extend([card1, card2]);
                War::Continue(card1, card2)
            }
        }
    }

    /// Draws one card from each hand.
    ///
    /// If only one hand is empty, the other player's card is pushed onto
    /// `pile` so it is settled with the rest of the cards in play.
    fn draw(&mut self, pile: &mut Vec<Card>) -> Draw {
        if self.player1.is_empty() && self.player2.is_empty() {
            return Draw::Short(None);
        }
        match (self.player1.play_card(), self.player2.play_card()) {
            (Some(card1), Some(card2)) => Draw::Both(card1, card2),
            (None, card2) => {
                pile.extend(card2);
                Draw::Short(Some(Player::One))
            }
            (Some(card1), None) => {
                pile.push(card1);
                Draw::Short(Some(Player::Two))
            }
        }
    }

    /// Gives the whole pile to the round winner.
    fn award(&mut self, player: Player, pile: Vec<Card>) {
        let won = pile.len();
        self.hand_mut(player).add_cards(pile);
        self.state = GameState::RoundStart;

        let (player1, player2) = (self.player1.count(), self.player2.count());
        log::debug!(
            "round {}: {player} wins {won} cards ({player1} vs {player2})",
            self.rounds
        );
        self.sink.emit(GameEvent::RoundWon {
            player,
            pile: won,
            player1,
            player2,
        });
    }

    /// Ends the game. Cards still in play go to the winner; a tie discards them.
    fn finish(&mut self, outcome: Outcome, pile: Vec<Card>) -> Outcome {
        match outcome.winner() {
            Some(player) => self.hand_mut(player).add_cards(pile),
            None => self.discarded += pile.len(),
        }
        self.state = GameState::GameOver;
        self.finished = Some((outcome, Termination::Natural));
        outcome
    }

    fn decide_by_hand_size(&mut self, limit: u32) -> Outcome {
        log::info!("round limit of {limit} reached, deciding by hand size");
        self.sink.emit(GameEvent::RoundLimitReached { limit });

        let outcome = match self.player1.count().cmp(&self.player2.count()) {
            Ordering::Greater => Outcome::Winner(Player::One),
            Ordering::Less => Outcome::Winner(Player::Two),
            Ordering::Equal => Outcome::Tie,
        };
        self.state = GameState::GameOver;
        self.finished = Some((outcome, Termination::RoundLimit));
        outcome
    }
}
