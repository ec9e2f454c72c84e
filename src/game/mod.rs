//! Game engine and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::SetupError;
use crate::event::EventSink;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{GameResult, Outcome, Player, Termination};

mod deal;
mod round;
pub mod state;

pub use state::GameState;

/// A game of War between two players.
///
/// The game owns both hands for its whole lifetime and reports every step
/// to its [`EventSink`]. Use [`GameOptions`] to configure the round limit
/// and war rules.
#[derive(Debug)]
pub struct Game<S> {
    /// Player 1's hand.
    player1: Hand,
    /// Player 2's hand.
    player2: Hand,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Rounds started so far.
    rounds: u32,
    /// Cards in play when the game was set up.
    total: usize,
    /// Cards discarded by an exhausted war.
    discarded: usize,
    /// Outcome and how it was reached, once the game is over.
    finished: Option<(Outcome, Termination)>,
    /// Receiver of game events.
    sink: S,
}

impl<S: EventSink> Game<S> {
    /// Creates a new game, shuffling and dealing a deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use warsim::{Game, GameOptions, NullSink, Player};
    ///
    /// let game = Game::new(GameOptions::default(), 42, NullSink);
    /// assert_eq!(game.hand(Player::One).count(), 26);
    /// assert_eq!(game.hand(Player::Two).count(), 26);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64, sink: S) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(options, &mut rng, sink)
    }

    /// Creates a new game, shuffling the deck with the given random source.
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(options: GameOptions, rng: &mut R, sink: S) -> Self {
        let deck = Deck::build_and_shuffle(rng);
        let mut game = Self::empty(options, sink);
        game.deal(deck);
        game
    }

    /// Creates a new game dealt from a fixed deck.
    ///
    /// Cards are dealt alternately, Player 1 first, until the deck is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck contains the same card twice.
    pub fn from_deck(options: GameOptions, deck: Deck, sink: S) -> Result<Self, SetupError> {
        check_unique(deck.cards())?;
        let mut game = Self::empty(options, sink);
        game.deal(deck);
        Ok(game)
    }

    /// Creates a game from two prepared hands, skipping the shuffle and deal.
    ///
    /// # Errors
    ///
    /// Returns an error if a card appears more than once across both hands.
    pub fn from_hands(
        options: GameOptions,
        player1: Hand,
        player2: Hand,
        sink: S,
    ) -> Result<Self, SetupError> {
        check_unique(player1.cards().chain(player2.cards()))?;
        let mut game = Self::empty(options, sink);
        game.player1 = player1;
        game.player2 = player2;
        game.finish_dealing();
        Ok(game)
    }

    const fn empty(options: GameOptions, sink: S) -> Self {
        Self {
            player1: Hand::new(),
            player2: Hand::new(),
            options,
            state: GameState::Dealing,
            rounds: 0,
            total: 0,
            discarded: 0,
            finished: None,
            sink,
        }
    }

    /// Returns the hand of the given player.
    #[must_use]
    pub const fn hand(&self, player: Player) -> &Hand {
        match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
        }
    }

    const fn hand_mut(&mut self, player: Player) -> &mut Hand {
        match player {
            Player::One => &mut self.player1,
            Player::Two => &mut self.player2,
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of rounds started so far.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns the outcome, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.finished.map(|(outcome, _)| outcome)
    }

    /// Returns the summary of a finished game, or `None` while it is running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.finished
            .map(|(outcome, termination)| self.summary(outcome, termination))
    }

    /// Returns the number of cards held by both players.
    ///
    /// Between rounds this equals the number of cards dealt, minus any cards
    /// discarded by a war that exhausted both hands.
    #[must_use]
    pub fn cards_in_hands(&self) -> usize {
        self.player1.count() + self.player2.count()
    }

    /// Returns the number of cards discarded by an exhausted war.
    #[must_use]
    pub const fn discarded(&self) -> usize {
        self.discarded
    }

    /// Returns the event sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the event sink mutably.
    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the game and returns its event sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn summary(&self, outcome: Outcome, termination: Termination) -> GameResult {
        GameResult {
            outcome,
            termination,
            rounds: self.rounds,
            player1_cards: self.player1.count(),
            player2_cards: self.player2.count(),
            discarded: self.discarded,
        }
    }
}

fn check_unique<'a>(cards: impl Iterator<Item = &'a Card>) -> Result<(), SetupError> {
    let mut seen = [false; DECK_SIZE];
    for card in cards {
        let slot = &mut seen[card.index()];
        if *slot {
            return Err(SetupError::DuplicateCard(*card));
        }
        *slot = true;
    }
    Ok(())
}
