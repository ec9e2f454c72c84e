//! Player identities and game result types.

use core::fmt;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player 1, who plays first in every exchange.
    One,
    /// Player 2.
    Two,
}

impl Player {
    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Returns the display name of the player.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::One => "Player 1",
            Self::Two => "Player 2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Terminal outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A player won.
    Winner(Player),
    /// Nobody won.
    Tie,
}

impl Outcome {
    /// Returns the winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Winner(player) => Some(player),
            Self::Tie => None,
        }
    }
}

/// How a game reached its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// A hand ran out or a war could not be fought.
    Natural,
    /// The round limit was hit and hand sizes decided the game.
    RoundLimit,
}

/// Summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// The outcome.
    pub outcome: Outcome,
    /// Whether the game ended naturally or by the round limit.
    pub termination: Termination,
    /// Number of rounds started.
    pub rounds: u32,
    /// Cards left in Player 1's hand.
    pub player1_cards: usize,
    /// Cards left in Player 2's hand.
    pub player2_cards: usize,
    /// Cards discarded by a war that exhausted both hands.
    pub discarded: usize,
}
