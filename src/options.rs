//! Game configuration options.

/// Configuration options for a game of War.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warsim::GameOptions;
///
/// let options = GameOptions::default()
///     .with_round_limit(500)
///     .with_war_face_down(3);
/// assert_eq!(options.war_threshold(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Maximum number of rounds before hand sizes decide the game.
    /// A limit of zero behaves like a limit of one.
    pub round_limit: u32,
    /// Cards each player commits face down in a war.
    pub war_face_down: usize,
    /// Whether a player short of `war_face_down + 1` cards loses when a war
    /// is declared. When disabled, players commit what they have and a failed
    /// comparison draw decides the game.
    pub require_full_war: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            round_limit: 10_000,
            war_face_down: 3,
            require_full_war: true,
        }
    }
}

impl GameOptions {
    /// Sets the round limit.
    #[must_use]
    pub const fn with_round_limit(mut self, round_limit: u32) -> Self {
        self.round_limit = round_limit;
        self
    }

    /// Sets how many cards each player commits face down in a war.
    #[must_use]
    pub const fn with_war_face_down(mut self, war_face_down: usize) -> Self {
        self.war_face_down = war_face_down;
        self
    }

    /// Sets whether players need a full war's worth of cards.
    #[must_use]
    pub const fn with_require_full_war(mut self, require_full_war: bool) -> Self {
        self.require_full_war = require_full_war;
        self
    }

    /// Minimum cards a player must hold to fight a war: the face-down cards
    /// plus one comparison card.
    #[must_use]
    pub const fn war_threshold(&self) -> usize {
        self.war_face_down.saturating_add(1)
    }
}
