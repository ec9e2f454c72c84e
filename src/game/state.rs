//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The deck is being dealt.
    Dealing,
    /// Waiting for the next round to start.
    RoundStart,
    /// A war is being resolved.
    War,
    /// The game has reached a terminal outcome.
    GameOver,
}
