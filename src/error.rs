//! Error types for game construction.
//!
//! Playing a game never fails: running out of cards is an outcome, not an
//! error. These errors only cover invalid setups.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while setting up a game from fixed cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The same card appears more than once.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}
