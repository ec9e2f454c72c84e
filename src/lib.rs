//! A deterministic simulation engine for the two-player card game War.
//!
//! The crate provides a [`Game`] type that shuffles and deals a 52-card deck,
//! resolves rounds and wars, and reports every step to an [`EventSink`].
//! Rendering those events is left to the caller.
//!
//! # Example
//!
//! ```
//! use warsim::{Game, GameOptions, NullSink};
//!
//! let mut game = Game::new(GameOptions::default(), 42, NullSink);
//! let result = game.play_game();
//! assert!(result.rounds <= 10_000);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::SetupError;
pub use event::{EventSink, GameEvent, NullSink};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{GameResult, Outcome, Player, Termination};
