//! A higher-or-lower card guessing game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the round flow: show a card,
//! settle "higher" or "lower" guesses against freshly drawn cards, and keep
//! score until the first wrong guess. A [`Session`] tracks the one-shot
//! identity handshake with the host platform, and [`View`] turns both into
//! what the activity screen displays.
//!
//! # Example
//!
//! ```
//! use hilo::{Game, GameOptions, Guess, Status};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start();
//! let round = game.guess(Guess::Higher).expect("game in progress");
//! assert_eq!(round.index, 1);
//! assert_ne!(game.status(), Status::Idle);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod options;
pub mod round;
pub mod session;
pub mod source;
mod sync;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, SuitColor};
pub use error::{SessionError, UnknownStep};
pub use game::{Game, GameState, Status};
pub use options::{GameOptions, SessionConfig};
pub use round::{Guess, LastRound, Round, RoundOutcome};
pub use session::{ActivityHost, Connection, ConnectionStatus, HandshakeStep, Profile, Session};
pub use source::{CardSource, RandomCards, ScriptedCards, draw_card, draw_different_card};
pub use view::View;
