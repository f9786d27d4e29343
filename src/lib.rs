//! A memory-matching (concentration) card game engine with optional `no_std`
//! support.
//!
//! A 52-card deck is dealt face-down. Each turn the player reveals two
//! cards; equal ranks score and stay paired, different ranks flip back after
//! a short delay. The crate provides a [`GameSession`] that runs the turn
//! state machine and emits [`Command`]s for whatever front-end draws the
//! table.
//!
//! # Example
//!
//! ```
//! use concentration::{CardHandle, ClickOutcome, GameOptions, GameSession};
//!
//! let session = GameSession::new(GameOptions::default(), 42);
//! let outcome = session.click(CardHandle::new(0)).unwrap();
//! assert_eq!(outcome, ClickOutcome::Revealed);
//! assert_eq!(session.tried_times(), 0);
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
pub mod game;
pub mod model;
pub mod options;
pub mod result;
pub mod shuffle;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, PAIR_COUNT, RANKS, Suit};
pub use deck::{CardHandle, CardSlot, Deck, Face};
pub use error::{ClickError, DeckError, ResetError};
pub use game::{Command, GameSession, GameState};
pub use model::{Model, RevealedCard};
pub use options::GameOptions;
pub use result::{ClickOutcome, IgnoreReason};
