//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when a card is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClickError {
    /// No card exists at the given handle.
    #[error("card not found")]
    CardNotFound,
}

/// Errors that can occur when the mismatch reset fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResetError {
    /// No mismatch reset is pending.
    #[error("no reset is pending")]
    NoPendingReset,
}

/// Errors that can occur when building a deck from an explicit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The order does not contain exactly one entry per card.
    #[error("expected {expected} cards, got {actual}")]
    WrongLength {
        /// Required number of cards.
        expected: usize,
        /// Number of cards supplied.
        actual: usize,
    },
    /// A card index is not below the deck size.
    #[error("card index {0} is out of range")]
    OutOfRange(u8),
    /// A card index appears more than once.
    #[error("card index {0} appears more than once")]
    Duplicate(u8),
}
