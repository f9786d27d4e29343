//! Outcome types returned by the turn controller.

use core::time::Duration;

/// Why a click did not change the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The card is already face-up or paired.
    FaceUp,
    /// A mismatched pair is still waiting to flip back.
    ResetPending,
    /// The game is over.
    GameFinished,
}

/// Result of a single click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing happened.
    Ignored(IgnoreReason),
    /// The first card of the turn was revealed.
    Revealed,
    /// The second card matched the first.
    Matched {
        /// Score after the award.
        score: u32,
        /// Whether this pair finished the game.
        finished: bool,
    },
    /// The second card did not match; the pair flips back once
    /// `reset_after` has elapsed and the runtime calls
    /// [`GameSession::reset_revealed`](crate::GameSession::reset_revealed).
    Mismatched {
        /// Delay before the reset should fire.
        reset_after: Duration,
    },
}

impl ClickOutcome {
    /// Returns whether the click was ignored.
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}
