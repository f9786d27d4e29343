//! Render commands sent from the engine to the presentation layer.

use alloc::vec::Vec;
use core::time::Duration;

use crate::card::Card;
use crate::deck::CardHandle;

/// An instruction for the presentation layer.
///
/// Commands are queued by [`GameSession`](crate::GameSession) and pulled with
/// [`GameSession::drain_commands`](crate::GameSession::drain_commands) in the
/// order they were issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Lay out the deck face-down; position `i` holds the card for handle `i`.
    RenderDeck(Vec<Card>),
    /// Turn a card over (face-down to face-up or back).
    FlipCard(CardHandle),
    /// Mark both cards as permanently matched.
    MarkPaired([CardHandle; 2]),
    /// Show the current score.
    RenderScore(u32),
    /// Show the number of completed attempts.
    RenderTriedTimes(u32),
    /// Play the mismatch animation on both cards.
    PlayMismatchAnimation([CardHandle; 2]),
    /// Call [`GameSession::reset_revealed`](crate::GameSession::reset_revealed)
    /// once the delay has elapsed.
    ScheduleReset(Duration),
    /// Show the completion banner.
    ShowGameFinished,
}
