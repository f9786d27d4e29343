//! Per-game counters and the cards revealed in the current turn.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::CardHandle;

/// A face-up card that has not been paired yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealedCard {
    /// Where the card sits on the table.
    pub handle: CardHandle,
    /// The card itself.
    pub card: Card,
}

/// Game counters and the revealed cards of the current turn.
///
/// A plain state container: the turn controller decides when each
/// accessor is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    revealed: Vec<RevealedCard>,
    score: u32,
    tried_times: u32,
    pairs_found: usize,
}

impl Model {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self {
            revealed: Vec::with_capacity(2),
            ..Self::default()
        }
    }

    /// Records a newly revealed card.
    pub fn push_revealed(&mut self, revealed: RevealedCard) {
        debug_assert!(self.revealed.len() < 2, "at most two cards are revealed per turn");
        self.revealed.push(revealed);
    }

    /// Forgets the revealed cards.
    pub fn clear_revealed(&mut self) {
        self.revealed.clear();
    }

    /// Returns the revealed cards in reveal order.
    #[must_use]
    pub fn revealed(&self) -> &[RevealedCard] {
        &self.revealed
    }

    /// Returns the handles of both revealed cards once a pair is showing.
    #[must_use]
    pub fn revealed_pair(&self) -> Option<[CardHandle; 2]> {
        match self.revealed.as_slice() {
            [first, second] => Some([first.handle, second.handle]),
            _ => None,
        }
    }

    /// Returns whether the two revealed cards share a rank.
    ///
    /// Calling this with fewer than two revealed cards is a logic error;
    /// it then returns `false`.
    #[must_use]
    pub fn revealed_cards_match(&self) -> bool {
        debug_assert_eq!(self.revealed.len(), 2, "comparison needs two revealed cards");
        match self.revealed.as_slice() {
            [first, second] => first.card.matches(second.card),
            _ => false,
        }
    }

    /// Returns the score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Adds `award` to the score and returns the new score.
    pub const fn add_score(&mut self, award: u32) -> u32 {
        self.score = self.score.saturating_add(award);
        self.score
    }

    /// Returns the number of completed pair attempts.
    #[must_use]
    pub const fn tried_times(&self) -> u32 {
        self.tried_times
    }

    /// Counts one more pair attempt and returns the new count.
    pub const fn increment_tried_times(&mut self) -> u32 {
        self.tried_times = self.tried_times.saturating_add(1);
        self.tried_times
    }

    /// Returns the number of pairs matched so far.
    #[must_use]
    pub const fn pairs_found(&self) -> usize {
        self.pairs_found
    }

    /// Counts one more matched pair and returns the new count.
    pub const fn increment_pairs_found(&mut self) -> usize {
        self.pairs_found += 1;
        self.pairs_found
    }
}
