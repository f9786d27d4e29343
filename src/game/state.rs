//! Turn controller states.

/// Turn controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Waiting for the first card of a turn.
    #[default]
    FirstCardAwaits,
    /// One card is face-up; waiting for the second.
    SecondCardAwaits,
    /// The revealed pair matched. Transient: the same click moves on to
    /// `FirstCardAwaits` or `GameFinished`.
    CardsMatched,
    /// The revealed pair did not match and is waiting to flip back.
    CardsMatchFailed,
    /// Every pair has been found.
    GameFinished,
}

impl GameState {
    /// Returns the state name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstCardAwaits => "FirstCardAwaits",
            Self::SecondCardAwaits => "SecondCardAwaits",
            Self::CardsMatched => "CardsMatched",
            Self::CardsMatchFailed => "CardsMatchFailed",
            Self::GameFinished => "GameFinished",
        }
    }
}
