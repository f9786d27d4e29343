//! Game configuration options.

use core::time::Duration;

use crate::card::PAIR_COUNT;

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use concentration::GameOptions;
/// use core::time::Duration;
///
/// let options = GameOptions::default()
///     .with_match_award(5)
///     .with_mismatch_delay(Duration::from_millis(600));
/// assert_eq!(options.terminal_score(), 130);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Points awarded per matched pair.
    pub match_award: u32,
    /// How long a mismatched pair stays face-up before flipping back.
    pub mismatch_delay: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            match_award: 10,
            mismatch_delay: Duration::from_millis(1000),
        }
    }
}

impl GameOptions {
    /// Sets the points awarded per matched pair.
    ///
    /// # Example
    ///
    /// ```
    /// use concentration::GameOptions;
    ///
    /// let options = GameOptions::default().with_match_award(20);
    /// assert_eq!(options.match_award, 20);
    /// ```
    #[must_use]
    pub const fn with_match_award(mut self, award: u32) -> Self {
        self.match_award = award;
        self
    }

    /// Sets the delay before a mismatched pair flips back.
    ///
    /// # Example
    ///
    /// ```
    /// use concentration::GameOptions;
    /// use core::time::Duration;
    ///
    /// let options = GameOptions::default().with_mismatch_delay(Duration::ZERO);
    /// assert_eq!(options.mismatch_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Returns the score reached once every pair is matched.
    ///
    /// # Example
    ///
    /// ```
    /// use concentration::GameOptions;
    ///
    /// assert_eq!(GameOptions::default().terminal_score(), 260);
    /// ```
    #[must_use]
    pub const fn terminal_score(&self) -> u32 {
        self.match_award.saturating_mul(PAIR_COUNT as u32)
    }
}
