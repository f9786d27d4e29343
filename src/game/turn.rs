use crate::card::PAIR_COUNT;
use crate::deck::{CardHandle, Deck, Face};
use crate::error::{ClickError, ResetError};
use crate::model::{Model, RevealedCard};
use crate::result::{ClickOutcome, IgnoreReason};

use super::{Command, GameSession, GameState};

impl GameSession {
    /// Handles a click on the card at `handle`.
    ///
    /// Face-down cards are revealed while the controller waits for the first
    /// or second card of a turn. Revealing the second card counts one attempt
    /// and resolves the turn: a matching rank awards points and pairs both
    /// cards, a mismatch plays the mismatch animation and asks the runtime to
    /// call [`GameSession::reset_revealed`] after the configured delay.
    ///
    /// Clicks on face-up or paired cards, clicks while a reset is pending,
    /// and clicks after the game has finished change nothing and return
    /// [`ClickOutcome::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns an error if no card exists at `handle`.
    pub fn click(&self, handle: CardHandle) -> Result<ClickOutcome, ClickError> {
        let mut state = self.state.lock();
        let mut deck = self.deck.lock();
        let slot = *deck.get(handle).ok_or(ClickError::CardNotFound)?;

        let ignored = match *state {
            GameState::GameFinished => Some(IgnoreReason::GameFinished),
            GameState::CardsMatched | GameState::CardsMatchFailed => {
                Some(IgnoreReason::ResetPending)
            }
            GameState::FirstCardAwaits | GameState::SecondCardAwaits => {
                (slot.face != Face::Down).then_some(IgnoreReason::FaceUp)
            }
        };
        if let Some(reason) = ignored {
            tracing::trace!(position = handle.position(), ?reason, "click ignored");
            return Ok(ClickOutcome::Ignored(reason));
        }

        let mut model = self.model.lock();
        deck.set_face(handle, Face::Up);
        model.push_revealed(RevealedCard {
            handle,
            card: slot.card,
        });
        self.emit(Command::FlipCard(handle));
        tracing::debug!(
            position = handle.position(),
            card = slot.card.index(),
            "card revealed"
        );

        if *state == GameState::FirstCardAwaits {
            *state = GameState::SecondCardAwaits;
            return Ok(ClickOutcome::Revealed);
        }

        let tried_times = model.increment_tried_times();
        self.emit(Command::RenderTriedTimes(tried_times));

        if model.revealed_cards_match() {
            *state = GameState::CardsMatched;
            let (score, finished) = self.award_pair(&mut deck, &mut model);
            *state = if finished {
                GameState::GameFinished
            } else {
                GameState::FirstCardAwaits
            };
            return Ok(ClickOutcome::Matched { score, finished });
        }

        *state = GameState::CardsMatchFailed;
        if let Some(pair) = model.revealed_pair() {
            self.emit(Command::PlayMismatchAnimation(pair));
        }
        let reset_after = self.options.mismatch_delay;
        self.emit(Command::ScheduleReset(reset_after));
        tracing::debug!(tried_times, ?reset_after, "pair mismatched");

        Ok(ClickOutcome::Mismatched { reset_after })
    }

    /// Flips a mismatched pair back face-down.
    ///
    /// This is the callback for [`Command::ScheduleReset`]. Once it returns,
    /// the controller accepts clicks again.
    ///
    /// # Errors
    ///
    /// Returns an error if no mismatch reset is pending.
    pub fn reset_revealed(&self) -> Result<(), ResetError> {
        let mut state = self.state.lock();
        if *state != GameState::CardsMatchFailed {
            return Err(ResetError::NoPendingReset);
        }

        let mut deck = self.deck.lock();
        let mut model = self.model.lock();
        for revealed in model.revealed() {
            deck.set_face(revealed.handle, Face::Down);
            self.emit(Command::FlipCard(revealed.handle));
        }
        model.clear_revealed();
        *state = GameState::FirstCardAwaits;
        tracing::debug!("mismatched pair flipped back");

        Ok(())
    }

    /// Scores the revealed pair and marks it paired.
    ///
    /// Returns the new score and whether the deck is cleared.
    fn award_pair(&self, deck: &mut Deck, model: &mut Model) -> (u32, bool) {
        let score = model.add_score(self.options.match_award);
        self.emit(Command::RenderScore(score));

        if let Some(pair) = model.revealed_pair() {
            for handle in pair {
                deck.set_face(handle, Face::Paired);
            }
            self.emit(Command::MarkPaired(pair));
        }
        model.clear_revealed();

        let pairs_found = model.increment_pairs_found();
        debug_assert_eq!(deck.paired_count(), pairs_found * 2);
        tracing::debug!(score, pairs_found, "pair matched");

        let finished = pairs_found == PAIR_COUNT;
        if finished {
            debug_assert_eq!(score, self.options.terminal_score());
            self.emit(Command::ShowGameFinished);
            tracing::info!(score, tried_times = model.tried_times(), "game finished");
        }

        (score, finished)
    }
}
