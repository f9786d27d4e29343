//! Game session and turn controller.

use alloc::vec::Vec;
use core::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::{CardHandle, CardSlot, Deck, Face};
use crate::model::{Model, RevealedCard};
use crate::options::GameOptions;

pub mod command;
pub mod state;
mod turn;

pub use command::Command;
pub use state::GameState;

/// A single game of concentration.
///
/// The session owns the dealt deck, the model, and the controller state.
/// Feed it clicks with [`GameSession::click`], call
/// [`GameSession::reset_revealed`] when a scheduled reset fires, and pull
/// render commands with [`GameSession::drain_commands`].
pub struct GameSession {
    /// Game options.
    pub options: GameOptions,
    /// Current controller state.
    state: Mutex<GameState>,
    /// Cards on the table.
    deck: Mutex<Deck>,
    /// Revealed cards and counters.
    model: Mutex<Model>,
    /// Commands waiting for the presentation layer.
    commands: Mutex<Vec<Command>>,
}

impl GameSession {
    /// Creates a new session with a deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use concentration::{GameOptions, GameSession, GameState};
    ///
    /// let session = GameSession::new(GameOptions::default(), 42);
    /// assert_eq!(session.state(), GameState::FirstCardAwaits);
    /// assert_eq!(session.score(), 0);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        tracing::debug!(seed, "dealt shuffled deck");
        Self::with_deck(options, deck)
    }

    /// Creates a new session using an already dealt deck.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck) -> Self {
        let commands = alloc::vec![
            Command::RenderDeck(deck.cards().collect()),
            Command::RenderScore(0),
            Command::RenderTriedTimes(0),
        ];

        Self {
            options,
            state: Mutex::new(GameState::FirstCardAwaits),
            deck: Mutex::new(deck),
            model: Mutex::new(Model::new()),
            commands: Mutex::new(commands),
        }
    }

    /// Returns the current controller state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns whether every pair has been found.
    pub fn is_finished(&self) -> bool {
        self.state() == GameState::GameFinished
    }

    /// Returns the delay of the pending mismatch reset, if any.
    pub fn pending_reset(&self) -> Option<Duration> {
        (self.state() == GameState::CardsMatchFailed).then_some(self.options.mismatch_delay)
    }

    /// Returns the current score.
    pub fn score(&self) -> u32 {
        self.model.lock().score()
    }

    /// Returns the number of completed pair attempts.
    pub fn tried_times(&self) -> u32 {
        self.model.lock().tried_times()
    }

    /// Returns the number of pairs matched so far.
    pub fn pairs_found(&self) -> usize {
        self.model.lock().pairs_found()
    }

    /// Returns the score that ends the game.
    pub const fn terminal_score(&self) -> u32 {
        self.options.terminal_score()
    }

    /// Returns the cards currently face-up and unpaired, in reveal order.
    pub fn revealed(&self) -> Vec<RevealedCard> {
        self.model.lock().revealed().to_vec()
    }

    /// Returns the card at the given handle.
    pub fn card(&self, handle: CardHandle) -> Option<Card> {
        self.deck.lock().get(handle).map(|slot| slot.card)
    }

    /// Returns which side of the card at the given handle is showing.
    pub fn face(&self, handle: CardHandle) -> Option<Face> {
        self.deck.lock().get(handle).map(|slot| slot.face)
    }

    /// Returns a copy of every slot in dealt order.
    pub fn cards(&self) -> Vec<CardSlot> {
        self.deck.lock().slots().to_vec()
    }

    /// Takes every queued command, oldest first.
    pub fn drain_commands(&self) -> Vec<Command> {
        core::mem::take(&mut *self.commands.lock())
    }

    fn emit(&self, command: Command) {
        self.commands.lock().push(command);
    }
}
