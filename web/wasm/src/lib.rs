use concentration::{
    Card, CardHandle, CardSlot, ClickOutcome, Command, Face, GameOptions, GameSession,
    IgnoreReason, ResetError,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Browser-facing game. The page keeps one card element per handle, replays
/// the commands from `drain_commands`, and answers every `ScheduleReset`
/// with `setTimeout(() => game.reset_revealed(command.generation), delay_ms)`.
///
/// `reset` starts a new game in place. Timers already scheduled by the
/// previous game cannot be cancelled, so each `ScheduleReset` carries the
/// generation it belongs to and stale generations are ignored.
#[wasm_bindgen]
pub struct WasmGame {
    session: GameSession,
    generation: u32,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            session: GameSession::new(GameOptions::default(), seed as u64),
            generation: 0,
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.session = GameSession::new(GameOptions::default(), seed as u64);
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn click(&self, handle: u32) -> Result<JsValue, JsValue> {
        let handle = to_handle(handle)?;
        let outcome = self.session.click(handle).map_err(js_err)?;
        to_js_value(&JsOutcome::from(outcome))
    }

    /// Returns `false` when the timer belonged to an earlier game.
    pub fn reset_revealed(&self, generation: u32) -> Result<bool, JsValue> {
        self.fire_reset(generation).map_err(js_err)
    }

    pub fn drain_commands(&self) -> Result<JsValue, JsValue> {
        let commands: Vec<JsCommand> = self
            .session
            .drain_commands()
            .into_iter()
            .map(|command| JsCommand::new(command, self.generation))
            .collect();
        to_js_value(&commands)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            state: self.session.state().name(),
            score: self.session.score(),
            tried_times: self.session.tried_times(),
            terminal_score: self.session.terminal_score(),
            pending_reset_ms: self
                .session
                .pending_reset()
                .map(|delay| delay.as_millis() as u32),
            cards: self
                .session
                .cards()
                .into_iter()
                .enumerate()
                .map(|(handle, slot)| JsSlot::from_slot(handle as u32, slot))
                .collect(),
        };

        to_js_value(&snapshot)
    }
}

impl WasmGame {
    fn fire_reset(&self, generation: u32) -> Result<bool, ResetError> {
        if generation != self.generation {
            return Ok(false);
        }
        self.session.reset_revealed().map(|()| true)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    score: u32,
    tried_times: u32,
    terminal_score: u32,
    pending_reset_ms: Option<u32>,
    cards: Vec<JsSlot>,
}

#[derive(Serialize)]
struct JsCard {
    index: u8,
    rank: u8,
    suit: &'static str,
}

#[derive(Serialize)]
struct JsSlot {
    handle: u32,
    card: JsCard,
    face: &'static str,
}

impl JsSlot {
    fn from_slot(handle: u32, slot: CardSlot) -> Self {
        Self {
            handle,
            card: card_to_js(slot.card),
            face: face_to_str(slot.face),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsOutcome {
    Ignored { reason: &'static str },
    Revealed,
    Matched { score: u32, finished: bool },
    Mismatched { reset_after_ms: u32 },
}

impl From<ClickOutcome> for JsOutcome {
    fn from(outcome: ClickOutcome) -> Self {
        match outcome {
            ClickOutcome::Ignored(reason) => Self::Ignored {
                reason: reason_to_str(reason),
            },
            ClickOutcome::Revealed => Self::Revealed,
            ClickOutcome::Matched { score, finished } => Self::Matched { score, finished },
            ClickOutcome::Mismatched { reset_after } => Self::Mismatched {
                reset_after_ms: reset_after.as_millis() as u32,
            },
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsCommand {
    RenderDeck { cards: Vec<JsCard> },
    FlipCard { handle: u32 },
    MarkPaired { handles: [u32; 2] },
    RenderScore { score: u32 },
    RenderTriedTimes { tried_times: u32 },
    PlayMismatchAnimation { handles: [u32; 2] },
    ScheduleReset { delay_ms: u32, generation: u32 },
    ShowGameFinished,
}

impl JsCommand {
    fn new(command: Command, generation: u32) -> Self {
        match command {
            Command::RenderDeck(cards) => Self::RenderDeck {
                cards: cards.into_iter().map(card_to_js).collect(),
            },
            Command::FlipCard(handle) => Self::FlipCard {
                handle: handle_to_js(handle),
            },
            Command::MarkPaired(handles) => Self::MarkPaired {
                handles: handles.map(handle_to_js),
            },
            Command::RenderScore(score) => Self::RenderScore { score },
            Command::RenderTriedTimes(tried_times) => Self::RenderTriedTimes { tried_times },
            Command::PlayMismatchAnimation(handles) => Self::PlayMismatchAnimation {
                handles: handles.map(handle_to_js),
            },
            Command::ScheduleReset(delay) => Self::ScheduleReset {
                delay_ms: delay.as_millis() as u32,
                generation,
            },
            Command::ShowGameFinished => Self::ShowGameFinished,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        index: card.index(),
        rank: card.display_rank(),
        suit: card.suit().name(),
    }
}

fn handle_to_js(handle: CardHandle) -> u32 {
    handle.position() as u32
}

fn to_handle(handle: u32) -> Result<CardHandle, JsValue> {
    u8::try_from(handle)
        .map(CardHandle::new)
        .map_err(|_| JsValue::from_str("card not found"))
}

fn face_to_str(face: Face) -> &'static str {
    match face {
        Face::Down => "Down",
        Face::Up => "Up",
        Face::Paired => "Paired",
    }
}

fn reason_to_str(reason: IgnoreReason) -> &'static str {
    match reason {
        IgnoreReason::FaceUp => "FaceUp",
        IgnoreReason::ResetPending => "ResetPending",
        IgnoreReason::GameFinished => "GameFinished",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[cfg(test)]
mod tests {
    use concentration::{CardHandle, ClickOutcome, GameState, ResetError};

    use super::WasmGame;

    /// Returns two handles whose cards differ in rank.
    fn mismatched_pair(game: &WasmGame) -> [CardHandle; 2] {
        let cards = game.session.cards();
        let first = cards[0].card;
        let second = cards
            .iter()
            .position(|slot| !slot.card.matches(first))
            .unwrap();
        [CardHandle::new(0), CardHandle::new(second as u8)]
    }

    fn mismatch(game: &WasmGame) {
        let [first, second] = mismatched_pair(game);
        game.session.click(first).unwrap();
        let outcome = game.session.click(second).unwrap();
        assert!(matches!(outcome, ClickOutcome::Mismatched { .. }));
    }

    #[test]
    fn timer_from_previous_game_is_ignored() {
        let mut game = WasmGame::new(1);
        mismatch(&game);
        let stale = game.generation();

        game.reset(2);
        mismatch(&game);
        let current = game.generation();
        assert_ne!(stale, current);

        assert_eq!(game.fire_reset(stale), Ok(false));
        assert_eq!(game.session.state(), GameState::CardsMatchFailed);
        assert_eq!(game.session.revealed().len(), 2);

        assert_eq!(game.fire_reset(current), Ok(true));
        assert_eq!(game.session.state(), GameState::FirstCardAwaits);
        assert_eq!(game.fire_reset(current), Err(ResetError::NoPendingReset));
    }
}
