//! CLI concentration example.

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use concentration::{
    CardHandle, CardSlot, ClickOutcome, Command, DECK_SIZE, Face, GameOptions, GameSession,
};
use tracing_subscriber::EnvFilter;

const COLUMNS: usize = 13;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("Concentration CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = GameSession::new(GameOptions::default(), seed);

    loop {
        let finished = apply_commands(&game);
        print_table(&game.cards());
        if finished {
            break;
        }

        let Some(position) = prompt_position(&format!("Card (0-{}): ", DECK_SIZE - 1)) else {
            println!("Goodbye.");
            return;
        };

        match game.click(CardHandle::new(position)) {
            Ok(ClickOutcome::Ignored(reason)) => println!("Ignored: {reason:?}"),
            Ok(ClickOutcome::Matched { .. }) => println!("Match!"),
            Ok(ClickOutcome::Mismatched { .. }) => println!("No match."),
            Ok(ClickOutcome::Revealed) => {}
            Err(err) => println!("Click error: {err}"),
        }
    }

    println!(
        "Complete! Score {} in {} tries.",
        game.score(),
        game.tried_times()
    );
}

/// Replays queued commands. Returns `true` once the game has finished.
fn apply_commands(game: &GameSession) -> bool {
    let mut finished = false;

    for command in game.drain_commands() {
        match command {
            Command::RenderScore(score) => println!("Score: {score}"),
            Command::RenderTriedTimes(times) => println!("You've tried: {times} times"),
            Command::PlayMismatchAnimation(_) => print_table(&game.cards()),
            Command::ScheduleReset(delay) => {
                thread::sleep(delay);
                if let Err(err) = game.reset_revealed() {
                    println!("Reset error: {err}");
                }
            }
            Command::ShowGameFinished => finished = true,
            Command::RenderDeck(_) | Command::FlipCard(_) | Command::MarkPaired(_) => {}
        }
    }

    finished
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_position(prompt: &str) -> Option<u8> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() || input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u8>() {
            Ok(value) if (value as usize) < DECK_SIZE => return Some(value),
            _ => println!("Please enter a card number."),
        }
    }
}

fn print_table(slots: &[CardSlot]) {
    println!();
    for (row, chunk) in slots.chunks(COLUMNS).enumerate() {
        let line = chunk
            .iter()
            .enumerate()
            .map(|(column, slot)| format_slot(row * COLUMNS + column, slot))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{line}");
    }
    println!();
}

fn format_slot(position: usize, slot: &CardSlot) -> String {
    match slot.face {
        Face::Down => format!("[{position:>2} ]"),
        Face::Up => format!("[{:>2}{}]", slot.card.display_rank(), slot.card.suit().symbol()),
        Face::Paired => colorize(
            &format!("[{:>2}{}]", slot.card.display_rank(), slot.card.suit().symbol()),
            "90",
        ),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
