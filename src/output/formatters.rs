//! Formatting utilities for terminal output

use chrono::{Local, NaiveDateTime};

/// Tiles per rack row when printing
pub const TILES_PER_ROW: usize = 6;

const DAILY_EMOJIS: [&str; 8] = ["🪄", "✨", "🎩", "🐇", "🔮", "🧙", "⭐", "🌙"];

/// Format rack letters as spaced rows of tiles
///
/// Positions for which `hidden` returns true are shown as `·`.
#[must_use]
pub fn format_tiles(letters: &[u8], hidden: impl Fn(usize) -> bool) -> Vec<String> {
    letters
        .chunks(TILES_PER_ROW)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, &letter)| {
                    if hidden(row * TILES_PER_ROW + col) {
                        '·'
                    } else {
                        char::from(letter)
                    }
                })
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `"1 word"`, `"3 words"`
#[must_use]
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Line telling the player how few words the rack can be cleared in
#[must_use]
pub fn par_message(par: Option<usize>) -> Option<String> {
    par.map(|par| {
        format!(
            "Top players completed this puzzle in {}",
            pluralize(par, "word")
        )
    })
}

/// Text a player can paste to brag about today's result
#[must_use]
pub fn share_text(word_count: usize) -> String {
    format!(
        "I completed today's Spellstacks puzzle in only {}!\n\nCan you do better?",
        pluralize(word_count, "word")
    )
}

/// Time left until the next daily rack, as `"5h 12m"`
#[must_use]
pub fn countdown(now: NaiveDateTime) -> String {
    let next = now
        .date()
        .succ_opt()
        .and_then(|day| day.and_hms_opt(0, 0, 0));

    next.map_or_else(
        || "0h 0m".to_string(),
        |next| {
            let left = next - now;
            format!("{}h {}m", left.num_hours(), left.num_minutes() % 60)
        },
    )
}

/// Completion footer pointing at the next rack
#[must_use]
pub fn next_puzzle_message(now: NaiveDateTime) -> String {
    format!("Next puzzle in {}", countdown(now))
}

/// [`next_puzzle_message`] for the local clock
#[must_use]
pub fn next_puzzle_now() -> String {
    next_puzzle_message(Local::now().naive_local())
}

/// Decoration for a day's puzzle
#[must_use]
pub fn daily_emoji(seed: i64) -> &'static str {
    DAILY_EMOJIS[seed.rem_euclid(DAILY_EMOJIS.len() as i64) as usize]
}
