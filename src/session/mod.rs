//! Game session: tile selection, word commits, scoring and local stats

mod game;
mod scoring;
mod stats;

pub use game::{Game, PlayedWord, SubmitError, SubmitOutcome};
pub use scoring::{ALL_LETTERS_BONUS, MAGIC_WORDS, is_magic_word, letter_points, word_points};
pub use stats::Stats;
