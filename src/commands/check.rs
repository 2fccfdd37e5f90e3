//! Word check command
//!
//! Answers whether a word is playable on a rack without starting a game.

use crate::core::Rack;
use crate::dictionary::Lexicon;
use crate::session::{is_magic_word, word_points};

/// Result of checking one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub word: String,
    /// In the dictionary
    pub valid: bool,
    /// Can be spelled from the rack's letters
    pub spellable: bool,
    pub points: u32,
    pub magic: bool,
}

impl CheckResult {
    /// Whether the word could be played on a fresh board
    #[must_use]
    pub const fn playable(&self) -> bool {
        self.valid && self.spellable
    }
}

/// Check a word against a lexicon and a rack
///
/// # Errors
///
/// Returns an error if the word is empty or contains anything but letters.
pub fn check_word<L: Lexicon>(word: &str, rack: &Rack, lexicon: &L) -> Result<CheckResult, String> {
    let word = word.trim();
    if word.is_empty() {
        return Err("No word given".to_string());
    }
    if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(format!("Invalid word '{word}': letters only"));
    }

    let word = word.to_ascii_uppercase();
    Ok(CheckResult {
        valid: word.len() >= 2 && lexicon.is_valid_word(&word),
        spellable: rack.can_spell(&word),
        points: word_points(&word),
        magic: is_magic_word(&word),
        word,
    })
}
