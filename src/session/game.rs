//! One player's attempt at a daily rack

use super::scoring::{ALL_LETTERS_BONUS, is_magic_word, word_points};
use crate::core::{RACK_SIZE, Rack, compute_date_seed};
use crate::dictionary::Lexicon;
use chrono::NaiveDate;
use std::fmt;

/// Why a submission was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// No tiles selected
    Empty,
    /// The selection does not spell a dictionary word
    NotAWord(String),
    /// The word is already on the board
    AlreadyPlayed(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Select some letters first"),
            Self::NotAWord(word) => write!(f, "{word} is not a valid word"),
            Self::AlreadyPlayed(word) => write!(f, "{word} already used"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Result of an accepted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub word: String,
    /// Letters still unused after this word
    pub remaining: usize,
    /// Whether this word used the last letters on the rack
    pub completed: bool,
    pub magic: bool,
}

/// A committed word and the rack tiles it used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedWord {
    pub word: String,
    pub tiles: Vec<usize>,
}

/// Game state for one rack
///
/// Tiles move from free to the current selection to a committed word. A
/// tile is never in two of those places at once.
#[derive(Debug, Clone)]
pub struct Game<'a, L: Lexicon> {
    date: NaiveDate,
    rack: Rack,
    lexicon: &'a L,
    used: [bool; RACK_SIZE],
    current: Vec<usize>,
    words: Vec<PlayedWord>,
    done: bool,
    previous_words: Option<Vec<String>>,
}

impl<'a, L: Lexicon> Game<'a, L> {
    #[must_use]
    pub fn new(date: NaiveDate, rack: Rack, lexicon: &'a L) -> Self {
        Self {
            date,
            rack,
            lexicon,
            used: [false; RACK_SIZE],
            current: Vec::new(),
            words: Vec::new(),
            done: false,
            previous_words: None,
        }
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn rack(&self) -> &Rack {
        &self.rack
    }

    /// Seed of the day this game belongs to
    #[must_use]
    pub fn seed(&self) -> i64 {
        compute_date_seed(self.date)
    }

    /// Whether this game is the puzzle for `date`
    #[must_use]
    pub fn is_for_date(&self, date: NaiveDate) -> bool {
        self.seed() == compute_date_seed(date)
    }

    /// Whether the tile at `index` is committed to a word
    #[must_use]
    pub fn is_used(&self, index: usize) -> bool {
        self.used.get(index).copied().unwrap_or(false)
    }

    /// Whether the tile at `index` is in the current selection
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.current.contains(&index)
    }

    /// Whether the tile at `index` can be selected
    #[must_use]
    pub fn is_free(&self, index: usize) -> bool {
        index < RACK_SIZE && !self.is_used(index) && !self.is_selected(index)
    }

    /// Add a tile to the current selection
    ///
    /// Ignored once the game is done, or for tiles that are used, already
    /// selected or out of range.
    pub fn select_tile(&mut self, index: usize) -> bool {
        if self.done || !self.is_free(index) {
            return false;
        }
        self.current.push(index);
        true
    }

    /// Select the first free tile showing `letter`
    pub fn select_letter(&mut self, letter: char) -> bool {
        if !letter.is_ascii_alphabetic() {
            return false;
        }
        let letter = letter.to_ascii_uppercase() as u8;
        let found = self
            .rack
            .letters()
            .iter()
            .enumerate()
            .find(|&(i, &l)| l == letter && self.is_free(i))
            .map(|(i, _)| i);

        found.is_some_and(|i| self.select_tile(i))
    }

    /// Return the most recently selected tile to the rack
    pub fn delete_letter(&mut self) -> Option<usize> {
        self.current.pop()
    }

    /// Clear the current selection
    pub fn clear_selection(&mut self) {
        self.current.clear();
    }

    /// Selected tiles in selection order
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.current
    }

    /// The word spelled by the current selection
    #[must_use]
    pub fn current_word(&self) -> String {
        self.current
            .iter()
            .map(|&i| char::from(self.rack.letter_at(i)))
            .collect()
    }

    /// Whether the selection spells a word that could be submitted
    #[must_use]
    pub fn current_is_valid(&self) -> bool {
        let word = self.current_word();
        word.len() >= 2 && self.lexicon.is_valid_word(&word)
    }

    /// Commit the current selection as a word
    ///
    /// Accepted words go to the front of the word list. Using the last free
    /// letter finishes the game.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] if nothing is selected, the selection is not a
    /// dictionary word, or the word was already played. The selection is kept
    /// so the player can edit it.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        if self.current.is_empty() {
            return Err(SubmitError::Empty);
        }

        let word = self.current_word();
        if !self.lexicon.is_valid_word(&word) {
            return Err(SubmitError::NotAWord(word));
        }
        if self.words.iter().any(|played| played.word == word) {
            return Err(SubmitError::AlreadyPlayed(word));
        }

        let tiles = std::mem::take(&mut self.current);
        for &i in &tiles {
            self.used[i] = true;
        }
        self.words.insert(
            0,
            PlayedWord {
                word: word.clone(),
                tiles,
            },
        );

        let remaining = self.remaining();
        let completed = remaining == 0;
        if completed {
            self.done = true;
        }

        Ok(SubmitOutcome {
            magic: is_magic_word(&word),
            word,
            remaining,
            completed,
        })
    }

    /// Take a committed word back, freeing its tiles
    ///
    /// `index` counts from the newest word. Ignored once the game is done.
    pub fn remove_word(&mut self, index: usize) -> Option<String> {
        if self.done || index >= self.words.len() {
            return None;
        }
        let played = self.words.remove(index);
        for &i in &played.tiles {
            self.used[i] = false;
        }
        Some(played.word)
    }

    /// Start over with the same letters
    pub fn reset(&mut self) {
        if self.done {
            return;
        }
        self.clear_board();
    }

    /// Play the same rack again, remembering the last attempt's words
    pub fn replay(&mut self) {
        self.previous_words = Some(self.words.iter().map(|p| p.word.clone()).collect());
        self.clear_board();
        self.done = false;
    }

    /// Stop playing with letters left over
    pub fn finish(&mut self) {
        self.current.clear();
        self.done = true;
    }

    fn clear_board(&mut self) {
        self.used = [false; RACK_SIZE];
        self.current.clear();
        self.words.clear();
    }

    /// Letters not committed to a word
    #[must_use]
    pub fn remaining(&self) -> usize {
        RACK_SIZE - self.used_count()
    }

    /// Letters committed to words
    #[must_use]
    pub fn used_count(&self) -> usize {
        self.used.iter().filter(|&&used| used).count()
    }

    /// Fraction of the rack in words or in the current selection
    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.used_count() + self.current.len()) as f64 / RACK_SIZE as f64
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Whether every letter is in a committed word
    #[must_use]
    pub fn all_used(&self) -> bool {
        self.remaining() == 0
    }

    /// Committed words, newest first
    #[must_use]
    pub fn words(&self) -> &[PlayedWord] {
        &self.words
    }

    /// Words from the attempt before the last replay
    #[must_use]
    pub fn previous_words(&self) -> Option<&[String]> {
        self.previous_words.as_deref()
    }

    /// Points for committed words plus the clear bonus
    #[must_use]
    pub fn score(&self) -> u32 {
        let points: u32 = self.words.iter().map(|p| word_points(&p.word)).sum();
        if self.all_used() {
            points + ALL_LETTERS_BONUS
        } else {
            points
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    const SAMPLE: &str = "CATDOGBIRDHOUSEANT";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn lexicon() -> Dictionary {
        Dictionary::from_words(["CAT", "DOG", "BIRDHOUSE", "ANT", "ACT", "TAN", "DO"])
    }

    fn game(lexicon: &Dictionary) -> Game<'_, Dictionary> {
        Game::new(date(2024, 1, 1), Rack::new(SAMPLE).unwrap(), lexicon)
    }

    fn spell<L: Lexicon>(game: &mut Game<'_, L>, word: &str) {
        for ch in word.chars() {
            assert!(game.select_letter(ch), "could not select {ch}");
        }
    }

    #[test]
    fn new_game_is_empty() {
        let lexicon = lexicon();
        let game = game(&lexicon);
        assert_eq!(game.remaining(), 18);
        assert_eq!(game.used_count(), 0);
        assert!(game.words().is_empty());
        assert!(!game.is_done());
        assert_eq!(game.score(), 0);
        assert_eq!(game.previous_words(), None);
    }

    #[test]
    fn seed_and_date_matching() {
        let lexicon = lexicon();
        let game = game(&lexicon);
        assert_eq!(game.seed(), 20_240_101);
        assert!(game.is_for_date(date(2024, 1, 1)));
        assert!(!game.is_for_date(date(2024, 1, 2)));
    }

    #[test]
    fn select_tile_rejects_repeats_and_out_of_range() {
        let lexicon = lexicon();
        let mut game = game(&lexicon);
        assert!(game.select_tile(0));
        assert!(!game.select_tile(0));
        assert!(!game.select_tile(18));
        assert_eq!(game.current_word(), "C");
    }

    #[test]
    fn select_letter_skips_taken_tiles() {
        let lexicon = lexicon();
        let mut game = game(&lexicon);
        // Two A tiles: index 1 and 15
        assert!(game.select_letter('a'));
        assert!(game.select_letter('A'));
        assert!(!game.select_letter('A'));
        assert_eq!(game.selection(), [1, 15]);
        assert!(!game.select_letter('Z'));
        assert!(!game.select_letter('1'));
    }

    #[test]
    fn delete_letter_pops_last() {
        let lexicon = lexicon();
        let mut game = game(&lexicon);
        spell(&mut game, "CAT");
        assert_eq!(game.delete_letter(), Some(2));
        assert_eq!(game.current_word(), "CA");
        game.clear_selection();
        assert_eq!(game.delete_letter(), None);
    }

    #[test]
    fn current_validity_needs_two_letters() {
        let lexicon = lexicon();
        let mut game = game(&lexicon);
        spell(&mut game, "CA");
        assert!(!game.current_is_valid());
        spell(&mut game, "T");
        assert!(game.current_is_valid());
    }

    #[test]
    fn submit_commits_newest_first() {
        let lexicon = lexicon();
        let mut game = game(&lexicon);

        spell(&mut game, "CAT");
        let outcome = game.submit().unwrap();
        assert_eq!(outcome.word, "CAT");
        assert_eq!(outcome.remaining, 15);
        assert!(!outcome.completed);

        spell(&mut game, "DOG");
        game.submit().unwrap();

        let words: Vec<&str> = game.words().iter().map(|p| p.word.as_str()).collect();
        assert_eq!(words, ["DOG", "CAT"]);
        assert_eq!(game.used_count(), 6);
        assert!(game.selection().is_empty());
    }

    #[test]
    fn submit_errors_keep_selection() {
        let lexicon = lexicon();
        let mut game = game(&lexicon);

        assert_eq!(game.submit(), Err(SubmitError::Empty));

        spell(&mut game, "TAC");
        assert_eq!(game.submit(), Err(SubmitError::NotAWord("TAC".to_string())));
        assert_eq!(game.current_word(), "TAC");

        // D and O appear twice on the rack
        game.clear_selection();
        spell(&mut game, "DO");
        game.submit().unwrap();
        spell(&mut game, "DO");
        assert_eq!(game.submit(), Err(SubmitError::AlreadyPlayed("DO".to_string())));
    }

    #[test]
    fn submit_errors_display() {
        assert_eq!(SubmitError::Empty.to_string(), "Select some letters first");
        assert_eq!(
            SubmitError::NotAWord("TAC".into()).to_string(),
            "TAC is not a valid word"
        );
        assert_eq!(
            SubmitError::AlreadyPlayed("ANT".into()).to_string(),
            "ANT already used"
        );
    }

    #[test]
    fn using_every_letter_completes() {
        let lexicon = lexicon();
        let mut game = game(&lexicon);

        for word in ["CAT", "DOG", "BIRDHOUSE"] {
            spell(&mut game, word);
            game.submit().unwrap();
        }
        spell(&mut game, "ANT");
        let outcome = game.submit().unwrap();

        assert!(outcome.completed);
        assert_eq!(outcome.remaining, 0);
        assert!(game.is_done());
        assert!(game.all_used());
        assert!(!game.select_tile(0));
    }

    #[test]
    fn score_adds_bonus_for_full_clear() {
        let lexicon = lexicon();
        let mut game = game(&lexicon);

        spell(&mut game, "CAT");
        game.submit().unwrap();
        assert_eq!(game.score(), 7);

        for word in ["DOG", "BIRDHOUSE", "ANT"] {
            spell(&mut game, word);
            game.submit().unwrap();
        }
        let letters: u32 = SAMPLE.bytes().map(crate::session::letter_points).sum();
        assert_eq!(game.score(), letters + ALL_LETTERS_BONUS);
    }

    #[test]
    fn remove_word_frees_tiles() {
        let lexicon = lexicon();
        let mut game = game(&lexicon);
        spell(&mut game, "CAT");
        game.submit().unwrap();
        spell(&mut game, "DOG");
        game.submit().unwrap();

        assert_eq!(game.remove_word(1), Some("CAT".to_string()));
        assert_eq!(game.remaining(), 15);
        assert!(game.is_free(0));
        assert_eq!(game.remove_word(5), None);
    }

    #[test]
    fn reset_clears_board() {
        let lexicon = lexicon();
        let mut game = game(&lexicon);
        spell(&mut game, "CAT");
        game.submit().unwrap();
        spell(&mut game, "DO");

        game.reset();
        assert_eq!(game.remaining(), 18);
        assert!(game.words().is_empty());
        assert!(game.selection().is_empty());
    }

    #[test]
    fn finished_game_ignores_edits() {
        let lexicon = lexicon();
        let mut game = game(&lexicon);
        spell(&mut game, "CAT");
        game.submit().unwrap();
        game.finish();

        assert!(game.is_done());
        assert_eq!(game.remove_word(0), None);
        game.reset();
        assert_eq!(game.words().len(), 1);
        assert!(!game.select_letter('D'));
    }

    #[test]
    fn replay_remembers_previous_words() {
        let lexicon = lexicon();
        let mut game = game(&lexicon);
        spell(&mut game, "CAT");
        game.submit().unwrap();
        spell(&mut game, "DOG");
        game.submit().unwrap();
        game.finish();

        game.replay();
        assert!(!game.is_done());
        assert_eq!(game.remaining(), 18);
        assert_eq!(
            game.previous_words(),
            Some(&["DOG".to_string(), "CAT".to_string()][..])
        );
    }

    #[test]
    fn progress_counts_selection() {
        let lexicon = lexicon();
        let mut game = game(&lexicon);
        spell(&mut game, "CAT");
        game.submit().unwrap();
        spell(&mut game, "DOG");
        assert!((game.progress() - 6.0 / 18.0).abs() < 1e-12);
    }

    #[test]
    fn magic_words_are_flagged() {
        let lexicon = Dictionary::from_words(["HEX", "ORB"]);
        let rack = Rack::new("HEXORBAAAAAAAAAAAA").unwrap();
        let mut game = Game::new(date(2024, 1, 1), rack, &lexicon);
        spell(&mut game, "HEX");
        assert!(game.submit().unwrap().magic);
    }

    #[test]
    fn unready_lexicon_rejects_everything() {
        let lexicon = Dictionary::new();
        let mut game = Game::new(date(2024, 1, 1), Rack::new(SAMPLE).unwrap(), &lexicon);
        spell(&mut game, "CAT");
        assert!(!game.current_is_valid());
        assert_eq!(game.submit(), Err(SubmitError::NotAWord("CAT".to_string())));
    }
}
