//! Dictionary for word validation and rack generation
//!
//! The dictionary is both the validity oracle the session asks about submitted
//! words and the ordered corpus the generator draws covering words from.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Word validity oracle consumed by the game session
///
/// Queries made before the lexicon is ready report every word as invalid.
pub trait Lexicon {
    /// Whether words have been loaded
    fn is_ready(&self) -> bool;

    /// Whether `word` is a dictionary word (case-insensitive)
    fn is_valid_word(&self, word: &str) -> bool;

    /// The ordered word corpus
    fn words(&self) -> &[String];
}

/// Uppercase word set with a stable insertion order
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
    ready: bool,
}

impl Dictionary {
    /// An empty dictionary that is not ready yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ready dictionary from raw entries
    ///
    /// Entries are normalised; invalid ones are dropped and duplicates keep
    /// their first position.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            if let Some(word) = loader::normalize(word.as_ref()) {
                dictionary.insert(word);
            }
        }
        dictionary.ready = true;
        dictionary
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS)
    }

    /// Load a dictionary from a newline-separated file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let dictionary = Self::from_words(loader::load_from_file(path)?);
        info!(path = %path.display(), words = dictionary.len(), "dictionary loaded");
        Ok(dictionary)
    }

    /// Load from a file, falling back to the embedded list on failure
    #[must_use]
    pub fn load_or_embedded<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self::load_from_file(path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "dictionary load failed, using embedded list");
            Self::embedded()
        })
    }

    fn insert(&mut self, word: String) {
        if self.index.insert(word.clone()) {
            self.words.push(word);
        }
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership test, ignoring readiness
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word.to_ascii_uppercase().as_str())
    }

    /// Keep only the valid words from `candidates`, in their given order
    #[must_use]
    pub fn filter_valid_words<'w>(&self, candidates: &[&'w str]) -> Vec<&'w str> {
        candidates
            .iter()
            .copied()
            .filter(|word| self.is_valid_word(word))
            .collect()
    }
}

impl Lexicon for Dictionary {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn is_valid_word(&self, word: &str) -> bool {
        if !self.ready {
            warn!(word, "dictionary queried before it was loaded");
            return false;
        }
        self.contains(word)
    }

    fn words(&self) -> &[String] {
        &self.words
    }
}
