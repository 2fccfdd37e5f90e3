//! Daily letter rack representation
//!
//! A Rack is the fixed sequence of 18 uppercase letters handed to the player.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every rack
pub const RACK_SIZE: usize = 18;

/// The five vowels used by the vowel guarantee
pub const VOWELS: [u8; 5] = *b"AEIOU";

/// An ordered rack of exactly 18 uppercase letters
///
/// Immutable once built; the session layer tracks which tiles are used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rack {
    letters: [u8; RACK_SIZE],
}

/// Error type for invalid racks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RackError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for RackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Rack must be exactly {RACK_SIZE} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Rack may only contain letters A-Z"),
        }
    }
}

impl std::error::Error for RackError {}

impl Rack {
    /// Create a rack from a string
    ///
    /// Lowercase input is normalized to uppercase.
    ///
    /// # Errors
    /// Returns `RackError` if the input is not exactly 18 ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use spellstacks::core::Rack;
    ///
    /// let rack = Rack::new("catdogbirdhouseant").unwrap();
    /// assert_eq!(rack.text(), "CATDOGBIRDHOUSEANT");
    ///
    /// assert!(Rack::new("short").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, RackError> {
        Self::from_bytes(text.as_bytes())
    }

    /// Create a rack from a slice of letters
    ///
    /// # Errors
    /// Returns `RackError` if the slice is not exactly 18 ASCII letters.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RackError> {
        let letters: [u8; RACK_SIZE] = bytes
            .try_into()
            .map_err(|_| RackError::InvalidLength(bytes.len()))?;

        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(RackError::InvalidCharacters);
        }

        Ok(Self {
            letters: letters.map(|b| b.to_ascii_uppercase()),
        })
    }

    /// Get the letters as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; RACK_SIZE] {
        &self.letters
    }

    /// Get the letter at a tile position (0-17)
    ///
    /// # Panics
    /// Panics if position >= 18
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// The rack as an uppercase string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|&b| char::from(b)).collect()
    }

    /// Count of each letter on the rack
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    /// Number of tiles holding a vowel
    #[must_use]
    pub fn vowel_count(&self) -> usize {
        self.letters.iter().filter(|&&b| VOWELS.contains(&b)).count()
    }

    /// Check whether a word can be spelled from the tiles of this rack
    ///
    /// Case-insensitive. Each tile may be used at most once.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut available = self.letter_counts();
        word.bytes().all(|b| {
            let letter = b.to_ascii_uppercase();
            match available.get_mut(&letter) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    true
                }
                _ => false,
            }
        })
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
