//! Daily rack generation
//!
//! One call derives the seed from the date, creates a single generator and
//! feeds it first to the word-based path (when a corpus is available) and then,
//! if that path cannot cover the rack, to the frequency fallback. The draw
//! order across both paths is fixed so every client builds the same rack.

mod fallback;
mod patterns;
mod shuffle;
mod weights;
mod word_based;

pub use fallback::{
    COMMON_CONSONANTS, CONSONANT_CHANCE, REPEAT_DECAY, frequency_letters,
    generate_from_frequencies,
};
pub use patterns::{LENGTH_PATTERNS, MAX_WORD_LEN, MIN_WORD_LEN, default_patterns, is_covering};
pub use shuffle::shuffle;
pub use weights::{LETTER_WEIGHTS, WeightTable};
pub use word_based::{LengthBuckets, WordCover, generate_from_words};

use crate::core::{Mulberry32, Rack, compute_date_seed};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// How a rack was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RackSource {
    /// Shuffled concatenation of these corpus words
    Words(Vec<String>),
    /// Frequency-weighted fallback
    Frequency,
}

/// A generated rack with its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRack {
    pub rack: Rack,
    pub seed: i64,
    pub source: RackSource,
}

impl GeneratedRack {
    /// Number of words in the covering set, if the rack was built from words
    ///
    /// This is the "par" shown to players: the rack is known to be solvable in
    /// this many words.
    #[must_use]
    pub fn par(&self) -> Option<usize> {
        match &self.source {
            RackSource::Words(words) => Some(words.len()),
            RackSource::Frequency => None,
        }
    }

    /// The covering words, if any
    #[must_use]
    pub fn covering_words(&self) -> Option<&[String]> {
        match &self.source {
            RackSource::Words(words) => Some(words),
            RackSource::Frequency => None,
        }
    }

    /// Whether the fallback path produced this rack
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == RackSource::Frequency
    }
}

/// Rack generator with a configurable pattern catalog
#[derive(Debug, Clone)]
pub struct RackGenerator {
    patterns: Vec<Vec<usize>>,
}

impl Default for RackGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RackGenerator {
    /// Generator using the default pattern catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: default_patterns(),
        }
    }

    /// Generator using a custom pattern catalog
    ///
    /// Patterns that do not sum to 18 or use lengths outside 2-9 are dropped.
    #[must_use]
    pub fn with_patterns(patterns: impl IntoIterator<Item = Vec<usize>>) -> Self {
        let patterns = patterns
            .into_iter()
            .filter(|pattern| {
                let keep = is_covering(pattern);
                if !keep {
                    warn!(?pattern, "dropping pattern that cannot cover a rack");
                }
                keep
            })
            .collect();
        Self { patterns }
    }

    /// The pattern catalog in its unshuffled order
    #[must_use]
    pub fn patterns(&self) -> &[Vec<usize>] {
        &self.patterns
    }

    /// Generate the rack for a calendar date
    #[must_use]
    pub fn generate(&self, date: NaiveDate, corpus: Option<&[String]>) -> GeneratedRack {
        self.generate_from_seed(compute_date_seed(date), corpus)
    }

    /// Generate the rack for a raw seed
    ///
    /// An absent or empty corpus goes straight to the fallback path. When the
    /// word path fails, the fallback continues with the same generator.
    #[must_use]
    pub fn generate_from_seed(&self, seed: i64, corpus: Option<&[String]>) -> GeneratedRack {
        let mut rng = Mulberry32::from_seed(seed);

        if let Some(words) = corpus.filter(|words| !words.is_empty()) {
            if let Some(cover) = generate_from_words(&mut rng, words, &self.patterns) {
                debug!(seed, pattern = ?cover.pattern, words = ?cover.words, "rack built from covering words");
                return GeneratedRack {
                    rack: cover.rack,
                    seed,
                    source: RackSource::Words(cover.words),
                };
            }
            debug!(seed, corpus_size = words.len(), "no covering pattern, falling back to letter frequencies");
        }

        GeneratedRack {
            rack: generate_from_frequencies(&mut rng),
            seed,
            source: RackSource::Frequency,
        }
    }
}

/// Generate the daily rack for a date
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use spellstacks::generator::generate_letters;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let rack = generate_letters(date, None);
/// assert_eq!(rack.letters().len(), 18);
/// assert_eq!(rack, generate_letters(date, None));
/// ```
#[must_use]
pub fn generate_letters(date: NaiveDate, corpus: Option<&[String]>) -> Rack {
    RackGenerator::new().generate(date, corpus).rack
}
