//! Word-based rack generation
//!
//! Builds a rack by concatenating real words whose lengths follow one of the
//! covering patterns, then shuffling the letters. Every rack produced here is
//! solvable by construction.

use super::patterns::{MAX_WORD_LEN, MIN_WORD_LEN};
use super::shuffle::shuffle;
use crate::core::{Mulberry32, Rack};

/// Corpus words grouped by length, each with a consumption cursor
///
/// Cursors only move forward. A pattern that fails part-way leaves the words it
/// already took consumed, so later patterns see what is left.
#[derive(Debug, Clone)]
pub struct LengthBuckets<'c> {
    buckets: [Vec<&'c str>; MAX_WORD_LEN + 1],
    cursors: [usize; MAX_WORD_LEN + 1],
}

impl<'c> LengthBuckets<'c> {
    /// Group usable corpus words by length, keeping corpus order
    ///
    /// Words shorter than 2, longer than 9, or containing anything but ASCII
    /// letters cannot take part in a pattern and are skipped.
    pub fn from_corpus<S: AsRef<str>>(corpus: &'c [S]) -> Self {
        let mut buckets: [Vec<&'c str>; MAX_WORD_LEN + 1] = std::array::from_fn(|_| Vec::new());

        for word in corpus {
            let word = word.as_ref();
            if (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
                && word.bytes().all(|b| b.is_ascii_alphabetic())
            {
                buckets[word.len()].push(word);
            }
        }

        Self {
            buckets,
            cursors: [0; MAX_WORD_LEN + 1],
        }
    }

    /// Shuffle every bucket, shortest length first
    pub fn shuffle(&mut self, rng: &mut Mulberry32) {
        for bucket in &mut self.buckets[MIN_WORD_LEN..] {
            shuffle(rng, bucket);
        }
    }

    /// Number of words of a length not yet taken
    #[must_use]
    pub fn remaining(&self, len: usize) -> usize {
        match (self.buckets.get(len), self.cursors.get(len)) {
            (Some(bucket), Some(&cursor)) => bucket.len() - cursor,
            _ => 0,
        }
    }

    /// Take the next unused word of a length
    pub fn take(&mut self, len: usize) -> Option<&'c str> {
        let word = *self.buckets.get(len)?.get(*self.cursors.get(len)?)?;
        self.cursors[len] += 1;
        Some(word)
    }

    /// Take one word per entry of `pattern`
    ///
    /// Returns `None` as soon as a length is exhausted. Words taken before
    /// that point stay consumed.
    pub fn take_pattern(&mut self, pattern: &[usize]) -> Option<Vec<&'c str>> {
        let mut words = Vec::with_capacity(pattern.len());
        for &len in pattern {
            words.push(self.take(len)?);
        }
        Some(words)
    }
}

/// A successful covering: the chosen words and the shuffled rack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCover {
    pub pattern: Vec<usize>,
    pub words: Vec<String>,
    pub rack: Rack,
}

/// Try to build a rack from corpus words
///
/// Draw order: bucket shuffles (lengths ascending), catalog shuffle, then the
/// final letter shuffle on success. Returns `None` if no pattern can be filled.
pub fn generate_from_words<S: AsRef<str>>(
    rng: &mut Mulberry32,
    corpus: &[S],
    patterns: &[Vec<usize>],
) -> Option<WordCover> {
    let mut buckets = LengthBuckets::from_corpus(corpus);
    buckets.shuffle(rng);

    let mut order: Vec<&[usize]> = patterns.iter().map(Vec::as_slice).collect();
    shuffle(rng, &mut order);

    let (pattern, words) = order
        .into_iter()
        .find_map(|pattern| buckets.take_pattern(pattern).map(|words| (pattern, words)))?;

    let mut letters: Vec<u8> = words
        .iter()
        .flat_map(|word| word.bytes())
        .map(|b| b.to_ascii_uppercase())
        .collect();
    shuffle(rng, &mut letters);

    let rack = Rack::from_bytes(&letters).ok()?;

    Some(WordCover {
        pattern: pattern.to_vec(),
        words: words.iter().map(|w| w.to_ascii_uppercase()).collect(),
        rack,
    })
}
