//! Catalog of word-length patterns that cover a full rack
//!
//! Each pattern lists word lengths summing to exactly 18. The catalog leans on
//! short and mid lengths so sparse buckets for 8- and 9-letter words do not
//! starve the word-based path.

use crate::core::RACK_SIZE;

/// Shortest word that may appear in a covering pattern
pub const MIN_WORD_LEN: usize = 2;

/// Longest word that may appear in a covering pattern
pub const MAX_WORD_LEN: usize = 9;

/// The default, ordered pattern catalog
pub const LENGTH_PATTERNS: &[&[usize]] = &[
    &[6, 6, 6],
    &[5, 5, 4, 4],
    &[9, 5, 4],
    &[9, 6, 3],
    &[8, 6, 4],
    &[8, 5, 5],
    &[7, 7, 4],
    &[7, 6, 5],
    &[7, 5, 3, 3],
    &[6, 6, 4, 2],
    &[6, 5, 4, 3],
    &[5, 5, 5, 3],
    &[4, 4, 4, 3, 3],
    &[4, 4, 4, 4, 2],
    &[3, 3, 3, 3, 3, 3],
    &[6, 4, 4, 4],
    &[5, 4, 3, 3, 3],
    &[8, 4, 3, 3],
    &[9, 3, 3, 3],
    &[7, 4, 4, 3],
    &[6, 6, 3, 3],
    &[5, 5, 4, 2, 2],
    &[4, 4, 3, 3, 2, 2],
];

/// Whether a pattern can cover a rack: lengths in range and summing to 18
#[must_use]
pub fn is_covering(pattern: &[usize]) -> bool {
    !pattern.is_empty()
        && pattern
            .iter()
            .all(|len| (MIN_WORD_LEN..=MAX_WORD_LEN).contains(len))
        && pattern.iter().sum::<usize>() == RACK_SIZE
}

/// The default catalog as owned patterns
#[must_use]
pub fn default_patterns() -> Vec<Vec<usize>> {
    LENGTH_PATTERNS.iter().map(|p| p.to_vec()).collect()
}
