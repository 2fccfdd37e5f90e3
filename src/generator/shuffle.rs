//! Seeded Fisher–Yates shuffle

use crate::core::Mulberry32;

/// Shuffle a slice in place
///
/// Walks `i` from the last index down to 1 and swaps with `floor(r * (i + 1))`.
/// Slices of length 0 or 1 consume no draws.
pub fn shuffle<T>(rng: &mut Mulberry32, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}
