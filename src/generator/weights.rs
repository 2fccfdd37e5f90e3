//! Letter weight tables and weighted sampling
//!
//! Enumeration order is the table's insertion order and is part of the
//! reproducibility contract: two tables with the same weights in a different
//! order select different letters for the same draw.

use crate::core::{Mulberry32, VOWELS};

/// Approximate English letter frequencies (relative units)
pub const LETTER_WEIGHTS: [(u8, f64); 26] = [
    (b'E', 12.7),
    (b'T', 9.1),
    (b'A', 8.2),
    (b'O', 7.5),
    (b'I', 7.0),
    (b'N', 6.7),
    (b'S', 6.3),
    (b'H', 6.1),
    (b'R', 6.0),
    (b'D', 4.3),
    (b'L', 4.0),
    (b'C', 2.8),
    (b'U', 2.8),
    (b'M', 2.4),
    (b'W', 2.4),
    (b'F', 2.2),
    (b'G', 2.0),
    (b'Y', 2.0),
    (b'P', 1.9),
    (b'B', 1.5),
    (b'V', 1.0),
    (b'K', 0.8),
    (b'J', 0.15),
    (b'X', 0.15),
    (b'Q', 0.10),
    (b'Z', 0.07),
];

/// Ordered mapping from letter to a positive weight
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    entries: Vec<(u8, f64)>,
}

impl WeightTable {
    /// Build a table from `(letter, weight)` pairs, keeping their order
    ///
    /// Returns `None` if the table would be empty or any weight is not a
    /// positive finite number.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (u8, f64)>) -> Option<Self> {
        let entries: Vec<(u8, f64)> = entries.into_iter().collect();
        let valid = !entries.is_empty()
            && entries
                .iter()
                .all(|&(_, weight)| weight.is_finite() && weight > 0.0);
        valid.then_some(Self { entries })
    }

    /// The full 26-letter English frequency table
    #[must_use]
    pub fn english() -> Self {
        Self {
            entries: LETTER_WEIGHTS.to_vec(),
        }
    }

    /// The vowel sub-table, in `A E I O U` order
    #[must_use]
    pub fn vowels() -> Self {
        Self {
            entries: VOWELS
                .iter()
                .filter_map(|&vowel| {
                    LETTER_WEIGHTS
                        .iter()
                        .find(|&&(letter, _)| letter == vowel)
                        .copied()
                })
                .collect(),
        }
    }

    /// Number of candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no candidates (never true for built tables)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current weight of a letter
    #[must_use]
    pub fn weight(&self, letter: u8) -> Option<f64> {
        self.entries
            .iter()
            .find(|&&(l, _)| l == letter)
            .map(|&(_, weight)| weight)
    }

    /// Letters in enumeration order
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.iter().map(|&(letter, _)| letter)
    }

    /// Multiply one letter's weight by `factor`
    pub fn scale(&mut self, letter: u8, factor: f64) {
        if let Some(entry) = self.entries.iter_mut().find(|(l, _)| *l == letter) {
            entry.1 *= factor;
        }
    }

    /// Pick one letter with probability proportional to its weight
    ///
    /// Consumes exactly one draw.
    ///
    /// # Panics
    /// Will not panic - tables are non-empty by construction.
    pub fn select(&self, rng: &mut Mulberry32) -> u8 {
        self.select_excluding(rng, &[])
            .expect("weight tables are never empty")
    }

    /// Pick one letter, ignoring every letter in `exclude`
    ///
    /// Sums the remaining weights, draws `r` in `[0, total)` and walks the
    /// candidates in order subtracting each weight until `r <= 0`. If rounding
    /// keeps `r` positive past the end, the last remaining candidate wins.
    ///
    /// Returns `None` without drawing if every candidate is excluded.
    pub fn select_excluding(&self, rng: &mut Mulberry32, exclude: &[u8]) -> Option<u8> {
        let available: Vec<(u8, f64)> = self
            .entries
            .iter()
            .copied()
            .filter(|(letter, _)| !exclude.contains(letter))
            .collect();
        if available.is_empty() {
            return None;
        }

        let total: f64 = available.iter().map(|&(_, weight)| weight).sum();
        walk(&available, rng.next_f64() * total)
    }
}

/// Subtract weights from `remaining` in order; the first letter to bring it
/// to zero or below wins, otherwise the last one
fn walk(candidates: &[(u8, f64)], mut remaining: f64) -> Option<u8> {
    let &(last, _) = candidates.last()?;
    for &(letter, weight) in candidates {
        remaining -= weight;
        if remaining <= 0.0 {
            return Some(letter);
        }
    }
    Some(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_table_covers_alphabet_once() {
        let table = WeightTable::english();
        assert_eq!(table.len(), 26);

        let mut letters: Vec<u8> = table.letters().collect();
        letters.sort_unstable();
        assert_eq!(letters, (b'A'..=b'Z').collect::<Vec<_>>());
    }

    #[test]
    fn english_table_keeps_frequency_order() {
        let table = WeightTable::english();
        let letters: Vec<u8> = table.letters().take(5).collect();
        assert_eq!(letters, b"ETAOI");
        assert_eq!(table.weight(b'E'), Some(12.7));
        assert_eq!(table.weight(b'Z'), Some(0.07));
    }

    #[test]
    fn vowel_table_order_and_weights() {
        let table = WeightTable::vowels();
        let letters: Vec<u8> = table.letters().collect();
        assert_eq!(letters, b"AEIOU");
        assert_eq!(table.weight(b'A'), Some(8.2));
        assert_eq!(table.weight(b'U'), Some(2.8));
        assert_eq!(table.weight(b'T'), None);
    }

    #[test]
    fn new_rejects_empty_and_non_positive() {
        assert!(WeightTable::new(Vec::new()).is_none());
        assert!(WeightTable::new([(b'A', 0.0)]).is_none());
        assert!(WeightTable::new([(b'A', -1.0)]).is_none());
        assert!(WeightTable::new([(b'A', f64::NAN)]).is_none());
        assert!(WeightTable::new([(b'A', 1.0), (b'B', 2.0)]).is_some());
    }

    #[test]
    fn scale_compounds() {
        let mut table = WeightTable::english();
        table.scale(b'E', 0.7);
        table.scale(b'E', 0.7);
        table.scale(b'E', 0.7);
        let expected = 12.7 * 0.7 * 0.7 * 0.7;
        assert!((table.weight(b'E').unwrap() - expected).abs() < 1e-12);
        // Other letters untouched
        assert_eq!(table.weight(b'T'), Some(9.1));
    }

    #[test]
    fn exclusion_leaves_single_candidate() {
        let table = WeightTable::english();
        let exclude: Vec<u8> = table.letters().filter(|&l| l != b'Q').collect();

        for seed in 0..200 {
            let mut rng = Mulberry32::new(seed);
            assert_eq!(table.select_excluding(&mut rng, &exclude), Some(b'Q'));
        }
    }

    #[test]
    fn exclusion_of_everything_returns_none_without_drawing() {
        let table = WeightTable::vowels();
        let mut rng = Mulberry32::new(5);
        let untouched = rng.clone();

        assert_eq!(table.select_excluding(&mut rng, b"AEIOU"), None);
        assert_eq!(rng, untouched);
    }

    #[test]
    fn select_consumes_one_draw() {
        let table = WeightTable::english();
        let mut rng = Mulberry32::new(11);
        let mut reference = Mulberry32::new(11);

        table.select(&mut rng);
        reference.next_u32();
        assert_eq!(rng, reference);
    }

    #[test]
    fn select_walks_in_enumeration_order() {
        // Two equal weights: draws below 0.5 pick the first entry
        let table = WeightTable::new([(b'X', 1.0), (b'Y', 1.0)]).unwrap();

        for seed in 0..100 {
            let mut probe = Mulberry32::new(seed);
            let draw = probe.next_f64();

            let mut rng = Mulberry32::new(seed);
            let picked = table.select(&mut rng);
            if draw * 2.0 <= 1.0 {
                assert_eq!(picked, b'X');
            } else {
                assert_eq!(picked, b'Y');
            }
        }
    }

    #[test]
    fn walk_falls_back_to_last_candidate() {
        // 0.1 + 0.2 sums to 0.30000000000000004; subtracting the weights back
        // out of that total leaves a small positive remainder
        let candidates = [(b'A', 0.1), (b'B', 0.2)];
        let total: f64 = candidates.iter().map(|&(_, w)| w).sum();
        assert!(total - 0.1 - 0.2 > 0.0);
        assert_eq!(walk(&candidates, total), Some(b'B'));

        // Any remainder that survives the whole walk lands on the last entry
        assert_eq!(walk(&[(b'X', 1.0), (b'Y', 2.0), (b'Z', 0.5)], 10.0), Some(b'Z'));
    }

    #[test]
    fn walk_stops_at_first_crossing() {
        let candidates = [(b'X', 1.0), (b'Y', 2.0), (b'Z', 0.5)];
        assert_eq!(walk(&candidates, 0.0), Some(b'X'));
        assert_eq!(walk(&candidates, 1.0), Some(b'X'));
        assert_eq!(walk(&candidates, 1.5), Some(b'Y'));
        assert_eq!(walk(&candidates, 3.2), Some(b'Z'));
        assert_eq!(walk(&[], 1.0), None);
    }

    #[test]
    fn select_is_deterministic() {
        let table = WeightTable::english();
        let picks = |seed| {
            let mut rng = Mulberry32::new(seed);
            (0..32).map(|_| table.select(&mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(picks(20_240_101), picks(20_240_101));
    }

    #[test]
    fn heavy_letters_dominate() {
        let table = WeightTable::english();
        let mut rng = Mulberry32::new(1);
        let mut e_count = 0;
        let mut z_count = 0;
        for _ in 0..10_000 {
            match table.select(&mut rng) {
                b'E' => e_count += 1,
                b'Z' => z_count += 1,
                _ => {}
            }
        }
        assert!(e_count > z_count * 20);
    }
}
