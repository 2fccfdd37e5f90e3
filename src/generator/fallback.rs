//! Frequency-weighted fallback generation
//!
//! Used when there is no corpus or no covering pattern could be filled.
//! Always yields 18 letters with at least five vowels.

use super::shuffle::shuffle;
use super::weights::WeightTable;
use crate::core::{Mulberry32, RACK_SIZE, Rack};

/// Consonants offered before the weighted fill, in order
pub const COMMON_CONSONANTS: [u8; 5] = *b"TNSRL";

/// Chance that each common consonant is included
pub const CONSONANT_CHANCE: f64 = 0.7;

/// Weight multiplier applied to a letter each time the fill picks it
pub const REPEAT_DECAY: f64 = 0.7;

/// Draws below this give five vowels, otherwise six
const FIVE_VOWEL_CHANCE: f64 = 0.5;

/// Build the 18 fallback letters in their final, shuffled order
///
/// Draw order: vowel count, one draw per vowel, one draw per common
/// consonant, one draw per filled slot, then the final shuffle.
pub fn frequency_letters(rng: &mut Mulberry32) -> Vec<u8> {
    let mut letters = Vec::with_capacity(RACK_SIZE);

    let vowel_count = if rng.next_f64() < FIVE_VOWEL_CHANCE { 5 } else { 6 };
    let vowels = WeightTable::vowels();
    for _ in 0..vowel_count {
        letters.push(vowels.select(rng));
    }

    for &consonant in &COMMON_CONSONANTS {
        if rng.next_f64() < CONSONANT_CHANCE && letters.len() < RACK_SIZE {
            letters.push(consonant);
        }
    }

    let mut weights = WeightTable::english();
    while letters.len() < RACK_SIZE {
        let letter = weights.select(rng);
        letters.push(letter);
        weights.scale(letter, REPEAT_DECAY);
    }

    shuffle(rng, &mut letters);
    letters
}

/// Build a rack from frequency weights
///
/// # Panics
/// Will not panic - the fill loop always stops at exactly 18 uppercase letters.
pub fn generate_from_frequencies(rng: &mut Mulberry32) -> Rack {
    Rack::from_bytes(&frequency_letters(rng)).expect("frequency fill yields a full rack")
}
