//! Core domain types for the daily puzzle
//!
//! The date seed, the seeded generator and the rack itself. Everything here
//! is pure and deterministic.

mod rack;
mod rng;
mod seed;

pub use rack::{RACK_SIZE, Rack, RackError, VOWELS};
pub use rng::Mulberry32;
pub use seed::{compute_date_seed, today};
