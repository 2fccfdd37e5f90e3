//! Spellstacks
//!
//! A daily word puzzle: every calendar day yields the same 18-letter rack for
//! every player, and the goal is to use all 18 letters in as few dictionary
//! words as possible.
//!
//! Racks are built from a date-derived seed and a mulberry32 generator. When a
//! word corpus is available the rack is the shuffled concatenation of real
//! words, so it is always solvable; otherwise letters are drawn from English
//! frequency weights.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use spellstacks::dictionary::{Dictionary, Lexicon};
//! use spellstacks::generator::generate_letters;
//! use spellstacks::session::Game;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let dictionary = Dictionary::embedded();
//! let rack = generate_letters(date, Some(dictionary.words()));
//!
//! let mut game = Game::new(date, rack, &dictionary);
//! println!("Today's letters: {}", game.rack());
//! # assert_eq!(game.remaining(), 18);
//! # let _ = game.submit();
//! ```

// Core domain types
pub mod core;

// Daily rack generation
pub mod generator;

// Word lists and validation
pub mod dictionary;

// Game state, scoring and stats
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
