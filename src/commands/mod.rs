//! Command implementations

pub mod benchmark;
pub mod check;
pub mod simple;
pub mod today;

pub use benchmark::{BenchmarkResult, random_start_date, run_benchmark};
pub use check::{CheckResult, check_word};
pub use simple::{SimpleCommand, play_word, run_simple, run_simple_with};
pub use today::{DailyReport, SeedReport, daily_report, seed_report};
