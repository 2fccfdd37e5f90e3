//! Calendar date to puzzle seed
//!
//! Every client derives the same integer from the same local calendar date,
//! which is what makes the daily rack identical for all players.

use chrono::{Datelike, Local, NaiveDate};

/// Compute the puzzle seed for a calendar date
///
/// The seed is the date written as `YYYYMMDD` and read as a decimal integer.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use spellstacks::core::compute_date_seed;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(compute_date_seed(date), 20_240_307);
/// ```
#[must_use]
pub fn compute_date_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Today's date in local time
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
