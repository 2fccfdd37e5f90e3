//! Daily rack report
//!
//! Generates the rack for a date and summarises how it was built.

use crate::core::{Rack, compute_date_seed};
use crate::generator::{RackGenerator, RackSource};
use chrono::NaiveDate;

/// Everything known about one day's rack
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub seed: i64,
    pub rack: Rack,
    pub vowels: usize,
    /// Covering words, `None` for fallback racks
    pub covering_words: Option<Vec<String>>,
}

impl DailyReport {
    /// Number of covering words, if the rack came from words
    #[must_use]
    pub fn par(&self) -> Option<usize> {
        self.covering_words.as_ref().map(Vec::len)
    }

    /// Short name of the generation path
    #[must_use]
    pub const fn source_label(&self) -> &'static str {
        if self.covering_words.is_some() {
            "word cover"
        } else {
            "letter frequencies"
        }
    }
}

/// A date and its seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub date: NaiveDate,
    pub seed: i64,
}

/// Build the report for `date`
#[must_use]
pub fn daily_report(
    date: NaiveDate,
    generator: &RackGenerator,
    corpus: Option<&[String]>,
) -> DailyReport {
    let generated = generator.generate(date, corpus);
    let covering_words = match generated.source {
        RackSource::Words(words) => Some(words),
        RackSource::Frequency => None,
    };

    DailyReport {
        date,
        seed: generated.seed,
        vowels: generated.rack.vowel_count(),
        rack: generated.rack,
        covering_words,
    }
}

/// Seed for `date`
#[must_use]
pub fn seed_report(date: NaiveDate) -> SeedReport {
    SeedReport {
        date,
        seed: compute_date_seed(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, Lexicon};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn report_with_corpus_has_par() {
        let dictionary = Dictionary::embedded();
        let report = daily_report(
            date(2024, 1, 1),
            &RackGenerator::new(),
            Some(dictionary.words()),
        );

        assert_eq!(report.seed, 20_240_101);
        assert_eq!(report.par(), Some(4));
        assert_eq!(report.source_label(), "word cover");
        assert_eq!(report.rack.text(), "DEWUAUHESTMLTEARRR");
        assert_eq!(report.vowels, report.rack.vowel_count());
    }

    #[test]
    fn report_without_corpus_is_fallback() {
        let report = daily_report(date(2024, 1, 1), &RackGenerator::new(), None);
        assert_eq!(report.par(), None);
        assert_eq!(report.source_label(), "letter frequencies");
        assert!(report.vowels >= 5);
    }

    #[test]
    fn seed_report_matches_date() {
        let report = seed_report(date(2024, 3, 7));
        assert_eq!(report.seed, 20_240_307);
        assert_eq!(report.date, date(2024, 3, 7));
    }
}
