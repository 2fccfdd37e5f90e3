//! Benchmark command
//!
//! Generates racks for a run of consecutive days and summarises how they were
//! built: word covers versus fallbacks, vowel balance and letter mix.

use crate::core::{RACK_SIZE, compute_date_seed};
use crate::generator::RackGenerator;
use chrono::{Days, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Earliest start date picked by [`random_start_date`]
const RANDOM_EPOCH: (i32, u32, u32) = (2000, 1, 1);

/// Span of years [`random_start_date`] picks from
const RANDOM_SPAN_DAYS: u64 = 365 * 50;

/// One generated day
#[derive(Debug, Clone, Copy)]
struct DaySample {
    par: Option<usize>,
    vowels: usize,
    letters: [u8; RACK_SIZE],
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub start: NaiveDate,
    pub days: usize,
    pub word_racks: usize,
    pub fallback_racks: usize,
    /// Word-rack count per covering word count
    pub par_distribution: BTreeMap<usize, usize>,
    pub min_vowels: usize,
    pub max_vowels: usize,
    pub average_vowels: f64,
    /// Occurrences of `A..=Z` across every rack
    pub letter_counts: [usize; 26],
    pub duration: Duration,
    pub racks_per_second: f64,
}

impl BenchmarkResult {
    /// Share of days that fell back to letter frequencies, in percent
    #[must_use]
    pub fn fallback_rate(&self) -> f64 {
        if self.days == 0 {
            0.0
        } else {
            self.fallback_racks as f64 / self.days as f64 * 100.0
        }
    }

    /// Letters ordered from most to least frequent
    #[must_use]
    pub fn letters_by_frequency(&self) -> Vec<(char, usize)> {
        let mut letters: Vec<(char, usize)> = (b'A'..=b'Z')
            .map(char::from)
            .zip(self.letter_counts)
            .collect();
        letters.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        letters
    }
}

/// Pick a random start date for `--random` runs
#[must_use]
pub fn random_start_date() -> NaiveDate {
    let (y, m, d) = RANDOM_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    let offset = rand::rng().random_range(0..RANDOM_SPAN_DAYS);
    epoch.checked_add_days(Days::new(offset)).unwrap_or(epoch)
}

/// Generate racks for `days` consecutive days starting at `start`
///
/// Days are generated in parallel; every rack is independent of the others.
/// Days past the end of the calendar are skipped.
pub fn run_benchmark(
    generator: &RackGenerator,
    corpus: Option<&[String]>,
    start: NaiveDate,
    days: usize,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(days as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };
    pb.set_message("generating racks");

    let begin = Instant::now();
    let samples: Vec<DaySample> = (0..days as u64)
        .into_par_iter()
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .map(|date| {
            let generated = generator.generate_from_seed(compute_date_seed(date), corpus);
            pb.inc(1);
            DaySample {
                par: generated.par(),
                vowels: generated.rack.vowel_count(),
                letters: *generated.rack.letters(),
            }
        })
        .collect();
    let duration = begin.elapsed();
    pb.finish_with_message("Complete!");

    summarize(start, &samples, duration)
}

fn summarize(start: NaiveDate, samples: &[DaySample], duration: Duration) -> BenchmarkResult {
    let mut par_distribution = BTreeMap::new();
    let mut letter_counts = [0usize; 26];
    let mut fallback_racks = 0;

    for sample in samples {
        match sample.par {
            Some(par) => *par_distribution.entry(par).or_insert(0) += 1,
            None => fallback_racks += 1,
        }
        for &letter in &sample.letters {
            letter_counts[usize::from(letter - b'A')] += 1;
        }
    }

    let days = samples.len();
    let total_vowels: usize = samples.iter().map(|s| s.vowels).sum();

    BenchmarkResult {
        start,
        days,
        word_racks: days - fallback_racks,
        fallback_racks,
        par_distribution,
        min_vowels: samples.iter().map(|s| s.vowels).min().unwrap_or(0),
        max_vowels: samples.iter().map(|s| s.vowels).max().unwrap_or(0),
        average_vowels: if days == 0 {
            0.0
        } else {
            total_vowels as f64 / days as f64
        },
        letter_counts,
        duration,
        racks_per_second: days as f64 / duration.as_secs_f64().max(f64::EPSILON),
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
    fn benchmark_counts_every_day() {
        let dictionary = Dictionary::embedded();
        let result = run_benchmark(
            &RackGenerator::new(),
            Some(dictionary.words()),
            date(2024, 1, 1),
            30,
            false,
        );

        assert_eq!(result.days, 30);
        assert_eq!(result.word_racks + result.fallback_racks, 30);
        let distribution_sum: usize = result.par_distribution.values().sum();
        assert_eq!(distribution_sum, result.word_racks);
    }

    #[test]
    fn benchmark_letter_counts_cover_every_tile() {
        let result = run_benchmark(&RackGenerator::new(), None, date(2024, 1, 1), 20, false);
        assert_eq!(result.letter_counts.iter().sum::<usize>(), 20 * RACK_SIZE);
        assert_eq!(result.fallback_racks, 20);
        assert!(result.par_distribution.is_empty());
        assert!((result.fallback_rate() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn benchmark_vowel_metrics_consistency() {
        let result = run_benchmark(&RackGenerator::new(), None, date(2024, 6, 1), 40, false);
        assert!(result.min_vowels >= 5);
        assert!(result.average_vowels >= result.min_vowels as f64);
        assert!(result.average_vowels <= result.max_vowels as f64);
    }

    #[test]
    fn benchmark_empty_range() {
        let result = run_benchmark(&RackGenerator::new(), None, date(2024, 1, 1), 0, false);
        assert_eq!(result.days, 0);
        assert_eq!(result.min_vowels, 0);
        assert!(result.average_vowels.abs() < f64::EPSILON);
        assert!(result.fallback_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_is_deterministic() {
        let run = || run_benchmark(&RackGenerator::new(), None, date(2024, 2, 1), 10, false);
        assert_eq!(run().letter_counts, run().letter_counts);
    }

    #[test]
    fn letters_by_frequency_sorted() {
        let result = run_benchmark(&RackGenerator::new(), None, date(2024, 1, 1), 10, false);
        let letters = result.letters_by_frequency();
        assert_eq!(letters.len(), 26);
        assert!(letters.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn random_start_date_in_range() {
        let start = random_start_date();
        assert!(start >= date(2000, 1, 1));
        assert!(start < date(2051, 1, 1));
    }
}
