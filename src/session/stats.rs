//! Local play counters

use chrono::NaiveDate;

/// Played days, streaks and best result
///
/// A day counts once no matter how many times the puzzle is finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub played: u32,
    pub streak: u32,
    pub best: u32,
    /// Fewest words used to clear a whole rack
    pub fewest: Option<usize>,
    pub last_date: Option<NaiveDate>,
}

impl Stats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a streak that was broken by a missed day
    pub fn refresh(&mut self, today: NaiveDate) {
        if let Some(last) = self.last_date
            && last != today
            && Some(last) != today.pred_opt()
        {
            self.streak = 0;
        }
    }

    /// Record a finished puzzle
    ///
    /// Returns `false` if today was already recorded.
    pub fn record(&mut self, today: NaiveDate, words: usize, all_used: bool) -> bool {
        if self.last_date == Some(today) {
            return false;
        }

        self.played += 1;
        self.streak = if self.last_date.is_some() && self.last_date == today.pred_opt() {
            self.streak + 1
        } else {
            1
        };
        self.best = self.best.max(self.streak);

        if all_used && self.fewest.is_none_or(|fewest| words < fewest) {
            self.fewest = Some(words);
        }
        self.last_date = Some(today);
        true
    }

    /// Whether clearing the rack in `words` words would beat the record
    #[must_use]
    pub fn is_new_best(&self, words: usize) -> bool {
        self.fewest.is_some_and(|fewest| words < fewest)
    }
}
