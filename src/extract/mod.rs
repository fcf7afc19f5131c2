//! Per-concern extraction of AEMET day records into `date → period → cell` mappings.
//!
//! Each of the four concerns (temperature, precipitation, sky, wind) has a daily and
//! an hourly extractor. All of them keep source order: days in the order they appear
//! in the document and periods in first-insertion order within a day.

pub mod daily;
pub mod hourly;
pub mod sky;

use crate::error::ExtractionIssue;
use crate::types::period_key::PeriodKey;
use chrono::NaiveDate;
use log::warn;

/// The cells of one concern for one day, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPeriods<T> {
    entries: Vec<(PeriodKey, T)>,
}

impl<T> Default for DayPeriods<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> DayPeriods<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, cell)| cell)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, cell)| cell)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Inserts or replaces. A replaced entry keeps its original position.
    pub fn insert(&mut self, key: PeriodKey, cell: T) {
        match self.get_mut(key.as_str()) {
            Some(existing) => *existing = cell,
            None => self.entries.push((key, cell)),
        }
    }

    /// Inserts only when the key is not present yet. Returns whether it inserted.
    pub fn insert_if_absent(&mut self, key: PeriodKey, cell: T) -> bool {
        if self.contains(key.as_str()) {
            return false;
        }
        self.entries.push((key, cell));
        true
    }

    /// Appends `fill()` under every label of `labels` that has no entry yet.
    pub fn fill_missing(&mut self, labels: &[&str], fill: impl Fn() -> T) {
        for label in labels {
            self.insert_if_absent(PeriodKey::from(*label), fill());
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &PeriodKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PeriodKey, &T)> {
        self.entries.iter().map(|(key, cell)| (key, cell))
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut().map(|(_, cell)| cell)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `date → period → cell` for one concern, days in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcernMap<T> {
    days: Vec<(NaiveDate, DayPeriods<T>)>,
}

impl<T> Default for ConcernMap<T> {
    fn default() -> Self {
        Self { days: Vec::new() }
    }
}

impl<T> ConcernMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a day's periods. A repeated date replaces the earlier day in place.
    pub fn insert_day(&mut self, date: NaiveDate, periods: DayPeriods<T>) {
        match self.days.iter_mut().find(|(d, _)| *d == date) {
            Some((_, existing)) => *existing = periods,
            None => self.days.push((date, periods)),
        }
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayPeriods<T>> {
        self.days
            .iter()
            .find(|(d, _)| *d == date)
            .map(|(_, periods)| periods)
    }

    /// Looks up one (date, period) cell.
    pub fn get(&self, date: NaiveDate, key: &str) -> Option<&T> {
        self.day(date).and_then(|periods| periods.get(key))
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().map(|(date, _)| *date)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &DayPeriods<T>)> {
        self.days.iter().map(|(date, periods)| (*date, periods))
    }

    /// Total number of cells over all days.
    pub fn cell_count(&self) -> usize {
        self.days.iter().map(|(_, periods)| periods.len()).sum()
    }
}

/// The output of one extractor: the mapping plus every issue met on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<T> {
    pub periods: ConcernMap<T>,
    pub issues: Vec<ExtractionIssue>,
}

impl<T> Default for Extraction<T> {
    fn default() -> Self {
        Self {
            periods: ConcernMap::new(),
            issues: Vec::new(),
        }
    }
}

impl<T> Extraction<T> {
    pub(crate) fn report(&mut self, issue: ExtractionIssue) {
        warn!("{}", issue);
        self.issues.push(issue);
    }
}
