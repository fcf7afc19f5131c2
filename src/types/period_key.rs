use std::fmt;

/// Every range label the daily forecast uses for precipitation, sky and wind.
pub const CANONICAL_PERIODS: [&str; 7] = [
    "00-24", "00-12", "12-24", "00-06", "06-12", "12-18", "18-24",
];

/// The quarter-day subset used for daily temperature when a day has no readings.
pub const QUARTER_DAY_PERIODS: [&str; 4] = ["00-06", "06-12", "12-18", "18-24"];

/// Label of a sub-day interval.
///
/// Daily tables use hour ranges (`"06-12"`), hourly tables use a two-digit hour (`"07"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeriodKey(String);

impl PeriodKey {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// `"{start:02}-{end:02}"`
    pub fn range(start: u32, end: u32) -> Self {
        Self(format!("{:02}-{:02}", start, end))
    }

    /// `"{hour:02}"`
    pub fn hour(hour: u32) -> Self {
        Self(format!("{:02}", hour))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hour of day this key names, if it is an hourly key in `00..=23`.
    pub fn hour_of_day(&self) -> Option<u32> {
        if self.0.len() != 2 || !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.0.parse::<u32>().ok().filter(|hour| *hour < 24)
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PeriodKey {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for PeriodKey {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl PartialEq<str> for PeriodKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PeriodKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
