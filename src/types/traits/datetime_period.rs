use chrono::{NaiveDate, NaiveDateTime};

/// Inclusive range of local instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartEndDateTime {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl StartEndDateTime {
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// Resolves a calendar day into the range of local instants it covers.
///
/// AEMET timestamps are local to the municipality, so ranges are timezone-naive.
pub trait DateTimePeriod {
    fn get_datetime_period(self) -> Option<StartEndDateTime>;
}

impl DateTimePeriod for NaiveDate {
    fn get_datetime_period(self) -> Option<StartEndDateTime> {
        Some(StartEndDateTime {
            start: self.and_hms_opt(0, 0, 0)?,
            end: self.and_hms_micro_opt(23, 59, 59, 999_999)?,
        })
    }
}

impl DateTimePeriod for String {
    fn get_datetime_period(self) -> Option<StartEndDateTime> {
        if let Ok(naive_date) = NaiveDate::parse_from_str(&self, "%Y-%m-%d") {
            return naive_date.get_datetime_period();
        }
        None
    }
}

impl DateTimePeriod for &str {
    fn get_datetime_period(self) -> Option<StartEndDateTime> {
        self.to_string().get_datetime_period()
    }
}
