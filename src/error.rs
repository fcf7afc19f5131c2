use crate::types::granularity::Granularity;
use chrono::NaiveDate;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Forecast table has no timestamped rows")]
    EmptyTable,

    #[error("Temporal queries need an hourly table, got a {granularity} table")]
    NotHourly { granularity: Granularity },

    #[error("Expected a {expected} table, got a {found} table")]
    GranularityMismatch {
        expected: Granularity,
        found: Granularity,
    },

    #[error("Failed to resolve the requested day")]
    DateParsingError,

    #[error("Forecast document list is empty")]
    EmptyDocument,

    #[error("Failed to parse forecast document")]
    Json(#[from] serde_json::Error),

    #[error("Failed building DataFrame: {0}")]
    DataFrame(#[from] PolarsError),
}

/// Which of the four per-day sub-records an [`ExtractionIssue`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concern {
    Temperature,
    Precipitation,
    Sky,
    Wind,
}

impl std::fmt::Display for Concern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Concern::Temperature => "temperature",
            Concern::Precipitation => "precipitation",
            Concern::Sky => "sky",
            Concern::Wind => "wind",
        };
        f.write_str(name)
    }
}

/// A problem found in one day's raw record.
///
/// Issues never abort a table build: the offending entry is skipped, the issue is
/// logged and kept on the resulting [`crate::ForecastTable`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractionIssue {
    #[error("{date}: {concern} entry is missing '{field}'")]
    MissingField {
        date: NaiveDate,
        concern: Concern,
        field: &'static str,
    },

    #[error("{date}: malformed {concern} period label '{label}'")]
    MalformedPeriodLabel {
        date: NaiveDate,
        concern: Concern,
        label: String,
    },

    #[error("{date}: wind gust record arrived before any wind period was opened")]
    ContinuationWithoutPeriod { date: NaiveDate },

    #[error("{date}: non-numeric {concern} value '{value}'")]
    NonNumericValue {
        date: NaiveDate,
        concern: Concern,
        value: String,
    },
}

impl ExtractionIssue {
    pub fn date(&self) -> NaiveDate {
        match self {
            ExtractionIssue::MissingField { date, .. }
            | ExtractionIssue::MalformedPeriodLabel { date, .. }
            | ExtractionIssue::ContinuationWithoutPeriod { date }
            | ExtractionIssue::NonNumericValue { date, .. } => *date,
        }
    }
}
