mod assemble;
mod clients;
mod error;
mod extract;
mod forecast;
mod frames;
mod normalize;
mod query;
mod sources;
mod table;
mod types;

#[cfg(test)]
mod test_support;

pub use error::{Concern, ExtractionIssue, ForecastError};
pub use forecast::ForecastClient;
pub use normalize::*;
pub use query::*;
pub use sources::*;
pub use table::ForecastTable;

pub use clients::daily_client::*;
pub use clients::hourly_client::*;

pub use frames::daily_frame::*;
pub use frames::hourly_frame::*;

pub use assemble::{assemble, ConcernMaps};
pub use extract::sky::sky_code;
pub use extract::{ConcernMap, DayPeriods, Extraction};

pub use types::cells::*;
pub use types::fill_policy::FillPolicy;
pub use types::granularity::Granularity;
pub use types::period_key::{PeriodKey, CANONICAL_PERIODS, QUARTER_DAY_PERIODS};
pub use types::raw::*;
pub use types::reading::Reading;
pub use types::row::{CellValue, ForecastColumn, NormalizedRow};
pub use types::traits::datetime_period::{DateTimePeriod, StartEndDateTime};

/// Per-concern extractors, for callers that want the intermediate mappings.
pub mod extractors {
    pub use crate::extract::daily;
    pub use crate::extract::hourly;
}
