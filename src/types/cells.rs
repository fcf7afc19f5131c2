//! Per-concern values extracted for one (date, period) before the rows are joined.

use crate::types::reading::Reading;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemperatureCell {
    pub value: Option<i64>,
    /// Day-wide maximum, identical on every period of the day.
    pub max: Option<i64>,
    /// Day-wide minimum, identical on every period of the day.
    pub min: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrecipitationCell {
    pub value: Option<Reading>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkyCell {
    /// Numeric sky code as published, e.g. `"12"` for `"12n"`.
    pub value: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindCell {
    pub direction: Option<String>,
    pub speed: Option<i64>,
    /// Hourly only: the maximum gust of the period.
    pub gust: Option<i64>,
}
