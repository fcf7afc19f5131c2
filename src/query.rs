//! Read-only temporal queries over an hourly [`ForecastTable`].
//!
//! Every query borrows the table; none of them reorder, annotate or otherwise
//! touch its rows.

use crate::error::ForecastError;
use crate::table::ForecastTable;
use crate::types::granularity::Granularity;
use crate::types::row::{CellValue, ForecastColumn, NormalizedRow};
use crate::types::traits::datetime_period::DateTimePeriod;
use chrono::{Local, NaiveDate, NaiveDateTime};
use log::debug;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

fn require_hourly(table: &ForecastTable) -> Result<(), ForecastError> {
    match table.granularity() {
        Granularity::Hourly => Ok(()),
        granularity => Err(ForecastError::NotHourly { granularity }),
    }
}

/// The value of `column` on the row whose `fecha_hora` is nearest to `instant`.
///
/// Ties go to the row that comes first in the table.
///
/// # Errors
///
/// [`ForecastError::NotHourly`] for daily tables and [`ForecastError::EmptyTable`]
/// when no row carries a timestamp.
pub fn closest_to(
    table: &ForecastTable,
    column: ForecastColumn,
    instant: NaiveDateTime,
) -> Result<CellValue, ForecastError> {
    require_hourly(table)?;
    table
        .rows()
        .iter()
        .filter_map(|row| row.fecha_hora.map(|at| (row, at)))
        .min_by_key(|(_, at)| (*at - instant).num_milliseconds().abs())
        .map(|(row, _)| row.value(column))
        .ok_or(ForecastError::EmptyTable)
}

/// [`closest_to`] the current local time.
///
/// # Example
///
/// ```
/// use aemet_forecast::{
///     closest_to_now, normalize_hourly, CellValue, ForecastColumn, HourlyDayRecord,
/// };
///
/// let days: Vec<HourlyDayRecord> = serde_json::from_str(r#"[{
///     "fecha": "2024-11-05",
///     "temperatura": [ { "value": "12", "periodo": "07" } ]
/// }]"#)?;
///
/// let table = normalize_hourly(&days);
/// let now = closest_to_now(&table, ForecastColumn::TemperatureValue)?;
/// assert_eq!(now, CellValue::Integer(12));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn closest_to_now(
    table: &ForecastTable,
    column: ForecastColumn,
) -> Result<CellValue, ForecastError> {
    closest_to(table, column, Local::now().naive_local())
}

/// Summary of the hourly rows of one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayAggregate {
    pub date: NaiveDate,
    /// Number of rows in the bucket.
    pub rows: usize,
    pub temperature_max: Option<i64>,
    pub temperature_min: Option<i64>,
    pub precipitation_max: Option<f64>,
    pub precipitation_max_at: Option<NaiveDateTime>,
    pub storm_max: Option<f64>,
    pub storm_max_at: Option<NaiveDateTime>,
    pub wind_speed_max: Option<i64>,
    /// Description of the row with the highest numeric sky code.
    pub sky_description: Option<String>,
}

impl DayAggregate {
    pub fn precipitation_onset(&self) -> Onset {
        onset_time(self.precipitation_max, self.precipitation_max_at)
    }

    /// Always "no onset": storm probability is not part of the agency forecast rows.
    pub fn storm_onset(&self) -> Onset {
        onset_time(self.storm_max, self.storm_max_at)
    }
}

/// When a probability first peaks within a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Onset {
    pub probability: f64,
    pub at: Option<NaiveDateTime>,
}

impl Onset {
    pub fn is_none(&self) -> bool {
        self.at.is_none()
    }
}

/// `(max, at)` when the day's maximum is above zero, `(0, none)` otherwise.
pub fn onset_time(bucket_max: Option<f64>, bucket_max_at: Option<NaiveDateTime>) -> Onset {
    match bucket_max {
        Some(probability) if probability > 0.0 => Onset {
            probability,
            at: bucket_max_at,
        },
        _ => Onset {
            probability: 0.0,
            at: None,
        },
    }
}

/// First row holding the largest numeric value of `value`, with that value.
fn first_max<'a>(
    rows: &[&'a NormalizedRow],
    value: impl Fn(&NormalizedRow) -> Option<f64>,
) -> Option<(&'a NormalizedRow, f64)> {
    rows.iter()
        .copied()
        .filter_map(|row| value(row).map(|v| (row, v)))
        .min_by_key(|(_, v)| Reverse(OrderedFloat(*v)))
}

/// Aggregates the rows whose `fecha_hora` falls on `day`.
///
/// Precipitation and storm probabilities are read numerically; text that is not a
/// number is left out of the maximum. Returns `Ok(None)` when the day has no rows.
///
/// # Errors
///
/// [`ForecastError::NotHourly`] for daily tables, [`ForecastError::DateParsingError`]
/// when `day` cannot be resolved.
pub fn day_bucket_aggregate(
    table: &ForecastTable,
    day: impl DateTimePeriod,
) -> Result<Option<DayAggregate>, ForecastError> {
    require_hourly(table)?;
    let period = day
        .get_datetime_period()
        .ok_or(ForecastError::DateParsingError)?;

    let bucket: Vec<&NormalizedRow> = table
        .rows()
        .iter()
        .filter(|row| row.fecha_hora.is_some_and(|at| period.contains(at)))
        .collect();
    debug!(
        "Day bucket {} holds {} of {} rows",
        period.start.date(),
        bucket.len(),
        table.len()
    );
    if bucket.is_empty() {
        return Ok(None);
    }

    let precipitation = first_max(&bucket, |row| {
        row.precipitation_value.as_ref().and_then(|v| v.as_f64())
    });
    let storm = first_max(&bucket, |row| {
        row.storm_probability.as_ref().and_then(|v| v.as_f64())
    });
    let sky_description = bucket
        .iter()
        .filter_map(|row| {
            let code = row.sky_value.as_deref()?.parse::<i64>().ok()?;
            Some((code, row))
        })
        .min_by_key(|(code, _)| Reverse(*code))
        .and_then(|(_, row)| row.sky_description.clone());

    Ok(Some(DayAggregate {
        date: period.start.date(),
        rows: bucket.len(),
        temperature_max: bucket.iter().filter_map(|row| row.temperature_max).max(),
        temperature_min: bucket.iter().filter_map(|row| row.temperature_min).min(),
        precipitation_max: precipitation.map(|(_, v)| v),
        precipitation_max_at: precipitation.and_then(|(row, _)| row.fecha_hora),
        storm_max: storm.map(|(_, v)| v),
        storm_max_at: storm.and_then(|(row, _)| row.fecha_hora),
        wind_speed_max: bucket.iter().filter_map(|row| row.wind_speed).max(),
        sky_description,
    }))
}
