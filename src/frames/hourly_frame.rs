// hourly_frame.rs

//! Contains the `HourlyForecastFrame` structure for lazy operations on an exported hourly forecast.

use crate::error::ForecastError;
use crate::types::traits::datetime_period::DateTimePeriod;
use chrono::NaiveDateTime;
use polars::prelude::{col, lit, Expr, LazyFrame};

/// A wrapper around a Polars `LazyFrame` holding an hourly forecast table.
///
/// The frame has the columns of [`crate::Granularity::column_names`] for hourly
/// tables, including the timezone-naive `fecha_hora` column the range filters run on.
///
/// Instances are obtained via [`crate::ForecastTable::hourly_frame`].
///
/// # Errors
///
/// Operations that trigger computation on the underlying `LazyFrame` (e.g. `.collect()`)
/// can return a [`polars::prelude::PolarsError`].
#[derive(Clone)]
pub struct HourlyForecastFrame {
    /// The underlying Polars LazyFrame containing the hourly rows.
    pub frame: LazyFrame,
}

impl HourlyForecastFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Filters the rows with a Polars predicate. The original frame is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// # use aemet_forecast::{normalize_hourly, HourlyDayRecord};
    /// use polars::prelude::{col, lit};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let days: Vec<HourlyDayRecord> = serde_json::from_str(r#"[{
    ///     "fecha": "2024-11-05",
    ///     "temperatura": [ { "value": "3", "periodo": "06" }, { "value": "-1", "periodo": "07" } ]
    /// }]"#)?;
    ///
    /// let freezing = normalize_hourly(&days)
    ///     .hourly_frame()?
    ///     .filter(col("temperature_value").lt(lit(0i64)));
    /// assert_eq!(freezing.frame.collect()?.height(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn filter(&self, predicate: Expr) -> HourlyForecastFrame {
        HourlyForecastFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps the rows whose `fecha_hora` lies in `start..=end`.
    pub fn get_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> HourlyForecastFrame {
        self.filter(
            col("fecha_hora")
                .gt_eq(lit(start))
                .and(col("fecha_hora").lt_eq(lit(end))),
        )
    }

    /// Keeps the rows of one day, given as a `NaiveDate` or a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::DateParsingError`] if `period` cannot be resolved.
    pub fn get_for_period(
        &self,
        period: impl DateTimePeriod,
    ) -> Result<HourlyForecastFrame, ForecastError> {
        let datetime_period = period
            .get_datetime_period()
            .ok_or(ForecastError::DateParsingError)?;
        Ok(self.get_range(datetime_period.start, datetime_period.end))
    }
}
