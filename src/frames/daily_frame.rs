// daily_frame.rs

//! Contains the `DailyForecastFrame` structure for lazy operations on an exported daily forecast.

use crate::error::ForecastError;
use crate::types::traits::datetime_period::DateTimePeriod;
use polars::prelude::{col, lit, Expr, LazyFrame};

/// A wrapper around a Polars `LazyFrame` holding a daily forecast table.
///
/// Daily rows have no timestamp; days are matched on the `fecha` text column
/// (`YYYY-MM-DD`) and blocks on `periodo`.
///
/// Instances are obtained via [`crate::ForecastTable::daily_frame`].
#[derive(Clone)]
pub struct DailyForecastFrame {
    /// The underlying Polars LazyFrame containing the daily rows.
    pub frame: LazyFrame,
}

impl DailyForecastFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Filters the rows with a Polars predicate. The original frame is left unchanged.
    pub fn filter(&self, predicate: Expr) -> DailyForecastFrame {
        DailyForecastFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps the blocks of one day.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::DateParsingError`] if `day` cannot be resolved.
    pub fn get_for_date(
        &self,
        day: impl DateTimePeriod,
    ) -> Result<DailyForecastFrame, ForecastError> {
        let date = day
            .get_datetime_period()
            .ok_or(ForecastError::DateParsingError)?
            .start
            .date();
        Ok(self.filter(col("fecha").eq(lit(date.format("%Y-%m-%d").to_string()))))
    }

    /// Keeps one block label (e.g. `"06-12"`) across all days.
    pub fn get_period(&self, periodo: &str) -> DailyForecastFrame {
        self.filter(col("periodo").eq(lit(periodo.to_string())))
    }
}
