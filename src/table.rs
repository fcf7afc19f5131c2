//! The assembled, flat forecast table and its polars export.

use crate::error::{ExtractionIssue, ForecastError};
use crate::frames::daily_frame::DailyForecastFrame;
use crate::frames::hourly_frame::HourlyForecastFrame;
use crate::types::granularity::Granularity;
use crate::types::period_key::PeriodKey;
use crate::types::row::NormalizedRow;
use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;

/// Ordered (date, period) rows of one forecast, plus the issues met while building them.
///
/// Tables are built from scratch by [`crate::normalize_daily`] / [`crate::normalize_hourly`]
/// and never mutated afterwards; every query borrows them read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastTable {
    granularity: Granularity,
    rows: Vec<NormalizedRow>,
    issues: Vec<ExtractionIssue>,
}

impl ForecastTable {
    pub(crate) fn new(
        granularity: Granularity,
        rows: Vec<NormalizedRow>,
        issues: Vec<ExtractionIssue>,
    ) -> Self {
        Self {
            granularity,
            rows,
            issues,
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn rows(&self) -> &[NormalizedRow] {
        &self.rows
    }

    pub fn issues(&self) -> &[ExtractionIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct dates, in table order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = Vec::new();
        for row in &self.rows {
            if !dates.contains(&row.fecha) {
                dates.push(row.fecha);
            }
        }
        dates
    }

    /// The period keys of one date, in table order.
    pub fn periods_for(&self, date: NaiveDate) -> Vec<&PeriodKey> {
        self.rows
            .iter()
            .filter(|row| row.fecha == date)
            .map(|row| &row.periodo)
            .collect()
    }

    /// Converts the table into a polars `DataFrame` with one column per field.
    ///
    /// `fecha` is written as `YYYY-MM-DD` text. Precipitation and storm probabilities
    /// are coerced to `Float64` (non-numeric text becomes null). `fecha_hora` is only
    /// present on hourly tables.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::DataFrame`] if polars rejects the columns.
    pub fn to_dataframe(&self) -> Result<DataFrame, ForecastError> {
        let rows = &self.rows;
        let mut columns: Vec<Column> = vec![
            Series::new(
                "fecha".into(),
                rows.iter()
                    .map(|r| r.fecha.format("%Y-%m-%d").to_string())
                    .collect::<Vec<String>>(),
            )
            .into(),
            Series::new(
                "periodo".into(),
                rows.iter()
                    .map(|r| r.periodo.to_string())
                    .collect::<Vec<String>>(),
            )
            .into(),
            Series::new(
                "temperature_max".into(),
                rows.iter().map(|r| r.temperature_max).collect::<Vec<Option<i64>>>(),
            )
            .into(),
            Series::new(
                "temperature_min".into(),
                rows.iter().map(|r| r.temperature_min).collect::<Vec<Option<i64>>>(),
            )
            .into(),
            Series::new(
                "temperature_value".into(),
                rows.iter().map(|r| r.temperature_value).collect::<Vec<Option<i64>>>(),
            )
            .into(),
            Series::new(
                "precipitation_value".into(),
                rows.iter()
                    .map(|r| r.precipitation_value.as_ref().and_then(|v| v.as_f64()))
                    .collect::<Vec<Option<f64>>>(),
            )
            .into(),
            Series::new(
                "sky_value".into(),
                rows.iter().map(|r| r.sky_value.clone()).collect::<Vec<Option<String>>>(),
            )
            .into(),
            Series::new(
                "sky_description".into(),
                rows.iter()
                    .map(|r| r.sky_description.clone())
                    .collect::<Vec<Option<String>>>(),
            )
            .into(),
            Series::new(
                "wind_direction".into(),
                rows.iter()
                    .map(|r| r.wind_direction.clone())
                    .collect::<Vec<Option<String>>>(),
            )
            .into(),
            Series::new(
                "wind_speed".into(),
                rows.iter().map(|r| r.wind_speed).collect::<Vec<Option<i64>>>(),
            )
            .into(),
            Series::new(
                "wind_gust".into(),
                rows.iter().map(|r| r.wind_gust).collect::<Vec<Option<i64>>>(),
            )
            .into(),
            Series::new(
                "storm_probability".into(),
                rows.iter()
                    .map(|r| r.storm_probability.as_ref().and_then(|v| v.as_f64()))
                    .collect::<Vec<Option<f64>>>(),
            )
            .into(),
        ];

        if self.granularity == Granularity::Hourly {
            columns.push(
                Series::new(
                    "fecha_hora".into(),
                    rows.iter()
                        .map(|r| r.fecha_hora)
                        .collect::<Vec<Option<NaiveDateTime>>>(),
                )
                .into(),
            );
        }

        Ok(DataFrame::new(columns)?)
    }

    /// Wraps the hourly table in a lazily filterable frame.
    ///
    /// # Errors
    ///
    /// [`ForecastError::GranularityMismatch`] for daily tables, or
    /// [`ForecastError::DataFrame`] if the export fails.
    pub fn hourly_frame(&self) -> Result<HourlyForecastFrame, ForecastError> {
        self.expect_granularity(Granularity::Hourly)?;
        Ok(HourlyForecastFrame::new(self.to_dataframe()?.lazy()))
    }

    /// Wraps the daily table in a lazily filterable frame.
    ///
    /// # Errors
    ///
    /// [`ForecastError::GranularityMismatch`] for hourly tables, or
    /// [`ForecastError::DataFrame`] if the export fails.
    pub fn daily_frame(&self) -> Result<DailyForecastFrame, ForecastError> {
        self.expect_granularity(Granularity::Daily)?;
        Ok(DailyForecastFrame::new(self.to_dataframe()?.lazy()))
    }

    fn expect_granularity(&self, expected: Granularity) -> Result<(), ForecastError> {
        if self.granularity == expected {
            Ok(())
        } else {
            Err(ForecastError::GranularityMismatch {
                expected,
                found: self.granularity,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{daily_fixture, hourly_fixture};
    use crate::{normalize_daily, normalize_hourly};

    #[test]
    fn test_hourly_dataframe_schema() -> Result<(), Box<dyn std::error::Error>> {
        let table = normalize_hourly(&hourly_fixture());
        let df = table.to_dataframe()?;

        assert_eq!(df.height(), table.len());
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let expected: Vec<String> = Granularity::Hourly
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, expected);
        assert!(matches!(
            df.column("fecha_hora")?.dtype(),
            DataType::Datetime(_, None)
        ));
        assert_eq!(df.column("precipitation_value")?.dtype(), &DataType::Float64);
        Ok(())
    }

    #[test]
    fn test_daily_dataframe_has_no_timestamp() -> Result<(), Box<dyn std::error::Error>> {
        let table = normalize_daily(&daily_fixture());
        let df = table.to_dataframe()?;
        assert_eq!(df.height(), table.len());
        assert!(df.column("fecha_hora").is_err());
        assert_eq!(df.column("fecha")?.str()?.get(0), Some("2024-11-05"));
        Ok(())
    }

    #[test]
    fn test_wrong_frame_kind_is_rejected() {
        let daily = normalize_daily(&daily_fixture());
        assert!(matches!(
            daily.hourly_frame(),
            Err(ForecastError::GranularityMismatch {
                expected: Granularity::Hourly,
                found: Granularity::Daily,
            })
        ));
        let hourly = normalize_hourly(&hourly_fixture());
        assert!(hourly.daily_frame().is_err());
    }

    #[test]
    fn test_dates_and_periods() {
        let table = normalize_daily(&daily_fixture());
        let dates = table.dates();
        assert_eq!(dates.len(), 3);
        let first: Vec<String> = table
            .periods_for(dates[0])
            .iter()
            .map(|key| key.to_string())
            .collect();
        assert_eq!(first, vec!["00-06", "06-12", "12-18", "18-24"]);
    }
}
