use crate::types::period_key::PeriodKey;
use crate::types::reading::Reading;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// One flattened (date, period) row of a forecast table.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub fecha: NaiveDate,
    pub periodo: PeriodKey,
    pub temperature_max: Option<i64>,
    pub temperature_min: Option<i64>,
    pub temperature_value: Option<i64>,
    pub precipitation_value: Option<Reading>,
    pub sky_value: Option<String>,
    pub sky_description: Option<String>,
    pub wind_direction: Option<String>,
    pub wind_speed: Option<i64>,
    pub wind_gust: Option<i64>,
    /// Never populated by the extractors; kept so downstream storm queries have a column.
    pub storm_probability: Option<Reading>,
    /// Hourly tables only.
    pub fecha_hora: Option<NaiveDateTime>,
}

/// Addresses a column of [`NormalizedRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForecastColumn {
    Fecha,
    Periodo,
    TemperatureMax,
    TemperatureMin,
    TemperatureValue,
    PrecipitationValue,
    SkyValue,
    SkyDescription,
    WindDirection,
    WindSpeed,
    WindGust,
    StormProbability,
    FechaHora,
}

impl ForecastColumn {
    pub fn name(&self) -> &'static str {
        match self {
            ForecastColumn::Fecha => "fecha",
            ForecastColumn::Periodo => "periodo",
            ForecastColumn::TemperatureMax => "temperature_max",
            ForecastColumn::TemperatureMin => "temperature_min",
            ForecastColumn::TemperatureValue => "temperature_value",
            ForecastColumn::PrecipitationValue => "precipitation_value",
            ForecastColumn::SkyValue => "sky_value",
            ForecastColumn::SkyDescription => "sky_description",
            ForecastColumn::WindDirection => "wind_direction",
            ForecastColumn::WindSpeed => "wind_speed",
            ForecastColumn::WindGust => "wind_gust",
            ForecastColumn::StormProbability => "storm_probability",
            ForecastColumn::FechaHora => "fecha_hora",
        }
    }
}

impl fmt::Display for ForecastColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single cell read out of a [`NormalizedRow`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Missing,
    Integer(i64),
    Number(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Number(n) => Some(*n),
            CellValue::Text(text) => Reading::Text(text.clone()).as_f64(),
            _ => None,
        }
    }
}

impl From<Option<i64>> for CellValue {
    fn from(value: Option<i64>) -> Self {
        value.map_or(CellValue::Missing, CellValue::Integer)
    }
}

impl From<Option<&Reading>> for CellValue {
    fn from(value: Option<&Reading>) -> Self {
        match value {
            Some(Reading::Number(n)) => CellValue::Number(*n),
            Some(Reading::Text(text)) => CellValue::Text(text.clone()),
            None => CellValue::Missing,
        }
    }
}

impl From<Option<&String>> for CellValue {
    fn from(value: Option<&String>) -> Self {
        value.map_or(CellValue::Missing, |text| CellValue::Text(text.clone()))
    }
}

impl NormalizedRow {
    pub fn value(&self, column: ForecastColumn) -> CellValue {
        match column {
            ForecastColumn::Fecha => CellValue::Date(self.fecha),
            ForecastColumn::Periodo => CellValue::Text(self.periodo.to_string()),
            ForecastColumn::TemperatureMax => self.temperature_max.into(),
            ForecastColumn::TemperatureMin => self.temperature_min.into(),
            ForecastColumn::TemperatureValue => self.temperature_value.into(),
            ForecastColumn::PrecipitationValue => self.precipitation_value.as_ref().into(),
            ForecastColumn::SkyValue => self.sky_value.as_ref().into(),
            ForecastColumn::SkyDescription => self.sky_description.as_ref().into(),
            ForecastColumn::WindDirection => self.wind_direction.as_ref().into(),
            ForecastColumn::WindSpeed => self.wind_speed.into(),
            ForecastColumn::WindGust => self.wind_gust.into(),
            ForecastColumn::StormProbability => self.storm_probability.as_ref().into(),
            ForecastColumn::FechaHora => self
                .fecha_hora
                .map_or(CellValue::Missing, CellValue::DateTime),
        }
    }
}
