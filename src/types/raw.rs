//! Serde models of the AEMET municipal forecast documents.
//!
//! Both endpoints (`diaria` and `horaria`) return a JSON array holding one document
//! per municipality. Each document carries a list of day records whose sub-lists
//! differ in shape between the two granularities, so each granularity has its own
//! day record type. Every sub-list defaults to empty so a day missing a concern
//! degrades to default-fill instead of failing the whole document.

use crate::error::ForecastError;
use crate::types::reading::Reading;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// One municipality's forecast, generic over the day record shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDocument<D> {
    pub nombre: Option<String>,
    pub provincia: Option<String>,
    pub elaborado: Option<String>,
    pub prediccion: Prediction<D>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Prediction<D> {
    #[serde(default = "Vec::new")]
    pub dia: Vec<D>,
}

impl<D: DeserializeOwned> ForecastDocument<D> {
    /// Parses the array AEMET returns and keeps its first document.
    ///
    /// # Errors
    ///
    /// [`ForecastError::Json`] if the text is not a document array of the expected
    /// shape, [`ForecastError::EmptyDocument`] if the array is empty.
    pub fn parse_first(json: &str) -> Result<Self, ForecastError> {
        let documents: Vec<Self> = serde_json::from_str(json)?;
        documents
            .into_iter()
            .next()
            .ok_or(ForecastError::EmptyDocument)
    }

    pub fn into_days(self) -> Vec<D> {
        self.prediccion.dia
    }
}

/// One day of the daily (`diaria`) forecast.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyDayRecord {
    #[serde(deserialize_with = "deserialize_fecha")]
    pub fecha: NaiveDate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub temperatura: DailyTemperature,
    #[serde(default, deserialize_with = "null_as_default", rename = "probPrecipitacion")]
    pub prob_precipitacion: Vec<RawPeriodValue>,
    #[serde(default, deserialize_with = "null_as_default", rename = "estadoCielo")]
    pub estado_cielo: Vec<RawSkyPeriod>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub viento: Vec<RawDailyWind>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailyTemperature {
    pub maxima: Option<Reading>,
    pub minima: Option<Reading>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dato: Vec<RawHourReading>,
}

/// A daily temperature reading at the end hour of its block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawHourReading {
    pub hora: Option<u32>,
    pub value: Option<Reading>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPeriodValue {
    pub periodo: Option<String>,
    pub value: Option<Reading>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSkyPeriod {
    pub periodo: Option<String>,
    pub value: Option<String>,
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawDailyWind {
    pub periodo: Option<String>,
    pub direccion: Option<String>,
    pub velocidad: Option<Reading>,
}

/// One day of the hourly (`horaria`) forecast.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourlyDayRecord {
    #[serde(deserialize_with = "deserialize_fecha")]
    pub fecha: NaiveDate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub temperatura: Vec<RawPeriodValue>,
    #[serde(default, deserialize_with = "null_as_default", rename = "probPrecipitacion")]
    pub prob_precipitacion: Vec<RawPeriodValue>,
    #[serde(default, deserialize_with = "null_as_default", rename = "estadoCielo")]
    pub estado_cielo: Vec<RawSkyPeriod>,
    #[serde(default, deserialize_with = "null_as_default", rename = "vientoAndRachaMax")]
    pub viento_and_racha_max: Vec<RawHourlyWind>,
}

/// An entry of `vientoAndRachaMax`.
///
/// Start entries carry `periodo`, `direccion` and `velocidad` (as one-element
/// arrays); gust entries that follow them carry only `value`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawHourlyWind {
    pub periodo: Option<String>,
    pub direccion: Option<Vec<String>>,
    pub velocidad: Option<Vec<Reading>>,
    pub value: Option<Reading>,
}

/// Reads an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM:SS`, keeping the calendar day.
fn deserialize_fecha<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let day = text.get(..10).unwrap_or(&text);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|e| serde::de::Error::custom(format!("invalid fecha '{}': {}", text, e)))
}
