//! Seams to the collaborators that sit outside the normalization pipeline:
//! retrieving raw forecast documents and mapping place names to AEMET codes.

use crate::types::granularity::Granularity;
use crate::types::raw::{DailyDayRecord, ForecastDocument, HourlyDayRecord};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Supplies raw day records for a municipality code.
///
/// `None` means "no data" (a failed request, an unknown code); callers surface it
/// as an absent table rather than an error.
pub trait ForecastSource {
    fn fetch_daily(&self, code: &str) -> Option<Vec<DailyDayRecord>>;
    fn fetch_hourly(&self, code: &str) -> Option<Vec<HourlyDayRecord>>;
}

/// Maps a human place name to the agency's municipality code.
pub trait PlaceResolver {
    fn resolve_place_code(&self, name: &str) -> Option<String>;
}

/// Name to code lookup; names match ignoring case and surrounding whitespace.
impl PlaceResolver for HashMap<String, String> {
    fn resolve_place_code(&self, name: &str) -> Option<String> {
        let wanted = name.trim().to_lowercase();
        self.iter()
            .find(|(place, _)| place.trim().to_lowercase() == wanted)
            .map(|(_, code)| code.clone())
    }
}

impl<F> PlaceResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve_place_code(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Agency JSON documents held in memory, keyed by municipality code and granularity.
///
/// ```
/// use aemet_forecast::{ForecastSource, Granularity, StaticForecastSource};
///
/// let source = StaticForecastSource::new().with_document(
///     "46102",
///     Granularity::Daily,
///     r#"[{
///         "nombre": "Quart de Poblet",
///         "prediccion": { "dia": [ { "fecha": "2024-11-05T00:00:00" } ] }
///     }]"#,
/// );
/// assert_eq!(source.fetch_daily("46102").map(|days| days.len()), Some(1));
/// assert!(source.fetch_hourly("46102").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticForecastSource {
    documents: HashMap<(String, Granularity), String>,
}

impl StaticForecastSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(
        mut self,
        code: impl Into<String>,
        granularity: Granularity,
        json: impl Into<String>,
    ) -> Self {
        self.insert(code, granularity, json);
        self
    }

    /// Stores (or replaces) the document for `code` at `granularity`.
    pub fn insert(
        &mut self,
        code: impl Into<String>,
        granularity: Granularity,
        json: impl Into<String>,
    ) {
        self.documents.insert((code.into(), granularity), json.into());
    }

    fn days<D: DeserializeOwned>(&self, code: &str, granularity: Granularity) -> Option<Vec<D>> {
        let json = self.documents.get(&(code.to_string(), granularity))?;
        match ForecastDocument::<D>::parse_first(json) {
            Ok(document) => {
                let days = document.into_days();
                debug!("Loaded {} {} days for {}", days.len(), granularity, code);
                Some(days)
            }
            Err(e) => {
                warn!("Discarding {} document for {}: {}", granularity, code, e);
                None
            }
        }
    }
}

impl ForecastSource for StaticForecastSource {
    fn fetch_daily(&self, code: &str) -> Option<Vec<DailyDayRecord>> {
        self.days(code, Granularity::Daily)
    }

    fn fetch_hourly(&self, code: &str) -> Option<Vec<HourlyDayRecord>> {
        self.days(code, Granularity::Hourly)
    }
}
