//! The main entry point: fetch a municipality's forecast and normalize it into a table.

use crate::clients::daily_client::DailyClient;
use crate::clients::hourly_client::HourlyClient;
use crate::normalize::{normalize_daily_with_policy, normalize_hourly_with_policy};
use crate::sources::{ForecastSource, PlaceResolver};
use crate::table::ForecastTable;
use crate::types::fill_policy::FillPolicy;
use crate::types::granularity::Granularity;
use bon::bon;
use log::warn;

/// Combines a [`ForecastSource`] and a [`PlaceResolver`] into forecast tables.
///
/// Tables are rebuilt from freshly fetched records on every call; nothing is cached.
/// A place that cannot be resolved, or a source returning nothing, yields `None`
/// ("no data") instead of an error.
///
/// # Examples
///
/// ```
/// use aemet_forecast::{ForecastClient, Granularity, StaticForecastSource};
/// use std::collections::HashMap;
///
/// let source = StaticForecastSource::new().with_document(
///     "46102",
///     Granularity::Hourly,
///     r#"[{ "prediccion": { "dia": [ {
///         "fecha": "2024-11-05T00:00:00",
///         "temperatura": [ { "value": "14", "periodo": "20" } ]
///     } ] } }]"#,
/// );
/// let places = HashMap::from([("Quart de Poblet".to_string(), "46102".to_string())]);
/// let client = ForecastClient::new(source, places);
///
/// let table = client.hourly().place("Quart de Poblet").call().expect("forecast available");
/// assert_eq!(table.len(), 1);
/// assert!(client.daily().code("46102").call().is_none());
/// ```
pub struct ForecastClient<S, R> {
    source: S,
    resolver: R,
}

#[bon]
impl<S: ForecastSource, R: PlaceResolver> ForecastClient<S, R> {
    pub fn new(source: S, resolver: R) -> Self {
        Self { source, resolver }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Client for the hour-by-hour forecast.
    pub fn hourly(&self) -> HourlyClient<'_, S, R> {
        HourlyClient::new(self)
    }

    /// Client for the six-hour block forecast.
    pub fn daily(&self) -> DailyClient<'_, S, R> {
        DailyClient::new(self)
    }

    /// Looks up the municipality code of a place name.
    pub fn resolve(&self, place: &str) -> Option<String> {
        let code = self.resolver.resolve_place_code(place);
        if code.is_none() {
            warn!("No municipality code known for '{}'", place);
        }
        code
    }

    /// Fetches and normalizes the forecast of one municipality code.
    ///
    /// Without a `fill_policy` the granularity's stock policy applies
    /// (see [`FillPolicy::for_granularity`]).
    #[builder]
    pub fn from_code(
        &self,
        code: &str,
        granularity: Granularity,
        fill_policy: Option<FillPolicy>,
    ) -> Option<ForecastTable> {
        let policy = fill_policy.unwrap_or_else(|| FillPolicy::for_granularity(granularity));
        let table = match granularity {
            Granularity::Daily => self
                .source
                .fetch_daily(code)
                .map(|days| normalize_daily_with_policy(&days, &policy)),
            Granularity::Hourly => self
                .source
                .fetch_hourly(code)
                .map(|days| normalize_hourly_with_policy(&days, &policy)),
        };
        if table.is_none() {
            warn!("No {} forecast returned for municipality {}", granularity, code);
        }
        table
    }

    /// Resolves `place` and then behaves like [`ForecastClient::from_code`].
    #[builder]
    pub fn from_place(
        &self,
        place: &str,
        granularity: Granularity,
        fill_policy: Option<FillPolicy>,
    ) -> Option<ForecastTable> {
        let code = self.resolve(place)?;
        self.from_code()
            .code(&code)
            .granularity(granularity)
            .maybe_fill_policy(fill_policy)
            .call()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::StaticForecastSource;
    use crate::test_support::{daily_json, hourly_json};
    use std::collections::HashMap;

    fn client() -> ForecastClient<StaticForecastSource, HashMap<String, String>> {
        let source = StaticForecastSource::new()
            .with_document("46102", Granularity::Daily, daily_json())
            .with_document("46102", Granularity::Hourly, hourly_json());
        let places = HashMap::from([("Quart de Poblet".to_string(), "46102".to_string())]);
        ForecastClient::new(source, places)
    }

    #[test]
    fn test_from_code() {
        let client = client();
        let daily = client
            .from_code()
            .code("46102")
            .granularity(Granularity::Daily)
            .call()
            .unwrap();
        assert_eq!(daily.granularity(), Granularity::Daily);
        assert_eq!(daily.len(), 12);

        let hourly = client
            .from_code()
            .code("46102")
            .granularity(Granularity::Hourly)
            .call()
            .unwrap();
        assert_eq!(hourly.len(), 8);
    }

    #[test]
    fn test_from_place() {
        let client = client();
        let table = client
            .from_place()
            .place("QUART DE POBLET")
            .granularity(Granularity::Hourly)
            .fill_policy(FillPolicy::leave_missing())
            .call()
            .unwrap();
        assert!(table
            .rows()
            .iter()
            .any(|row| row.sky_description.is_none()));
    }

    #[test]
    fn test_unknown_place_and_code_have_no_data() {
        let client = client();
        assert!(client
            .from_place()
            .place("Alzira")
            .granularity(Granularity::Daily)
            .call()
            .is_none());
        assert!(client
            .from_code()
            .code("46017")
            .granularity(Granularity::Hourly)
            .call()
            .is_none());
    }
}
