//! Provides the `DailyClient`, obtained via [`ForecastClient::daily()`].

use crate::sources::{ForecastSource, PlaceResolver};
use crate::{FillPolicy, ForecastClient, ForecastTable, Granularity};
use bon::bon;

/// Builder entry for six-hour block forecasts.
///
/// Start with `.place(name)` or `.code(code)`, optionally set `.fill_policy(..)`,
/// then `.call()` to get an `Option<ForecastTable>`.
pub struct DailyClient<'a, S, R> {
    client: &'a ForecastClient<S, R>,
}

#[bon]
impl<'a, S: ForecastSource, R: PlaceResolver> DailyClient<'a, S, R> {
    pub(crate) fn new(client: &'a ForecastClient<S, R>) -> Self {
        Self { client }
    }

    #[builder(start_fn = place)]
    #[doc(hidden)]
    pub fn build_place(
        &self,
        #[builder(start_fn)] place: &str,
        fill_policy: Option<FillPolicy>,
    ) -> Option<ForecastTable> {
        self.client
            .from_place()
            .place(place)
            .granularity(Granularity::Daily)
            .maybe_fill_policy(fill_policy)
            .call()
    }

    #[builder(start_fn = code)]
    #[doc(hidden)]
    pub fn build_code(
        &self,
        #[builder(start_fn)] code: &str,
        fill_policy: Option<FillPolicy>,
    ) -> Option<ForecastTable> {
        self.client
            .from_code()
            .code(code)
            .granularity(Granularity::Daily)
            .maybe_fill_policy(fill_policy)
            .call()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::daily_json;
    use crate::{FillPolicy, ForecastClient, Granularity, Reading, StaticForecastSource};
    use std::collections::HashMap;

    #[test]
    fn test_daily_by_place_with_policy() {
        let source =
            StaticForecastSource::new().with_document("46102", Granularity::Daily, daily_json());
        let places = HashMap::from([("Quart de Poblet".to_string(), "46102".to_string())]);
        let client = ForecastClient::new(source, places);

        let policy = FillPolicy::builder().precipitation_value(Reading::Number(-1.0)).build();
        let table = client.daily().place("quart de poblet").fill_policy(policy).call().unwrap();
        assert_eq!(table.len(), 12);
        // the canonical blocks are null-filled during extraction, so the policy skips them
        let far = table.rows().last().unwrap();
        assert_eq!(far.precipitation_value, None);
    }

    #[test]
    fn test_daily_by_code_missing() {
        let places = HashMap::<String, String>::new();
        let client = ForecastClient::new(StaticForecastSource::new(), places);
        assert!(client.daily().code("46102").call().is_none());
    }
}
