//! Provides the `HourlyClient`, obtained via [`ForecastClient::hourly()`].

use crate::sources::{ForecastSource, PlaceResolver};
use crate::{FillPolicy, ForecastClient, ForecastTable, Granularity};
use bon::bon;

/// Builder entry for hourly forecasts.
///
/// Start with `.place(name)` or `.code(code)`, optionally set `.fill_policy(..)`,
/// then `.call()` to get an `Option<ForecastTable>`.
pub struct HourlyClient<'a, S, R> {
    client: &'a ForecastClient<S, R>,
}

#[bon]
impl<'a, S: ForecastSource, R: PlaceResolver> HourlyClient<'a, S, R> {
    pub(crate) fn new(client: &'a ForecastClient<S, R>) -> Self {
        Self { client }
    }

    /// Hourly forecast for a place name.
    ///
    /// ```
    /// # use aemet_forecast::{FillPolicy, ForecastClient, StaticForecastSource};
    /// let nowhere = |_: &str| -> Option<String> { None };
    /// let client = ForecastClient::new(StaticForecastSource::new(), nowhere);
    /// let table = client
    ///     .hourly()
    ///     .place("Quart de Poblet")
    ///     .fill_policy(FillPolicy::leave_missing())
    ///     .call();
    /// assert!(table.is_none());
    /// ```
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
            .granularity(Granularity::Hourly)
            .maybe_fill_policy(fill_policy)
            .call()
    }

    /// Hourly forecast for an AEMET municipality code (e.g. `"46102"`).
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
            .granularity(Granularity::Hourly)
            .maybe_fill_policy(fill_policy)
            .call()
    }
}
