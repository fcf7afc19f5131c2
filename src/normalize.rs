//! Pipeline entry points: raw day records in, [`ForecastTable`] out.

use crate::assemble::{assemble, ConcernMaps};
use crate::extract::{daily, hourly};
use crate::table::ForecastTable;
use crate::types::fill_policy::FillPolicy;
use crate::types::granularity::Granularity;
use crate::types::raw::{DailyDayRecord, HourlyDayRecord};
use log::debug;

/// Normalizes daily day records, leaving gaps null.
///
/// # Example
///
/// ```
/// use aemet_forecast::{normalize_daily, DailyDayRecord};
///
/// let days: Vec<DailyDayRecord> = serde_json::from_str(r#"[{
///     "fecha": "2024-11-05T00:00:00",
///     "temperatura": { "maxima": 22, "minima": 11, "dato": [] }
/// }]"#)?;
///
/// let table = normalize_daily(&days);
/// assert_eq!(table.len(), 4);
/// assert!(table.rows().iter().all(|row| row.temperature_max == Some(22)));
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn normalize_daily(days: &[DailyDayRecord]) -> ForecastTable {
    normalize_daily_with_policy(days, &FillPolicy::for_granularity(Granularity::Daily))
}

/// Normalizes daily day records with a custom gap policy.
pub fn normalize_daily_with_policy(days: &[DailyDayRecord], policy: &FillPolicy) -> ForecastTable {
    let temperature = daily::extract_temperature(days);
    let precipitation = daily::extract_precipitation(days);
    let sky = daily::extract_sky(days);
    let wind = daily::extract_wind(days);

    let (rows, assembly_issues) = assemble(
        Granularity::Daily,
        ConcernMaps {
            temperature: &temperature.periods,
            precipitation: &precipitation.periods,
            sky: &sky.periods,
            wind: &wind.periods,
        },
        policy,
    );

    let issues = temperature
        .issues
        .into_iter()
        .chain(precipitation.issues)
        .chain(sky.issues)
        .chain(wind.issues)
        .chain(assembly_issues)
        .collect::<Vec<_>>();

    debug!(
        "Assembled daily table: {} rows from {} days, {} issues",
        rows.len(),
        days.len(),
        issues.len()
    );
    ForecastTable::new(Granularity::Daily, rows, issues)
}

/// Normalizes hourly day records, filling gaps with `0` / `"N/A"`.
///
/// # Example
///
/// ```
/// use aemet_forecast::{normalize_hourly, HourlyDayRecord};
///
/// let days: Vec<HourlyDayRecord> = serde_json::from_str(r#"[{
///     "fecha": "2024-11-05T00:00:00",
///     "temperatura": [ { "value": "12", "periodo": "07" } ],
///     "probPrecipitacion": [ { "value": "35", "periodo": "0713" } ]
/// }]"#)?;
///
/// let table = normalize_hourly(&days);
/// let row = &table.rows()[0];
/// assert_eq!(row.fecha_hora.unwrap().to_string(), "2024-11-05 07:00:00");
/// assert_eq!(row.sky_description.as_deref(), Some("N/A"));
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn normalize_hourly(days: &[HourlyDayRecord]) -> ForecastTable {
    normalize_hourly_with_policy(days, &FillPolicy::for_granularity(Granularity::Hourly))
}

/// Normalizes hourly day records with a custom gap policy.
pub fn normalize_hourly_with_policy(
    days: &[HourlyDayRecord],
    policy: &FillPolicy,
) -> ForecastTable {
    let temperature = hourly::extract_temperature(days);
    let precipitation = hourly::extract_precipitation(days);
    let sky = hourly::extract_sky(days);
    let wind = hourly::extract_wind(days);

    let (rows, assembly_issues) = assemble(
        Granularity::Hourly,
        ConcernMaps {
            temperature: &temperature.periods,
            precipitation: &precipitation.periods,
            sky: &sky.periods,
            wind: &wind.periods,
        },
        policy,
    );

    let issues = temperature
        .issues
        .into_iter()
        .chain(precipitation.issues)
        .chain(sky.issues)
        .chain(wind.issues)
        .chain(assembly_issues)
        .collect::<Vec<_>>();

    debug!(
        "Assembled hourly table: {} rows from {} days, {} issues",
        rows.len(),
        days.len(),
        issues.len()
    );
    ForecastTable::new(Granularity::Hourly, rows, issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{daily, hourly};
    use crate::test_support::{daily_fixture, hourly_fixture};
    use crate::types::reading::Reading;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, d).unwrap()
    }

    #[test]
    fn test_daily_period_sets_match_temperature() {
        let days = daily_fixture();
        let temperature = daily::extract_temperature(&days);
        let table = normalize_daily(&days);

        for (date, periods) in temperature.periods.iter() {
            let expected: Vec<String> = periods.keys().map(|k| k.to_string()).collect();
            let actual: Vec<String> = table
                .periods_for(date)
                .iter()
                .map(|k| k.to_string())
                .collect();
            assert_eq!(actual, expected, "periods differ on {}", date);
        }
        assert_eq!(table.len(), temperature.periods.cell_count());
    }

    #[test]
    fn test_hourly_period_sets_match_temperature() {
        let days = hourly_fixture();
        let temperature = hourly::extract_temperature(&days);
        let table = normalize_hourly(&days);

        for (date, periods) in temperature.periods.iter() {
            let expected: HashSet<String> = periods.keys().map(|k| k.to_string()).collect();
            let actual: HashSet<String> = table
                .periods_for(date)
                .iter()
                .map(|k| k.to_string())
                .collect();
            assert_eq!(actual, expected, "periods differ on {}", date);
        }
    }

    #[test]
    fn test_daily_fixture_rows() {
        let table = normalize_daily(&daily_fixture());
        // 4 blocks on the 5th and 6th, 4 default quarter-days on the 7th
        assert_eq!(table.len(), 12);
        assert!(table.issues().is_empty());

        let morning = &table.rows()[1];
        assert_eq!(morning.fecha, date(5));
        assert_eq!(morning.periodo, "06-12");
        assert_eq!(morning.temperature_value, Some(19));
        assert_eq!(morning.temperature_max, Some(23));
        assert_eq!(morning.temperature_min, Some(12));
        assert_eq!(morning.precipitation_value, Some(Reading::Number(5.0)));
        assert_eq!(morning.sky_value.as_deref(), Some("12"));
        assert_eq!(morning.sky_description.as_deref(), Some("Poco nuboso"));
        assert_eq!(morning.wind_direction.as_deref(), Some("E"));
        assert_eq!(morning.wind_speed, Some(10));
        assert_eq!(morning.fecha_hora, None);

        let far = table.rows().iter().filter(|r| r.fecha == date(7)).collect::<Vec<_>>();
        assert_eq!(far.len(), 4);
        assert!(far.iter().all(|r| r.temperature_value.is_none() && r.temperature_max == Some(21)));
        assert!(far.iter().all(|r| r.precipitation_value.is_none() && r.wind_speed.is_none()));
    }

    #[test]
    fn test_hourly_fixture_rows() {
        let table = normalize_hourly(&hourly_fixture());
        assert_eq!(table.len(), 8);
        assert!(table.issues().is_empty());

        let first = &table.rows()[0];
        assert_eq!(first.periodo, "20");
        assert_eq!(first.fecha_hora, date(5).and_hms_opt(20, 0, 0));
        assert_eq!(first.temperature_min, Some(13));
        assert_eq!(first.temperature_max, Some(16));
        assert_eq!(first.precipitation_value, Some(Reading::Text("10".to_string())));
        assert_eq!(first.wind_gust, Some(17));

        let gap = table
            .rows()
            .iter()
            .find(|r| r.fecha == date(6) && r.periodo == "02")
            .unwrap();
        assert_eq!(gap.sky_description.as_deref(), Some("N/A"));
        assert_eq!(gap.wind_speed, Some(0));
    }

    #[test]
    fn test_custom_policy_overrides_hourly_placeholders() {
        let policy = FillPolicy::leave_missing();
        let table = normalize_hourly_with_policy(&hourly_fixture(), &policy);
        let gap = table
            .rows()
            .iter()
            .find(|r| r.fecha == date(6) && r.periodo == "02")
            .unwrap();
        assert_eq!(gap.sky_description, None);
        assert_eq!(gap.wind_speed, None);
    }

    #[test]
    fn test_pipeline_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let hourly_days = hourly_fixture();
        let first = normalize_hourly(&hourly_days);
        let second = normalize_hourly(&hourly_days);
        assert_eq!(first, second);
        assert!(first.to_dataframe()?.equals_missing(&second.to_dataframe()?));

        let daily_days = daily_fixture();
        assert_eq!(normalize_daily(&daily_days), normalize_daily(&daily_days));
        Ok(())
    }
}
