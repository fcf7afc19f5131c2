//! Joins the four per-concern mappings into flat rows.

use crate::error::{Concern, ExtractionIssue};
use crate::extract::ConcernMap;
use crate::types::cells::{PrecipitationCell, SkyCell, TemperatureCell, WindCell};
use crate::types::fill_policy::FillPolicy;
use crate::types::granularity::Granularity;
use crate::types::period_key::PeriodKey;
use crate::types::row::NormalizedRow;
use chrono::{NaiveDate, NaiveDateTime};

/// The per-concern mappings of one granularity, ready to be joined.
pub struct ConcernMaps<'a> {
    pub temperature: &'a ConcernMap<TemperatureCell>,
    pub precipitation: &'a ConcernMap<PrecipitationCell>,
    pub sky: &'a ConcernMap<SkyCell>,
    pub wind: &'a ConcernMap<WindCell>,
}

/// `fecha` at `periodo:00`, for hourly keys only.
fn timestamp(date: NaiveDate, key: &PeriodKey) -> Option<NaiveDateTime> {
    key.hour_of_day().and_then(|hour| date.and_hms_opt(hour, 0, 0))
}

/// Builds one row per (date, period) of the temperature mapping, in its order.
///
/// Temperature decides which periods exist. Every other concern is looked up by
/// the same (date, period); when it has no entry the `policy` value is used.
/// Hourly rows also get `fecha_hora`; a key that is not an hour leaves it null
/// and is reported.
pub fn assemble(
    granularity: Granularity,
    maps: ConcernMaps<'_>,
    policy: &FillPolicy,
) -> (Vec<NormalizedRow>, Vec<ExtractionIssue>) {
    let mut rows = Vec::with_capacity(maps.temperature.cell_count());
    let mut issues = Vec::new();

    for (date, periods) in maps.temperature.iter() {
        for (key, temperature) in periods.iter() {
            let precipitation = maps.precipitation.get(date, key.as_str());
            let sky = maps.sky.get(date, key.as_str());
            let wind = maps.wind.get(date, key.as_str());

            let fecha_hora = match granularity {
                Granularity::Daily => None,
                Granularity::Hourly => {
                    let instant = timestamp(date, key);
                    if instant.is_none() {
                        issues.push(ExtractionIssue::MalformedPeriodLabel {
                            date,
                            concern: Concern::Temperature,
                            label: key.to_string(),
                        });
                    }
                    instant
                }
            };

            rows.push(NormalizedRow {
                fecha: date,
                periodo: key.clone(),
                temperature_max: temperature.max,
                temperature_min: temperature.min,
                temperature_value: temperature.value,
                precipitation_value: match precipitation {
                    Some(cell) => cell.value.clone(),
                    None => policy.precipitation_value.clone(),
                },
                sky_value: match sky {
                    Some(cell) => cell.value.clone(),
                    None => policy.sky_value.clone(),
                },
                sky_description: match sky {
                    Some(cell) => cell.description.clone(),
                    None => policy.sky_description.clone(),
                },
                wind_direction: match wind {
                    Some(cell) => cell.direction.clone(),
                    None => policy.wind_direction.clone(),
                },
                wind_speed: match wind {
                    Some(cell) => cell.speed,
                    None => policy.wind_speed,
                },
                wind_gust: wind.and_then(|cell| cell.gust),
                storm_probability: None,
                fecha_hora,
            });
        }
    }

    (rows, issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::DayPeriods;
    use crate::types::reading::Reading;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 5).unwrap()
    }

    fn temperature(keys: &[&str]) -> ConcernMap<TemperatureCell> {
        let mut periods = DayPeriods::new();
        for key in keys {
            let cell = TemperatureCell { value: Some(12), max: Some(15), min: Some(8) };
            periods.insert(PeriodKey::from(*key), cell);
        }
        let mut map = ConcernMap::new();
        map.insert_day(date(), periods);
        map
    }

    fn single<T>(key: &str, cell: T) -> ConcernMap<T> {
        let mut periods = DayPeriods::new();
        periods.insert(PeriodKey::from(key), cell);
        let mut map = ConcernMap::new();
        map.insert_day(date(), periods);
        map
    }

    #[test]
    fn test_hourly_gaps_use_placeholders() {
        let temperature = temperature(&["07", "08"]);
        let precipitation = single("07", PrecipitationCell { value: Some(Reading::from("20")) });
        let sky = single(
            "07",
            SkyCell { value: Some("12".into()), description: Some("Poco nuboso".into()) },
        );
        let wind = single(
            "07",
            WindCell { direction: Some("O".into()), speed: Some(6), gust: Some(15) },
        );

        let (rows, issues) = assemble(
            Granularity::Hourly,
            ConcernMaps {
                temperature: &temperature,
                precipitation: &precipitation,
                sky: &sky,
                wind: &wind,
            },
            &FillPolicy::placeholders(),
        );

        assert!(issues.is_empty());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].wind_gust, Some(15));
        assert_eq!(rows[0].fecha_hora, date().and_hms_opt(7, 0, 0));

        let gap = &rows[1];
        assert_eq!(gap.precipitation_value, Some(Reading::Number(0.0)));
        assert_eq!(gap.sky_value.as_deref(), Some("N/A"));
        assert_eq!(gap.sky_description.as_deref(), Some("N/A"));
        assert_eq!(gap.wind_direction.as_deref(), Some("N/A"));
        assert_eq!(gap.wind_speed, Some(0));
        assert_eq!(gap.wind_gust, None);
        assert_eq!(gap.storm_probability, None);
    }

    #[test]
    fn test_present_null_entry_is_not_replaced() {
        let temperature = temperature(&["07"]);
        let precipitation = single("07", PrecipitationCell { value: None });
        let empty_sky = ConcernMap::new();
        let empty_wind = ConcernMap::new();

        let (rows, _) = assemble(
            Granularity::Hourly,
            ConcernMaps {
                temperature: &temperature,
                precipitation: &precipitation,
                sky: &empty_sky,
                wind: &empty_wind,
            },
            &FillPolicy::placeholders(),
        );
        assert_eq!(rows[0].precipitation_value, None);
        assert_eq!(rows[0].sky_description.as_deref(), Some("N/A"));
    }

    #[test]
    fn test_daily_rows_leave_gaps_null_and_have_no_timestamp() {
        let temperature = temperature(&["00-06", "08-14"]);
        let precipitation = single("00-06", PrecipitationCell { value: Some(Reading::from(5.0)) });
        let sky = ConcernMap::new();
        let wind = ConcernMap::new();

        let (rows, issues) = assemble(
            Granularity::Daily,
            ConcernMaps {
                temperature: &temperature,
                precipitation: &precipitation,
                sky: &sky,
                wind: &wind,
            },
            &FillPolicy::leave_missing(),
        );

        assert!(issues.is_empty());
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.fecha_hora.is_none()));
        assert_eq!(rows[1].periodo, "08-14");
        assert_eq!(rows[1].precipitation_value, None);
        assert_eq!(rows[1].wind_speed, None);
    }

    #[test]
    fn test_non_hour_key_in_hourly_table_is_reported() {
        let temperature = temperature(&["7h"]);
        let empty_precipitation = ConcernMap::new();
        let empty_sky = ConcernMap::new();
        let empty_wind = ConcernMap::new();

        let (rows, issues) = assemble(
            Granularity::Hourly,
            ConcernMaps {
                temperature: &temperature,
                precipitation: &empty_precipitation,
                sky: &empty_sky,
                wind: &empty_wind,
            },
            &FillPolicy::placeholders(),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].fecha_hora, None);
        assert_eq!(issues.len(), 1);
    }
}
