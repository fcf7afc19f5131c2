//! Extractors for the daily (`diaria`) forecast.
//!
//! Precipitation, sky and wind are keyed by the labels AEMET publishes and then
//! default-filled with nulls across [`CANONICAL_PERIODS`]. Temperature derives its
//! keys from the reading hours and is the authoritative period set of each day.

use crate::error::{Concern, ExtractionIssue};
use crate::extract::sky::sky_cell;
use crate::extract::{DayPeriods, Extraction};
use crate::types::cells::{PrecipitationCell, SkyCell, TemperatureCell, WindCell};
use crate::types::period_key::{PeriodKey, CANONICAL_PERIODS, QUARTER_DAY_PERIODS};
use crate::types::raw::DailyDayRecord;
use crate::types::reading::Reading;
use chrono::NaiveDate;
use log::debug;

/// Integer view of an optional reading, reporting text that is not an integer.
fn integer<T>(
    extraction: &mut Extraction<T>,
    date: NaiveDate,
    concern: Concern,
    reading: Option<&Reading>,
) -> Option<i64> {
    let reading = reading?;
    let value = reading.as_i64();
    if value.is_none() {
        extraction.report(ExtractionIssue::NonNumericValue {
            date,
            concern,
            value: reading.to_string(),
        });
    }
    value
}

/// Temperature per block.
///
/// The first block is always `"00-06"`; each later block is named
/// `"{previous hora:02}-{hora:02}"`. Every block carries the day's single
/// `maxima`/`minima`. A day without readings gets the four quarter-day blocks
/// with a null value.
pub fn extract_temperature(days: &[DailyDayRecord]) -> Extraction<TemperatureCell> {
    let mut extraction = Extraction::default();

    for day in days {
        let date = day.fecha;
        let temperatura = &day.temperatura;
        let max = integer(&mut extraction, date, Concern::Temperature, temperatura.maxima.as_ref());
        let min = integer(&mut extraction, date, Concern::Temperature, temperatura.minima.as_ref());
        let readings = &day.temperatura.dato;
        let mut periods = DayPeriods::new();

        if readings.is_empty() {
            periods.fill_missing(&QUARTER_DAY_PERIODS, || TemperatureCell {
                value: None,
                max,
                min,
            });
        } else {
            for (i, reading) in readings.iter().enumerate() {
                let key = if i == 0 {
                    PeriodKey::from("00-06")
                } else {
                    match (readings[i - 1].hora, reading.hora) {
                        (Some(start), Some(end)) => PeriodKey::range(start, end),
                        _ => {
                            extraction.report(ExtractionIssue::MissingField {
                                date,
                                concern: Concern::Temperature,
                                field: "hora",
                            });
                            continue;
                        }
                    }
                };
                let value = integer(
                    &mut extraction,
                    date,
                    Concern::Temperature,
                    reading.value.as_ref(),
                );
                periods.insert_if_absent(key, TemperatureCell { value, max, min });
            }
        }

        extraction.periods.insert_day(date, periods);
    }

    debug!(
        "Extracted {} daily temperature cells over {} days",
        extraction.periods.cell_count(),
        days.len()
    );
    extraction
}

/// Precipitation probability per published label, null-filled across the canonical set.
pub fn extract_precipitation(days: &[DailyDayRecord]) -> Extraction<PrecipitationCell> {
    let mut extraction = Extraction::default();

    for day in days {
        let mut periods = DayPeriods::new();
        for period in &day.prob_precipitacion {
            if let Some(label) = &period.periodo {
                periods.insert(
                    PeriodKey::new(label.as_str()),
                    PrecipitationCell {
                        value: period.value.clone(),
                    },
                );
            }
        }
        periods.fill_missing(&CANONICAL_PERIODS, PrecipitationCell::default);
        extraction.periods.insert_day(day.fecha, periods);
    }

    debug!(
        "Extracted {} daily precipitation cells over {} days",
        extraction.periods.cell_count(),
        days.len()
    );
    extraction
}

/// Sky code and description per published label, null-filled across the canonical set.
pub fn extract_sky(days: &[DailyDayRecord]) -> Extraction<SkyCell> {
    let mut extraction = Extraction::default();

    for day in days {
        let mut periods = DayPeriods::new();
        for period in &day.estado_cielo {
            if let Some(label) = &period.periodo {
                periods.insert(PeriodKey::new(label.as_str()), sky_cell(period));
            }
        }
        periods.fill_missing(&CANONICAL_PERIODS, SkyCell::default);
        extraction.periods.insert_day(day.fecha, periods);
    }

    debug!(
        "Extracted {} daily sky cells over {} days",
        extraction.periods.cell_count(),
        days.len()
    );
    extraction
}

/// Wind direction and speed per published label, null-filled across the canonical set.
pub fn extract_wind(days: &[DailyDayRecord]) -> Extraction<WindCell> {
    let mut extraction = Extraction::default();

    for day in days {
        let mut periods = DayPeriods::new();
        for period in &day.viento {
            if let Some(label) = period.periodo.as_deref().filter(|l| !l.is_empty()) {
                let speed = integer(
                    &mut extraction,
                    day.fecha,
                    Concern::Wind,
                    period.velocidad.as_ref(),
                );
                periods.insert(
                    PeriodKey::new(label),
                    WindCell {
                        direction: period.direccion.clone(),
                        speed,
                        gust: None,
                    },
                );
            }
        }
        periods.fill_missing(&CANONICAL_PERIODS, WindCell::default);
        extraction.periods.insert_day(day.fecha, periods);
    }

    debug!(
        "Extracted {} daily wind cells over {} days",
        extraction.periods.cell_count(),
        days.len()
    );
    extraction
}
