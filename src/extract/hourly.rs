//! Extractors for the hourly (`horaria`) forecast.
//!
//! None of these default-fill: hours a concern does not publish stay absent here and
//! are covered later by the assembler's [`crate::FillPolicy`].

use crate::error::{Concern, ExtractionIssue};
use crate::extract::sky::sky_cell;
use crate::extract::{DayPeriods, Extraction};
use crate::types::cells::{PrecipitationCell, SkyCell, TemperatureCell, WindCell};
use crate::types::period_key::PeriodKey;
use crate::types::raw::HourlyDayRecord;
use crate::types::reading::Reading;
use chrono::NaiveDate;
use log::debug;

fn integer<T>(
    extraction: &mut Extraction<T>,
    date: NaiveDate,
    concern: Concern,
    reading: &Reading,
) -> Option<i64> {
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

/// Splits an `"HHHH"` precipitation block label into its start and end hours.
pub fn parse_hour_block(label: &str) -> Option<(u32, u32)> {
    if label.len() != 4 || !label.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let start = label[..2].parse().ok()?;
    let end = label[2..].parse().ok()?;
    Some((start, end))
}

/// Temperature per hour, keyed by the published `periodo`.
///
/// Runs in two passes per day: the readings are collected first, then the day's
/// minimum and maximum over all of them are written onto every hour of that day.
pub fn extract_temperature(days: &[HourlyDayRecord]) -> Extraction<TemperatureCell> {
    let mut extraction = Extraction::default();

    for day in days {
        let date = day.fecha;
        let mut periods = DayPeriods::new();
        let mut values = Vec::with_capacity(day.temperatura.len());

        for reading in &day.temperatura {
            let Some(label) = &reading.periodo else {
                extraction.report(ExtractionIssue::MissingField {
                    date,
                    concern: Concern::Temperature,
                    field: "periodo",
                });
                continue;
            };
            let Some(raw) = &reading.value else {
                extraction.report(ExtractionIssue::MissingField {
                    date,
                    concern: Concern::Temperature,
                    field: "value",
                });
                continue;
            };
            let Some(value) = integer(&mut extraction, date, Concern::Temperature, raw) else {
                continue;
            };
            values.push(value);
            periods.insert(
                PeriodKey::new(label.as_str()),
                TemperatureCell {
                    value: Some(value),
                    max: None,
                    min: None,
                },
            );
        }

        if let (Some(min), Some(max)) = (values.iter().min(), values.iter().max()) {
            for cell in periods.cells_mut() {
                cell.min = Some(*min);
                cell.max = Some(*max);
            }
        }

        extraction.periods.insert_day(date, periods);
    }

    debug!(
        "Extracted {} hourly temperature cells over {} days",
        extraction.periods.cell_count(),
        days.len()
    );
    extraction
}

/// Precipitation probability per hour.
///
/// Each `"SSEE"` block expands to one entry per hour in `SS..=EE`, all with the
/// block's value. A block whose end precedes its start (wrapping past midnight)
/// expands to nothing.
pub fn extract_precipitation(days: &[HourlyDayRecord]) -> Extraction<PrecipitationCell> {
    let mut extraction = Extraction::default();

    for day in days {
        let mut periods = DayPeriods::new();
        for block in &day.prob_precipitacion {
            let Some(label) = &block.periodo else {
                continue;
            };
            let Some((start, end)) = parse_hour_block(label) else {
                extraction.report(ExtractionIssue::MalformedPeriodLabel {
                    date: day.fecha,
                    concern: Concern::Precipitation,
                    label: label.clone(),
                });
                continue;
            };
            for hour in start..=end {
                periods.insert(
                    PeriodKey::hour(hour),
                    PrecipitationCell {
                        value: block.value.clone(),
                    },
                );
            }
        }
        extraction.periods.insert_day(day.fecha, periods);
    }

    debug!(
        "Extracted {} hourly precipitation cells over {} days",
        extraction.periods.cell_count(),
        days.len()
    );
    extraction
}

/// Sky code and description per published hour.
pub fn extract_sky(days: &[HourlyDayRecord]) -> Extraction<SkyCell> {
    let mut extraction = Extraction::default();

    for day in days {
        let mut periods = DayPeriods::new();
        for period in &day.estado_cielo {
            if let Some(label) = &period.periodo {
                periods.insert(PeriodKey::new(label.as_str()), sky_cell(period));
            }
        }
        extraction.periods.insert_day(day.fecha, periods);
    }

    debug!(
        "Extracted {} hourly sky cells over {} days",
        extraction.periods.cell_count(),
        days.len()
    );
    extraction
}

/// Where the wind walk over one day's `vientoAndRachaMax` stands.
#[derive(Debug, Clone, PartialEq)]
enum WindState {
    NoPeriodOpen,
    PeriodOpen(PeriodKey),
}

/// Wind per hour from the interleaved `vientoAndRachaMax` list.
///
/// An entry with `periodo` and `direccion` opens a period (first direction, first
/// speed). Any other entry is a gust record for the period opened last; one that
/// arrives while no period is open is reported and dropped. The walk restarts
/// with every day.
pub fn extract_wind(days: &[HourlyDayRecord]) -> Extraction<WindCell> {
    let mut extraction = Extraction::default();

    for day in days {
        let date = day.fecha;
        let mut periods = DayPeriods::new();
        let mut state = WindState::NoPeriodOpen;

        for entry in &day.viento_and_racha_max {
            if let (Some(label), Some(directions)) = (&entry.periodo, &entry.direccion) {
                let speed = match entry.velocidad.as_ref().and_then(|speeds| speeds.first()) {
                    Some(raw) => integer(&mut extraction, date, Concern::Wind, raw),
                    None => {
                        extraction.report(ExtractionIssue::MissingField {
                            date,
                            concern: Concern::Wind,
                            field: "velocidad",
                        });
                        None
                    }
                };
                let key = PeriodKey::new(label.as_str());
                periods.insert(
                    key.clone(),
                    WindCell {
                        direction: directions.first().cloned(),
                        speed,
                        gust: None,
                    },
                );
                state = WindState::PeriodOpen(key);
                continue;
            }

            match &state {
                WindState::PeriodOpen(key) => {
                    let gust = match &entry.value {
                        Some(raw) => integer(&mut extraction, date, Concern::Wind, raw),
                        None => Some(0),
                    };
                    if let (Some(gust), Some(cell)) = (gust, periods.get_mut(key.as_str())) {
                        cell.gust = Some(gust);
                    }
                }
                WindState::NoPeriodOpen => {
                    extraction.report(ExtractionIssue::ContinuationWithoutPeriod { date });
                }
            }
        }

        extraction.periods.insert_day(date, periods);
    }

    debug!(
        "Extracted {} hourly wind cells over {} days",
        extraction.periods.cell_count(),
        days.len()
    );
    extraction
}
