use crate::types::raw::{DailyDayRecord, ForecastDocument, HourlyDayRecord};

const DAILY_JSON: &str = include_str!("../data/aemet_daily.json");
const HOURLY_JSON: &str = include_str!("../data/aemet_hourly.json");

/// Three days for Quart de Poblet; the third has no temperature readings.
pub fn daily_fixture() -> Vec<DailyDayRecord> {
    ForecastDocument::<DailyDayRecord>::parse_first(DAILY_JSON)
        .expect("daily fixture parses")
        .into_days()
}

/// Hours 20-23 of the 5th and 00-03 of the 6th; hour 02 has no sky or wind entry.
pub fn hourly_fixture() -> Vec<HourlyDayRecord> {
    ForecastDocument::<HourlyDayRecord>::parse_first(HOURLY_JSON)
        .expect("hourly fixture parses")
        .into_days()
}

pub fn daily_json() -> &'static str {
    DAILY_JSON
}

pub fn hourly_json() -> &'static str {
    HOURLY_JSON
}
