use aemet_forecast::{
    day_bucket_aggregate, normalize_daily, normalize_hourly, DailyDayRecord, ForecastDocument,
    HourlyDayRecord,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const DAILY_JSON: &str = include_str!("../data/aemet_daily.json");
const HOURLY_JSON: &str = include_str!("../data/aemet_hourly.json");

fn bench_normalize(c: &mut Criterion) {
    let daily = ForecastDocument::<DailyDayRecord>::parse_first(DAILY_JSON)
        .expect("daily fixture parses")
        .into_days();
    let hourly = ForecastDocument::<HourlyDayRecord>::parse_first(HOURLY_JSON)
        .expect("hourly fixture parses")
        .into_days();

    c.bench_function("parse_daily", |b| {
        b.iter(|| ForecastDocument::<DailyDayRecord>::parse_first(black_box(DAILY_JSON)))
    });
    c.bench_function("normalize_daily", |b| b.iter(|| normalize_daily(black_box(&daily))));
    c.bench_function("normalize_hourly", |b| b.iter(|| normalize_hourly(black_box(&hourly))));

    let table = normalize_hourly(&hourly);
    c.bench_function("day_bucket_aggregate", |b| {
        b.iter(|| day_bucket_aggregate(black_box(&table), "2024-11-05"))
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
