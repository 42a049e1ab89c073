use chrono::NaiveDate;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use luach_core::{GeoCoordinate, Luach, LuachConfig, derive_zmanim, resolve_parasha, solar_position};

fn bench_solar(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap_or_default();
    c.bench_function("solar_position", |b| {
        b.iter(|| solar_position(black_box(date), black_box(-35.2137)))
    });
    c.bench_function("derive_zmanim", |b| {
        b.iter(|| derive_zmanim(black_box(date), 3.0, black_box(&GeoCoordinate::jerusalem())))
    });
}

fn bench_report(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap_or_default();
    let loc = GeoCoordinate::jerusalem();
    let engine = Luach::default();
    c.bench_function("report", |b| b.iter(|| engine.report(black_box(date), &loc)));

    let cached = Luach::new(LuachConfig::new().cache_capacity(64)).ok();
    if let Some(cached) = cached {
        c.bench_function("report_cached", |b| b.iter(|| cached.report(black_box(date), &loc)));
    }

    c.bench_function("resolve_parasha", |b| b.iter(|| resolve_parasha(black_box(date))));
}

criterion_group!(benches, bench_solar, bench_report);
criterion_main!(benches);
