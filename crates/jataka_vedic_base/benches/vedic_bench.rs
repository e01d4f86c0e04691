use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jataka_vedic_base::{
    DashaConfig, ascendant_deg, lahiri_ayanamsa_deg, nakshatra_from_longitude,
    navamsa_from_longitude, rashi_from_longitude, tithi_from_elongation, tropical_longitudes,
    vimshottari_timeline, yoga_from_sum,
};

fn body_models_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("body_models");
    group.bench_function("lahiri_ayanamsa", |b| {
        b.iter(|| lahiri_ayanamsa_deg(black_box(jd)))
    });
    group.bench_function("tropical_longitudes", |b| {
        b.iter(|| tropical_longitudes(black_box(jd)))
    });
    group.bench_function("ascendant", |b| {
        b.iter(|| ascendant_deg(black_box(jd), black_box(13.08), black_box(80.27)))
    });
    group.finish();
}

fn zodiac_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.bench_function("navamsa_from_longitude", |b| {
        b.iter(|| navamsa_from_longitude(black_box(lon)))
    });
    group.finish();
}

fn panchang_primitives_bench(c: &mut Criterion) {
    let elong = 211.75;

    let mut group = c.benchmark_group("panchang_primitives");
    group.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(elong)))
    });
    group.bench_function("yoga_from_sum", |b| {
        b.iter(|| yoga_from_sum(black_box(120.0), black_box(158.31)))
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let config = DashaConfig::default();

    let mut group = c.benchmark_group("dasha");
    group.bench_function("vimshottari_timeline_120y", |b| {
        b.iter(|| vimshottari_timeline(black_box(2_451_544.27), black_box(190.79), &config))
    });
    group.finish();
}

criterion_group!(
    benches,
    body_models_bench,
    zodiac_bench,
    panchang_primitives_bench,
    dasha_bench
);
criterion_main!(benches);
