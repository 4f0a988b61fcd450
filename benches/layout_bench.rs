use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use timeline_rs::core::{DisasterCategory, EventDataset, EventRecord, RadiusScale, SeasonalScale};
use timeline_rs::render::NullRenderer;
use timeline_rs::{TimelineConfig, TimelineEngine};

fn synthetic_records(count: usize) -> Vec<EventRecord> {
    (0..count)
        .map(|i| {
            let year = 1980 + (i % 42) as i32;
            let month = 1 + (i % 12) as u32;
            let day = 1 + (i % 28) as u32;
            let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid generated date");
            let category = DisasterCategory::ALL[i % DisasterCategory::ALL.len()];
            EventRecord::new(category, (i % 250) as f64 + 0.5, date, format!("event-{i}"))
        })
        .collect()
}

fn bench_dataset_build_2k(c: &mut Criterion) {
    let records = synthetic_records(2_000);

    c.bench_function("dataset_build_2k", |b| {
        b.iter(|| EventDataset::build(black_box(records.clone())).expect("valid dataset"))
    });
}

fn bench_seasonal_projection(c: &mut Criterion) {
    let scale = SeasonalScale::new(2021, 0.0, 735.0).expect("valid scale");
    let radius = RadiusScale::new(0.5, 250.0, 4.0, 140.0).expect("valid scale");
    let date = NaiveDate::from_ymd_opt(2005, 8, 29).expect("valid date");

    c.bench_function("seasonal_projection", |b| {
        b.iter(|| {
            let x = scale.position(black_box(date)).expect("position");
            let r = radius.radius(black_box(125.0)).expect("radius");
            black_box((x, r))
        })
    });
}

fn bench_render_pass_2k(c: &mut Criterion) {
    let dataset = EventDataset::build(synthetic_records(2_000)).expect("valid dataset");
    let mut engine =
        TimelineEngine::new(NullRenderer::default(), TimelineConfig::default(), dataset)
            .expect("engine init");

    c.bench_function("render_pass_2k", |b| {
        b.iter(|| engine.render().expect("render pass"))
    });
}

criterion_group!(
    benches,
    bench_dataset_build_2k,
    bench_seasonal_projection,
    bench_render_pass_2k
);
criterion_main!(benches);
