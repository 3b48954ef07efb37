use chart_scene::api::{ChartConfig, ChartEngine, ChartKind};
use chart_scene::core::{
    ChartData, ChartPoint, ChartSeries, PlotPoint, ScaleDomain, build_line_path, normalize,
};
use chart_scene::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_points(count: usize) -> Vec<ChartPoint> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            ChartPoint::new(format!("p{i}"), 100.0 + (t * 0.1).sin() * 40.0)
        })
        .collect()
}

fn bench_normalize_and_domain_10k(c: &mut Criterion) {
    let data = ChartData::from(vec![
        ChartSeries::new("a", generated_points(5_000)),
        ChartSeries::new("b", generated_points(5_000)),
    ]);

    c.bench_function("normalize_and_domain_10k", |b| {
        b.iter(|| {
            let normalized = normalize(black_box(Some(&data)));
            let set = normalized.series_set().expect("ready");
            let _ = ScaleDomain::compute(set.series());
        })
    });
}

fn bench_smooth_line_path_10k(c: &mut Criterion) {
    let points: Vec<PlotPoint> = (0..10_000)
        .map(|i| {
            let t = i as f64;
            PlotPoint::new(t * 0.1, 200.0 + (t * 0.05).cos() * 150.0)
        })
        .collect();

    c.bench_function("smooth_line_path_10k", |b| {
        b.iter(|| {
            let _ = build_line_path(black_box(&points), true);
        })
    });
}

fn bench_bar_frame_build_500(c: &mut Criterion) {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartKind::Bar,
        ChartConfig::default().with_size(1_920.0, 1_080.0),
    )
    .expect("engine init");
    engine.set_data(generated_points(500));

    c.bench_function("bar_frame_build_500", |b| {
        b.iter(|| {
            let _ = black_box(engine.build_frame());
        })
    });
}

criterion_group!(
    benches,
    bench_normalize_and_domain_10k,
    bench_smooth_line_path_10k,
    bench_bar_frame_build_500
);
criterion_main!(benches);
