use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qpon_pattern::rendering::render_pattern;
use qpon_pattern::{synthesize, PatternConfig};

fn bench_synthesize(c: &mut Criterion) {
    c.bench_function("synthesize_25", |b| {
        b.iter(|| synthesize(black_box("QPON-OCSV-2501")))
    });
}

fn bench_render(c: &mut Criterion) {
    let cfg = PatternConfig::default();
    c.bench_function("render_pattern_250px", |b| {
        b.iter(|| render_pattern(black_box("QPON-OCSV-2501"), &cfg).unwrap())
    });
}

criterion_group!(benches, bench_synthesize, bench_render);
criterion_main!(benches);
