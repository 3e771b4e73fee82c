// File: crates/brief-core/benches/render_bench.rs
// Summary: Criterion benchmarks for chart layout and SVG serialization.

use brief_core::charts::{bar, donut, line};
use brief_core::{BarOptions, DonutOptions, LineOptions, Series, Theme};
use criterion::{criterion_group, criterion_main, black_box, Criterion};

fn build_series(n: usize) -> Series {
    Series::from_pairs((0..n).map(|i| (format!("p{i}"), (i as f64 * 0.01).sin().abs() * 80.0)))
}

fn bench_render(c: &mut Criterion) {
    let theme = Theme::light();
    let mut group = c.benchmark_group("render_svg");
    for &n in &[5usize, 100usize, 1_000usize] {
        let s = build_series(n);
        group.bench_function(format!("line_{n}"), |b| {
            let opts = LineOptions::default();
            b.iter(|| black_box(brief_core::to_svg(&line::render(&s, &opts, &theme))));
        });
        group.bench_function(format!("bar_{n}"), |b| {
            let opts = BarOptions::default();
            b.iter(|| black_box(brief_core::to_svg(&bar::render(&s, &opts, &theme))));
        });
        group.bench_function(format!("donut_{n}"), |b| {
            let opts = DonutOptions { normalize: true, ..DonutOptions::default() };
            b.iter(|| black_box(brief_core::to_svg(&donut::render(&s, &opts, &theme))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
