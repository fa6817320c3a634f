use chart_core::{highcharts, plotly, HighchartsChart, PlotlyChart};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn gen_xy(n: usize) -> Vec<(f64, f64)> {
    (0..n).map(|i| (i as f64, (i as f64 * 0.01).sin() * 10.0 + i as f64 * 0.0001)).collect()
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_json");
    for &n in &[1_000usize, 10_000usize] {
        let xy = gen_xy(n);
        let hc = HighchartsChart::new()
            .with_title("bench")
            .plot([highcharts::xy_series("line", xy.iter().copied())]);
        group.bench_function(format!("highcharts_xy_{n}"), |b| {
            b.iter(|| black_box(hc.to_json()));
        });

        let (xs, ys): (Vec<f64>, Vec<f64>) = xy.into_iter().unzip();
        let pl = PlotlyChart::new().with_title("bench").plot([plotly::trace("scatter", xs, ys)]);
        group.bench_function(format!("plotly_xy_{n}"), |b| {
            b.iter(|| black_box(pl.to_json()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_serialize);
criterion_main!(benches);
