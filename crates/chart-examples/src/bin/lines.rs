// File: crates/chart-examples/src/bin/lines.rs
// Summary: Minimal example that builds a simple Highcharts line chart and writes it as an HTML page.

use anyhow::Result;
use chart_core::highcharts::{self, props};
use chart_core::HighchartsChart;
use chart_render_html::{write_page, Renderer};

fn main() -> Result<()> {
    // Build a simple line series
    let data = vec![
        (0.0, 0.0),
        (1.0, 1.2),
        (2.0, 0.8),
        (3.0, 1.8),
        (4.0, 1.4),
        (5.0, 2.0),
    ];

    let chart = HighchartsChart::new()
        .with_title("Lines")
        .with_x_title("X")
        .with_y_title("Y")
        .plot([highcharts::xy_series("line", data)])
        .with_label("series 1")
        .with(props().y_axis().at(0).min(0))
        .with(props().y_axis().at(0).max(2.2));

    let html = Renderer::default().render_page(&chart.document());
    let out = write_page("target/out/example_lines.html", &html)?;
    println!("Wrote {}", out.display());
    Ok(())
}
