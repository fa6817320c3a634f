// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden JSON snapshot harness with bless flow.
// Behavior:
// - Builds deterministic Highcharts and Plotly charts (fixed ids) and serializes them.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::highcharts::{self, props};
use chart_core::{plotly, HighchartsChart, PlotlyChart};
use pretty_assertions::assert_eq;

fn highcharts_json() -> String {
    HighchartsChart::new()
        .with_id("golden")
        .with_title("Monthly totals")
        .with_x_title("Month")
        .with_y_title("Total")
        .plot([
            highcharts::series("column", vec![3.0, 5.0, 2.0]),
            highcharts::xy_series("line", [(0.0, 2.5), (1.0, 4.0), (2.0, 3.0)]),
        ])
        .with_labels(["Sales", "Trend"])
        .with_all([
            props().x_axis().at(0).categories(vec!["Jan".to_string(), "Feb".into(), "Mar".into()]),
            props().series().at(0).as_bar().border_radius(3),
            props().series().at(1).as_line().dash_style("ShortDash"),
            props().tooltip().shared(true),
            props().credits().enabled(false),
        ])
        .to_json()
}

fn plotly_json() -> String {
    PlotlyChart::new()
        .with_id("golden")
        .with_title("Signal")
        .plot([plotly::trace("scatter", vec![0.0, 1.0, 2.0], vec![1.0, 0.5, 1.5])])
        .with_all([
            plotly::props().data().at(0).mode("lines+markers"),
            plotly::props().data().at(0).marker().size(6),
            plotly::props().layout().xaxis().showgrid(false),
            plotly::props().layout().annotations().at(0).text("peak"),
        ])
        .to_json()
}

fn check_snapshot(name: &str, text: &str) {
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join(name);

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, text).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), text.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(text, want.trim_end(), "serialized JSON differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn golden_highcharts_json() {
    check_snapshot("highcharts_basic.json", &highcharts_json());
}

#[test]
fn golden_plotly_json() {
    check_snapshot("plotly_basic.json", &plotly_json());
}
