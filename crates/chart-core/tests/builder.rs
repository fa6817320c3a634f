// File: crates/chart-core/tests/builder.rs
// Purpose: Immutable builder semantics: copy-on-write, no-op on bad paths, last write wins.

use chart_core::highcharts::{self, props};
use chart_core::{plotly, ChartError, Highcharts, HighchartsChart, Mutation, PlotlyChart, Value};

#[test]
fn with_leaves_the_source_untouched() {
    let base = HighchartsChart::new();
    let before = base.clone();
    let next = base.with(props().series().at(2).x_axis(1));

    assert_eq!(base, before);
    assert_eq!(next.root().items("series").len(), 3);
    assert_eq!(next.root().items("series")[2].value("xAxis"), Some(&Value::Float(1.0)));
    assert_eq!(next.id(), base.id());
}

#[test]
fn untyped_set_matches_accessor_chain() {
    let base = HighchartsChart::new().with_id("c");
    let typed = base.with(props().series().at(2).x_axis(1));
    let untyped = base.set("series#2.xAxis", 1);
    assert_eq!(typed, untyped);
}

#[test]
fn bad_paths_are_silent_no_ops() {
    let base = HighchartsChart::new();
    assert_eq!(base.set("series#1.nope", 3), base);
    assert_eq!(base.set("series#x.name", "a"), base);
    assert_eq!(base.set("legend", true), base);
    // No partial growth leaks out of a failed mutation.
    assert!(base.set("series#4.nope", 1).root().items("series").is_empty());
}

#[test]
fn try_set_reports_why() {
    let base = HighchartsChart::new();
    assert!(matches!(base.try_set("series#1.nope", 3), Err(ChartError::UnknownField { .. })));
    assert!(matches!(base.try_set("title#0.text", "a"), Err(ChartError::IndexArity { .. })));
    assert!(matches!(base.try_set("series#0.name#1", "a"), Err(ChartError::MalformedSegment(_))));
    assert!(base.try_set("series#0.name", "a").is_ok());
}

#[test]
fn numbers_convert_into_bool_fields() {
    let chart = HighchartsChart::new().set("legend.enabled", 5).set("credits.enabled", 0);
    let root = chart.root();
    assert_eq!(root.child("legend").and_then(|l| l.value("enabled")), Some(&Value::Bool(true)));
    assert_eq!(root.child("credits").and_then(|l| l.value("enabled")), Some(&Value::Bool(false)));
}

#[test]
fn text_into_number_field_falls_back_to_zero() {
    let chart = HighchartsChart::new().set("series#0.xAxis", "not a number");
    assert_eq!(chart.root().items("series")[0].value("xAxis"), Some(&Value::Float(0.0)));
}

#[test]
fn last_write_wins() {
    let base = HighchartsChart::new().with_id("c");
    let twice = base
        .with(props().series().at(1).name("first"))
        .with(props().series().at(1).name("second"));
    let once = base.with(props().series().at(1).name("second"));
    assert_eq!(twice, once);
}

#[test]
fn with_all_applies_in_order() {
    let chart = HighchartsChart::new().with_all([
        props().title().text("Prices"),
        props().series().at(0).as_line().line_width(2),
        props().series().at(0).kind("line"),
    ]);
    let series = &chart.root().items("series")[0];
    assert_eq!(series.value("lineWidth"), Some(&Value::Float(2.0)));
    assert_eq!(chart.series_types(), vec!["line".to_string()]);
}

#[test]
fn mutation_is_a_chart_function() {
    let base = PlotlyChart::new();
    let f = plotly::props().layout().barmode("stack").into_fn();
    let next = f(&base);
    let layout = next.root().child("layout").expect("layout");
    assert_eq!(layout.value("barmode"), Some(&Value::Text("stack".into())));
    assert!(base.root().child("layout").is_none());
}

#[test]
fn parsed_mutation_equals_typed_one() {
    let parsed: Mutation<Highcharts> = Mutation::parse("xAxis#0.title.text", "Time").expect("parse");
    let typed = props().x_axis().at(0).title().text("Time");
    assert_eq!(parsed, typed);
}

#[test]
fn convenience_setters_follow_dialect_paths() {
    let hc = HighchartsChart::new().with_title("T").with_x_title("X").with_y_title("Y").with_legend(false);
    let root = hc.root();
    assert_eq!(root.child("title").and_then(|t| t.value("text")), Some(&Value::Text("T".into())));
    let x_title = root.items("xAxis")[0].child("title").and_then(|t| t.value("text"));
    assert_eq!(x_title, Some(&Value::Text("X".into())));
    assert_eq!(root.child("legend").and_then(|l| l.value("enabled")), Some(&Value::Bool(false)));

    let pl = PlotlyChart::new().with_y_title("Y").with_legend(true);
    let layout = pl.root().child("layout").expect("layout");
    let y_title = layout.child("yaxis").and_then(|a| a.child("title")).and_then(|t| t.value("text"));
    assert_eq!(y_title, Some(&Value::Text("Y".into())));
    assert_eq!(layout.value("showlegend"), Some(&Value::Bool(true)));
}

#[test]
fn size_and_id_are_container_fields() {
    let chart = HighchartsChart::new();
    assert_eq!((chart.width(), chart.height()), (900, 500));
    assert_eq!(chart.id().len(), 36);
    assert_ne!(chart.id(), HighchartsChart::new().id());

    let sized = chart.with_size(640, 480).with_id("main");
    assert_eq!((sized.width(), sized.height()), (640, 480));
    assert_eq!(sized.id(), "main");
    assert_eq!(chart.width(), 900);
}

#[test]
fn plot_replaces_series_and_rejects_foreign_nodes() {
    let chart = HighchartsChart::new().plot([
        highcharts::series("line", vec![1.0, 2.0]),
        highcharts::series("column", vec![3.0]),
        highcharts::series("line", vec![4.0]),
    ]);
    assert_eq!(chart.root().items("series").len(), 3);
    assert_eq!(chart.series_types(), vec!["line".to_string(), "column".to_string()]);

    let replaced = chart.plot([highcharts::series("pie", vec![1.0])]);
    assert_eq!(replaced.series_types(), vec!["pie".to_string()]);

    assert!(matches!(
        chart.try_plot([plotly::trace("scatter", vec![1.0], vec![2.0])]),
        Err(ChartError::KindMismatch { .. })
    ));
    assert_eq!(chart.plot([plotly::trace("scatter", vec![1.0], vec![2.0])]), chart);
}

#[test]
fn size_set_through_the_tree_is_the_chart_size() {
    let chart = HighchartsChart::new().with(props().chart().width(1200));
    assert_eq!(chart.width(), 1200);
    assert_eq!(chart.document().width, 1200);
    assert!(chart.to_json().starts_with(r#"{"chart":{"width":1200,"height":500}"#));

    let resized = chart.with_height(300);
    let size = resized.root().child("chart_iplot").and_then(|c| c.value("height"));
    assert_eq!(size, Some(&Value::Int(300)));

    let figure = PlotlyChart::new().with(plotly::props().layout().width(1200));
    assert_eq!((figure.width(), figure.document().height), (1200, 500));
    assert!(figure.to_json().contains(r#""layout":{"width":1200,"height":500}"#));
}

#[test]
fn huge_indices_are_rejected_without_growth() {
    let base = HighchartsChart::new();
    assert_eq!(base.set("series#18446744073709551615.name", "x"), base);
    assert_eq!(base.set("series#2147483648.name", "x"), base);
    assert!(matches!(
        base.try_with(&props().series().at(usize::MAX).name("x")),
        Err(ChartError::IndexOutOfRange { index: usize::MAX, .. })
    ));
    assert!(matches!(
        base.try_with(&props().series().at(0).data_mat().at(0).at(usize::MAX).value(1)),
        Err(ChartError::IndexOutOfRange { .. })
    ));
}

#[test]
fn cast_series_keep_their_data_accessors() {
    let chart = HighchartsChart::new()
        .with(props().series().at(0).as_line().data_mat().at(0).at(1).value(2))
        .with(props().series().at(1).as_pie().data_obj().at(0).name("slice"));
    let series = chart.root().items("series");
    assert_eq!(series[0].grid("data_mat")[0].len(), 2);
    assert_eq!(series[1].items("data_obj")[0].value("name"), Some(&Value::Text("slice".into())));
}
