// File: crates/chart-core/tests/serialize.rs
// Purpose: JSON output: absent fields omitted, schema order, key substitutions, labels and size injection.

use chart_core::highcharts::{self, props};
use chart_core::{
    apply_substitutions, plotly, Dialect, Highcharts, HighchartsChart, Node, NodeKind, Plotly, PlotlyChart,
    Substitution,
};
use pretty_assertions::assert_eq;

#[test]
fn grown_series_keep_unset_elements_empty() {
    let chart = HighchartsChart::new().set("series#2.xAxis", 1);
    assert_eq!(
        chart.to_json(),
        r#"{"chart":{"width":900,"height":500},"title":{"text":""},"series":[{},{},{"xAxis":1.0}]}"#
    );
}

#[test]
fn blank_children_are_not_written() {
    let mut root = Node::new(NodeKind::HcOptions);
    root.child_mut("legend").expect("legend").child_mut("title").expect("title");
    root.child_mut("tooltip").expect("tooltip").set_field("shared", true).expect("set");
    assert_eq!(root.to_json().to_string(), r#"{"tooltip":{"shared":true}}"#);
}

#[test]
fn highcharts_keys_are_rewritten() {
    let chart = HighchartsChart::new()
        .with_id("c")
        .plot([highcharts::xy_series("scatter", [(0.0, 1.0), (2.0, 3.0)])])
        .with(props().chart().kind("scatter"));
    assert_eq!(
        chart.to_json(),
        r#"{"chart":{"type":"scatter","width":900,"height":500},"title":{"text":""},"series":[{"type":"scatter","data":[[0.0,1.0],[2.0,3.0]]}]}"#
    );
}

#[test]
fn point_objects_become_data() {
    let chart = HighchartsChart::new()
        .with(props().series().at(0).data_obj().at(1).y(4))
        .with(props().series().at(0).data_obj().at(1).name("b"));
    assert!(chart.to_json().contains(r#""series":[{"data":[{},{"name":"b","y":4.0}]}]"#));
}

#[test]
fn unset_matrix_cells_are_null() {
    let chart = HighchartsChart::new().with(props().series().at(0).data_mat().at(1).at(1).value(2.5));
    assert!(chart.to_json().contains(r#""data":[[],[null,2.5]]"#));
}

#[test]
fn plotly_synonyms_collapse() {
    let chart = PlotlyChart::new()
        .with_size(400, 300)
        .plot([
            plotly::trace("scatter", vec![1.0, 2.0], vec![3.0, 4.0]),
            plotly::category_trace("bar", vec!["a".into(), "b".into()], vec![5.0, 6.0]),
        ])
        .with_labels(["A", "B", "ignored"]);
    assert_eq!(
        chart.to_json(),
        concat!(
            r#"{"data":[{"name":"A","type":"scatter","x":[1.0,2.0],"y":[3.0,4.0]},"#,
            r#"{"name":"B","type":"bar","x":["a","b"],"y":[5.0,6.0]}],"#,
            r#""layout":{"width":400,"height":300}}"#
        )
    );
}

#[test]
fn labels_stop_at_the_shorter_side() {
    let chart = HighchartsChart::new()
        .plot([highcharts::series("line", vec![1.0]), highcharts::series("line", vec![2.0])])
        .with_label("only");
    let json = chart.to_json();
    assert!(json.contains(r#"{"name":"only","type":"line","data":[1.0]}"#));
    assert!(json.contains(r#"{"type":"line","data":[2.0]}"#));
    // Labels are applied at serialization only.
    assert!(chart.root().items("series")[0].value("name").is_none());
}

#[test]
fn heatmap_z_is_a_matrix() {
    let chart = PlotlyChart::new().with_id("h").plot([plotly::heatmap(vec![vec![1.0, 2.0], vec![3.0, 4.0]])]);
    assert!(chart.to_json().contains(r#"{"type":"heatmap","z":[[1.0,2.0],[3.0,4.0]]}"#));
}

#[test]
fn values_that_look_like_keys_survive() {
    let chart = HighchartsChart::new().with_title(r#""data_mat":"#);
    assert!(chart.to_json().contains(r#""title":{"text":"\"data_mat\":"}"#));
}

#[test]
fn non_finite_floats_are_skipped() {
    let chart = HighchartsChart::new()
        .set("series#0.xAxis", f64::NAN)
        .with(props().series().at(0).data(vec![1.0, f64::INFINITY]));
    assert!(chart.to_json().contains(r#""series":[{"data":[1.0,null]}]"#));
}

#[test]
fn serialization_is_deterministic() {
    let chart = PlotlyChart::new().with_title("t").with(plotly::props().layout().xaxis().range(vec![0.0, 1.0]));
    assert_eq!(chart.to_json(), chart.clone().to_json());
    assert_eq!(chart.to_json(), chart.to_json());
}

#[test]
fn node_serializes_through_serde() {
    let node = highcharts::series("pie", vec![1.0]);
    let text = serde_json::to_string(&node).expect("serialize");
    assert_eq!(text, r#"{"type_iplot":"pie","data":[1.0]}"#);
    assert_eq!(apply_substitutions(&text, Highcharts::SUBSTITUTIONS), r#"{"type":"pie","data":[1.0]}"#);
}

fn check_order(table: &[Substitution]) {
    for (i, earlier) in table.iter().enumerate() {
        for later in &table[i + 1..] {
            assert!(
                !later.pattern.contains(earlier.pattern),
                "'{}' would be rewritten by the earlier '{}'",
                later.pattern,
                earlier.pattern
            );
        }
    }
}

#[test]
fn substitution_tables_are_ordered() {
    check_order(Highcharts::SUBSTITUTIONS);
    check_order(Plotly::SUBSTITUTIONS);
}

#[test]
fn document_carries_renderer_inputs() {
    let chart = HighchartsChart::new()
        .with_id("doc")
        .with_size(300, 200)
        .plot([highcharts::series("pyramid3d", vec![1.0]), highcharts::series("line", vec![2.0])]);
    let doc = chart.document();
    assert_eq!(doc.id, "doc");
    assert_eq!((doc.width, doc.height), (300, 200));
    assert_eq!(doc.series_types, vec!["pyramid3d".to_string(), "line".to_string()]);
    assert_eq!(doc.json, chart.to_json());
}
