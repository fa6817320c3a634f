// File: crates/chart-core/tests/properties.rs
// Purpose: Property checks for growth, idempotent resolution, clone fidelity and last-write-wins.

use chart_core::highcharts::props;
use chart_core::{resolve, HighchartsChart, Node, NodeKind, Path, Segment};
use proptest::prelude::*;

// Paths made of valid Highcharts segments with small random indices.
fn hc_path() -> impl Strategy<Value = Path> {
    prop_oneof![
        (0usize..8).prop_map(|i| vec![Segment::indexed("series", i)]),
        (0usize..8, 0usize..6, 0usize..6).prop_map(|(s, r, c)| vec![
            Segment::indexed("series", s),
            Segment { name: "data_mat".into(), indices: vec![r, c] },
        ]),
        (0usize..4, 0usize..4).prop_map(|(a, b)| vec![
            Segment::indexed("xAxis", a),
            Segment::indexed("plotBands", b),
            Segment::named("label"),
        ]),
        Just(vec![Segment::named("legend"), Segment::named("title")]),
    ]
    .prop_map(|segments| Path { segments })
}

proptest! {
    #[test]
    fn growth_is_exactly_index_plus_one(index in 0usize..64) {
        let mut root = Node::new(NodeKind::PlFigure);
        resolve(&mut root, &Path::parse(&format!("data#{index}")).unwrap()).unwrap();
        let traces = root.items("data");
        prop_assert_eq!(traces.len(), index + 1);
        prop_assert!(traces.iter().all(Node::is_empty));
    }

    #[test]
    fn resolving_again_changes_nothing(paths in proptest::collection::vec(hc_path(), 1..6)) {
        let mut root = Node::new(NodeKind::HcOptions);
        for p in &paths {
            resolve(&mut root, p).unwrap();
        }
        let once = root.clone();
        for p in &paths {
            resolve(&mut root, p).unwrap();
        }
        prop_assert_eq!(root, once);
    }

    #[test]
    fn clone_serializes_identically(paths in proptest::collection::vec(hc_path(), 0..6), v in -1.0e6f64..1.0e6) {
        let mut root = Node::new(NodeKind::HcOptions);
        for p in &paths {
            if let Ok(node) = resolve(&mut root, p) {
                let field = if node.kind() == NodeKind::HcSeries { "xAxis" } else if node.kind() == NodeKind::Datum { "value" } else { "text" };
                node.set_field(field, v).unwrap();
            }
        }
        prop_assert_eq!(root.clone().to_json(), root.to_json());
    }

    #[test]
    fn last_write_wins(index in 0usize..10, a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        let base = HighchartsChart::new().with_id("p");
        let twice = base
            .with(props().series().at(index).name(a))
            .with(props().series().at(index).name(b.clone()));
        let once = base.with(props().series().at(index).name(b));
        prop_assert_eq!(twice.to_json(), once.to_json());
        prop_assert_eq!(twice, once);
    }
}
