// File: crates/chart-render-html/src/modules.rs
// Summary: Highcharts series type -> extra module scripts it needs.

/// Modules (under `modules/`) a Highcharts series type needs beyond the core
/// bundle, in load order. Unknown types need none.
pub fn dependencies(series_type: &str) -> &'static [&'static str] {
    match series_type {
        "bullet" => &["bullet"],
        "bellcurve" | "histogram" => &["histogram-bellcurve"],
        "cylinder" => &["cylinder"],
        "funnel3d" => &["cylinder", "funnel3d"],
        "pyramid3d" => &["cylinder", "funnel3d", "pyramid3d"],
        "dependencywheel" => &["dependency-wheel"],
        "dumbbell" => &["dumbbell"],
        "funnel" => &["funnel"],
        "heatmap" => &["heatmap"],
        "lollipop" => &["dumbbell", "lollipop"],
        "networkgraph" => &["networkgraph"],
        "organization" => &["organization"],
        "sankey" => &["sankey"],
        "streamgraph" => &["streamgraph"],
        "sunburst" => &["sunburst"],
        "tilemap" => &["heatmap", "tilemap"],
        "timeline" => &["timeline"],
        "treemap" => &["treemap"],
        "variablepie" => &["variable-pie"],
        "variwide" => &["variwide"],
        "vector" => &["vector"],
        "venn" => &["venn"],
        "windbarb" => &["windbarb"],
        "wordcloud" => &["wordcloud"],
        "xrange" => &["xrange"],
        _ => &[],
    }
}

/// Union of the modules for `series_types`, each listed once, first-seen order.
pub fn required_modules<S: AsRef<str>>(series_types: &[S]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for t in series_types {
        for &m in dependencies(t.as_ref()) {
            if !out.contains(&m) { out.push(m); }
        }
    }
    out
}
