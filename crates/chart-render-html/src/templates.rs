// File: crates/chart-render-html/src/templates.rs
// Summary: HTML/JS templates; `[NAME]` placeholders are filled by `html.rs`.

pub const HIGHCHARTS_HEAD: &str = r#"<script src="[SRC]highcharts.js"></script>
        <script src="[SRC]highcharts-more.js"></script>
        <script src="[SRC]highcharts-3d.js"></script>
        <script src="[SRC]maps/highmaps.js"></script>
        [MODULES]
        <script src="[SRC]modules/series-label.js"></script>
        <script src="[SRC]modules/annotations.js"></script>
        <script src="[SRC]modules/exporting.js"></script>
        <script src="[SRC]modules/export-data.js"></script>
        <script src="[SRC]modules/accessibility.js"></script>"#;

pub const MODULE: &str = r#"<script src="[SRC]modules/[MODULE].js"></script>"#;

pub const PLOTLY_HEAD: &str = r#"<script src="[SRC]"></script>"#;

pub const PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="UTF-8" />
        [HEAD]
    </head>
    <body style="background-color:[BACKGROUND]">
        [CHART]
    </body>
</html>"#;

pub const INLINE: &str = r#"<div id="[ID]" style="width: [WIDTH]px; height: [HEIGHT]px;"></div>
        <script>
            [PLOTTING]
        </script>"#;

pub const JS: &str = r#"<script>
            [PLOTTING]
        </script>"#;

pub const HIGHCHARTS_PLOT: &str = r#"[THEME]
            Highcharts.chart('[ID]', [CHART]);"#;

pub const PLOTLY_PLOT: &str = r#"var figure = [CHART];
            Plotly.newPlot('[ID]', figure.data, figure.layout);"#;
