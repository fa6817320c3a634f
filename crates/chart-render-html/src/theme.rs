// File: crates/chart-render-html/src/theme.rs
// Summary: Page themes; Highcharts option presets plus the page background.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Page body background.
    pub background: &'static str,
    /// Runs before each Highcharts chart is created. Empty for no theme.
    pub highcharts: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self { name: "dark", background: "#111", highcharts: DARK_HIGHCHARTS }
    }

    pub fn light() -> Self {
        Self { name: "light", background: "#fff", highcharts: LIGHT_HIGHCHARTS }
    }

    /// Library defaults, white page.
    pub fn none() -> Self {
        Self { name: "none", background: "#fff", highcharts: "" }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::none()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}

const DARK_HIGHCHARTS: &str = r#"Highcharts.theme = {
    colors: ['#DDDF0C', '#54BF3A', '#EC272A', '#41D8FE', '#5B47D1',
        '#5B47D1', '#E978FC', '#C51F8D', '#DCDCDC'],
    chart: {
        backgroundColor: 'rgba(17, 17, 17, .01)',
        borderColor: '#222',
        className: 'dark-container',
        plotBackgroundColor: 'rgba(255, 255, 255, .1)',
        plotBorderColor: '#A0A0A0',
        plotBorderWidth: 1
    },
    title: { style: { color: '#C0C0C0' } },
    subtitle: { style: { color: '#666' } },
    xAxis: {
        gridLineColor: '#444',
        gridLineWidth: 1,
        labels: { style: { color: '#A0A0A0' } },
        lineColor: '#A0A0A0',
        tickColor: '#A0A0A0',
        title: { style: { color: '#CCC' } }
    },
    yAxis: {
        gridLineColor: '#444',
        labels: { style: { color: '#A0A0A0' } },
        lineColor: '#A0A0A0',
        minorTickInterval: null,
        tickColor: '#A0A0A0',
        tickWidth: 1,
        title: { style: { color: '#CCC' } }
    },
    tooltip: {
        backgroundColor: 'rgba(0, 0, 0, 0.75)',
        style: { color: '#F0F0F0' }
    },
    plotOptions: {
        line: {
            dataLabels: { color: '#CCC' },
            marker: { lineColor: '#333' }
        }
    },
    legend: {
        backgroundColor: 'rgba(0, 0, 0, 0.3)',
        itemStyle: { color: '#A0A0A0' },
        itemHoverStyle: { color: '#FFF' },
        itemHiddenStyle: { color: '#444' },
        title: { style: { color: '#C0C0C0' } }
    },
    credits: { style: { color: '#666' } },
    labels: { style: { color: '#CCC' } },
    navigation: {
        buttonOptions: {
            symbolStroke: '#DDDDDD',
            theme: {
                fill: {
                    linearGradient: { x1: 0, y1: 0, x2: 0, y2: 1 },
                    stops: [[0.4, '#606060'], [0.6, '#333333']]
                },
                stroke: '#000000'
            },
            align: 'left'
        }
    }
};
Highcharts.setOptions(Highcharts.theme);"#;

const LIGHT_HIGHCHARTS: &str = r#"Highcharts.theme = {
    colors: ['#2078C8', '#14A05A', '#C83C3C', '#E08A1E', '#7A5BC7', '#1FA3A3'],
    chart: {
        backgroundColor: '#FAFAFC',
        plotBorderColor: '#E6E6EB',
        plotBorderWidth: 1
    },
    title: { style: { color: '#14141E' } },
    subtitle: { style: { color: '#64646E' } },
    xAxis: {
        gridLineColor: '#E6E6EB',
        lineColor: '#3C3C46',
        tickColor: '#64646E',
        labels: { style: { color: '#14141E' } }
    },
    yAxis: {
        gridLineColor: '#E6E6EB',
        lineColor: '#3C3C46',
        tickColor: '#64646E',
        labels: { style: { color: '#14141E' } }
    },
    legend: { itemStyle: { color: '#14141E' } }
};
Highcharts.setOptions(Highcharts.theme);"#;
