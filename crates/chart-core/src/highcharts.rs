// File: crates/chart-core/src/highcharts.rs
// Summary: Highcharts accessors (options, axes, series variants) and series constructors.

use crate::dialect::Highcharts;
use crate::node::Node;
use crate::props::{field_setters, node_types, views, Grid, Items, Prop};
use crate::schema::NodeKind;
use crate::value::Value;

node_types!(Highcharts {
    /// Root option object.
    Options => HcOptions,
    /// The `chart` option block (type, size, colors).
    ChartSettings => HcChart,
    Title => HcTitle,
    Label => HcLabel,
    Axis => HcAxis,
    PlotBand => HcPlotBand,
    PlotLine => HcPlotLine,
    Legend => HcLegend,
    Tooltip => HcTooltip,
    Credits => HcCredits,
    /// Any series; cast to a variant for its specific options.
    Series => HcSeries,
    LineSeries => HcSeries,
    AreaSeries => HcSeries,
    BarSeries => HcSeries,
    PieSeries => HcSeries,
    BubbleSeries => HcSeries,
    HeatmapSeries => HcSeries,
    HistogramSeries => HcSeries,
    Point => HcPoint,
    /// One cell of a series data matrix.
    Datum => Datum,
});

views!(Series => [LineSeries, AreaSeries, BarSeries, PieSeries, BubbleSeries, HeatmapSeries, HistogramSeries]);

/// Start an accessor chain at the option root.
pub fn props() -> Prop<Options> {
    Prop::root()
}

impl Prop<Options> {
    pub fn chart(&self) -> Prop<ChartSettings> { self.child("chart_iplot") }
    pub fn title(&self) -> Prop<Title> { self.child("title") }
    pub fn subtitle(&self) -> Prop<Title> { self.child("subtitle") }
    pub fn x_axis(&self) -> Items<Axis> { self.items("xAxis") }
    pub fn y_axis(&self) -> Items<Axis> { self.items("yAxis") }
    pub fn legend(&self) -> Prop<Legend> { self.child("legend") }
    pub fn tooltip(&self) -> Prop<Tooltip> { self.child("tooltip") }
    pub fn credits(&self) -> Prop<Credits> { self.child("credits") }
    pub fn series(&self) -> Items<Series> { self.items("series") }
}

field_setters!(Options {
    colors => "colors": Vec<String>,
});

field_setters!(ChartSettings {
    kind => "type_iplot": String,
    width => "width": i64,
    height => "height": i64,
    background_color => "backgroundColor": String,
    plot_background_color => "plotBackgroundColor": String,
    border_color => "borderColor": String,
    inverted => "inverted": bool,
    polar => "polar": bool,
    zoom_type => "zoomType": String,
});

field_setters!(Title {
    text => "text": String,
    align => "align": String,
    margin => "margin": f64,
    floating => "floating": bool,
});

field_setters!(Label {
    text => "text": String,
    align => "align": String,
    rotation => "rotation": f64,
});

impl Prop<Axis> {
    pub fn title(&self) -> Prop<Title> { self.child("title") }
    pub fn plot_bands(&self) -> Items<PlotBand> { self.items("plotBands") }
    pub fn plot_lines(&self) -> Items<PlotLine> { self.items("plotLines") }
}

field_setters!(Axis {
    kind => "type_iplot": String,
    categories => "categories": Vec<String>,
    min => "min": f64,
    max => "max": f64,
    tick_interval => "tickInterval": f64,
    grid_line_width => "gridLineWidth": f64,
    opposite => "opposite": bool,
    reversed => "reversed": bool,
});

impl Prop<PlotBand> {
    pub fn label(&self) -> Prop<Label> { self.child("label") }
}

field_setters!(PlotBand {
    from => "from": f64,
    to => "to": f64,
    color => "color": String,
});

impl Prop<PlotLine> {
    pub fn label(&self) -> Prop<Label> { self.child("label") }
}

field_setters!(PlotLine {
    value => "value": f64,
    color => "color": String,
    width => "width": f64,
    dash_style => "dashStyle": String,
});

impl Prop<Legend> {
    pub fn title(&self) -> Prop<Title> { self.child("title") }
}

field_setters!(Legend {
    enabled => "enabled": bool,
    layout => "layout": String,
    align => "align": String,
    vertical_align => "verticalAlign": String,
    floating => "floating": bool,
});

field_setters!(Tooltip {
    enabled => "enabled": bool,
    shared => "shared": bool,
    value_prefix => "valuePrefix": String,
    value_suffix => "valueSuffix": String,
    value_decimals => "valueDecimals": i64,
});

field_setters!(Credits {
    enabled => "enabled": bool,
    text => "text": String,
    href => "href": String,
});

macro_rules! series_children {
    ($($marker:ty),+) => {
        $(
            impl Prop<$marker> {
                pub fn data_mat(&self) -> Grid<Datum> { self.grid("data_mat") }
                pub fn data_obj(&self) -> Items<Point> { self.items("data_obj") }
            }
        )+
    };
}

series_children!(Series, LineSeries, AreaSeries, BarSeries, PieSeries, BubbleSeries, HeatmapSeries, HistogramSeries);

impl Prop<Series> {
    pub fn as_line(&self) -> Prop<LineSeries> { self.cast() }
    pub fn as_area(&self) -> Prop<AreaSeries> { self.cast() }
    pub fn as_bar(&self) -> Prop<BarSeries> { self.cast() }
    pub fn as_pie(&self) -> Prop<PieSeries> { self.cast() }
    pub fn as_bubble(&self) -> Prop<BubbleSeries> { self.cast() }
    pub fn as_heatmap(&self) -> Prop<HeatmapSeries> { self.cast() }
    pub fn as_histogram(&self) -> Prop<HistogramSeries> { self.cast() }
}

// Options every variant shares.
field_setters!([Series, LineSeries, AreaSeries, BarSeries, PieSeries, BubbleSeries, HeatmapSeries, HistogramSeries] {
    id => "id": String,
    index => "index": f64,
    name => "name": String,
    kind => "type_iplot": String,
    data => "data": Vec<f64>,
    matrix => "data_mat": Vec<Vec<f64>>,
    legend_index => "legendIndex": f64,
    map_data => "mapData": String,
    stack => "stack": f64,
    x_axis => "xAxis": f64,
    y_axis => "yAxis": f64,
    z_index => "zIndex": f64,
    color => "color": String,
    visible => "visible": bool,
    show_in_legend => "showInLegend": bool,
});

field_setters!([LineSeries, AreaSeries] {
    line_width => "lineWidth": f64,
    dash_style => "dashStyle": String,
    step => "step": String,
});

field_setters!(AreaSeries {
    fill_opacity => "fillOpacity": f64,
});

field_setters!(BarSeries {
    border_radius => "borderRadius": f64,
    point_padding => "pointPadding": f64,
    group_padding => "groupPadding": f64,
    stacking => "stacking": String,
});

field_setters!(PieSeries {
    inner_size => "innerSize": String,
    size => "size": String,
    start_angle => "startAngle": f64,
    end_angle => "endAngle": f64,
});

field_setters!(BubbleSeries {
    min_size => "minSize": f64,
    max_size => "maxSize": f64,
});

field_setters!(HeatmapSeries {
    colsize => "colsize": f64,
    rowsize => "rowsize": f64,
});

field_setters!(HistogramSeries {
    base_series => "baseSeries": f64,
    bins_number => "binsNumber": f64,
});

field_setters!(Point {
    id => "id": String,
    name => "name": String,
    x => "x": f64,
    y => "y": f64,
    z => "z": f64,
    value => "value": f64,
    color => "color": String,
});

field_setters!(Datum {
    value => "value": f64,
});

/// Series of `kind` over a plain number list.
pub fn series(kind: &str, data: impl Into<Vec<f64>>) -> Node {
    Node::from_fields(NodeKind::HcSeries, [("type_iplot", Value::from(kind)), ("data", Value::from(data.into()))])
}

/// Series of `kind` over `[x, y]` pairs (written as the series data matrix).
pub fn xy_series(kind: &str, points: impl IntoIterator<Item = (f64, f64)>) -> Node {
    let rows: Vec<Value> = points.into_iter().map(|(x, y)| Value::from(vec![x, y])).collect();
    Node::from_fields(NodeKind::HcSeries, [("type_iplot", Value::from(kind)), ("data_mat", Value::List(rows))])
}

/// Series of `kind` over arbitrary rows, e.g. `[x, low, high]` or `[x, y, value]`.
pub fn matrix_series(kind: &str, rows: Vec<Vec<f64>>) -> Node {
    Node::from_fields(NodeKind::HcSeries, [("type_iplot", Value::from(kind)), ("data_mat", Value::from(rows))])
}
