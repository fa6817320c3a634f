// File: crates/chart-core/src/plotly.rs
// Summary: Plotly accessors (figure, traces, layout) and trace constructors.

use crate::dialect::Plotly;
use crate::node::Node;
use crate::props::{field_setters, node_types, views, Grid, Items, Prop};
use crate::schema::NodeKind;
use crate::value::Value;

node_types!(Plotly {
    /// Root figure: `data` traces plus `layout`.
    Figure => PlFigure,
    /// Any trace; cast to a variant for its specific attributes.
    Trace => PlTrace,
    ScatterTrace => PlTrace,
    BarTrace => PlTrace,
    PieTrace => PlTrace,
    HeatmapTrace => PlTrace,
    HistogramTrace => PlTrace,
    Marker => PlMarker,
    Line => PlLine,
    Font => PlFont,
    Title => PlTitle,
    Axis => PlAxis,
    Legend => PlLegend,
    Annotation => PlAnnotation,
    Shape => PlShape,
    Layout => PlLayout,
    Datum => Datum,
});

views!(Trace => [ScatterTrace, BarTrace, PieTrace, HeatmapTrace, HistogramTrace]);

pub fn props() -> Prop<Figure> {
    Prop::root()
}

impl Prop<Figure> {
    pub fn data(&self) -> Items<Trace> { self.items("data") }
    pub fn layout(&self) -> Prop<Layout> { self.child("layout") }
}

impl Prop<Trace> {
    pub fn as_scatter(&self) -> Prop<ScatterTrace> { self.cast() }
    pub fn as_bar(&self) -> Prop<BarTrace> { self.cast() }
    pub fn as_pie(&self) -> Prop<PieTrace> { self.cast() }
    pub fn as_heatmap(&self) -> Prop<HeatmapTrace> { self.cast() }
    pub fn as_histogram(&self) -> Prop<HistogramTrace> { self.cast() }
}

macro_rules! trace_children {
    ($($marker:ty),+) => {
        $(
            impl Prop<$marker> {
                pub fn marker(&self) -> Prop<Marker> { self.child("marker") }
                pub fn line(&self) -> Prop<Line> { self.child("line") }
                pub fn z(&self) -> Grid<Datum> { self.grid("zs_") }
            }
        )+
    };
}

trace_children!(Trace, ScatterTrace, BarTrace, PieTrace, HeatmapTrace, HistogramTrace);

field_setters!([Trace, ScatterTrace, BarTrace, PieTrace, HeatmapTrace, HistogramTrace] {
    name => "name": String,
    kind => "type_iplot": String,
    mode => "mode": String,
    x => "xs_": Vec<f64>,
    x_text => "xt_": Vec<String>,
    y => "ys_": Vec<f64>,
    y_text => "yt_": Vec<String>,
    z_matrix => "zs_": Vec<Vec<f64>>,
    text => "text": Vec<String>,
    opacity => "opacity": f64,
    showlegend => "showlegend": bool,
    visible => "visible": bool,
    xaxis => "xaxis": String,
    yaxis => "yaxis": String,
});

field_setters!(ScatterTrace {
    fill => "fill": String,
    fillcolor => "fillcolor": String,
    connectgaps => "connectgaps": bool,
});

field_setters!(BarTrace {
    orientation => "orientation": String,
    width => "width": f64,
    offset => "offset": f64,
    base => "base": f64,
});

field_setters!(PieTrace {
    values => "values": Vec<f64>,
    labels => "labels": Vec<String>,
    hole => "hole": f64,
    sort => "sort": bool,
});

field_setters!(HeatmapTrace {
    colorscale => "colorscale": String,
    zmin => "zmin": f64,
    zmax => "zmax": f64,
    showscale => "showscale": bool,
});

field_setters!(HistogramTrace {
    nbinsx => "nbinsx": i64,
    nbinsy => "nbinsy": i64,
    histnorm => "histnorm": String,
});

impl Prop<Marker> {
    pub fn line(&self) -> Prop<Line> { self.child("line") }
}

field_setters!(Marker {
    color => "color": String,
    size => "size": f64,
    symbol => "symbol": String,
    opacity => "opacity": f64,
});

field_setters!(Line {
    color => "color": String,
    width => "width": f64,
    dash => "dash": String,
    shape => "shape": String,
});

field_setters!(Font {
    family => "family": String,
    size => "size": f64,
    color => "color": String,
});

impl Prop<Title> {
    pub fn font(&self) -> Prop<Font> { self.child("font") }
}

field_setters!(Title {
    text => "text": String,
    x => "x": f64,
    y => "y": f64,
});

impl Prop<Axis> {
    pub fn title(&self) -> Prop<Title> { self.child("title") }
}

field_setters!(Axis {
    kind => "type_iplot": String,
    range => "range": Vec<f64>,
    autorange => "autorange": bool,
    showgrid => "showgrid": bool,
    zeroline => "zeroline": bool,
    tickformat => "tickformat": String,
    gridcolor => "gridcolor": String,
});

impl Prop<Legend> {
    pub fn font(&self) -> Prop<Font> { self.child("font") }
}

field_setters!(Legend {
    x => "x": f64,
    y => "y": f64,
    orientation => "orientation": String,
    bgcolor => "bgcolor": String,
});

impl Prop<Annotation> {
    pub fn font(&self) -> Prop<Font> { self.child("font") }
}

field_setters!(Annotation {
    text => "text": String,
    x => "x": f64,
    y => "y": f64,
    xref => "xref": String,
    yref => "yref": String,
    showarrow => "showarrow": bool,
});

impl Prop<Shape> {
    pub fn line(&self) -> Prop<Line> { self.child("line") }
}

field_setters!(Shape {
    kind => "type_iplot": String,
    x0 => "x0": f64,
    y0 => "y0": f64,
    x1 => "x1": f64,
    y1 => "y1": f64,
    xref => "xref": String,
    yref => "yref": String,
    fillcolor => "fillcolor": String,
    opacity => "opacity": f64,
});

impl Prop<Layout> {
    pub fn title(&self) -> Prop<Title> { self.child("title") }
    pub fn xaxis(&self) -> Prop<Axis> { self.child("xaxis") }
    pub fn yaxis(&self) -> Prop<Axis> { self.child("yaxis") }
    pub fn legend(&self) -> Prop<Legend> { self.child("legend") }
    pub fn font(&self) -> Prop<Font> { self.child("font") }
    pub fn annotations(&self) -> Items<Annotation> { self.items("annotations") }
    pub fn shapes(&self) -> Items<Shape> { self.items("shapes") }
}

field_setters!(Layout {
    width => "width": i64,
    height => "height": i64,
    showlegend => "showlegend": bool,
    barmode => "barmode": String,
    paper_bgcolor => "paper_bgcolor": String,
    plot_bgcolor => "plot_bgcolor": String,
});

field_setters!(Datum {
    value => "value": f64,
});

/// Numeric trace of `kind` (e.g. `scatter`, `bar`).
pub fn trace(kind: &str, xs: impl Into<Vec<f64>>, ys: impl Into<Vec<f64>>) -> Node {
    Node::from_fields(
        NodeKind::PlTrace,
        [
            ("type_iplot", Value::from(kind)),
            ("xs_", Value::from(xs.into())),
            ("ys_", Value::from(ys.into())),
        ],
    )
}

/// Trace over category labels on x.
pub fn category_trace(kind: &str, xs: Vec<String>, ys: impl Into<Vec<f64>>) -> Node {
    Node::from_fields(
        NodeKind::PlTrace,
        [
            ("type_iplot", Value::from(kind)),
            ("xt_", Value::from(xs)),
            ("ys_", Value::from(ys.into())),
        ],
    )
}

pub fn heatmap(z: Vec<Vec<f64>>) -> Node {
    Node::from_fields(NodeKind::PlTrace, [("type_iplot", Value::from("heatmap")), ("zs_", Value::from(z))])
}
