// File: crates/chart-core/src/schema.rs
// Summary: Node kinds and their static field tables (the shape every node is resolved against).

use std::fmt;

use crate::value::ScalarType;
use crate::value::ScalarType::{Bool, Float, Int, Text};

/// Every kind of node that can appear in an option tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    /// A single matrix cell; serializes as its bare value.
    Datum,

    HcOptions,
    HcChart,
    HcTitle,
    HcLabel,
    HcAxis,
    HcPlotBand,
    HcPlotLine,
    HcLegend,
    HcTooltip,
    HcCredits,
    HcSeries,
    HcPoint,

    PlFigure,
    PlTrace,
    PlMarker,
    PlLine,
    PlFont,
    PlTitle,
    PlAxis,
    PlLegend,
    PlAnnotation,
    PlShape,
    PlLayout,
}

/// How a field stores its content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Value(ScalarType),
    List(ScalarType),
    Child(NodeKind),
    /// Collection addressed with one index (`name#i`).
    Items(NodeKind),
    /// Collection of collections addressed with two indices (`name#i#j`).
    Grid(NodeKind),
}

impl Shape {
    /// Number of indices a segment must carry to address an element.
    pub fn depth(self) -> usize {
        match self {
            Shape::Items(_) => 1,
            Shape::Grid(_) => 2,
            _ => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
}

impl Field {
    pub const fn value(name: &'static str, ty: ScalarType) -> Self { Self { name, shape: Shape::Value(ty) } }
    pub const fn list(name: &'static str, ty: ScalarType) -> Self { Self { name, shape: Shape::List(ty) } }
    pub const fn child(name: &'static str, kind: NodeKind) -> Self { Self { name, shape: Shape::Child(kind) } }
    pub const fn items(name: &'static str, kind: NodeKind) -> Self { Self { name, shape: Shape::Items(kind) } }
    pub const fn grid(name: &'static str, kind: NodeKind) -> Self { Self { name, shape: Shape::Grid(kind) } }
}

/// Field table for one node kind. Fields are emitted in table order.
#[derive(Debug)]
pub struct Schema {
    pub kind: NodeKind,
    pub fields: &'static [Field],
    /// When set, the node serializes as this field's value instead of an object.
    pub inline: Option<&'static str>,
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl NodeKind {
    pub fn schema(self) -> &'static Schema {
        match self {
            NodeKind::Datum => &DATUM,
            NodeKind::HcOptions => &HC_OPTIONS,
            NodeKind::HcChart => &HC_CHART,
            NodeKind::HcTitle => &HC_TITLE,
            NodeKind::HcLabel => &HC_LABEL,
            NodeKind::HcAxis => &HC_AXIS,
            NodeKind::HcPlotBand => &HC_PLOT_BAND,
            NodeKind::HcPlotLine => &HC_PLOT_LINE,
            NodeKind::HcLegend => &HC_LEGEND,
            NodeKind::HcTooltip => &HC_TOOLTIP,
            NodeKind::HcCredits => &HC_CREDITS,
            NodeKind::HcSeries => &HC_SERIES,
            NodeKind::HcPoint => &HC_POINT,
            NodeKind::PlFigure => &PL_FIGURE,
            NodeKind::PlTrace => &PL_TRACE,
            NodeKind::PlMarker => &PL_MARKER,
            NodeKind::PlLine => &PL_LINE,
            NodeKind::PlFont => &PL_FONT,
            NodeKind::PlTitle => &PL_TITLE,
            NodeKind::PlAxis => &PL_AXIS,
            NodeKind::PlLegend => &PL_LEGEND,
            NodeKind::PlAnnotation => &PL_ANNOTATION,
            NodeKind::PlShape => &PL_SHAPE,
            NodeKind::PlLayout => &PL_LAYOUT,
        }
    }

    pub fn field(self, name: &str) -> Option<&'static Field> {
        self.schema().field(name)
    }

    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Datum => "datum",
            NodeKind::HcOptions => "highcharts.options",
            NodeKind::HcChart => "highcharts.chart",
            NodeKind::HcTitle => "highcharts.title",
            NodeKind::HcLabel => "highcharts.label",
            NodeKind::HcAxis => "highcharts.axis",
            NodeKind::HcPlotBand => "highcharts.plotBand",
            NodeKind::HcPlotLine => "highcharts.plotLine",
            NodeKind::HcLegend => "highcharts.legend",
            NodeKind::HcTooltip => "highcharts.tooltip",
            NodeKind::HcCredits => "highcharts.credits",
            NodeKind::HcSeries => "highcharts.series",
            NodeKind::HcPoint => "highcharts.point",
            NodeKind::PlFigure => "plotly.figure",
            NodeKind::PlTrace => "plotly.trace",
            NodeKind::PlMarker => "plotly.marker",
            NodeKind::PlLine => "plotly.line",
            NodeKind::PlFont => "plotly.font",
            NodeKind::PlTitle => "plotly.title",
            NodeKind::PlAxis => "plotly.axis",
            NodeKind::PlLegend => "plotly.legend",
            NodeKind::PlAnnotation => "plotly.annotation",
            NodeKind::PlShape => "plotly.shape",
            NodeKind::PlLayout => "plotly.layout",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static DATUM: Schema = Schema {
    kind: NodeKind::Datum,
    fields: &[Field::value("value", Float)],
    inline: Some("value"),
};

// ---- Highcharts ---------------------------------------------------------------

static HC_OPTIONS: Schema = Schema {
    kind: NodeKind::HcOptions,
    fields: &[
        Field::child("chart_iplot", NodeKind::HcChart),
        Field::child("title", NodeKind::HcTitle),
        Field::child("subtitle", NodeKind::HcTitle),
        Field::items("xAxis", NodeKind::HcAxis),
        Field::items("yAxis", NodeKind::HcAxis),
        Field::child("legend", NodeKind::HcLegend),
        Field::child("tooltip", NodeKind::HcTooltip),
        Field::child("credits", NodeKind::HcCredits),
        Field::list("colors", Text),
        Field::items("series", NodeKind::HcSeries),
    ],
    inline: None,
};

static HC_CHART: Schema = Schema {
    kind: NodeKind::HcChart,
    fields: &[
        Field::value("type_iplot", Text),
        Field::value("width", Int),
        Field::value("height", Int),
        Field::value("backgroundColor", Text),
        Field::value("plotBackgroundColor", Text),
        Field::value("borderColor", Text),
        Field::value("inverted", Bool),
        Field::value("polar", Bool),
        Field::value("zoomType", Text),
    ],
    inline: None,
};

static HC_TITLE: Schema = Schema {
    kind: NodeKind::HcTitle,
    fields: &[
        Field::value("text", Text),
        Field::value("align", Text),
        Field::value("margin", Float),
        Field::value("floating", Bool),
    ],
    inline: None,
};

static HC_LABEL: Schema = Schema {
    kind: NodeKind::HcLabel,
    fields: &[
        Field::value("text", Text),
        Field::value("align", Text),
        Field::value("rotation", Float),
    ],
    inline: None,
};

static HC_AXIS: Schema = Schema {
    kind: NodeKind::HcAxis,
    fields: &[
        Field::child("title", NodeKind::HcTitle),
        Field::value("type_iplot", Text),
        Field::list("categories", Text),
        Field::value("min", Float),
        Field::value("max", Float),
        Field::value("tickInterval", Float),
        Field::value("gridLineWidth", Float),
        Field::value("opposite", Bool),
        Field::value("reversed", Bool),
        Field::items("plotBands", NodeKind::HcPlotBand),
        Field::items("plotLines", NodeKind::HcPlotLine),
    ],
    inline: None,
};

static HC_PLOT_BAND: Schema = Schema {
    kind: NodeKind::HcPlotBand,
    fields: &[
        Field::value("from", Float),
        Field::value("to", Float),
        Field::value("color", Text),
        Field::child("label", NodeKind::HcLabel),
    ],
    inline: None,
};

static HC_PLOT_LINE: Schema = Schema {
    kind: NodeKind::HcPlotLine,
    fields: &[
        Field::value("value", Float),
        Field::value("color", Text),
        Field::value("width", Float),
        Field::value("dashStyle", Text),
        Field::child("label", NodeKind::HcLabel),
    ],
    inline: None,
};

static HC_LEGEND: Schema = Schema {
    kind: NodeKind::HcLegend,
    fields: &[
        Field::value("enabled", Bool),
        Field::value("layout", Text),
        Field::value("align", Text),
        Field::value("verticalAlign", Text),
        Field::value("floating", Bool),
        Field::child("title", NodeKind::HcTitle),
    ],
    inline: None,
};

static HC_TOOLTIP: Schema = Schema {
    kind: NodeKind::HcTooltip,
    fields: &[
        Field::value("enabled", Bool),
        Field::value("shared", Bool),
        Field::value("valuePrefix", Text),
        Field::value("valueSuffix", Text),
        Field::value("valueDecimals", Int),
    ],
    inline: None,
};

static HC_CREDITS: Schema = Schema {
    kind: NodeKind::HcCredits,
    fields: &[
        Field::value("enabled", Bool),
        Field::value("text", Text),
        Field::value("href", Text),
    ],
    inline: None,
};

// Fields of every series variant live on the one kind; the variant tag
// (`type_iplot`) only decides which of them the library reads.
static HC_SERIES: Schema = Schema {
    kind: NodeKind::HcSeries,
    fields: &[
        Field::value("id", Text),
        Field::value("index", Float),
        Field::value("name", Text),
        Field::value("type_iplot", Text),
        Field::list("data", Float),
        Field::grid("data_mat", NodeKind::Datum),
        Field::items("data_obj", NodeKind::HcPoint),
        Field::value("legendIndex", Float),
        Field::value("mapData", Text),
        Field::value("stack", Float),
        Field::value("xAxis", Float),
        Field::value("yAxis", Float),
        Field::value("zIndex", Float),
        Field::value("color", Text),
        Field::value("visible", Bool),
        Field::value("showInLegend", Bool),
        // line, spline, area
        Field::value("lineWidth", Float),
        Field::value("dashStyle", Text),
        Field::value("step", Text),
        Field::value("fillOpacity", Float),
        // bar, column
        Field::value("borderRadius", Float),
        Field::value("pointPadding", Float),
        Field::value("groupPadding", Float),
        Field::value("stacking", Text),
        // pie
        Field::value("innerSize", Text),
        Field::value("size", Text),
        Field::value("startAngle", Float),
        Field::value("endAngle", Float),
        // bubble
        Field::value("minSize", Float),
        Field::value("maxSize", Float),
        // heatmap
        Field::value("colsize", Float),
        Field::value("rowsize", Float),
        // histogram, bellcurve
        Field::value("baseSeries", Float),
        Field::value("binsNumber", Float),
    ],
    inline: None,
};

static HC_POINT: Schema = Schema {
    kind: NodeKind::HcPoint,
    fields: &[
        Field::value("id", Text),
        Field::value("name", Text),
        Field::value("x", Float),
        Field::value("y", Float),
        Field::value("z", Float),
        Field::value("value", Float),
        Field::value("color", Text),
    ],
    inline: None,
};

// ---- Plotly -------------------------------------------------------------------

static PL_FIGURE: Schema = Schema {
    kind: NodeKind::PlFigure,
    fields: &[
        Field::items("data", NodeKind::PlTrace),
        Field::child("layout", NodeKind::PlLayout),
    ],
    inline: None,
};

static PL_TRACE: Schema = Schema {
    kind: NodeKind::PlTrace,
    fields: &[
        Field::value("name", Text),
        Field::value("type_iplot", Text),
        Field::value("mode", Text),
        Field::list("xs_", Float),
        Field::list("xt_", Text),
        Field::list("ys_", Float),
        Field::list("yt_", Text),
        Field::grid("zs_", NodeKind::Datum),
        Field::list("text", Text),
        Field::value("opacity", Float),
        Field::value("showlegend", Bool),
        Field::value("visible", Bool),
        Field::value("xaxis", Text),
        Field::value("yaxis", Text),
        Field::child("marker", NodeKind::PlMarker),
        Field::child("line", NodeKind::PlLine),
        // scatter
        Field::value("fill", Text),
        Field::value("fillcolor", Text),
        Field::value("connectgaps", Bool),
        // bar
        Field::value("orientation", Text),
        Field::value("width", Float),
        Field::value("offset", Float),
        Field::value("base", Float),
        // pie
        Field::list("values", Float),
        Field::list("labels", Text),
        Field::value("hole", Float),
        Field::value("sort", Bool),
        // heatmap
        Field::value("colorscale", Text),
        Field::value("zmin", Float),
        Field::value("zmax", Float),
        Field::value("showscale", Bool),
        // histogram
        Field::value("nbinsx", Int),
        Field::value("nbinsy", Int),
        Field::value("histnorm", Text),
    ],
    inline: None,
};

static PL_MARKER: Schema = Schema {
    kind: NodeKind::PlMarker,
    fields: &[
        Field::value("color", Text),
        Field::value("size", Float),
        Field::value("symbol", Text),
        Field::value("opacity", Float),
        Field::child("line", NodeKind::PlLine),
    ],
    inline: None,
};

static PL_LINE: Schema = Schema {
    kind: NodeKind::PlLine,
    fields: &[
        Field::value("color", Text),
        Field::value("width", Float),
        Field::value("dash", Text),
        Field::value("shape", Text),
    ],
    inline: None,
};

static PL_FONT: Schema = Schema {
    kind: NodeKind::PlFont,
    fields: &[
        Field::value("family", Text),
        Field::value("size", Float),
        Field::value("color", Text),
    ],
    inline: None,
};

static PL_TITLE: Schema = Schema {
    kind: NodeKind::PlTitle,
    fields: &[
        Field::value("text", Text),
        Field::value("x", Float),
        Field::value("y", Float),
        Field::child("font", NodeKind::PlFont),
    ],
    inline: None,
};

static PL_AXIS: Schema = Schema {
    kind: NodeKind::PlAxis,
    fields: &[
        Field::child("title", NodeKind::PlTitle),
        Field::value("type_iplot", Text),
        Field::list("range", Float),
        Field::value("autorange", Bool),
        Field::value("showgrid", Bool),
        Field::value("zeroline", Bool),
        Field::value("tickformat", Text),
        Field::value("gridcolor", Text),
    ],
    inline: None,
};

static PL_LEGEND: Schema = Schema {
    kind: NodeKind::PlLegend,
    fields: &[
        Field::value("x", Float),
        Field::value("y", Float),
        Field::value("orientation", Text),
        Field::value("bgcolor", Text),
        Field::child("font", NodeKind::PlFont),
    ],
    inline: None,
};

static PL_ANNOTATION: Schema = Schema {
    kind: NodeKind::PlAnnotation,
    fields: &[
        Field::value("text", Text),
        Field::value("x", Float),
        Field::value("y", Float),
        Field::value("xref", Text),
        Field::value("yref", Text),
        Field::value("showarrow", Bool),
        Field::child("font", NodeKind::PlFont),
    ],
    inline: None,
};

static PL_SHAPE: Schema = Schema {
    kind: NodeKind::PlShape,
    fields: &[
        Field::value("type_iplot", Text),
        Field::value("x0", Float),
        Field::value("y0", Float),
        Field::value("x1", Float),
        Field::value("y1", Float),
        Field::value("xref", Text),
        Field::value("yref", Text),
        Field::value("fillcolor", Text),
        Field::value("opacity", Float),
        Field::child("line", NodeKind::PlLine),
    ],
    inline: None,
};

static PL_LAYOUT: Schema = Schema {
    kind: NodeKind::PlLayout,
    fields: &[
        Field::child("title", NodeKind::PlTitle),
        Field::child("xaxis", NodeKind::PlAxis),
        Field::child("yaxis", NodeKind::PlAxis),
        Field::value("width", Int),
        Field::value("height", Int),
        Field::value("showlegend", Bool),
        Field::value("barmode", Text),
        Field::child("legend", NodeKind::PlLegend),
        Field::child("font", NodeKind::PlFont),
        Field::value("paper_bgcolor", Text),
        Field::value("plot_bgcolor", Text),
        Field::items("annotations", NodeKind::PlAnnotation),
        Field::items("shapes", NodeKind::PlShape),
    ],
    inline: None,
};
