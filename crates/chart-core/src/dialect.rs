// File: crates/chart-core/src/dialect.rs
// Summary: Per-library wiring (root kind, well-known paths, JSON substitutions) for Highcharts and Plotly.

use std::fmt;

use crate::error::Result;
use crate::node::Node;
use crate::props::NodeType;
use crate::serialize::Substitution;
use crate::types::Library;
use crate::{highcharts, plotly};

/// Everything the root container needs to know about one target library.
///
/// Paths are segment lists in the `name#i` form understood by [`crate::Path`].
pub trait Dialect: Clone + Copy + fmt::Debug + Default + PartialEq + Send + Sync + 'static {
    type Root: NodeType<Dialect = Self>;

    const LIBRARY: Library;
    /// Collection holding the traces on the root node.
    const SERIES_FIELD: &'static str;
    /// Node that receives `width` and `height` at serialization.
    const SIZE_PATH: &'static [&'static str];
    /// Title nodes; all take a `text` field.
    const TITLE_PATH: &'static [&'static str];
    const X_TITLE_PATH: &'static [&'static str];
    const Y_TITLE_PATH: &'static [&'static str];
    const LEGEND_PATH: &'static [&'static str];
    const LEGEND_FIELD: &'static str;
    /// Applied in order to the serialized text.
    const SUBSTITUTIONS: &'static [Substitution];

    /// Defaults set on a fresh root.
    fn initialize(_root: &mut Node) -> Result<()> { Ok(()) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Highcharts;

impl Dialect for Highcharts {
    type Root = highcharts::Options;

    const LIBRARY: Library = Library::Highcharts;
    const SERIES_FIELD: &'static str = "series";
    const SIZE_PATH: &'static [&'static str] = &["chart_iplot"];
    const TITLE_PATH: &'static [&'static str] = &["title"];
    const X_TITLE_PATH: &'static [&'static str] = &["xAxis#0", "title"];
    const Y_TITLE_PATH: &'static [&'static str] = &["yAxis#0", "title"];
    const LEGEND_PATH: &'static [&'static str] = &["legend"];
    const LEGEND_FIELD: &'static str = "enabled";
    const SUBSTITUTIONS: &'static [Substitution] = &[
        Substitution::new("\"data_mat\":", "\"data\":"),
        Substitution::new("\"data_obj\":", "\"data\":"),
        Substitution::new("_iplot\":", "\":"),
    ];

    // Highcharts prints "Chart title" unless the title text is set.
    fn initialize(root: &mut Node) -> Result<()> {
        root.child_mut("title")?.set_field("text", "")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Plotly;

impl Dialect for Plotly {
    type Root = plotly::Figure;

    const LIBRARY: Library = Library::Plotly;
    const SERIES_FIELD: &'static str = "data";
    const SIZE_PATH: &'static [&'static str] = &["layout"];
    const TITLE_PATH: &'static [&'static str] = &["layout", "title"];
    const X_TITLE_PATH: &'static [&'static str] = &["layout", "xaxis", "title"];
    const Y_TITLE_PATH: &'static [&'static str] = &["layout", "yaxis", "title"];
    const LEGEND_PATH: &'static [&'static str] = &["layout"];
    const LEGEND_FIELD: &'static str = "showlegend";
    const SUBSTITUTIONS: &'static [Substitution] = &[
        Substitution::new("_iplot\":", "\":"),
        Substitution::new("\"xs_\":", "\"x\":"),
        Substitution::new("\"xt_\":", "\"x\":"),
        Substitution::new("\"ys_\":", "\"y\":"),
        Substitution::new("\"yt_\":", "\"y\":"),
        Substitution::new("\"zs_\":", "\"z\":"),
    ];
}
