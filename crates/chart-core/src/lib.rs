// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the option tree, path engine, builders and serializer.

pub mod chart;
pub mod dialect;
pub mod error;
pub mod highcharts;
pub mod node;
pub mod path;
pub mod plotly;
pub mod props;
pub mod resolve;
pub mod schema;
pub mod serialize;
pub mod types;
pub mod value;

pub use chart::{Chart, ChartDocument};
pub use dialect::{Dialect, Highcharts, Plotly};
pub use error::{ChartError, Result};
pub use node::{Node, Slot};
pub use path::{Path, Segment, Step, MAX_INDEX};
pub use props::{Grid, Items, Mutation, NodeType, Prop, View};
pub use resolve::{lookup, resolve};
pub use schema::{Field, NodeKind, Schema, Shape};
pub use serialize::{apply_substitutions, Substitution};
pub use types::{Library, HEIGHT, WIDTH};
pub use value::{safe_convert, safe_convert_list, ScalarType, Value};

pub type HighchartsChart = Chart<Highcharts>;
pub type PlotlyChart = Chart<Plotly>;
