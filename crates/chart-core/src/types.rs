// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (default container size, target library).

use serde::Serialize;
use std::fmt;

/// Default container width in pixels.
pub const WIDTH: u32 = 900;
/// Default container height in pixels.
pub const HEIGHT: u32 = 500;

/// External rendering library a chart is serialized for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    Highcharts,
    Plotly,
}

impl Library {
    pub const fn name(self) -> &'static str {
        match self {
            Library::Highcharts => "highcharts",
            Library::Plotly => "plotly",
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}
