// File: crates/chart-render-html/src/config.rs
// Summary: Renderer configuration (script source, theme) with defaults and TOML loading.

use anyhow::{Context, Result};
use chart_core::Library;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Highcharts scripts are loaded relative to this base.
pub const DEFAULT_HIGHCHARTS_SRC: &str = "https://code.highcharts.com/";
/// Plotly bundle.
pub const DEFAULT_PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-latest.min.js";

/// Options recognised by the renderer.
///
/// ```toml
/// source_url = "https://code.highcharts.com/10.3.3/"
/// theme = "light"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Overrides the library's default script source.
    pub source_url: Option<String>,
    /// Theme preset name; unknown names fall back to dark.
    pub theme: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { source_url: None, theme: "dark".to_string() }
    }
}

impl RenderConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid render config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read render config '{}'", path.display()))?;
        let cfg = Self::from_toml_str(&text)
            .with_context(|| format!("failed to parse render config '{}'", path.display()))?;
        debug!(path = %path.display(), ?cfg, "render config loaded");
        Ok(cfg)
    }

    /// Script source for `library`: the configured URL or its default.
    pub fn source_for(&self, library: Library) -> &str {
        match (&self.source_url, library) {
            (Some(url), _) => url.as_str(),
            (None, Library::Highcharts) => DEFAULT_HIGHCHARTS_SRC,
            (None, Library::Plotly) => DEFAULT_PLOTLY_SRC,
        }
    }
}
