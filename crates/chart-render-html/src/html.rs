// File: crates/chart-render-html/src/html.rs
// Summary: Fills the templates from chart documents (page, inline markup, JS only, several charts per page).

use chart_core::{ChartDocument, Library};

use crate::config::RenderConfig;
use crate::modules::required_modules;
use crate::templates;
use crate::theme::{self, Theme};

/// Renders [`ChartDocument`]s; holds the configuration and resolved theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Renderer {
    config: RenderConfig,
    theme: Theme,
}

impl Default for Renderer {
    fn default() -> Self { Self::new(RenderConfig::default()) }
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        let theme = theme::find(&config.theme);
        Self { config, theme }
    }

    pub fn config(&self) -> &RenderConfig { &self.config }
    pub fn theme(&self) -> Theme { self.theme }

    /// The call that draws `doc` into the element with its id.
    pub fn plotting_js(&self, doc: &ChartDocument) -> String {
        // Chart JSON goes in last so its text is never taken for a placeholder.
        let json = doc.json.replace("</", "<\\/");
        match doc.library {
            Library::Highcharts => templates::HIGHCHARTS_PLOT
                .replace("[ID]", &doc.id)
                .replace("[THEME]", self.theme.highcharts)
                .replace("[CHART]", &json),
            Library::Plotly => templates::PLOTLY_PLOT.replace("[ID]", &doc.id).replace("[CHART]", &json),
        }
    }

    /// `<script>` block only; the caller provides the target element.
    pub fn render_js(&self, doc: &ChartDocument) -> String {
        templates::JS.replace("[PLOTTING]", &self.plotting_js(doc))
    }

    /// Container `<div>` sized to the chart plus its `<script>`, for embedding.
    pub fn render_inline(&self, doc: &ChartDocument) -> String {
        templates::INLINE
            .replace("[ID]", &doc.id)
            .replace("[WIDTH]", &doc.width.to_string())
            .replace("[HEIGHT]", &doc.height.to_string())
            .replace("[PLOTTING]", &self.plotting_js(doc))
    }

    /// Stand-alone page for one chart.
    pub fn render_page(&self, doc: &ChartDocument) -> String {
        self.render_page_many(std::slice::from_ref(doc))
    }

    /// One page holding every chart in `docs`, with the scripts all of them need.
    pub fn render_page_many(&self, docs: &[ChartDocument]) -> String {
        let body: String = docs.iter().map(|d| self.render_inline(d)).collect::<Vec<_>>().join("\n        ");
        templates::PAGE
            .replace("[HEAD]", &self.head(docs))
            .replace("[BACKGROUND]", self.theme.background)
            .replace("[CHART]", &body)
    }

    /// Script includes for the libraries used in `docs`.
    pub fn head(&self, docs: &[ChartDocument]) -> String {
        let mut parts = Vec::new();

        let hc: Vec<&ChartDocument> = docs.iter().filter(|d| d.library == Library::Highcharts).collect();
        if !hc.is_empty() {
            let src = self.config.source_for(Library::Highcharts);
            let types: Vec<&str> = hc.iter().flat_map(|d| d.series_types.iter().map(String::as_str)).collect();
            let modules = required_modules(&types)
                .into_iter()
                .map(|m| templates::MODULE.replace("[MODULE]", m).replace("[SRC]", src))
                .collect::<Vec<_>>()
                .join("\n        ");
            parts.push(templates::HIGHCHARTS_HEAD.replace("[MODULES]", &modules).replace("[SRC]", src));
        }

        if docs.iter().any(|d| d.library == Library::Plotly) {
            let src = self.config.source_for(Library::Plotly);
            parts.push(templates::PLOTLY_HEAD.replace("[SRC]", src));
        }

        parts.join("\n        ")
    }
}
