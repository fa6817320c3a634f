// File: crates/chart-core/src/chart.rs
// Summary: Root container (option tree, id, labels) with the immutable builder API and JSON output.

use std::marker::PhantomData;

use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::dialect::Dialect;
use crate::error::Result;
use crate::node::Node;
use crate::path::Path;
use crate::props::{Mutation, NodeType, Prop};
use crate::resolve::{lookup, resolve};
use crate::types::{Library, HEIGHT, WIDTH};
use crate::value::Value;

/// A chart for dialect `D`.
///
/// Every builder method takes `&self` and returns a new chart; the receiver
/// and all of its nodes are left as they were. The size lives in the tree, at
/// the dialect's size node.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart<D: Dialect> {
    root: Node,
    id: String,
    labels: Option<Vec<String>>,
    _dialect: PhantomData<D>,
}

/// What a renderer needs from a chart, and nothing about its tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartDocument {
    pub library: Library,
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub json: String,
    pub series_types: Vec<String>,
}

impl<D: Dialect> Default for Chart<D> {
    fn default() -> Self { Self::new() }
}

impl<D: Dialect> Chart<D> {
    pub fn new() -> Self {
        let mut root = Node::new(<D::Root as NodeType>::KIND);
        if let Err(err) = D::initialize(&mut root) {
            warn!(library = %D::LIBRARY, %err, "dialect defaults not applied");
        }
        let sized = Path::parse_segments(D::SIZE_PATH).and_then(|path| {
            let node = resolve(&mut root, &path)?;
            node.set_field("width", WIDTH)?;
            node.set_field("height", HEIGHT)
        });
        if let Err(err) = sized {
            warn!(library = %D::LIBRARY, %err, "default size not written");
        }
        Self {
            root,
            id: Uuid::new_v4().to_string(),
            labels: None,
            _dialect: PhantomData,
        }
    }

    /// Accessor chain rooted at this dialect's option root.
    pub fn props() -> Prop<D::Root> { Prop::root() }

    pub fn root(&self) -> &Node { &self.root }
    pub fn id(&self) -> &str { &self.id }
    pub fn width(&self) -> u32 { self.size_field("width", WIDTH) }
    pub fn height(&self) -> u32 { self.size_field("height", HEIGHT) }
    pub fn labels(&self) -> Option<&[String]> { self.labels.as_deref() }

    /// Apply `mutation` to a copy. A mutation that cannot be resolved is
    /// dropped and an unchanged copy comes back.
    pub fn with(&self, mutation: Mutation<D>) -> Self {
        self.try_with(&mutation).unwrap_or_else(|err| {
            debug!(path = %mutation.path(), field = mutation.field(), %err, "mutation dropped");
            self.clone()
        })
    }

    /// Like [`Chart::with`], but reports why a mutation could not be applied.
    pub fn try_with(&self, mutation: &Mutation<D>) -> Result<Self> {
        let mut next = self.clone();
        mutation.apply_to(&mut next.root)?;
        Ok(next)
    }

    pub fn with_all(&self, mutations: impl IntoIterator<Item = Mutation<D>>) -> Self {
        mutations.into_iter().fold(self.clone(), |chart, m| chart.with(m))
    }

    /// Untyped form of [`Chart::with`]: `chart.set("series#2.xAxis", 1)`.
    pub fn set(&self, expr: &str, value: impl Into<Value>) -> Self {
        self.try_set(expr, value).unwrap_or_else(|err| {
            debug!(expr, %err, "mutation dropped");
            self.clone()
        })
    }

    pub fn try_set(&self, expr: &str, value: impl Into<Value>) -> Result<Self> {
        self.try_with(&Mutation::parse(expr, value)?)
    }

    fn set_at(&self, segments: &[&str], field: &str, value: impl Into<Value>) -> Self {
        match Path::parse_segments(segments) {
            Ok(path) => self.with(Mutation::new(path, field, value)),
            Err(err) => {
                debug!(%err, "mutation dropped");
                self.clone()
            }
        }
    }

    pub fn with_title(&self, title: impl Into<String>) -> Self {
        self.set_at(D::TITLE_PATH, "text", title.into())
    }

    pub fn with_x_title(&self, title: impl Into<String>) -> Self {
        self.set_at(D::X_TITLE_PATH, "text", title.into())
    }

    pub fn with_y_title(&self, title: impl Into<String>) -> Self {
        self.set_at(D::Y_TITLE_PATH, "text", title.into())
    }

    pub fn with_legend(&self, show: bool) -> Self {
        self.set_at(D::LEGEND_PATH, D::LEGEND_FIELD, show)
    }

    pub fn with_width(&self, width: u32) -> Self {
        self.set_at(D::SIZE_PATH, "width", width)
    }

    pub fn with_height(&self, height: u32) -> Self {
        self.set_at(D::SIZE_PATH, "height", height)
    }

    pub fn with_size(&self, width: u32, height: u32) -> Self {
        self.with_width(width).with_height(height)
    }

    // Size as stored in the tree; unset or unusable values read as the default.
    fn size_field(&self, name: &str, default: u32) -> u32 {
        Path::parse_segments(D::SIZE_PATH)
            .ok()
            .and_then(|path| lookup(&self.root, &path))
            .and_then(|node| node.value(name))
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite() && *v >= 0.0 && *v <= f64::from(u32::MAX))
            .map_or(default, |v| v as u32)
    }

    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self { id: id.into(), ..self.clone() }
    }

    /// Label for a single-series chart.
    pub fn with_label(&self, label: impl Into<String>) -> Self {
        Self { labels: Some(vec![label.into()]), ..self.clone() }
    }

    /// Labels zipped onto the series, in order, when the chart is serialized.
    pub fn with_labels<S: Into<String>>(&self, labels: impl IntoIterator<Item = S>) -> Self {
        Self { labels: Some(labels.into_iter().map(Into::into).collect()), ..self.clone() }
    }

    /// Replace the series collection.
    pub fn plot(&self, traces: impl IntoIterator<Item = Node>) -> Self {
        self.try_plot(traces).unwrap_or_else(|err| {
            debug!(%err, "plot dropped");
            self.clone()
        })
    }

    pub fn try_plot(&self, traces: impl IntoIterator<Item = Node>) -> Result<Self> {
        let mut next = self.clone();
        next.root.set_items(D::SERIES_FIELD, traces.into_iter().collect())?;
        Ok(next)
    }

    /// Distinct `type_iplot` tags on the series, first-seen order.
    pub fn series_types(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for series in self.root.items(D::SERIES_FIELD) {
            if let Some(tag) = series.value("type_iplot").and_then(Value::as_str) {
                if !tags.iter().any(|t| t == tag) {
                    tags.push(tag.to_string());
                }
            }
        }
        tags
    }

    /// The tree as it is serialized: labels written onto series names.
    /// Extra labels or series are ignored.
    pub fn prepared(&self) -> Node {
        let mut root = self.root.clone();
        if let Some(labels) = &self.labels {
            if let Some(series) = root.items_mut(D::SERIES_FIELD) {
                for (node, label) in series.iter_mut().zip(labels) {
                    if let Err(err) = node.set_field("name", label) {
                        debug!(%err, "label skipped");
                    }
                }
            }
        }
        root
    }

    /// Serialized option tree, ready for the external library.
    pub fn to_json(&self) -> String {
        self.prepared().to_json_string(D::SUBSTITUTIONS)
    }

    pub fn document(&self) -> ChartDocument {
        ChartDocument {
            library: D::LIBRARY,
            id: self.id.clone(),
            width: self.width(),
            height: self.height(),
            json: self.to_json(),
            series_types: self.series_types(),
        }
    }
}

impl<D: Dialect> Mutation<D> {
    /// The mutation as a plain `chart -> chart` function.
    pub fn apply(&self, chart: &Chart<D>) -> Chart<D> {
        chart.with(self.clone())
    }

    pub fn try_apply(&self, chart: &Chart<D>) -> Result<Chart<D>> {
        chart.try_with(self)
    }

    pub fn into_fn(self) -> impl Fn(&Chart<D>) -> Chart<D> {
        move |chart| self.apply(chart)
    }
}
