// File: crates/chart-core/src/props.rs
// Summary: Typed accessor chains; compose a path step by step and end in a single field mutation.

use std::fmt;
use std::marker::PhantomData;

use crate::dialect::Dialect;
use crate::error::{ChartError, Result};
use crate::node::Node;
use crate::path::{Path, Segment, Step};
use crate::resolve::resolve;
use crate::schema::NodeKind;
use crate::value::Value;

/// Compile-time marker for one node kind of a dialect.
pub trait NodeType: 'static {
    type Dialect: Dialect;
    const KIND: NodeKind;
}

/// `Self` may be reached from an accessor typed as `N` (same node, other variant).
pub trait View<N: NodeType>: NodeType<Dialect = N::Dialect> {}

/// Accessor chain ending at a node of type `N`.
pub struct Prop<N> {
    steps: Vec<Step>,
    _node: PhantomData<fn() -> N>,
}

impl<N> Clone for Prop<N> {
    fn clone(&self) -> Self { Self { steps: self.steps.clone(), _node: PhantomData } }
}

impl<N> fmt::Debug for Prop<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prop").field("steps", &self.steps).finish()
    }
}

impl<N: NodeType> Prop<N> {
    pub fn root() -> Self {
        Self { steps: vec![Step::named(N::KIND.name())], _node: PhantomData }
    }

    fn extend<M>(&self, step: Step) -> Prop<M> {
        let mut steps = self.steps.clone();
        steps.push(step);
        Prop { steps, _node: PhantomData }
    }

    pub fn steps(&self) -> &[Step] { &self.steps }

    pub fn path(&self) -> Path { Path::from_steps(&self.steps) }

    pub fn child<C: NodeType>(&self, name: &'static str) -> Prop<C> {
        self.extend(Step::named(name))
    }

    pub fn items<C: NodeType>(&self, name: &'static str) -> Items<C> {
        Items { steps: self.steps.clone(), name, _node: PhantomData }
    }

    pub fn grid<C: NodeType>(&self, name: &'static str) -> Grid<C> {
        Grid { steps: self.steps.clone(), name, _node: PhantomData }
    }

    /// Same node, different set of offered accessors. No data changes.
    pub fn cast<M: View<N>>(&self) -> Prop<M> {
        Prop { steps: self.steps.clone(), _node: PhantomData }
    }

    /// Terminal step: assign `field` on the addressed node.
    pub fn set(&self, field: &'static str, value: impl Into<Value>) -> Mutation<N::Dialect> {
        Mutation::new(self.path(), field, value)
    }
}

/// An indexed collection in an accessor chain; `at(i)` selects one element.
pub struct Items<N> {
    steps: Vec<Step>,
    name: &'static str,
    _node: PhantomData<fn() -> N>,
}

impl<N: NodeType> Items<N> {
    pub fn at(&self, index: usize) -> Prop<N> {
        let mut steps = self.steps.clone();
        steps.push(Step::indexed(self.name, index));
        steps.push(Step::named(self.name));
        Prop { steps, _node: PhantomData }
    }
}

/// A collection of collections; `at(i).at(j)` addresses one cell.
pub struct Grid<N> {
    steps: Vec<Step>,
    name: &'static str,
    _node: PhantomData<fn() -> N>,
}

impl<N: NodeType> Grid<N> {
    pub fn at(&self, index: usize) -> Items<N> {
        let mut steps = self.steps.clone();
        steps.push(Step::indexed(self.name, index));
        Items { steps, name: self.name, _node: PhantomData }
    }
}

/// One field assignment at the end of a path, for dialect `D`.
pub struct Mutation<D> {
    path: Path,
    field: String,
    value: Value,
    _dialect: PhantomData<fn() -> D>,
}

impl<D> Clone for Mutation<D> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            field: self.field.clone(),
            value: self.value.clone(),
            _dialect: PhantomData,
        }
    }
}

impl<D> fmt::Debug for Mutation<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutation")
            .field("path", &self.path)
            .field("field", &self.field)
            .field("value", &self.value)
            .finish()
    }
}

impl<D> PartialEq for Mutation<D> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.field == other.field && self.value == other.value
    }
}

impl<D: Dialect> Mutation<D> {
    pub fn new(path: Path, field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { path, field: field.into(), value: value.into(), _dialect: PhantomData }
    }

    /// Untyped form: `"series#2.xAxis"` sets `xAxis` on element 2 of `series`.
    pub fn parse(expr: &str, value: impl Into<Value>) -> Result<Self> {
        let (path, field) = match expr.rsplit_once('.') {
            Some((path, field)) => (Path::parse(path)?, field),
            None => (Path::root(), expr),
        };
        let last: Segment = field.parse()?;
        if last.is_indexed() {
            return Err(ChartError::MalformedSegment(field.to_string()));
        }
        Ok(Self::new(path, last.name, value))
    }

    pub fn path(&self) -> &Path { &self.path }
    pub fn field(&self) -> &str { &self.field }
    pub fn value(&self) -> &Value { &self.value }

    /// Resolve against `root` (materializing as needed) and assign the field.
    pub fn apply_to(&self, root: &mut Node) -> Result<()> {
        resolve(root, &self.path)?.set_field(&self.field, self.value.clone())
    }
}

/// Declare marker types and bind them to node kinds.
macro_rules! node_types {
    ($dialect:ty { $($(#[$meta:meta])* $name:ident => $kind:ident),* $(,)? }) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            pub struct $name;

            impl $crate::props::NodeType for $name {
                type Dialect = $dialect;
                const KIND: $crate::schema::NodeKind = $crate::schema::NodeKind::$kind;
            }
        )*
    };
}

/// Let a base marker and its variants be cast into each other.
macro_rules! views {
    ($base:ty => [$($variant:ty),* $(,)?]) => {
        $(
            impl $crate::props::View<$base> for $variant {}
            impl $crate::props::View<$variant> for $base {}
        )*
    };
}

/// Typed terminal setters. A list of markers shares one field block.
macro_rules! field_setters {
    ([$($marker:ty),+ $(,)?] $fields:tt) => {
        $( $crate::props::field_setters!($marker $fields); )+
    };
    ($marker:ty { $($method:ident => $field:literal : $ty:ty),* $(,)? }) => {
        impl $crate::props::Prop<$marker> {
            $(
                pub fn $method(
                    &self,
                    value: impl Into<$ty>,
                ) -> $crate::props::Mutation<<$marker as $crate::props::NodeType>::Dialect> {
                    let value: $ty = value.into();
                    self.set($field, value)
                }
            )*
        }
    };
}

pub(crate) use field_setters;
pub(crate) use node_types;
pub(crate) use views;
