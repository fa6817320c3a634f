// File: crates/chart-core/src/path.rs
// Summary: Path segments (`name`, `name#i`, `name#i#j`), parsing and the step-folding used by accessor chains.

use std::fmt;
use std::str::FromStr;

use crate::error::{ChartError, Result};

/// Largest index a path may carry; collections never grow past `MAX_INDEX + 1`.
pub const MAX_INDEX: usize = i32::MAX as usize;

/// One traversal step: a field name plus zero, one or two indices.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub name: String,
    pub indices: Vec<usize>,
}

impl Segment {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), indices: Vec::new() }
    }

    pub fn indexed(name: impl Into<String>, index: usize) -> Self {
        Self { name: name.into(), indices: vec![index] }
    }

    pub fn is_indexed(&self) -> bool { !self.indices.is_empty() }
}

impl FromStr for Segment {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || ChartError::MalformedSegment(s.to_string());
        let mut parts = s.split('#');
        let name = parts.next().filter(|n| !n.is_empty()).ok_or_else(malformed)?;
        let indices = parts
            .map(|p| p.parse::<usize>().ok().filter(|&i| i <= MAX_INDEX).ok_or_else(malformed))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { name: name.to_string(), indices })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for i in &self.indices {
            write!(f, "#{i}")?;
        }
        Ok(())
    }
}

/// Ordered segments from the root. The empty path addresses the root itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    pub segments: Vec<Segment>,
}

impl Path {
    pub fn root() -> Self { Self::default() }

    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Self::root());
        }
        s.parse()
    }

    pub fn parse_segments(parts: &[&str]) -> Result<Self> {
        let segments = parts.iter().map(|p| p.parse()).collect::<Result<Vec<_>>>()?;
        Ok(Self { segments })
    }

    pub fn push(&mut self, segment: Segment) { self.segments.push(segment); }

    pub fn len(&self) -> usize { self.segments.len() }

    pub fn is_empty(&self) -> bool { self.segments.is_empty() }

    /// Build a path from accessor steps listed root-first.
    ///
    /// The first step names the root and adds nothing. An indexed step under an
    /// indexed parent folds its index onto the last segment (`name#i#j`); an
    /// unindexed step under an indexed parent is the element itself and adds
    /// nothing; every other step appends a segment.
    pub fn from_steps(steps: &[Step]) -> Self {
        let mut path = Path::root();
        for pair in steps.windows(2) {
            let (parent, step) = (&pair[0], &pair[1]);
            match (step.index, parent.index.is_some()) {
                (Some(i), true) => {
                    if let Some(last) = path.segments.last_mut() {
                        last.indices.push(i);
                    } else {
                        path.push(Segment::indexed(step.name, i));
                    }
                }
                (Some(i), false) => path.push(Segment::indexed(step.name, i)),
                (None, true) => {}
                (None, false) => path.push(Segment::named(step.name)),
            }
        }
        path
    }
}

impl FromStr for Path {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        let segments = s.split('.').map(str::parse).collect::<Result<Vec<_>>>()?;
        Ok(Self { segments })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 { f.write_str(".")?; }
            write!(f, "{seg}")?;
        }
        Ok(())
    }
}

/// One link of an accessor chain, recorded root-first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub name: &'static str,
    pub index: Option<usize>,
}

impl Step {
    pub const fn named(name: &'static str) -> Self { Self { name, index: None } }
    pub const fn indexed(name: &'static str, index: usize) -> Self { Self { name, index: Some(index) } }
}
