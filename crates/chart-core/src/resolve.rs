// File: crates/chart-core/src/resolve.rs
// Summary: Path resolver; walks a path from the root, materializing nodes and growing collections.

use crate::error::Result;
use crate::node::{Node, Slot};
use crate::path::Path;

/// Resolve `path` against `root`, creating whatever is missing on the way.
///
/// Stops at the first segment that cannot be resolved. Nodes materialized
/// before that point stay in `root`; callers resolve against a clone they are
/// free to discard.
pub fn resolve<'a>(root: &'a mut Node, path: &Path) -> Result<&'a mut Node> {
    let mut current = root;
    for seg in &path.segments {
        current = current.descend(&seg.name, &seg.indices)?;
    }
    Ok(current)
}

/// Read-only lookup; never materializes. `None` when any step is absent.
pub fn lookup<'a>(root: &'a Node, path: &Path) -> Option<&'a Node> {
    let mut current = root;
    for seg in &path.segments {
        current = match (current.slot(&seg.name)?, seg.indices.as_slice()) {
            (Slot::Child(child), []) => child.as_ref(),
            (Slot::Items(items), &[i]) => items.get(i)?,
            (Slot::Grid(rows), &[i, j]) => rows.get(i)?.get(j)?,
            _ => return None,
        };
    }
    Some(current)
}
