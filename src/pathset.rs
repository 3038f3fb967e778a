//! Scan-root containment algebra: compare resolved paths segment-wise and
//! keep a minimal set of pairwise non-containing roots.

use std::path::{Component, Path, PathBuf};

/// Relation between two resolved absolute paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathRelation {
    /// Identical component sequences.
    Equal,
    /// First path is a strict ancestor of the second.
    Contains,
    /// Second path is a strict ancestor of the first.
    ContainedBy,
    /// Neither is an ancestor of the other.
    Unrelated,
}

/// Compare two paths by component-sequence prefix. Exactly one relation holds
/// for any ordered pair; `path_compare(a, b) == Contains` iff
/// `path_compare(b, a) == ContainedBy`.
pub fn path_compare(a: &Path, b: &Path) -> PathRelation {
    let a: Vec<Component<'_>> = a.components().collect();
    let b: Vec<Component<'_>> = b.components().collect();
    if a == b {
        PathRelation::Equal
    } else if a.len() < b.len() && a[..] == b[..a.len()] {
        PathRelation::Contains
    } else if b.len() < a.len() && b[..] == a[..b.len()] {
        PathRelation::ContainedBy
    } else {
        PathRelation::Unrelated
    }
}

/// Minimal ordered set of pairwise non-containing absolute directory paths.
///
/// Built empty and grown through [`merge`](PathSet::merge). Each merge fully
/// collapses containment, so the final set is the same for any permutation of
/// the same inputs.
#[derive(Clone, Debug, Default)]
pub struct PathSet {
    roots: Vec<PathBuf>,
}

impl PathSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `path` into the set, collapsing under containment:
    /// - an existing entry equal to or containing `path` makes it redundant;
    /// - every existing entry contained by `path` is absorbed into it;
    /// - otherwise `path` is appended as a new root.
    pub fn merge(&mut self, path: PathBuf) {
        for existing in &self.roots {
            match path_compare(existing, &path) {
                PathRelation::Equal | PathRelation::Contains => return,
                PathRelation::ContainedBy | PathRelation::Unrelated => {}
            }
        }
        // The incoming path may absorb several existing roots at once.
        self.roots
            .retain(|existing| path_compare(&path, existing) != PathRelation::Contains);
        self.roots.push(path);
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl FromIterator<PathBuf> for PathSet {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        let mut set = PathSet::new();
        for path in iter {
            set.merge(path);
        }
        set
    }
}
