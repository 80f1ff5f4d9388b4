//! Newtype wrappers for node identifiers and content field paths.
//!
//! `NodeId` is structural and may be positional; `FieldPath` points back into
//! the source content model (`experiences[2].tasks[0]`) and stays stable when
//! sibling order changes, so continuity checks and signatures prefer it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Structural identifier of a layout node.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Arc<str>);

impl NodeId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Segment names that mark a heading of the enclosing group.
const TITLE_SEGMENTS: &[&str] = &["title", "heading", "sectionTitle"];

/// A dotted/bracket path into the source content model.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(Arc<str>);

impl FieldPath {
    pub fn new(path: impl Into<Arc<str>>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends a named segment: `experiences[2]` + `tasks` -> `experiences[2].tasks`.
    pub fn join(&self, segment: &str) -> Self {
        if self.0.is_empty() {
            return Self::new(segment);
        }
        Self::new(format!("{}.{}", self.0, segment))
    }

    /// Appends an index to the last segment: `tasks` + 4 -> `tasks[4]`.
    pub fn at(&self, index: usize) -> Self {
        Self::new(format!("{}[{}]", self.0, index))
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|s| !s.is_empty())
    }

    /// The first segment with any index stripped (`experiences[2].tasks` -> `experiences`).
    pub fn root_name(&self) -> &str {
        self.segments().next().map(strip_index).unwrap_or("")
    }

    /// The last segment with any index stripped (`experiences[2].tasks[1]` -> `tasks`).
    pub fn last_name(&self) -> &str {
        self.segments().last().map(strip_index).unwrap_or("")
    }

    /// The repeatable-group prefix: the first segment including its index
    /// (`experiences[2].tasks[4]` -> `experiences[2]`).
    pub fn group_prefix(&self) -> &str {
        self.segments().next().unwrap_or("")
    }

    /// True when the path names a heading (`experiences.title`).
    pub fn is_title_like(&self) -> bool {
        TITLE_SEGMENTS.contains(&self.last_name())
    }

    /// True when the path belongs to an enumerable task list (`.tasks`).
    pub fn is_task_list(&self) -> bool {
        self.0.contains(".tasks")
    }
}

fn strip_index(segment: &str) -> &str {
    match segment.find('[') {
        Some(pos) => &segment[..pos],
        None => segment,
    }
}

impl From<String> for FieldPath {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
