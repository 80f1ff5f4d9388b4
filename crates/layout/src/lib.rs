use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Failed to parse scene tree: {0}")]
    SceneParse(#[from] serde_json::Error),
}

pub mod algorithms;
pub mod diagnostics;
pub mod engine;
pub mod node;
pub mod node_kind;
pub mod pagination;
pub mod scene;
pub mod signature;
pub mod style;
pub mod text;
pub mod validate;

pub use self::diagnostics::{Diagnostic, IssueCode, Level};
pub use self::engine::LayoutEngine;
pub use self::node::{LayoutNode, LayoutTree, PaginationMeta};
pub use self::node_kind::{ContainerRole, NodeKind, TextRole};
pub use self::pagination::{PaginationOptions, PaginationResult, PaginationStats, paginate};
pub use self::scene::{SceneContent, SceneNode, SceneTree};
pub use self::signature::{page_signature, page_signatures};
pub use self::style::{ComputedStyle, TextTransform};
pub use self::text::{ApproxTextMeasurer, TextMeasurer};
pub use self::validate::{ValidationReport, ValidationStats, validate};

// Geometry types used throughout the public API
pub use quire_types::{FieldPath, Frame, NodeId, Size};

#[cfg(test)]
mod pagination_test;
#[cfg(test)]
mod scoring_test;
#[cfg(test)]
mod test_utils;
