//! The placed-node tree produced by the geometry pass and consumed by
//! pagination, signatures and validation.
//!
//! Every node owns its children outright and stores its frame relative to its
//! parent. Pages are the only nodes whose frame is page-local by definition
//! (always `y = 0`).

use crate::diagnostics::Diagnostic;
use crate::node_kind::{ContainerRole, NodeKind, TextRole};
use crate::style::{ComputedStyle, TextTransform};
use quire_types::{FieldPath, Frame, NodeId, Size};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode {
    pub node_id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_path: Option<FieldPath>,
    pub frame: Frame,
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_style: Option<ComputedStyle>,
    #[serde(default)]
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    pub fn new(node_id: impl Into<NodeId>, kind: NodeKind, frame: Frame) -> Self {
        Self {
            node_id: node_id.into(),
            field_path: None,
            frame,
            kind,
            computed_style: None,
            children: Vec::new(),
        }
    }

    pub fn page(index: usize, size: Size, children: Vec<LayoutNode>) -> Self {
        Self::new(
            format!("page-{}", index + 1),
            NodeKind::Page { index },
            Frame::from_size(size),
        )
        .with_field_path(FieldPath::new("pages").at(index))
        .with_children(children)
    }

    pub fn container(role: ContainerRole, node_id: impl Into<NodeId>, frame: Frame) -> Self {
        Self::new(node_id, NodeKind::Container { role }, frame)
    }

    pub fn with_field_path(mut self, field_path: FieldPath) -> Self {
        self.field_path = Some(field_path);
        self
    }

    pub fn with_style(mut self, style: ComputedStyle) -> Self {
        self.computed_style = Some(style);
        self
    }

    pub fn with_children(mut self, children: Vec<LayoutNode>) -> Self {
        self.children = children;
        self
    }

    pub fn node_type(&self) -> &'static str {
        self.kind.as_str()
    }

    /// The field path when present, otherwise the node id.
    pub fn identifier(&self) -> &str {
        self.field_path
            .as_ref()
            .map(FieldPath::as_str)
            .unwrap_or_else(|| self.node_id.as_str())
    }

    pub fn container_role(&self) -> Option<ContainerRole> {
        match self.kind {
            NodeKind::Container { role } => Some(role),
            _ => None,
        }
    }

    pub fn is_section(&self) -> bool {
        matches!(self.kind, NodeKind::Section { .. })
    }

    pub fn is_always_splittable(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Section {
                always_splittable: true
            }
        )
    }

    /// A section title: either declared as such or rendered upper-cased.
    pub fn is_section_title(&self) -> bool {
        let declared = matches!(
            self.kind,
            NodeKind::Text {
                role: TextRole::SectionTitle,
                ..
            }
        );
        let upper = matches!(self.kind, NodeKind::Text { .. })
            && self
                .computed_style
                .is_some_and(|s| s.text_transform == TextTransform::Uppercase);
        declared || upper
    }

    /// Bottom edge of the lowest direct child, in this node's coordinates.
    pub fn content_height(&self) -> f32 {
        self.children
            .iter()
            .map(|c| c.frame.bottom())
            .fold(0.0, f32::max)
    }

    /// First direct child container with the given role.
    pub fn find_container(&self, role: ContainerRole) -> Option<&LayoutNode> {
        self.children
            .iter()
            .find(|c| c.container_role() == Some(role))
    }

    /// Deep copy of this subtree with the root moved to `(x, y)` in its new
    /// parent. Descendant frames are parent-relative and carry over unchanged.
    pub fn cloned_at(&self, x: f32, y: f32) -> LayoutNode {
        let mut copy = self.clone();
        copy.frame.x = x;
        copy.frame.y = y;
        copy
    }

    /// Copy of this node without its children.
    pub fn without_children(&self) -> LayoutNode {
        LayoutNode {
            node_id: self.node_id.clone(),
            field_path: self.field_path.clone(),
            frame: self.frame,
            kind: self.kind.clone(),
            computed_style: self.computed_style,
            children: Vec::new(),
        }
    }

    /// Depth-first visit of this node and every descendant.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a LayoutNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Leaves of the subtree, in document order.
    pub fn leaves(&self) -> Vec<&LayoutNode> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if n.children.is_empty() {
                out.push(n);
            }
        });
        out
    }
}

/// Summary of a pagination run, carried on the tree so the validator can
/// merge its warnings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page_count: usize,
    pub did_paginate: bool,
    pub split_points: Vec<f32>,
    pub page_signatures: Vec<String>,
    pub warnings: Vec<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutTree {
    pub pages: Vec<LayoutNode>,
    pub bounds: Size,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_meta: Option<PaginationMeta>,
}

impl LayoutTree {
    pub fn new(pages: Vec<LayoutNode>, bounds: Size) -> Self {
        Self {
            pages,
            bounds,
            pagination_meta: None,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn first_page(&self) -> Option<&LayoutNode> {
        self.pages.first()
    }
}
