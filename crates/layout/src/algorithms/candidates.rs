//! Candidate analysis: flattens the main column into the ordered list of
//! atomic units pagination may place on either side of a split.

use super::fit::FIT_EPSILON;
use crate::node::LayoutNode;
use serde::{Deserialize, Serialize};

/// Top-level field path names whose entries form repeatable groups.
pub const REPEATABLE_GROUPS: &[&str] = &["experiences", "educations", "skills", "languages"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeepRule {
    /// Must not end a page: a title belongs with what follows it.
    KeepWithNext,
    /// Member of a repeatable group that should not be fragmented.
    KeepTogether,
    Normal,
}

#[derive(Debug, Clone)]
pub struct SplitCandidate<'a> {
    pub node: &'a LayoutNode,
    /// Absolute position in main-column content space.
    pub x: f32,
    pub start_y: f32,
    pub end_y: f32,
    pub is_section_title: bool,
    /// The candidate is a complete, unexpanded section.
    pub is_section: bool,
    pub keep_rule: KeepRule,
}

impl<'a> SplitCandidate<'a> {
    fn new(node: &'a LayoutNode, x: f32, start_y: f32) -> Self {
        Self {
            node,
            x,
            start_y,
            end_y: start_y + node.frame.height,
            is_section_title: node.is_section_title(),
            is_section: node.is_section(),
            keep_rule: keep_rule_for(node),
        }
    }

    pub fn height(&self) -> f32 {
        self.end_y - self.start_y
    }

    /// Repeatable-group prefix (`experiences[2]`), falling back to the node id.
    pub fn group_prefix(&self) -> &str {
        match &self.node.field_path {
            Some(path) => path.group_prefix(),
            None => self.node.node_id.as_str(),
        }
    }

    pub fn is_task_list(&self) -> bool {
        self.node
            .field_path
            .as_ref()
            .is_some_and(|p| p.is_task_list())
    }
}

fn keep_rule_for(node: &LayoutNode) -> KeepRule {
    let title_path = node.field_path.as_ref().is_some_and(|p| p.is_title_like());
    if node.is_section_title() || title_path {
        return KeepRule::KeepWithNext;
    }
    let repeatable = node
        .field_path
        .as_ref()
        .is_some_and(|p| REPEATABLE_GROUPS.contains(&p.root_name()));
    if repeatable {
        KeepRule::KeepTogether
    } else {
        KeepRule::Normal
    }
}

pub struct CandidateSet<'a> {
    pub candidates: Vec<SplitCandidate<'a>>,
    /// Number of nodes that were broken up into their children.
    pub expanded: usize,
}

/// Flattens the direct children of `main` into split candidates.
///
/// A child is expanded into its own children when it is taller than
/// `available_height` or is a section flagged always-splittable. Expanded
/// children get absolute positions (`parentStart + childRelative`); children
/// that are themselves taller than a page are expanded again.
pub fn analyze_candidates(main: &LayoutNode, available_height: f32) -> CandidateSet<'_> {
    let mut set = CandidateSet {
        candidates: Vec::with_capacity(main.children.len()),
        expanded: 0,
    };
    for child in &main.children {
        collect(
            &mut set,
            child,
            child.frame.x,
            child.frame.y,
            available_height,
            child.is_always_splittable(),
        );
    }
    set
}

fn collect<'a>(
    set: &mut CandidateSet<'a>,
    node: &'a LayoutNode,
    x: f32,
    y: f32,
    available_height: f32,
    forced: bool,
) {
    let oversized = node.frame.height > available_height + FIT_EPSILON;
    if (oversized || forced) && !node.children.is_empty() {
        set.expanded += 1;
        log::debug!(
            "Expanding '{}' ({:.1}pt, forced={}) into {} candidates",
            node.identifier(),
            node.frame.height,
            forced,
            node.children.len()
        );
        for child in &node.children {
            collect(
                set,
                child,
                x + child.frame.x,
                y + child.frame.y,
                available_height,
                false,
            );
        }
    } else {
        set.candidates.push(SplitCandidate::new(node, x, y));
    }
}
