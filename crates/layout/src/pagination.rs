//! The pagination engine: splits the main column of a single overflowing
//! page across as many fixed-size pages as needed.
//!
//! Nodes are never mutated in place. Every placed candidate is deep-cloned
//! and rebased into the new page's coordinate space, and repeated chrome is
//! cloned per page, so no two pages share a node.

use crate::algorithms::{KeepRule, SplitCandidate, analyze_candidates, best_split, check_fit};
use crate::diagnostics::{Diagnostic, IssueCode};
use crate::node::{LayoutNode, LayoutTree, PaginationMeta};
use crate::node_kind::ContainerRole;
use crate::signature::page_signatures;
use quire_constraints::LayoutConstraints;
use quire_types::Size;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationOptions {
    /// Clone sidebar and rails onto every page, not just the first.
    pub repeat_sidebar_on_all_pages: bool,
    /// Splitting off fewer than this many members of a keep-together group is penalised.
    pub keep_together_threshold: usize,
    /// Minimum number of candidates that must be left for the next page.
    pub min_widows: usize,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            repeat_sidebar_on_all_pages: false,
            keep_together_threshold: 3,
            min_widows: 1,
        }
    }
}

/// Counters for one run, returned to the caller instead of kept globally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationStats {
    pub candidates: usize,
    pub expanded_nodes: usize,
    pub iterations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResult {
    pub pages: Vec<LayoutNode>,
    pub page_count: usize,
    pub did_paginate: bool,
    /// Split positions in the original main-column content space.
    pub split_points: Vec<f32>,
    pub warnings: Vec<Diagnostic>,
    pub page_signatures: Vec<String>,
    pub stats: PaginationStats,
}

impl PaginationResult {
    fn unmodified(pages: Vec<LayoutNode>) -> Self {
        let page_signatures = page_signatures(&pages);
        Self {
            page_count: pages.len(),
            pages,
            did_paginate: false,
            split_points: Vec::new(),
            warnings: Vec::new(),
            page_signatures,
            stats: PaginationStats::default(),
        }
    }

    pub fn meta(&self) -> PaginationMeta {
        PaginationMeta {
            page_count: self.page_count,
            did_paginate: self.did_paginate,
            split_points: self.split_points.clone(),
            page_signatures: self.page_signatures.clone(),
            warnings: self.warnings.clone(),
        }
    }

    pub fn warning_codes(&self) -> Vec<IssueCode> {
        self.warnings.iter().map(|w| w.code).collect()
    }

    pub fn into_tree(self, bounds: Size) -> LayoutTree {
        let meta = self.meta();
        LayoutTree {
            pages: self.pages,
            bounds,
            pagination_meta: Some(meta),
        }
    }
}

pub fn paginate(
    tree: &LayoutTree,
    constraints: &LayoutConstraints,
    options: &PaginationOptions,
) -> PaginationResult {
    let Some(template) = tree.first_page() else {
        return PaginationResult::unmodified(Vec::new());
    };
    let (Some(main_frame), Some(main)) = (
        constraints.main_frame(),
        template.find_container(ContainerRole::Main),
    ) else {
        log::debug!("No main frame configured; nothing to paginate");
        return PaginationResult::unmodified(tree.pages.clone());
    };

    let available = main_frame.height;
    if check_fit(0.0, main.content_height(), available).fits {
        return PaginationResult::unmodified(tree.pages.clone());
    }

    let set = analyze_candidates(main, available);
    let candidates = &set.candidates;
    let total = candidates.len();

    let mut pages = Vec::new();
    let mut split_points = Vec::new();
    let mut warnings = Vec::new();
    let mut start = 0;
    let mut offset = 0.0_f32;
    let mut iterations = 0;

    while start < total {
        iterations += 1;
        let mut end = start;
        while end < total && check_fit(offset, candidates[end].end_y, available).fits {
            end += 1;
        }

        let chosen = if end == start {
            let block = &candidates[start];
            log::warn!(
                "Block '{}' is {:.1}pt tall but a page holds {:.1}pt; placing it alone",
                block.node.identifier(),
                block.height(),
                available
            );
            warnings.push(
                Diagnostic::warn(
                    IssueCode::OversizedBlock,
                    block.node,
                    format!(
                        "'{}' does not fit on an empty page and was placed alone",
                        block.node.identifier()
                    ),
                )
                .with_data("height", block.height())
                .with_data("availableHeight", available)
                .with_data("startY", block.start_y),
            );
            start
        } else if end == total {
            total - 1
        } else {
            choose_split(candidates, start, end - 1, options, &mut warnings)
        };

        log::debug!(
            "Page {}: candidates {}..={} (offset {:.1})",
            pages.len() + 1,
            start,
            chosen,
            offset
        );
        pages.push(build_page(
            pages.len(),
            template,
            main,
            &candidates[start..=chosen],
            offset,
            constraints,
            options,
        ));

        if chosen + 1 < total {
            offset = candidates[chosen].end_y;
            split_points.push(offset);
        }
        start = chosen + 1;
    }

    let page_signatures = page_signatures(&pages);
    PaginationResult {
        page_count: pages.len(),
        did_paginate: pages.len() > 1,
        pages,
        split_points,
        warnings,
        page_signatures,
        stats: PaginationStats {
            candidates: total,
            expanded_nodes: set.expanded,
            iterations,
        },
    }
}

/// Picks the split index inside the fitting range `first..=last`. The widow
/// rule narrows the range before scoring; the orphan-title retreat runs last.
fn choose_split(
    candidates: &[SplitCandidate],
    first: usize,
    last: usize,
    options: &PaginationOptions,
    warnings: &mut Vec<Diagnostic>,
) -> usize {
    let widow_limit = candidates
        .len()
        .saturating_sub(options.min_widows.max(1) + 1);
    let last = last.min(widow_limit).max(first);
    let mut chosen = best_split(candidates, first, last, options.keep_together_threshold);

    if candidates[chosen].keep_rule == KeepRule::KeepWithNext {
        let title = &candidates[chosen];
        let retreated = chosen > first;
        log::warn!(
            "Title '{}' would end a page (retreat possible: {})",
            title.node.identifier(),
            retreated
        );
        warnings.push(
            Diagnostic::warn(
                IssueCode::OrphanTitle,
                title.node,
                format!(
                    "'{}' would be stranded at the bottom of a page",
                    title.node.identifier()
                ),
            )
            .with_data("startY", title.start_y)
            .with_data("retreated", if retreated { 1.0 } else { 0.0 }),
        );
        if retreated {
            chosen -= 1;
        }
    }
    chosen
}

fn build_page(
    index: usize,
    template: &LayoutNode,
    main: &LayoutNode,
    placed: &[SplitCandidate],
    offset: f32,
    constraints: &LayoutConstraints,
    options: &PaginationOptions,
) -> LayoutNode {
    let size = Size::new(constraints.paper_width, constraints.paper_height);
    let mut children = Vec::with_capacity(template.children.len());

    for child in &template.children {
        match child.container_role() {
            Some(ContainerRole::Main) => {
                let content = placed
                    .iter()
                    .map(|c| c.node.cloned_at(c.x, c.start_y - offset))
                    .collect();
                children.push(main.without_children().with_children(content));
            }
            _ if index == 0 => children.push(child.clone()),
            Some(role) if role.is_repeatable_chrome() && options.repeat_sidebar_on_all_pages => {
                children.push(child.clone());
            }
            _ => {}
        }
    }
    LayoutNode::page(index, size, children)
}
