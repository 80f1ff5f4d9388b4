//! Structural validator: detects geometric corruption in any layout tree,
//! paginated or not.

use crate::diagnostics::{Diagnostic, IssueCode};
use crate::node::{LayoutNode, LayoutTree};
use crate::node_kind::ContainerRole;
use quire_constraints::{LayoutConstraints, SidebarPosition};
use serde::{Deserialize, Serialize};

/// Floating point tolerance for edge comparisons, in points.
pub const EDGE_TOLERANCE: f32 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStats {
    pub pages: usize,
    pub nodes: usize,
    pub errors: usize,
    pub warnings: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub issues: Vec<Diagnostic>,
    pub stats: ValidationStats,
}

impl ValidationReport {
    pub fn has_code(&self, code: IssueCode) -> bool {
        self.issues.iter().any(|i| i.code == code)
    }

    pub fn count(&self, code: IssueCode) -> usize {
        self.issues.iter().filter(|i| i.code == code).count()
    }
}

struct PageContext<'c> {
    width: f32,
    height: f32,
    /// Lowest y main content may reach.
    content_bottom: f32,
    constraints: Option<&'c LayoutConstraints>,
}

pub fn validate(tree: &LayoutTree, constraints: Option<&LayoutConstraints>) -> ValidationReport {
    let mut issues = Vec::new();
    let mut nodes = 0;

    for page in &tree.pages {
        let (width, height) = match constraints {
            Some(c) => (c.paper_width, c.paper_height),
            None => (page.frame.width, page.frame.height),
        };
        let ctx = PageContext {
            width,
            height,
            content_bottom: constraints.map(|c| c.content_bottom()).unwrap_or(height),
            constraints,
        };
        walk(page, (0.0, 0.0), 0, &ctx, &mut issues, &mut nodes);
        check_main_overflow(page, &ctx, &mut issues);
        check_sidebar_flush(page, &ctx, &mut issues);
    }

    if let Some(meta) = &tree.pagination_meta {
        issues.extend(meta.warnings.iter().cloned());
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    let stats = ValidationStats {
        pages: tree.pages.len(),
        nodes,
        errors,
        warnings: issues.len() - errors,
    };
    if errors > 0 {
        log::debug!("Validation found {} errors, {} warnings", errors, stats.warnings);
    }
    ValidationReport {
        valid: errors == 0,
        issues,
        stats,
    }
}

fn walk(
    node: &LayoutNode,
    parent: (f32, f32),
    depth: usize,
    ctx: &PageContext,
    issues: &mut Vec<Diagnostic>,
    count: &mut usize,
) {
    *count += 1;
    let f = node.frame;
    let abs = (parent.0 + f.x, parent.1 + f.y);

    if !f.is_finite() {
        issues.push(
            Diagnostic::error(
                IssueCode::NanFrame,
                node,
                format!("'{}' has a non-finite frame", node.identifier()),
            )
            .with_data("x", f.x)
            .with_data("y", f.y)
            .with_data("width", f.width)
            .with_data("height", f.height),
        );
    } else if !f.has_area() {
        issues.push(
            Diagnostic::error(
                IssueCode::NegativeFrame,
                node,
                format!("'{}' has a non-positive size", node.identifier()),
            )
            .with_data("width", f.width)
            .with_data("height", f.height),
        );
    } else if depth <= 1 {
        let out = abs.0 < -EDGE_TOLERANCE
            || abs.1 < -EDGE_TOLERANCE
            || abs.0 + f.width > ctx.width + EDGE_TOLERANCE
            || abs.1 + f.height > ctx.height + EDGE_TOLERANCE;
        if out {
            issues.push(
                Diagnostic::warn(
                    IssueCode::OutOfBounds,
                    node,
                    format!("'{}' extends beyond the page", node.identifier()),
                )
                .with_data("x", abs.0)
                .with_data("y", abs.1)
                .with_data("right", abs.0 + f.width)
                .with_data("bottom", abs.1 + f.height),
            );
        }
    }

    for child in &node.children {
        walk(child, abs, depth + 1, ctx, issues, count);
    }
}

/// Deepest absolute bottom edge among the descendants of `node`.
fn deepest_bottom(node: &LayoutNode, origin: (f32, f32)) -> f32 {
    node.children
        .iter()
        .map(|c| {
            let abs = c.frame.translated(origin.0, origin.1);
            abs.bottom().max(deepest_bottom(c, (abs.x, abs.y)))
        })
        .fold(f32::NEG_INFINITY, f32::max)
}

fn check_main_overflow(page: &LayoutNode, ctx: &PageContext, issues: &mut Vec<Diagnostic>) {
    let Some(main) = page.find_container(ContainerRole::Main) else {
        return;
    };
    let origin = (page.frame.x + main.frame.x, page.frame.y + main.frame.y);
    let bottom = deepest_bottom(main, origin);
    if bottom.is_finite() && bottom > ctx.content_bottom + EDGE_TOLERANCE {
        issues.push(
            Diagnostic::warn(
                IssueCode::OverflowMain,
                main,
                format!(
                    "Main content reaches {:.1}pt, past the bottom margin at {:.1}pt",
                    bottom, ctx.content_bottom
                ),
            )
            .with_data("bottom", bottom)
            .with_data("limit", ctx.content_bottom),
        );
    }
}

fn check_sidebar_flush(page: &LayoutNode, ctx: &PageContext, issues: &mut Vec<Diagnostic>) {
    let Some(constraints) = ctx.constraints else {
        return;
    };
    if !constraints.has_sidebar() {
        return;
    }
    let Some(sidebar) = page.find_container(ContainerRole::Sidebar) else {
        return;
    };
    let x = page.frame.x + sidebar.frame.x;
    let (code, gap) = match constraints.sidebar_position {
        SidebarPosition::Left => (IssueCode::FlushGapSidebarLeft, x),
        SidebarPosition::Right => (
            IssueCode::FlushGapSidebarRight,
            ctx.width - (x + sidebar.frame.width),
        ),
    };
    if !gap.is_finite() || gap.abs() > EDGE_TOLERANCE {
        issues.push(
            Diagnostic::error(
                code,
                sidebar,
                format!("Sidebar is {:.2}pt away from its page edge", gap),
            )
            .with_data("gap", gap),
        );
    }
}
