//! The geometry pass: scene tree + constraints -> one absolutely positioned,
//! possibly overflowing page.
//!
//! Children are stacked vertically inside their parent's horizontal extent
//! and get frames relative to that parent. Nothing here breaks content across
//! pages; overflow is left for [`crate::pagination`].

use crate::node::{LayoutNode, LayoutTree};
use crate::node_kind::{ContainerRole, NodeKind, TextRole};
use crate::scene::{SceneContent, SceneNode, SceneTree};
use crate::style::ComputedStyle;
use crate::text::{ApproxTextMeasurer, TextMeasurer};
use quire_constraints::{FrameName, LayoutConstraints};
use quire_types::{FieldPath, Frame, Size};

/// Horizontal indent of list items relative to their list.
pub const LIST_INDENT: f32 = 12.0;

/// Scene nodes assigned to each region that exists in the current preset.
#[derive(Default)]
struct RegionContent<'s> {
    header: Vec<&'s SceneNode>,
    sidebar: Vec<&'s SceneNode>,
    left_rail: Vec<&'s SceneNode>,
    right_rail: Vec<&'s SceneNode>,
    main: Vec<&'s SceneNode>,
}

impl<'s> RegionContent<'s> {
    fn get(&self, name: FrameName) -> &[&'s SceneNode] {
        match name {
            FrameName::Header => &self.header,
            FrameName::Sidebar => &self.sidebar,
            FrameName::LeftRail => &self.left_rail,
            FrameName::RightRail => &self.right_rail,
            FrameName::Main => &self.main,
        }
    }
}

/// How a container derives paths for children that do not declare one.
#[derive(Clone, Copy)]
enum ChildPaths {
    /// `parent.childId`
    Named,
    /// `parent[i]`
    Indexed,
}

pub struct LayoutEngine<'c, M = ApproxTextMeasurer> {
    constraints: &'c LayoutConstraints,
    measurer: M,
}

impl<'c> LayoutEngine<'c, ApproxTextMeasurer> {
    pub fn new(constraints: &'c LayoutConstraints) -> Self {
        Self {
            constraints,
            measurer: ApproxTextMeasurer,
        }
    }
}

impl<'c, M: TextMeasurer> LayoutEngine<'c, M> {
    pub fn with_measurer(constraints: &'c LayoutConstraints, measurer: M) -> Self {
        Self {
            constraints,
            measurer,
        }
    }

    pub fn constraints(&self) -> &LayoutConstraints {
        self.constraints
    }

    /// Lays out the whole scene onto a single page.
    pub fn compute(&self, scene: &SceneTree) -> LayoutTree {
        let size = Size::new(self.constraints.paper_width, self.constraints.paper_height);
        let regions = self.assign_regions(scene);

        let children = self
            .constraints
            .frames
            .iter()
            .map(|(name, frame)| self.layout_region(name, frame, regions.get(name)))
            .collect();

        let page = LayoutNode::page(0, size, children);
        log::debug!(
            "Computed single page for {}/{}: main content height {:.1}",
            self.constraints.region,
            self.constraints.preset,
            page.find_container(ContainerRole::Main)
                .map(LayoutNode::content_height)
                .unwrap_or(0.0)
        );
        LayoutTree::new(vec![page], size)
    }

    fn assign_regions<'s>(&self, scene: &'s SceneTree) -> RegionContent<'s> {
        let frames = &self.constraints.frames;
        let mut regions = RegionContent::default();

        if frames.header.is_some() {
            regions.header.extend(&scene.header);
        } else {
            regions.main.extend(&scene.header);
        }
        regions.main.extend(&scene.main);

        if frames.sidebar.is_some() {
            regions.sidebar.extend(&scene.sidebar);
        } else if frames.left_rail.is_some() {
            regions.left_rail.extend(&scene.sidebar);
        } else {
            regions.main.extend(&scene.sidebar);
        }

        for (nodes, own) in [
            (&scene.left_rail, FrameName::LeftRail),
            (&scene.right_rail, FrameName::RightRail),
        ] {
            let target = if frames.get(own).is_some() {
                own
            } else if frames.sidebar.is_some() {
                FrameName::Sidebar
            } else {
                FrameName::Main
            };
            let bucket = match target {
                FrameName::LeftRail => &mut regions.left_rail,
                FrameName::RightRail => &mut regions.right_rail,
                FrameName::Sidebar => &mut regions.sidebar,
                _ => &mut regions.main,
            };
            bucket.extend(nodes);
        }
        regions
    }

    fn layout_region(&self, name: FrameName, frame: Frame, nodes: &[&SceneNode]) -> LayoutNode {
        let inset = if name.is_chrome() {
            self.constraints.tokens.sidebar_padding
        } else {
            0.0
        };
        let inner_width = (frame.width - 2.0 * inset).max(1.0);
        let region_path = FieldPath::new(name.as_str());

        let (children, _) = self.stack(
            nodes.iter().copied(),
            inset,
            inset,
            inner_width,
            self.constraints.tokens.section_gap,
            None,
            ChildPaths::Named,
        );

        LayoutNode::container(ContainerRole::from(name), name.as_str(), frame)
            .with_field_path(region_path)
            .with_children(children)
    }

    /// Stacks `nodes` top to bottom starting at `(x, y)`; returns the placed
    /// nodes and the bottom edge of the last one.
    #[allow(clippy::too_many_arguments)]
    fn stack<'s>(
        &self,
        nodes: impl Iterator<Item = &'s SceneNode>,
        x: f32,
        y: f32,
        width: f32,
        gap: f32,
        parent: Option<&FieldPath>,
        paths: ChildPaths,
    ) -> (Vec<LayoutNode>, f32) {
        let mut cursor = y;
        let mut placed = Vec::new();
        for (i, node) in nodes.enumerate() {
            if i > 0 {
                cursor += gap;
            }
            let path = node.field_path.clone().unwrap_or_else(|| match (parent, paths) {
                (Some(p), ChildPaths::Indexed) => p.at(i),
                (Some(p), ChildPaths::Named) => p.join(&node.id),
                (None, _) => FieldPath::new(node.id.as_str()),
            });
            let laid = self.layout_node(node, path, x, cursor, width);
            cursor = laid.frame.bottom();
            placed.push(laid);
        }
        (placed, cursor)
    }

    fn layout_node(
        &self,
        node: &SceneNode,
        path: FieldPath,
        x: f32,
        y: f32,
        width: f32,
    ) -> LayoutNode {
        let tokens = &self.constraints.tokens;
        let min_height = ComputedStyle::new(tokens.body_font_size, tokens.line_height).line_box();

        match &node.content {
            SceneContent::Text { content, role } => {
                let style = self.text_style(*role);
                let height = self.measurer.measure_height(content.as_deref(), width, &style);
                LayoutNode::new(
                    node.id.as_str(),
                    NodeKind::Text {
                        content: content.clone().unwrap_or_default(),
                        role: *role,
                    },
                    Frame::new(x, y, width, height),
                )
                .with_field_path(path)
                .with_style(style)
            }
            SceneContent::Section {
                title,
                always_splittable,
                children,
            } => {
                let mut placed = Vec::new();
                let mut start = 0.0;
                if let Some(title) = title {
                    let style = self.text_style(TextRole::SectionTitle);
                    let height = self.measurer.measure_height(Some(title), width, &style);
                    placed.push(
                        LayoutNode::new(
                            format!("{}.title", node.id),
                            NodeKind::Text {
                                content: title.clone(),
                                role: TextRole::SectionTitle,
                            },
                            Frame::new(0.0, 0.0, width, height),
                        )
                        .with_field_path(path.join("title"))
                        .with_style(style),
                    );
                    start = height + tokens.item_gap;
                }
                let (body, bottom) = self.stack(
                    children.iter(),
                    0.0,
                    start,
                    width,
                    tokens.item_gap,
                    Some(&path),
                    ChildPaths::Indexed,
                );
                placed.extend(body);
                let height = placed.last().map(|n| n.frame.bottom()).unwrap_or(bottom);

                let splittable =
                    *always_splittable || self.constraints.is_always_splittable(path.root_name());
                LayoutNode::new(
                    node.id.as_str(),
                    NodeKind::Section {
                        always_splittable: splittable,
                    },
                    Frame::new(x, y, width, height.max(min_height)),
                )
                .with_field_path(path)
                .with_children(placed)
            }
            SceneContent::Group { children } => {
                let (placed, bottom) = self.stack(
                    children.iter(),
                    0.0,
                    0.0,
                    width,
                    tokens.block_gap,
                    Some(&path),
                    ChildPaths::Named,
                );
                let frame = Frame::new(x, y, width, bottom.max(min_height));
                LayoutNode::container(ContainerRole::Group, node.id.as_str(), frame)
                    .with_field_path(path)
                    .with_children(placed)
            }
            SceneContent::List { items } => {
                let (placed, bottom) = self.stack(
                    items.iter(),
                    LIST_INDENT,
                    0.0,
                    (width - LIST_INDENT).max(1.0),
                    tokens.block_gap,
                    Some(&path),
                    ChildPaths::Indexed,
                );
                let frame = Frame::new(x, y, width, bottom.max(min_height));
                LayoutNode::new(node.id.as_str(), NodeKind::List, frame)
                    .with_field_path(path)
                    .with_children(placed)
            }
            SceneContent::Image {
                src,
                width: intrinsic_w,
                height: intrinsic_h,
            } => {
                let size = if intrinsic_w.is_finite()
                    && intrinsic_h.is_finite()
                    && *intrinsic_w > 0.0
                    && *intrinsic_h > 0.0
                {
                    let w = intrinsic_w.min(width);
                    Size::new(w, intrinsic_h * w / intrinsic_w)
                } else {
                    log::warn!(
                        "Image '{}' has unusable intrinsic size {}x{}; reserving one line",
                        node.id,
                        intrinsic_w,
                        intrinsic_h
                    );
                    Size::new(width, min_height)
                };
                LayoutNode::new(
                    node.id.as_str(),
                    NodeKind::Image { src: src.clone() },
                    Frame::new(x, y, size.width, size.height),
                )
                .with_field_path(path)
            }
        }
    }

    fn text_style(&self, role: TextRole) -> ComputedStyle {
        let tokens = &self.constraints.tokens;
        let font_size = match role {
            TextRole::Name => tokens.title_font_size,
            TextRole::SectionTitle => tokens.heading_font_size,
            TextRole::Heading => tokens.body_font_size + 1.0,
            TextRole::Body => tokens.body_font_size,
            TextRole::Label => tokens.body_font_size * 0.9,
        };
        ComputedStyle::new(font_size, tokens.line_height).with_transform(role.text_transform())
    }
}
