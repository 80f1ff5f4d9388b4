use crate::node::{LayoutNode, LayoutTree};
use crate::node_kind::{ContainerRole, NodeKind, TextRole};
use crate::scene::{SceneNode, SceneTree};
use crate::style::ComputedStyle;
use quire_constraints::{BuildOptions, LayoutConstraints, PresetId, RegionId, build};
use quire_types::{FieldPath, Frame, Size};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// US Letter, 36pt margins, single column: main is `{36, 36, 540, 720}`.
pub fn one_column() -> LayoutConstraints {
    build(RegionId::Us, Some(PresetId::OneColumn), &BuildOptions::default())
}

pub fn with_preset(preset: PresetId, options: BuildOptions) -> LayoutConstraints {
    build(RegionId::Us, Some(preset), &options)
}

/// A body text block at `y` inside its parent, with path `blocks[i]`.
pub fn block(index: usize, y: f32, height: f32) -> LayoutNode {
    LayoutNode::new(
        format!("block-{}", index),
        NodeKind::Text {
            content: format!("Block {}", index),
            role: TextRole::Body,
        },
        Frame::new(0.0, y, 540.0, height),
    )
    .with_field_path(FieldPath::new("blocks").at(index))
    .with_style(ComputedStyle::default())
}

pub fn title(id: &str, path: &str, y: f32, height: f32) -> LayoutNode {
    LayoutNode::new(
        id,
        NodeKind::Text {
            content: id.to_uppercase(),
            role: TextRole::SectionTitle,
        },
        Frame::new(0.0, y, 540.0, height),
    )
    .with_field_path(FieldPath::new(path))
    .with_style(ComputedStyle::default().with_transform(TextRole::SectionTitle.text_transform()))
}

/// Stacks equally tall blocks with no gap.
pub fn uniform_blocks(count: usize, height: f32) -> Vec<LayoutNode> {
    (0..count).map(|i| block(i, i as f32 * height, height)).collect()
}

/// A single-page tree whose main container holds `content`, plus empty
/// containers for every other frame the constraints define.
pub fn single_page(constraints: &LayoutConstraints, content: Vec<LayoutNode>) -> LayoutTree {
    let size = Size::new(constraints.paper_width, constraints.paper_height);
    let mut content = Some(content);
    let children = constraints
        .frames
        .iter()
        .map(|(name, frame)| {
            let role = ContainerRole::from(name);
            let node = LayoutNode::container(role, name.as_str(), frame)
                .with_field_path(FieldPath::new(name.as_str()));
            match role {
                ContainerRole::Main => node.with_children(content.take().unwrap_or_default()),
                _ => node,
            }
        })
        .collect();
    LayoutTree::new(vec![LayoutNode::page(0, size, children)], size)
}

/// A scene with one always-splittable experiences section of `entries`
/// entries, each carrying `tasks` long task lines.
pub fn experience_scene(entries: usize, tasks: usize) -> SceneTree {
    let task_text =
        "Coordinated cross-team delivery of a platform migration with measurable results. "
            .repeat(3);
    let entries = (0..entries)
        .map(|e| {
            let items = (0..tasks)
                .map(|t| SceneNode::text(format!("exp-{}-task-{}", e, t), task_text.clone()))
                .collect();
            SceneNode::group(
                format!("exp-{}", e),
                vec![
                    SceneNode::text_with_role(
                        format!("exp-{}-role", e),
                        "Senior Engineer",
                        TextRole::Heading,
                    )
                    .with_field_path(format!("experiences[{}].title", e)),
                    SceneNode::list(format!("exp-{}-tasks", e), items)
                        .with_field_path(format!("experiences[{}].tasks", e)),
                ],
            )
            .with_field_path(format!("experiences[{}]", e))
        })
        .collect();
    SceneTree {
        main: vec![
            SceneNode::section("experiences", Some("Experience".to_string()), entries)
                .with_field_path("experiences"),
        ],
        sidebar: vec![
            SceneNode::text("contact", "jane@example.com").with_field_path("contact.email"),
        ],
        ..Default::default()
    }
}
