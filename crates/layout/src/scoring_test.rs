use crate::algorithms::scoring::{
    COMPLETE_SECTION_BONUS, CONTINUATION_PENALTY, KEEP_TOGETHER_PENALTY, LIST_BLOCK_BONUS,
    LONELY_TITLE_PENALTY, ORPHAN_TITLE_PENALTY,
};
use crate::algorithms::{KeepRule, analyze_candidates, best_split, score_split};
use crate::node::LayoutNode;
use crate::node_kind::{ContainerRole, NodeKind, TextRole};
use crate::test_utils::*;
use quire_types::{FieldPath, Frame};

const THRESHOLD: usize = 3;

fn text(path: &str, role: TextRole) -> LayoutNode {
    LayoutNode::new(
        path,
        NodeKind::Text {
            content: path.to_string(),
            role,
        },
        Frame::new(0.0, 0.0, 540.0, 20.0),
    )
    .with_field_path(FieldPath::new(path))
}

fn body(path: &str) -> LayoutNode {
    text(path, TextRole::Body)
}

fn section(path: &str) -> LayoutNode {
    LayoutNode::new(
        path,
        NodeKind::Section {
            always_splittable: false,
        },
        Frame::new(0.0, 0.0, 540.0, 40.0),
    )
    .with_field_path(FieldPath::new(path))
    .with_children(vec![body(&format!("{}.text", path))])
}

/// Stacks `children` in a main column 20pt apart.
fn main_column(children: Vec<LayoutNode>) -> LayoutNode {
    let children = children
        .into_iter()
        .enumerate()
        .map(|(i, c)| c.cloned_at(0.0, i as f32 * 20.0))
        .collect();
    LayoutNode::container(ContainerRole::Main, "main", Frame::new(36.0, 36.0, 540.0, 720.0))
        .with_children(children)
}

fn scores(main: &LayoutNode) -> Vec<i32> {
    let set = analyze_candidates(main, 720.0);
    (0..set.candidates.len())
        .map(|i| score_split(&set.candidates, i, THRESHOLD))
        .collect()
}

#[test]
fn test_complete_section_bonus() {
    let main = main_column(vec![section("summary"), body("blocks[1]")]);
    assert_eq!(scores(&main)[0], COMPLETE_SECTION_BONUS);
    assert_eq!(COMPLETE_SECTION_BONUS, 100);
}

#[test]
fn test_task_list_bonus() {
    let main = main_column(vec![body("experiences[0].tasks"), body("blocks[1]")]);
    assert_eq!(scores(&main)[0], LIST_BLOCK_BONUS);
    assert_eq!(LIST_BLOCK_BONUS, 50);
}

#[test]
fn test_title_before_content_is_heavily_penalised() {
    init_logger();
    let main = main_column(vec![
        text("projects.title", TextRole::SectionTitle),
        body("blocks[1]"),
    ]);
    let set = analyze_candidates(&main, 720.0);
    assert_eq!(set.candidates[0].keep_rule, KeepRule::KeepWithNext);
    assert_eq!(
        score_split(&set.candidates, 0, THRESHOLD),
        ORPHAN_TITLE_PENALTY + LONELY_TITLE_PENALTY
    );
    assert_eq!(ORPHAN_TITLE_PENALTY + LONELY_TITLE_PENALTY, -1200);
}

#[test]
fn test_final_title_only_pays_lonely_penalty() {
    let main = main_column(vec![
        body("blocks[0]"),
        text("projects.title", TextRole::SectionTitle),
    ]);
    assert_eq!(scores(&main)[1], LONELY_TITLE_PENALTY);
    assert_eq!(LONELY_TITLE_PENALTY, -200);
}

#[test]
fn test_keep_together_threshold_boundary() {
    // Two members follow: fewer than the threshold.
    let short = main_column(vec![
        body("experiences[0].meta"),
        body("experiences[0].summary"),
        body("experiences[0].details"),
    ]);
    let set = analyze_candidates(&short, 720.0);
    assert_eq!(set.candidates[0].keep_rule, KeepRule::KeepTogether);
    assert_eq!(
        score_split(&set.candidates, 0, THRESHOLD),
        KEEP_TOGETHER_PENALTY + CONTINUATION_PENALTY
    );
    assert_eq!(KEEP_TOGETHER_PENALTY + CONTINUATION_PENALTY, -750);

    // Exactly three follow: no keep-together penalty, only continuation.
    let enough = main_column(vec![
        body("experiences[0].meta"),
        body("experiences[0].summary"),
        body("experiences[0].details"),
        body("experiences[0].notes"),
    ]);
    assert_eq!(scores(&enough)[0], CONTINUATION_PENALTY);
}

#[test]
fn test_last_group_member_is_not_penalised() {
    let main = main_column(vec![
        body("experiences[0].meta"),
        body("experiences[1].meta"),
    ]);
    assert_eq!(scores(&main), vec![0, 0]);
}

#[test]
fn test_continuation_penalty_is_half_keep_together() {
    let main = main_column(vec![body("summary.text"), body("summary.more")]);
    assert_eq!(scores(&main)[0], CONTINUATION_PENALTY);
    assert_eq!(CONTINUATION_PENALTY, -250);
}

#[test]
fn test_best_split_prefers_highest_score() {
    let main = main_column(vec![
        body("blocks[0]"),
        section("summary"),
        body("blocks[2]"),
    ]);
    let set = analyze_candidates(&main, 720.0);
    assert_eq!(best_split(&set.candidates, 0, 2, THRESHOLD), 1);
}

#[test]
fn test_best_split_ties_go_to_later_index() {
    let main = main_column(vec![body("blocks[0]"), body("blocks[1]"), body("blocks[2]")]);
    let set = analyze_candidates(&main, 720.0);
    assert_eq!(scores(&main), vec![0, 0, 0]);
    assert_eq!(best_split(&set.candidates, 0, 2, THRESHOLD), 2);
    assert_eq!(best_split(&set.candidates, 0, 1, THRESHOLD), 1);
}
