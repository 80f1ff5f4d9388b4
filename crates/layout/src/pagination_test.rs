use crate::algorithms::analyze_candidates;
use crate::diagnostics::IssueCode;
use crate::engine::LayoutEngine;
use crate::node::LayoutNode;
use crate::node_kind::{ContainerRole, NodeKind};
use crate::pagination::{PaginationOptions, paginate};
use crate::test_utils::*;
use quire_constraints::{BuildOptions, PresetId};
use quire_types::{FieldPath, Frame};

fn main_children(page: &LayoutNode) -> Vec<&str> {
    page.find_container(ContainerRole::Main)
        .map(|m| m.children.iter().map(|c| c.identifier()).collect())
        .unwrap_or_default()
}

fn section(id: &str, y: f32, always_splittable: bool, children: Vec<LayoutNode>) -> LayoutNode {
    let height = children.iter().map(|c| c.frame.bottom()).fold(0.0, f32::max);
    LayoutNode::new(
        id,
        NodeKind::Section { always_splittable },
        Frame::new(0.0, y, 540.0, height),
    )
    .with_field_path(FieldPath::new(id))
    .with_children(children)
}

#[test]
fn test_exact_fit_does_not_paginate() {
    init_logger();
    let constraints = one_column();
    let tree = single_page(&constraints, uniform_blocks(8, 90.0));

    let result = paginate(&tree, &constraints, &PaginationOptions::default());

    assert_eq!(result.page_count, 1);
    assert!(!result.did_paginate);
    assert!(result.split_points.is_empty());
    assert!(result.warnings.is_empty());
    assert_eq!(result.page_signatures.len(), 1);
    assert_eq!(result.pages, tree.pages);
}

#[test]
fn test_overflow_splits_at_last_fitting_block() {
    init_logger();
    let constraints = one_column();
    let tree = single_page(&constraints, uniform_blocks(10, 100.0));

    let result = paginate(&tree, &constraints, &PaginationOptions::default());

    assert_eq!(result.page_count, 2);
    assert!(result.did_paginate);
    assert_eq!(result.split_points, vec![700.0]);
    assert_eq!(main_children(&result.pages[0]).len(), 7);
    assert_eq!(
        main_children(&result.pages[1]),
        vec!["blocks[7]", "blocks[8]", "blocks[9]"]
    );

    let second_main = result.pages[1]
        .find_container(ContainerRole::Main)
        .expect("main on page 2");
    assert_eq!(second_main.children[0].frame.y, 0.0);
    assert_eq!(second_main.children[2].frame.y, 200.0);
    assert_eq!(second_main.frame, Frame::new(36.0, 36.0, 540.0, 720.0));
    assert_eq!(result.pages[1].frame, Frame::new(0.0, 0.0, 612.0, 792.0));
}

#[test]
fn test_min_widows_pulls_split_back() {
    let constraints = one_column();
    let tree = single_page(&constraints, uniform_blocks(8, 100.0));
    let options = PaginationOptions {
        min_widows: 3,
        ..Default::default()
    };

    let result = paginate(&tree, &constraints, &options);

    assert_eq!(result.page_count, 2);
    assert_eq!(result.split_points, vec![500.0]);
    assert_eq!(main_children(&result.pages[1]).len(), 3);
}

#[test]
fn test_oversized_block_is_placed_alone() {
    init_logger();
    let constraints = one_column();
    let tree = single_page(&constraints, vec![block(0, 0.0, 1000.0), block(1, 1000.0, 100.0)]);

    let result = paginate(&tree, &constraints, &PaginationOptions::default());

    assert_eq!(result.page_count, 2);
    assert_eq!(main_children(&result.pages[0]), vec!["blocks[0]"]);
    assert_eq!(main_children(&result.pages[1]), vec!["blocks[1]"]);
    assert_eq!(result.warning_codes(), vec![IssueCode::OversizedBlock]);
    let warning = &result.warnings[0];
    assert_eq!(warning.data["height"], 1000.0);
    assert_eq!(warning.data["availableHeight"], 720.0);
}

#[test]
fn test_title_alone_on_page_is_reported() {
    let constraints = one_column();
    let tree = single_page(
        &constraints,
        vec![
            title("experiences.title", "experiences.title", 0.0, 20.0),
            block(1, 20.0, 710.0),
        ],
    );

    let result = paginate(&tree, &constraints, &PaginationOptions::default());

    assert_eq!(result.page_count, 2);
    assert!(result.warning_codes().contains(&IssueCode::OrphanTitle));
    let orphan = result
        .warnings
        .iter()
        .find(|w| w.code == IssueCode::OrphanTitle)
        .expect("orphan warning");
    assert_eq!(orphan.data["retreated"], 0.0);
}

#[test]
fn test_title_is_not_chosen_when_an_alternative_exists() {
    let constraints = one_column();
    let tree = single_page(
        &constraints,
        vec![
            block(0, 0.0, 650.0),
            title("projects.title", "projects.title", 650.0, 20.0),
            block(2, 670.0, 100.0),
        ],
    );

    let result = paginate(&tree, &constraints, &PaginationOptions::default());

    assert_eq!(result.split_points, vec![650.0]);
    assert_eq!(main_children(&result.pages[1]), vec!["projects.title", "blocks[2]"]);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_widow_rule_never_strands_a_title() {
    init_logger();
    let constraints = one_column();
    let tree = single_page(
        &constraints,
        vec![
            block(0, 0.0, 600.0),
            title("projects.title", "projects.title", 600.0, 20.0),
            block(2, 620.0, 80.0),
            block(3, 700.0, 100.0),
        ],
    );
    let options = PaginationOptions {
        min_widows: 2,
        ..Default::default()
    };

    let result = paginate(&tree, &constraints, &options);

    assert_eq!(result.page_count, 2);
    assert_eq!(main_children(&result.pages[0]), vec!["blocks[0]"]);
    assert_eq!(
        main_children(&result.pages[1]),
        vec!["projects.title", "blocks[2]", "blocks[3]"]
    );
    assert_eq!(result.split_points, vec![600.0]);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_widow_rule_reports_title_it_cannot_avoid() {
    let constraints = one_column();
    let tree = single_page(
        &constraints,
        vec![
            title("projects.title", "projects.title", 0.0, 20.0),
            block(1, 20.0, 80.0),
            block(2, 100.0, 700.0),
        ],
    );
    let options = PaginationOptions {
        min_widows: 2,
        ..Default::default()
    };

    let result = paginate(&tree, &constraints, &options);

    assert_eq!(main_children(&result.pages[0]), vec!["projects.title"]);
    let orphan = result
        .warnings
        .iter()
        .find(|w| w.code == IssueCode::OrphanTitle)
        .expect("orphan warning");
    assert_eq!(orphan.data["retreated"], 0.0);
}

#[test]
fn test_oversized_section_is_expanded() {
    let constraints = one_column();
    let tree = single_page(
        &constraints,
        vec![section("projects", 0.0, false, uniform_blocks(9, 100.0))],
    );

    let result = paginate(&tree, &constraints, &PaginationOptions::default());

    assert_eq!(result.stats.candidates, 9);
    assert_eq!(result.stats.expanded_nodes, 1);
    assert_eq!(result.page_count, 2);
    assert_eq!(main_children(&result.pages[1]), vec!["blocks[7]", "blocks[8]"]);
}

#[test]
fn test_candidates_get_absolute_positions() {
    let constraints = one_column();
    let tree = single_page(
        &constraints,
        vec![
            block(0, 0.0, 100.0),
            section("experiences", 110.0, true, uniform_blocks(3, 50.0)),
        ],
    );
    let main = tree.pages[0]
        .find_container(ContainerRole::Main)
        .expect("main container");

    let set = analyze_candidates(main, 720.0);

    // the always-splittable section is expanded even though it fits
    assert_eq!(set.expanded, 1);
    let starts: Vec<f32> = set.candidates.iter().map(|c| c.start_y).collect();
    assert_eq!(starts, vec![0.0, 110.0, 160.0, 210.0]);
    assert_eq!(set.candidates[3].end_y, 260.0);
}

#[test]
fn test_no_content_is_lost_or_duplicated() {
    init_logger();
    let constraints = one_column();
    let tree = LayoutEngine::new(&constraints).compute(&experience_scene(4, 6));
    let main = tree.pages[0]
        .find_container(ContainerRole::Main)
        .expect("main container");
    let before: Vec<&str> = main.leaves().iter().map(|n| n.identifier()).collect();

    let result = paginate(&tree, &constraints, &PaginationOptions::default());
    assert!(result.did_paginate);

    let after: Vec<&str> = result
        .pages
        .iter()
        .filter_map(|p| p.find_container(ContainerRole::Main))
        .flat_map(|m| m.leaves())
        .map(|n| n.identifier())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_split_points_strictly_increase() {
    let constraints = one_column();
    let tree = LayoutEngine::new(&constraints).compute(&experience_scene(8, 8));

    let result = paginate(&tree, &constraints, &PaginationOptions::default());

    assert!(result.page_count >= 3);
    assert_eq!(result.split_points.len(), result.page_count - 1);
    assert!(result.split_points.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_pagination_is_deterministic() {
    let constraints = one_column();
    let tree = LayoutEngine::new(&constraints).compute(&experience_scene(5, 5));
    let options = PaginationOptions::default();

    let first = paginate(&tree, &constraints, &options);
    let second = paginate(&tree, &constraints, &options);

    assert_eq!(first.page_signatures, second.page_signatures);
    assert_eq!(first.split_points, second.split_points);
}

#[test]
fn test_sidebar_repeats_only_when_requested() {
    let constraints = with_preset(PresetId::Sidebar, BuildOptions::default());
    let tree = LayoutEngine::new(&constraints).compute(&experience_scene(4, 6));

    let plain = paginate(&tree, &constraints, &PaginationOptions::default());
    assert!(plain.page_count >= 2);
    assert!(plain.pages[0].find_container(ContainerRole::Sidebar).is_some());
    assert!(plain.pages[1].find_container(ContainerRole::Sidebar).is_none());

    let options = PaginationOptions {
        repeat_sidebar_on_all_pages: true,
        ..Default::default()
    };
    let repeated = paginate(&tree, &constraints, &options);
    assert!(repeated
        .pages
        .iter()
        .all(|p| p.find_container(ContainerRole::Sidebar).is_some()));
}

#[test]
fn test_header_never_repeats() {
    let constraints = with_preset(PresetId::TopHeader, BuildOptions::default());
    let tree = LayoutEngine::new(&constraints).compute(&experience_scene(4, 6));
    let options = PaginationOptions {
        repeat_sidebar_on_all_pages: true,
        ..Default::default()
    };

    let result = paginate(&tree, &constraints, &options);

    assert!(result.page_count >= 2);
    assert!(result.pages[0].find_container(ContainerRole::Header).is_some());
    assert!(result.pages[1..]
        .iter()
        .all(|p| p.find_container(ContainerRole::Header).is_none()));
}

#[test]
fn test_result_meta_travels_with_tree() {
    let constraints = one_column();
    let tree = single_page(&constraints, uniform_blocks(10, 100.0));
    let result = paginate(&tree, &constraints, &PaginationOptions::default());
    let signatures = result.page_signatures.clone();

    let paginated = result.into_tree(tree.bounds);

    let meta = paginated.pagination_meta.expect("meta attached");
    assert_eq!(meta.page_count, 2);
    assert_eq!(meta.page_signatures, signatures);
}
