mod common;

use common::fixtures::*;
use common::{TestResult, count_code, init_logger, main_leaves, render};
use quire::constraints::{PresetId, RegionId, SidebarPosition};
use quire::layout::{ContainerRole, IssueCode};
use quire::{DisplayOptions, PipelineBuilder, Profile};

#[test]
fn test_long_tasks_paginate_cleanly() {
    init_logger();
    let output = render(
        &long_tasks_profile(),
        RegionId::Us,
        PresetId::Sidebar,
        SidebarPosition::Left,
    );

    assert!(output.pagination.page_count >= 2);
    assert!(output.pagination.did_paginate);
    assert_eq!(count_code(&output, IssueCode::NanFrame), 0);
    assert_eq!(count_code(&output, IssueCode::NegativeFrame), 0);
    assert_eq!(count_code(&output, IssueCode::OverflowMain), 0);
    assert!(output.validation.valid, "{:?}", output.validation.issues);
}

#[test]
fn test_empty_profile_is_one_unpaginated_page() {
    init_logger();
    let output = render(&empty_profile(), RegionId::Us, PresetId::Sidebar, SidebarPosition::Left);

    assert_eq!(output.pagination.page_count, 1);
    assert!(!output.pagination.did_paginate);
    assert_eq!(output.pagination.page_signatures.len(), 1);
    assert!(output.pagination.split_points.is_empty());
    assert!(output.validation.valid);
}

#[test]
fn test_right_sidebar_stays_flush() {
    init_logger();
    for preset in [PresetId::Sidebar, PresetId::SplitHeader] {
        let output = render(&long_tasks_profile(), RegionId::Eu, preset, SidebarPosition::Right);
        assert_eq!(count_code(&output, IssueCode::FlushGapSidebarRight), 0);
        let sidebar = output.tree.pages[0]
            .find_container(ContainerRole::Sidebar)
            .expect("sidebar on the first page");
        assert_eq!(sidebar.frame.right(), output.tree.bounds.width);
    }
}

#[test]
fn test_no_content_lost_across_pages() {
    let output = render(
        &long_tasks_profile(),
        RegionId::Us,
        PresetId::TopHeader,
        SidebarPosition::Left,
    );

    assert!(output.pagination.did_paginate);
    assert_eq!(main_leaves(&output.single_page), main_leaves(&output.tree));
}

#[test]
fn test_tree_carries_pagination_meta() {
    let output = render(
        &typical_profile(),
        RegionId::Uk,
        PresetId::OneColumn,
        SidebarPosition::Left,
    );

    let meta = output.tree.pagination_meta.as_ref().expect("meta attached");
    assert_eq!(meta.page_count, output.tree.page_count());
    assert_eq!(meta.page_signatures, output.pagination.page_signatures);
}

#[test]
fn test_profile_from_json() -> TestResult {
    init_logger();
    let profile = Profile::from_json(profile_json())?;
    let pipeline = PipelineBuilder::new()
        .with_region_name("de")?
        .with_preset_name("sidebar-right")?
        .build();

    let output = pipeline.run_profile(&profile, &DisplayOptions::default());

    assert_eq!(pipeline.constraints().preset, PresetId::Sidebar);
    assert!(output.validation.valid);
    let sidebar = output.tree.pages[0]
        .find_container(ContainerRole::Sidebar)
        .expect("sidebar");
    let leaves: Vec<&str> = sidebar.leaves().iter().map(|n| n.identifier()).collect();
    assert!(leaves.contains(&"skills[1]"));
    assert!(leaves.contains(&"languages[0]"));
    Ok(())
}

#[test]
fn test_scene_json_input() -> TestResult {
    let pipeline = PipelineBuilder::new().with_preset(PresetId::OneColumn).build();

    let output = pipeline.run_scene_json(scene_json())?;

    let main = output.tree.pages[0]
        .find_container(ContainerRole::Main)
        .expect("main");
    // header folds into main without a header frame
    assert_eq!(main.children[0].identifier(), "name");
    let skills = &main.children[1];
    assert!(skills.is_always_splittable());
    assert_eq!(skills.children[2].identifier(), "skills[1]");
    assert!(skills.children[2].frame.height > 0.0);
    Ok(())
}

#[test]
fn test_unknown_names_are_rejected_strictly() {
    assert!(PipelineBuilder::new().with_region_name("MARS").is_err());
    assert!(PipelineBuilder::new().with_preset_name("TRIPLE_SIDEBAR").is_err());
}
