mod common;

use common::init_logger;
use quire::constraints::{PresetId, RegionId, SidebarPosition};
use quire::layout::Level;
use quire::{DisplayOptions, PipelineBuilder};
use quire::harness::golden_profiles;

#[test]
fn test_every_golden_case_is_structurally_valid() {
    init_logger();
    for golden in golden_profiles() {
        for region in RegionId::ALL {
            for preset in PresetId::ALL {
                for position in SidebarPosition::ALL {
                    let output = PipelineBuilder::new()
                        .with_region(region)
                        .with_preset(preset)
                        .with_sidebar_position(position)
                        .build()
                        .run_profile(&golden.profile, &DisplayOptions::default());
                    let key = format!("{}/{}/{}/{}", golden.name, region, preset, position);

                    let errors: Vec<_> = output
                        .validation
                        .issues
                        .iter()
                        .filter(|i| i.level == Level::Error)
                        .collect();
                    assert!(errors.is_empty(), "{}: {:?}", key, errors);
                    assert!(
                        output.pagination.split_points.windows(2).all(|w| w[0] < w[1]),
                        "{}: split points not increasing",
                        key
                    );
                    assert_eq!(
                        output.pagination.page_signatures.len(),
                        output.pagination.page_count,
                        "{}",
                        key
                    );
                }
            }
        }
    }
}

#[test]
fn test_results_are_deterministic() {
    let profile = quire::harness::many_entries_profile();
    let pipeline = PipelineBuilder::new()
        .with_region(RegionId::Ca)
        .with_preset(PresetId::DualSidebar)
        .build();

    let first = pipeline.run_profile(&profile, &DisplayOptions::default());
    let second = pipeline.run_profile(&profile, &DisplayOptions::default());

    assert_eq!(first.pagination.page_signatures, second.pagination.page_signatures);
    assert_eq!(first.pagination.split_points, second.pagination.split_points);
    assert_eq!(first.validation, second.validation);
}
