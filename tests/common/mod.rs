pub mod fixtures;

use quire::constraints::{PresetId, RegionId, SidebarPosition};
use quire::layout::{ContainerRole, IssueCode, LayoutTree};
use quire::{DisplayOptions, PipelineBuilder, Profile, RenderOutput};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs the full pipeline for one matrix cell with default options.
pub fn render(
    profile: &Profile,
    region: RegionId,
    preset: PresetId,
    position: SidebarPosition,
) -> RenderOutput {
    PipelineBuilder::new()
        .with_region(region)
        .with_preset(preset)
        .with_sidebar_position(position)
        .build()
        .run_profile(profile, &DisplayOptions::default())
}

/// Identifiers of every leaf under the main containers, page by page.
pub fn main_leaves(tree: &LayoutTree) -> Vec<String> {
    tree.pages
        .iter()
        .filter_map(|p| p.find_container(ContainerRole::Main))
        .flat_map(|m| m.leaves())
        .map(|n| n.identifier().to_string())
        .collect()
}

pub fn count_code(output: &RenderOutput, code: IssueCode) -> usize {
    output.validation.count(code)
}
