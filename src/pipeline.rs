use crate::error::PipelineError;
use crate::profile::{DisplayOptions, Profile, build_scene};
use quire_constraints::{
    BuildOptions, LayoutConstraints, PresetId, RegionId, SidebarPosition, build,
};
use quire_layout::{
    LayoutEngine, LayoutTree, PaginationOptions, PaginationResult, SceneTree, ValidationReport,
    paginate, validate,
};
use serde::Serialize;

/// Everything one render request produces.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOutput {
    /// The geometry pass result before any page breaking.
    pub single_page: LayoutTree,
    pub pagination: PaginationResult,
    /// The paginated tree with its pagination metadata attached.
    pub tree: LayoutTree,
    pub validation: ValidationReport,
}

/// A builder for creating a [`LayoutPipeline`].
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    region: Option<RegionId>,
    preset: Option<PresetId>,
    build_options: BuildOptions,
    pagination: PaginationOptions,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_region(mut self, region: RegionId) -> Self {
        self.region = Some(region);
        self
    }

    /// Parses a region name strictly; use [`quire_constraints::build_named`]
    /// for the lenient fallback behaviour.
    pub fn with_region_name(mut self, name: &str) -> Result<Self, PipelineError> {
        self.region = Some(name.parse()?);
        Ok(self)
    }

    pub fn with_preset(mut self, preset: PresetId) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn with_preset_name(mut self, name: &str) -> Result<Self, PipelineError> {
        self.preset = Some(name.parse()?);
        Ok(self)
    }

    pub fn with_sidebar_position(mut self, position: SidebarPosition) -> Self {
        self.build_options.sidebar_position = Some(position);
        self
    }

    pub fn with_build_options(mut self, options: BuildOptions) -> Self {
        self.build_options = options;
        self
    }

    pub fn with_pagination_options(mut self, options: PaginationOptions) -> Self {
        self.pagination = options;
        self
    }

    /// Resolves the constraints once; the pipeline can then be run any
    /// number of times.
    pub fn build(self) -> LayoutPipeline {
        let region = self.region.unwrap_or(RegionId::Us);
        LayoutPipeline {
            constraints: build(region, self.preset, &self.build_options),
            pagination: self.pagination,
        }
    }
}

pub struct LayoutPipeline {
    constraints: LayoutConstraints,
    pagination: PaginationOptions,
}

impl LayoutPipeline {
    pub fn constraints(&self) -> &LayoutConstraints {
        &self.constraints
    }

    /// Geometry, pagination and validation for a ready-made scene.
    pub fn run(&self, scene: &SceneTree) -> RenderOutput {
        let single_page = LayoutEngine::new(&self.constraints).compute(scene);
        let pagination = paginate(&single_page, &self.constraints, &self.pagination);
        let tree = pagination.clone().into_tree(single_page.bounds);
        let validation = validate(&tree, Some(&self.constraints));

        log::info!(
            "{}/{}: {} page(s), {} warning(s), valid={}",
            self.constraints.region,
            self.constraints.preset,
            pagination.page_count,
            pagination.warnings.len(),
            validation.valid
        );
        RenderOutput {
            single_page,
            pagination,
            tree,
            validation,
        }
    }

    pub fn run_profile(&self, profile: &Profile, display: &DisplayOptions) -> RenderOutput {
        self.run(&build_scene(profile, display, &self.constraints))
    }

    pub fn run_scene_json(&self, json: &str) -> Result<RenderOutput, PipelineError> {
        let scene = SceneTree::from_json(json)?;
        Ok(self.run(&scene))
    }
}
