//! Constraint Builder: region profile + preset + caller overrides -> fully
//! resolved [`LayoutConstraints`].

use crate::density::{Density, DensityTokens};
use crate::dimension::{Margins, PaperSize};
use crate::frames::{FrameName, FrameRequest, FrameSet, resolve_frames};
use crate::preset::{PresetId, SidebarPosition};
use crate::region::{RegionId, RegionProfile};
use quire_types::Frame;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SIDEBAR_WIDTH: f32 = 180.0;
pub const DEFAULT_SIDEBAR_GAP: f32 = 18.0;
pub const DEFAULT_HEADER_HEIGHT: f32 = 96.0;
pub const DEFAULT_RAIL_WIDTH: f32 = 120.0;

/// Caller overrides. `None` keeps the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildOptions {
    pub sidebar_position: Option<SidebarPosition>,
    pub sidebar_width: Option<f32>,
    pub sidebar_gap: Option<f32>,
    pub header_height: Option<f32>,
}

impl BuildOptions {
    pub fn with_sidebar_position(mut self, position: SidebarPosition) -> Self {
        self.sidebar_position = Some(position);
        self
    }

    pub fn with_sidebar_width(mut self, width: f32) -> Self {
        self.sidebar_width = Some(width);
        self
    }

    pub fn with_sidebar_gap(mut self, gap: f32) -> Self {
        self.sidebar_gap = Some(gap);
        self
    }

    pub fn with_header_height(mut self, height: f32) -> Self {
        self.header_height = Some(height);
        self
    }
}

/// Immutable geometry and spacing configuration for one render request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConstraints {
    pub region: RegionId,
    pub preset: PresetId,
    pub paper: PaperSize,
    pub paper_width: f32,
    pub paper_height: f32,
    pub margins: Margins,
    pub frames: FrameSet,
    pub sidebar_position: SidebarPosition,
    pub sidebar_width: f32,
    pub sidebar_gap: f32,
    pub header_height: f32,
    pub density: Density,
    pub tokens: DensityTokens,
    /// Section keys pagination always expands into their entries.
    pub always_splittable: Vec<String>,
}

impl LayoutConstraints {
    pub fn frame(&self, name: FrameName) -> Option<Frame> {
        self.frames.get(name)
    }

    pub fn main_frame(&self) -> Option<Frame> {
        self.frames.main
    }

    /// Height available to main content on one page.
    pub fn available_height(&self) -> Option<f32> {
        self.frames.main.map(|f| f.height)
    }

    /// Lowest y main content may reach before it overflows the page.
    pub fn content_bottom(&self) -> f32 {
        self.paper_height - self.margins.bottom
    }

    pub fn has_sidebar(&self) -> bool {
        self.frames.sidebar.is_some()
    }

    pub fn is_always_splittable(&self, section_key: &str) -> bool {
        self.always_splittable.iter().any(|k| k == section_key)
    }
}

/// The default preset for a region when none (or an unknown one) is given.
pub fn default_preset(profile: &RegionProfile) -> PresetId {
    if profile.ats_oriented {
        PresetId::OneColumn
    } else {
        PresetId::Sidebar
    }
}

pub fn build(
    region: RegionId,
    preset: Option<PresetId>,
    options: &BuildOptions,
) -> LayoutConstraints {
    let profile = region.profile();
    let preset = preset.unwrap_or_else(|| default_preset(&profile));
    let spec = preset.spec();
    let tokens = profile.density.tokens();
    let (paper_width, paper_height) = profile.paper.dimensions_pt();

    let sidebar_width = positive_or(options.sidebar_width, DEFAULT_SIDEBAR_WIDTH, "sidebar width")
        .min(paper_width / 2.0);
    let sidebar_gap = non_negative_or(options.sidebar_gap, DEFAULT_SIDEBAR_GAP, "sidebar gap");
    let header_height = positive_or(options.header_height, DEFAULT_HEADER_HEIGHT, "header height")
        .min(paper_height / 3.0);
    let sidebar_position = options.sidebar_position.unwrap_or_default();

    let frames = resolve_frames(&FrameRequest {
        paper_width,
        paper_height,
        margins: profile.margins,
        preset: spec,
        sidebar_position,
        sidebar_width,
        sidebar_gap,
        header_height,
        rail_width: DEFAULT_RAIL_WIDTH,
        header_gap: tokens.section_gap,
    });

    log::debug!(
        "Built constraints for {}/{} ({}): main={:?}",
        region,
        preset,
        sidebar_position,
        frames.main
    );

    LayoutConstraints {
        region,
        preset,
        paper: profile.paper,
        paper_width,
        paper_height,
        margins: profile.margins,
        frames,
        sidebar_position,
        sidebar_width,
        sidebar_gap,
        header_height,
        density: profile.density,
        tokens,
        always_splittable: spec.always_splittable.iter().map(|s| s.to_string()).collect(),
    }
}

/// Like [`build`] but from names, never failing. An unknown region falls back
/// to `US` paper and margins; an unknown preset, or an unknown region with no
/// preset given, falls back to `ONE_COLUMN`.
pub fn build_named(
    region: &str,
    preset: Option<&str>,
    options: &BuildOptions,
) -> LayoutConstraints {
    let (region_id, region_known) = match region.parse::<RegionId>() {
        Ok(id) => (id, true),
        Err(e) => {
            log::warn!("{}; falling back to US", e);
            (RegionId::Us, false)
        }
    };
    let preset_id = match preset {
        Some(name) => Some(name.parse::<PresetId>().unwrap_or_else(|e| {
            log::warn!("{}; falling back to ONE_COLUMN", e);
            PresetId::OneColumn
        })),
        None if !region_known => Some(PresetId::OneColumn),
        None => None,
    };
    build(region_id, preset_id, options)
}

fn positive_or(value: Option<f32>, default: f32, what: &str) -> f32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        Some(v) => {
            log::warn!("Ignoring invalid {} override {}", what, v);
            default
        }
        None => default,
    }
}

fn non_negative_or(value: Option<f32>, default: f32, what: &str) -> f32 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        Some(v) => {
            log::warn!("Ignoring invalid {} override {}", what, v);
            default
        }
        None => default,
    }
}
