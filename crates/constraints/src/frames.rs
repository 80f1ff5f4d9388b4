//! Frame region resolver: turns paper size, margins and a preset into named
//! page-local rectangles.

use crate::dimension::Margins;
use crate::preset::{HeaderSpan, PresetSpec, SidebarPosition};
use quire_types::Frame;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrameName {
    Header,
    Sidebar,
    LeftRail,
    RightRail,
    Main,
}

impl FrameName {
    pub fn as_str(self) -> &'static str {
        match self {
            FrameName::Header => "header",
            FrameName::Sidebar => "sidebar",
            FrameName::LeftRail => "leftRail",
            FrameName::RightRail => "rightRail",
            FrameName::Main => "main",
        }
    }

    /// Chrome frames are everything except the paginated main column.
    pub fn is_chrome(self) -> bool {
        !matches!(self, FrameName::Main)
    }
}

impl fmt::Display for FrameName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The named frames of one page. Absent regions are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Frame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<Frame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_rail: Option<Frame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_rail: Option<Frame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<Frame>,
}

impl FrameSet {
    pub fn get(&self, name: FrameName) -> Option<Frame> {
        match name {
            FrameName::Header => self.header,
            FrameName::Sidebar => self.sidebar,
            FrameName::LeftRail => self.left_rail,
            FrameName::RightRail => self.right_rail,
            FrameName::Main => self.main,
        }
    }

    /// Present frames in a fixed order (header, sidebar, rails, main).
    pub fn iter(&self) -> impl Iterator<Item = (FrameName, Frame)> + '_ {
        [
            FrameName::Header,
            FrameName::Sidebar,
            FrameName::LeftRail,
            FrameName::RightRail,
            FrameName::Main,
        ]
        .into_iter()
        .filter_map(|name| self.get(name).map(|frame| (name, frame)))
    }
}

/// Everything the resolver needs; all lengths in points.
#[derive(Debug, Clone, Copy)]
pub struct FrameRequest {
    pub paper_width: f32,
    pub paper_height: f32,
    pub margins: Margins,
    pub preset: PresetSpec,
    pub sidebar_position: SidebarPosition,
    pub sidebar_width: f32,
    pub sidebar_gap: f32,
    pub header_height: f32,
    pub rail_width: f32,
    /// Space between the header band and the first line of main content.
    pub header_gap: f32,
}

pub fn resolve_frames(req: &FrameRequest) -> FrameSet {
    let (pw, ph) = (req.paper_width, req.paper_height);
    let m = req.margins;
    let mut frames = FrameSet::default();

    let mut main_left = m.left;
    let mut main_right = pw - m.right;

    if req.preset.has_sidebar {
        let sidebar = match req.sidebar_position {
            SidebarPosition::Left => {
                main_left = req.sidebar_width + req.sidebar_gap;
                Frame::new(0.0, 0.0, req.sidebar_width, ph)
            }
            SidebarPosition::Right => {
                main_right = pw - req.sidebar_width - req.sidebar_gap;
                Frame::new(pw - req.sidebar_width, 0.0, req.sidebar_width, ph)
            }
        };
        frames.sidebar = Some(sidebar);
    }

    if req.preset.has_rails {
        frames.left_rail = Some(Frame::new(0.0, 0.0, req.rail_width, ph));
        frames.right_rail = Some(Frame::new(pw - req.rail_width, 0.0, req.rail_width, ph));
        main_left = req.rail_width + req.sidebar_gap;
        main_right = pw - req.rail_width - req.sidebar_gap;
    }

    let main_top = match req.preset.header {
        HeaderSpan::None => m.top,
        HeaderSpan::FullWidth => {
            frames.header = Some(Frame::new(0.0, 0.0, pw, req.header_height));
            req.header_height + req.header_gap
        }
        HeaderSpan::MainColumn => {
            frames.header = Some(Frame::new(
                main_left,
                0.0,
                main_right - main_left,
                req.header_height,
            ));
            req.header_height + req.header_gap
        }
    };

    let main_bottom = ph - m.bottom;
    frames.main = Some(Frame::new(
        main_left,
        main_top,
        main_right - main_left,
        main_bottom - main_top,
    ));
    frames
}
