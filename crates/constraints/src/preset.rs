use crate::error::ConstraintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named set of frame regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PresetId {
    /// Single full-height sidebar on the configured side.
    Sidebar,
    /// Full-width header band above a single column.
    TopHeader,
    /// Sidebar plus a header band over the main column only.
    SplitHeader,
    /// Narrow rails on both page edges.
    DualSidebar,
    /// One column, ATS friendly.
    OneColumn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderSpan {
    None,
    FullWidth,
    MainColumn,
}

/// Static description of which regions a preset lays out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetSpec {
    pub id: PresetId,
    pub has_sidebar: bool,
    pub has_rails: bool,
    pub header: HeaderSpan,
    /// Section keys that pagination always breaks into their entries.
    pub always_splittable: &'static [&'static str],
}

const SPLITTABLE_SECTIONS: &[&str] = &["experiences", "educations"];

impl PresetId {
    pub const ALL: [PresetId; 5] = [
        PresetId::Sidebar,
        PresetId::TopHeader,
        PresetId::SplitHeader,
        PresetId::DualSidebar,
        PresetId::OneColumn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PresetId::Sidebar => "SIDEBAR",
            PresetId::TopHeader => "TOP_HEADER",
            PresetId::SplitHeader => "SPLIT_HEADER",
            PresetId::DualSidebar => "DUAL_SIDEBAR",
            PresetId::OneColumn => "ONE_COLUMN",
        }
    }

    pub fn spec(self) -> PresetSpec {
        let (has_sidebar, has_rails, header) = match self {
            PresetId::Sidebar => (true, false, HeaderSpan::None),
            PresetId::TopHeader => (false, false, HeaderSpan::FullWidth),
            PresetId::SplitHeader => (true, false, HeaderSpan::MainColumn),
            PresetId::DualSidebar => (false, true, HeaderSpan::None),
            PresetId::OneColumn => (false, false, HeaderSpan::None),
        };
        PresetSpec {
            id: self,
            has_sidebar,
            has_rails,
            header,
            always_splittable: SPLITTABLE_SECTIONS,
        }
    }
}

impl FromStr for PresetId {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        match normalized.as_str() {
            "ATS" => return Ok(PresetId::OneColumn),
            "SIDEBAR_LEFT" | "SIDEBAR_RIGHT" => return Ok(PresetId::Sidebar),
            _ => {}
        }
        PresetId::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| ConstraintError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarPosition {
    #[default]
    Left,
    Right,
}

impl SidebarPosition {
    pub const ALL: [SidebarPosition; 2] = [SidebarPosition::Left, SidebarPosition::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            SidebarPosition::Left => "left",
            SidebarPosition::Right => "right",
        }
    }
}

impl FromStr for SidebarPosition {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(SidebarPosition::Left),
            "right" => Ok(SidebarPosition::Right),
            _ => Err(ConstraintError::UnknownSidebarPosition(s.to_string())),
        }
    }
}

impl fmt::Display for SidebarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
