use crate::density::Density;
use crate::dimension::{Margins, PaperSize};
use crate::error::ConstraintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named paper + margin + density profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegionId {
    Us,
    Ca,
    Uk,
    Eu,
    De,
    UsAts,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionProfile {
    pub id: RegionId,
    pub paper: PaperSize,
    pub margins: Margins,
    pub density: Density,
    /// ATS-oriented regions default to the one-column preset.
    pub ats_oriented: bool,
}

impl RegionId {
    pub const ALL: [RegionId; 6] = [
        RegionId::Us,
        RegionId::Ca,
        RegionId::Uk,
        RegionId::Eu,
        RegionId::De,
        RegionId::UsAts,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RegionId::Us => "US",
            RegionId::Ca => "CA",
            RegionId::Uk => "UK",
            RegionId::Eu => "EU",
            RegionId::De => "DE",
            RegionId::UsAts => "US_ATS",
        }
    }

    pub fn profile(self) -> RegionProfile {
        let (paper, margins, density, ats_oriented) = match self {
            RegionId::Us => (PaperSize::Letter, Margins::all(36.0), Density::Normal, false),
            RegionId::Ca => (PaperSize::Letter, Margins::all(36.0), Density::Normal, false),
            RegionId::Uk => (PaperSize::A4, Margins::all(40.0), Density::Compact, false),
            RegionId::Eu => (PaperSize::A4, Margins::all(40.0), Density::Normal, false),
            RegionId::De => (PaperSize::A4, Margins::all(48.0), Density::Airy, false),
            RegionId::UsAts => (PaperSize::Letter, Margins::all(54.0), Density::Normal, true),
        };
        RegionProfile {
            id: self,
            paper,
            margins,
            density,
            ats_oriented,
        }
    }
}

impl FromStr for RegionId {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        RegionId::ALL
            .into_iter()
            .find(|r| r.as_str() == normalized)
            .ok_or_else(|| ConstraintError::UnknownRegion(s.to_string()))
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
