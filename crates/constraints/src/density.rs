//! Density classes and their fixed spacing/typography tokens.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    #[default]
    Normal,
    Airy,
}

/// Spacing and font-size tokens selected by a [`Density`]. All values in points
/// except `line_height`, which is a multiplier of the font size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityTokens {
    /// Vertical gap between top-level sections.
    pub section_gap: f32,
    /// Vertical gap between entries inside a section.
    pub item_gap: f32,
    /// Vertical gap between blocks inside an entry (e.g. bullet to bullet).
    pub block_gap: f32,
    pub body_font_size: f32,
    pub heading_font_size: f32,
    pub title_font_size: f32,
    pub line_height: f32,
    /// Inner inset of sidebar and rail columns.
    pub sidebar_padding: f32,
}

const COMPACT: DensityTokens = DensityTokens {
    section_gap: 10.0,
    item_gap: 4.0,
    block_gap: 2.0,
    body_font_size: 9.0,
    heading_font_size: 11.0,
    title_font_size: 20.0,
    line_height: 1.2,
    sidebar_padding: 14.0,
};

const NORMAL: DensityTokens = DensityTokens {
    section_gap: 14.0,
    item_gap: 6.0,
    block_gap: 3.0,
    body_font_size: 10.0,
    heading_font_size: 12.0,
    title_font_size: 24.0,
    line_height: 1.3,
    sidebar_padding: 18.0,
};

const AIRY: DensityTokens = DensityTokens {
    section_gap: 18.0,
    item_gap: 8.0,
    block_gap: 4.0,
    body_font_size: 11.0,
    heading_font_size: 13.0,
    title_font_size: 26.0,
    line_height: 1.45,
    sidebar_padding: 22.0,
};

impl Density {
    pub fn tokens(self) -> DensityTokens {
        match self {
            Density::Compact => COMPACT,
            Density::Normal => NORMAL,
            Density::Airy => AIRY,
        }
    }
}

impl Default for DensityTokens {
    fn default() -> Self {
        NORMAL
    }
}
