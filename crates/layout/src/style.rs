use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
}

/// The style facts later stages need; everything visual stays with the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedStyle {
    pub font_size: f32,
    pub line_height: f32,
    #[serde(default)]
    pub text_transform: TextTransform,
}

impl ComputedStyle {
    pub fn new(font_size: f32, line_height: f32) -> Self {
        Self {
            font_size,
            line_height,
            text_transform: TextTransform::None,
        }
    }

    pub fn with_transform(mut self, text_transform: TextTransform) -> Self {
        self.text_transform = text_transform;
        self
    }

    /// Height of one line of text in points.
    pub fn line_box(&self) -> f32 {
        self.font_size * self.line_height
    }
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self::new(10.0, 1.3)
    }
}
