//! Text height estimation.
//!
//! The geometry pass does not shape text. It asks a [`TextMeasurer`] how many
//! lines a string occupies at a given width; the default approximates every
//! glyph as half an em wide.

use crate::style::ComputedStyle;

pub trait TextMeasurer {
    /// Number of lines `text` wraps to inside `width` points.
    fn line_count(&self, text: &str, width: f32, font_size: f32) -> usize;

    /// Height of the text block. Missing or empty text still occupies one line
    /// so a node never collapses to zero height.
    fn measure_height(&self, text: Option<&str>, width: f32, style: &ComputedStyle) -> f32 {
        let lines = match text {
            Some(t) if !t.trim().is_empty() => self.line_count(t, width, style.font_size).max(1),
            _ => 1,
        };
        lines as f32 * style.line_box()
    }
}

/// `lines = ceil(len / (width / (0.5 * font_size)))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxTextMeasurer;

impl TextMeasurer for ApproxTextMeasurer {
    fn line_count(&self, text: &str, width: f32, font_size: f32) -> usize {
        let len = text.chars().count();
        let chars_per_line = width / (0.5 * font_size);
        if !chars_per_line.is_finite() || chars_per_line <= 0.0 {
            return len.max(1);
        }
        (len as f32 / chars_per_line).ceil() as usize
    }
}
