/// Tolerance for floating point noise when comparing against the page bottom.
pub const FIT_EPSILON: f32 = 0.01;

pub struct FitAnalysis {
    pub fits: bool,
    /// How far the candidate's bottom reaches past the available height (0 when it fits).
    pub overflow: f32,
}

/// Checks whether content ending at `end_y` (content space) fits on a page
/// that starts at `page_offset` and holds `available_height`.
///
/// An exact fit is a fit.
pub fn check_fit(page_offset: f32, end_y: f32, available_height: f32) -> FitAnalysis {
    let used = end_y - page_offset;
    FitAnalysis {
        fits: used <= available_height + FIT_EPSILON,
        overflow: (used - available_height).max(0.0),
    }
}
