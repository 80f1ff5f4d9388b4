use quire_constraints::ConstraintError;
use quire_layout::LayoutError;
use thiserror::Error;

/// Errors for the whole profile -> paginated tree pipeline and the
/// regression harness. Geometric defects are never errors; they are reported
/// as diagnostics in the validation report.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Invalid layout configuration: {0}")]
    Constraint(#[from] ConstraintError),

    #[error("Snapshot error: {0}")]
    Snapshot(String),
}
