use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Unknown region '{0}'")]
    UnknownRegion(String),

    #[error("Unknown layout preset '{0}'")]
    UnknownPreset(String),

    #[error("Unknown sidebar position '{0}', expected 'left' or 'right'")]
    UnknownSidebarPosition(String),
}
