//! Document layout and pagination for structured profiles.
//!
//! The pipeline resolves page constraints for a region and preset, lays the
//! content out on one (possibly overflowing) page, splits it across fixed
//! size pages and validates the result. [`harness`] runs the whole matrix of
//! golden profiles for regression snapshots.

pub mod error;
pub mod executor;
pub mod harness;
pub mod pipeline;
pub mod profile;

pub use error::PipelineError;
pub use pipeline::{LayoutPipeline, PipelineBuilder, RenderOutput};
pub use profile::{DisplayOptions, Profile, build_scene};

pub use quire_constraints as constraints;
pub use quire_layout as layout;
pub use quire_types as types;
