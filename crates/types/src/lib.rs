pub mod geometry;
pub mod ids;

pub use geometry::{Frame, Size};
pub use ids::{FieldPath, NodeId};
