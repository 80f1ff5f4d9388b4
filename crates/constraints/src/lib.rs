pub mod builder;
pub mod density;
pub mod dimension;
pub mod error;
pub mod frames;
pub mod preset;
pub mod region;

pub use builder::{BuildOptions, LayoutConstraints, build, build_named, default_preset};
pub use density::{Density, DensityTokens};
pub use dimension::{Margins, PaperSize};
pub use error::ConstraintError;
pub use frames::{FrameName, FrameSet};
pub use preset::{HeaderSpan, PresetId, PresetSpec, SidebarPosition};
pub use region::{RegionId, RegionProfile};
