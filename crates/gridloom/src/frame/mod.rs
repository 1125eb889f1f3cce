//! Frame assembly: region layout, per-frame compositing, and the pixel
//! remapping passes (scan warp, pointer lens).
pub mod lens;
pub mod region;
pub mod renderer;
pub mod warp;

pub use lens::LensParams;
pub use region::{derive_variant, RegionState};
pub use renderer::{FrameParams, FrameRenderer};
