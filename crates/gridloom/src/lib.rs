#![forbid(unsafe_code)]
//! gridloom: seed-driven, seamlessly looping procedural pattern generation.
//!
//! Modules:
//! - rng: deterministic Mulberry32 generator and draw helpers
//! - looptime: normalized loop time, periodic bases, seamless value noise
//! - variant: seed-derived immutable configuration and event schedules
//! - subdivide: recursive BSP partitioning of the cell grid
//! - rules: the ten procedural fill rules and their shared dials
//! - events: time-windowed invert / scanline / rule-swap perturbations
//! - frame: region layout, scan warp, pointer lens, and the frame renderer
//!
//! A frame is a pure function of `(seed, elapsed time, tunables)`: deriving
//! a variant twice and rendering at the same instant yields identical
//! pixels, and every animated quantity has period 1 in loop time, so the
//! output loops without a seam.
pub mod error;
pub mod events;
pub mod frame;
pub mod looptime;
pub mod rng;
pub mod rules;
pub mod subdivide;
pub mod variant;

/// Convenient re-exports for common types. Import with `use gridloom::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::events::{
        is_invert_active, is_rule_swapped, scanline_y, INVERT_DURATION, RULE_SWAP_DURATION,
        SCANLINE_DURATION,
    };
    pub use crate::frame::{derive_variant, FrameParams, FrameRenderer, LensParams, RegionState};
    pub use crate::looptime::{
        circle_point, cos_basis, loop_t, looping_noise_2d, sin_basis, triangle_basis,
        value_noise_2d,
    };
    pub use crate::rng::Mulberry32;
    pub use crate::rules::{fill_rule, FillParams};
    pub use crate::subdivide::{subdivide, Rect, SubdivideConfig};
    pub use crate::variant::{
        derive_config, EventDef, EventKind, Overrides, RuleKind, VariantConfig,
    };
}
