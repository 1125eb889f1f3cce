//! Per-frame compositing.
//!
//! [`FrameRenderer`] owns the variant, its regions, and three reusable
//! buffers (occupancy, warped occupancy, packed pixels). One call to
//! [`FrameRenderer::render`] computes a complete frame; nothing is carried
//! over between frames except the allocations, so skipping or repeating a
//! frame has no side effects.
use tracing::trace;

use crate::error::Result;
use crate::events::{
    apply_scanline, invert_bitmap, is_invert_active, is_rule_swapped, scanline_y,
};
use crate::frame::lens::{source_coord, LensParams};
use crate::frame::region::{derive_variant, RegionState};
use crate::frame::warp::apply_scan_warp;
use crate::looptime::loop_t;
use crate::rng::Mulberry32;
use crate::rules::{fill_rule, FillParams};
use crate::variant::{EventKind, Overrides, VariantConfig};

/// Per-frame tunables. Changing any of these between frames requires no
/// re-derivation; they are consumed fresh on every [`FrameRenderer::render`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct FrameParams {
    /// Playback speed multiplier applied to elapsed time.
    pub speed: f64,
    /// Animated threshold modulation depth shared by the fill rules.
    pub noise_amount: f32,
    /// Spatial frequency dial shared by the fill rules.
    pub scale: f32,
    /// Fill-fraction dial shared by the fill rules.
    pub density: f32,
    /// Scan warp strength; 0 disables the pass.
    pub warp: f32,
    /// Packed color written for marked cells.
    pub foreground: u32,
    /// Packed color written for background cells.
    pub background: u32,
    /// Master switch for the event system.
    pub events_enabled: bool,
    /// Optional pointer lens.
    pub lens: Option<LensParams>,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            speed: 1.0,
            noise_amount: 0.5,
            scale: 1.0,
            density: 0.5,
            warp: 0.0,
            foreground: 0xFFFF_FFFF,
            background: 0x0000_00FF,
            events_enabled: true,
            lens: None,
        }
    }
}

impl FrameParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_noise_amount(mut self, noise_amount: f32) -> Self {
        self.noise_amount = noise_amount;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_warp(mut self, warp: f32) -> Self {
        self.warp = warp;
        self
    }

    pub fn with_colors(mut self, foreground: u32, background: u32) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    pub fn with_events_enabled(mut self, events_enabled: bool) -> Self {
        self.events_enabled = events_enabled;
        self
    }

    pub fn with_lens(mut self, lens: LensParams) -> Self {
        self.lens = Some(lens);
        self
    }
}

/// Assembles frames for one variant.
pub struct FrameRenderer {
    config: VariantConfig,
    regions: Vec<RegionState>,
    grid: Vec<u8>,
    warped: Vec<u8>,
    pixels: Vec<u32>,
}

impl FrameRenderer {
    /// Derive the variant for `seed` and set up the frame buffers.
    pub fn new(seed: u32, overrides: &Overrides) -> Result<Self> {
        let (config, regions) = derive_variant(seed, overrides)?;
        Self::from_parts(config, regions)
    }

    /// Build a renderer from an already-derived variant.
    pub fn from_parts(config: VariantConfig, regions: Vec<RegionState>) -> Result<Self> {
        config.validate()?;
        let cells = (config.grid_res * config.grid_res) as usize;
        Ok(Self {
            config,
            regions,
            grid: vec![0; cells],
            warped: vec![0; cells],
            pixels: vec![0; cells],
        })
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    pub fn regions(&self) -> &[RegionState] {
        &self.regions
    }

    /// Canvas side length in cells.
    pub fn grid_res(&self) -> u32 {
        self.config.grid_res
    }

    /// Packed pixels from the most recent [`render`](Self::render) call,
    /// one per cell, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Render the frame for the given elapsed wall-clock time.
    ///
    /// Fully deterministic in `(config, elapsed_ms, params)`: every region
    /// RNG is re-seeded, so frames may be computed in any order, repeated,
    /// or skipped.
    pub fn render(&mut self, elapsed_ms: f64, params: &FrameParams) -> &[u32] {
        let t = loop_t(elapsed_ms * params.speed, self.config.period_ms as f64);
        let res = self.config.grid_res as usize;

        let fill_params = FillParams {
            scale: params.scale,
            density: params.density,
            noise_amount: params.noise_amount,
        };

        self.grid.fill(0);

        for region in &mut self.regions {
            let mut rng = Mulberry32::new(region.rng_seed);

            let mut rule = region.rule;
            if params.events_enabled {
                for ev in &region.events {
                    if ev.kind == EventKind::RuleSwap && is_rule_swapped(ev, t) {
                        rule = region.alt_rule;
                        break;
                    }
                }
            }

            let rect = region.rect;
            fill_rule(
                rule,
                &mut region.bitmap,
                rect.w,
                rect.h,
                rect,
                t,
                &mut rng,
                &fill_params,
            );

            if params.events_enabled {
                for ev in &region.events {
                    match ev.kind {
                        EventKind::Invert => {
                            if is_invert_active(ev, t) {
                                invert_bitmap(&mut region.bitmap);
                            }
                        }
                        EventKind::Scanline => {
                            if let Some(sy) = scanline_y(ev, t) {
                                apply_scanline(&mut region.bitmap, rect.w, rect.h, sy);
                            }
                        }
                        EventKind::RuleSwap => {}
                    }
                }
            }

            // Blit the region bitmap into the shared occupancy buffer.
            let bw = rect.w as usize;
            for y in 0..rect.h as usize {
                let dst = (rect.y as usize + y) * res + rect.x as usize;
                self.grid[dst..dst + bw].copy_from_slice(&region.bitmap[y * bw..(y + 1) * bw]);
            }
        }

        if params.warp != 0.0 {
            apply_scan_warp(
                &self.grid,
                &mut self.warped,
                self.config.grid_res,
                self.config.grid_res,
                t,
                params.warp,
            );
        } else {
            self.warped.copy_from_slice(&self.grid);
        }

        for y in 0..self.config.grid_res {
            for x in 0..self.config.grid_res {
                let (sx, sy) = match &params.lens {
                    Some(lens) => {
                        source_coord(x, y, self.config.grid_res, self.config.grid_res, lens)
                    }
                    None => (x, y),
                };
                let value = self.warped[sy as usize * res + sx as usize];
                self.pixels[y as usize * res + x as usize] = if value != 0 {
                    params.foreground
                } else {
                    params.background
                };
            }
        }

        trace!(t, regions = self.regions.len(), "rendered frame");
        &self.pixels
    }
}
