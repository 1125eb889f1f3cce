//! Recursive spatial subdivision.
//!
//! Binary-space-partitions a rectangular grid region into an ordered,
//! gap-free cover of axis-aligned sub-rectangles, snapped to the grid unit.
//! Split choices are driven entirely by the caller's RNG stream, so a given
//! seed always produces the same layout.
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rng::{rand_float, rand01};

/// Axis-aligned rectangle in grid-cell units. `w` and `h` are always > 0
/// for rectangles produced by [`subdivide`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Area in grid cells.
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// True if the interiors of `self` and `other` intersect.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Subdivision parameters.
#[derive(Clone, Copy, Debug)]
pub struct SubdivideConfig {
    /// Grid unit; split offsets snap to multiples of this.
    pub grid_step: u32,
    /// Minimum rectangle dimension in grid cells.
    pub min_cells: u32,
    /// Maximum recursion depth.
    pub max_depth: u32,
    /// Probability of stopping a split early (applied past depth 1).
    pub stop_prob: f32,
}

/// Recursively partition `region` into rectangles that tile it exactly.
///
/// Every output rectangle has both dimensions >= `min_cells` grid units,
/// unless the input region itself is too small to split.
pub fn subdivide(region: Rect, config: &SubdivideConfig, rng: &mut dyn RngCore) -> Vec<Rect> {
    debug_assert!(config.grid_step > 0, "grid_step must be > 0");
    debug_assert!(config.min_cells > 0, "min_cells must be > 0");
    let mut out = Vec::new();
    split(region, 0, &mut out, config, rng);
    out
}

fn split(r: Rect, depth: u32, out: &mut Vec<Rect>, cfg: &SubdivideConfig, rng: &mut dyn RngCore) {
    let min_px = cfg.min_cells * cfg.grid_step;

    if depth >= cfg.max_depth || (depth > 1 && rand01(rng) < cfg.stop_prob) {
        out.push(r);
        return;
    }

    let can_split_h = r.w >= min_px * 2;
    let can_split_v = r.h >= min_px * 2;

    if !can_split_h && !can_split_v {
        out.push(r);
        return;
    }

    // Bias toward splitting the longer axis.
    let horizontal = if can_split_h && can_split_v {
        rand01(rng) < r.w as f32 / (r.w + r.h) as f32
    } else {
        can_split_h
    };

    if horizontal {
        let split_w = pick_split(rng, r.w, min_px, cfg.grid_step);
        split(Rect::new(r.x, r.y, split_w, r.h), depth + 1, out, cfg, rng);
        split(
            Rect::new(r.x + split_w, r.y, r.w - split_w, r.h),
            depth + 1,
            out,
            cfg,
            rng,
        );
    } else {
        let split_h = pick_split(rng, r.h, min_px, cfg.grid_step);
        split(Rect::new(r.x, r.y, r.w, split_h), depth + 1, out, cfg, rng);
        split(
            Rect::new(r.x, r.y + split_h, r.w, r.h - split_h),
            depth + 1,
            out,
            cfg,
            rng,
        );
    }
}

/// Uniform split offset in the legal range, snapped to the grid unit and
/// clamped so both children keep at least `min_px`.
fn pick_split(rng: &mut dyn RngCore, extent: u32, min_px: u32, step: u32) -> u32 {
    let max_split = extent - min_px;
    let raw = rand_float(rng, min_px as f32, max_split as f32);
    let snapped = (raw / step as f32).round() as u32 * step;
    snapped.clamp(min_px, max_split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;

    fn check_exact_tiling(region: Rect, rects: &[Rect]) {
        let total: u64 = rects.iter().map(Rect::area).sum();
        assert_eq!(total, region.area(), "areas must sum to the region area");

        for (i, a) in rects.iter().enumerate() {
            assert!(a.w >= 1 && a.h >= 1);
            assert!(a.x >= region.x && a.y >= region.y);
            assert!(a.x + a.w <= region.x + region.w);
            assert!(a.y + a.h <= region.y + region.h);
            for b in &rects[i + 1..] {
                assert!(!a.overlaps(b), "rects {a:?} and {b:?} overlap");
            }
        }
    }

    #[test]
    fn tiles_exactly_across_seeds() {
        let region = Rect::new(0, 0, 64, 64);
        for seed in 0..32u32 {
            let mut rng = Mulberry32::new(seed);
            let cfg = SubdivideConfig {
                grid_step: 1,
                min_cells: 4,
                max_depth: 5,
                stop_prob: 0.15,
            };
            let rects = subdivide(region, &cfg, &mut rng);
            assert!(!rects.is_empty());
            check_exact_tiling(region, &rects);
        }
    }

    #[test]
    fn respects_min_cells() {
        let region = Rect::new(0, 0, 96, 96);
        let cfg = SubdivideConfig {
            grid_step: 1,
            min_cells: 8,
            max_depth: 6,
            stop_prob: 0.1,
        };
        for seed in 0..16u32 {
            let mut rng = Mulberry32::new(seed);
            for r in subdivide(region, &cfg, &mut rng) {
                assert!(r.w >= 8 && r.h >= 8, "undersized rect {r:?}");
            }
        }
    }

    #[test]
    fn unsplittable_region_returned_whole() {
        let region = Rect::new(3, 5, 6, 6);
        let cfg = SubdivideConfig {
            grid_step: 1,
            min_cells: 4,
            max_depth: 4,
            stop_prob: 0.0,
        };
        let mut rng = Mulberry32::new(0);
        let rects = subdivide(region, &cfg, &mut rng);
        assert_eq!(rects, vec![region]);
    }

    #[test]
    fn zero_depth_returns_input() {
        let region = Rect::new(0, 0, 64, 64);
        let cfg = SubdivideConfig {
            grid_step: 1,
            min_cells: 4,
            max_depth: 0,
            stop_prob: 0.0,
        };
        let mut rng = Mulberry32::new(1);
        assert_eq!(subdivide(region, &cfg, &mut rng), vec![region]);
    }

    #[test]
    fn deterministic_for_a_seed() {
        let region = Rect::new(0, 0, 128, 128);
        let cfg = SubdivideConfig {
            grid_step: 1,
            min_cells: 2,
            max_depth: 6,
            stop_prob: 0.2,
        };
        let mut rng_a = Mulberry32::new(42);
        let mut rng_b = Mulberry32::new(42);
        assert_eq!(
            subdivide(region, &cfg, &mut rng_a),
            subdivide(region, &cfg, &mut rng_b)
        );
    }

    #[test]
    fn splits_snap_to_grid_step() {
        let region = Rect::new(0, 0, 96, 96);
        let cfg = SubdivideConfig {
            grid_step: 4,
            min_cells: 2,
            max_depth: 4,
            stop_prob: 0.0,
        };
        let mut rng = Mulberry32::new(11);
        for r in subdivide(region, &cfg, &mut rng) {
            assert_eq!(r.x % 4, 0);
            assert_eq!(r.y % 4, 0);
            assert_eq!(r.w % 4, 0);
            assert_eq!(r.h % 4, 0);
        }
        check_exact_tiling(region, &subdivide(region, &cfg, &mut Mulberry32::new(11)));
    }
}
