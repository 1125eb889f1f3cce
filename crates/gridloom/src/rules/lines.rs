//! Parallel-line fill.
use std::f32::consts::PI;

use rand::RngCore;

use crate::looptime::{cos_basis, sin_basis};
use crate::rng::{rand_bool, rand01};
use crate::rules::FillParams;
use crate::subdivide::Rect;

/// Fine parallel lines at a per-region angle with animated phase drift.
/// `scale` controls line spacing, `density` controls line thickness.
/// 30% of regions get a second, cross-hatched set.
pub(super) fn fill(
    bitmap: &mut [u8],
    bw: u32,
    bh: u32,
    _rect: Rect,
    t: f32,
    rng: &mut dyn RngCore,
    params: &FillParams,
) {
    let angle = if rand01(rng) < 0.35 {
        rand01(rng) * PI
    } else {
        0.0
    };
    let dx = angle.cos();
    let dy = angle.sin();

    let base_spacing = 2.0 + rand01(rng) * 4.0;
    let spacing = (base_spacing * params.scale.powf(1.5)).max(1.2);

    let thickness = 0.15 + params.density * 0.35;
    let phase = sin_basis(t) * spacing * 0.8;

    let cross_hatch = rand_bool(rng, 0.3);
    let angle2 = angle + PI * (0.3 + rand01(rng) * 0.4);
    let dx2 = angle2.cos();
    let dy2 = angle2.sin();
    let phase2 = cos_basis(t) * spacing * 0.6;

    let w = bw as usize;
    for y in 0..bh as usize {
        for x in 0..bw as usize {
            let proj = x as f32 * dx + y as f32 * dy + phase;
            let pos = proj.rem_euclid(spacing);
            let mut on = pos < spacing * thickness;

            if cross_hatch {
                let proj2 = x as f32 * dx2 + y as f32 * dy2 + phase2;
                let pos2 = proj2.rem_euclid(spacing);
                on = on || pos2 < spacing * thickness;
            }

            bitmap[y * w + x] = u8::from(on);
        }
    }
}
