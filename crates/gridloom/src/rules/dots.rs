//! Dot-grid fill.
use std::f32::consts::PI;

use rand::RngCore;

use crate::looptime::{cos_basis, sin_basis};
use crate::rng::rand01;
use crate::rules::FillParams;
use crate::subdivide::Rect;

/// Evenly spaced circles on a lattice at a per-region angle. `scale`
/// controls spacing, `density` controls dot size; the lattice phase drifts
/// gently with loop time.
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
    let cos_a = angle.cos();
    let sin_a = angle.sin();

    let base_spacing = 3.0 + rand01(rng) * 5.0;
    let spacing = (base_spacing * params.scale.powf(1.2)).max(2.0);

    let radius = spacing * (0.1 + params.density * 0.35);
    let r2 = radius * radius;

    let phase_x = sin_basis(t) * spacing * 0.4;
    let phase_y = cos_basis(t + 0.25) * spacing * 0.4;

    let w = bw as usize;
    for y in 0..bh as usize {
        for x in 0..bw as usize {
            let rx = x as f32 * cos_a + y as f32 * sin_a + phase_x;
            let ry = -(x as f32) * sin_a + y as f32 * cos_a + phase_y;

            let gx = (rx / spacing).round() * spacing;
            let gy = (ry / spacing).round() * spacing;
            let dx = rx - gx;
            let dy = ry - gy;

            bitmap[y * w + x] = u8::from(dx * dx + dy * dy < r2);
        }
    }
}
