//! Thresholded looping-noise fill.
use rand::RngCore;

use crate::looptime::{looping_noise_2d, sin_basis};
use crate::rng::rand01;
use crate::rules::FillParams;
use crate::subdivide::Rect;

/// Sample looping 2D noise and threshold to black/white. The threshold
/// animates with loop time; `noise_amount` sets the modulation depth.
pub(super) fn fill(
    bitmap: &mut [u8],
    bw: u32,
    bh: u32,
    rect: Rect,
    t: f32,
    rng: &mut dyn RngCore,
    params: &FillParams,
) {
    let offset_x = rand01(rng) * 100.0;
    let offset_y = rand01(rng) * 100.0;
    let base_freq = 0.08 + rand01(rng) * 0.12;
    let base_threshold = 0.35 + rand01(rng) * 0.3;

    let freq = base_freq * params.scale.max(0.1);
    let threshold = base_threshold
        + (params.density - 0.5) * 0.3
        + sin_basis(t) * 0.15 * params.noise_amount;

    let w = bw as usize;
    for y in 0..bh as usize {
        for x in 0..bw as usize {
            let nx = (rect.x as f32 + x as f32 + offset_x) * freq;
            let ny = (rect.y as f32 + y as f32 + offset_y) * freq;
            let n = looping_noise_2d(nx, ny, t, 1.0, 1.5);
            bitmap[y * w + x] = u8::from(n < threshold);
        }
    }
}
