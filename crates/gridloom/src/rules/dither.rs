//! Ordered (Bayer) dithering fill.
use rand::RngCore;

use crate::looptime::{cos_basis, sin_basis};
use crate::rng::rand01;
use crate::rules::FillParams;
use crate::subdivide::Rect;

/// 8x8 Bayer matrix, normalized to `[0, 1)`.
#[rustfmt::skip]
const BAYER8: [f32; 64] = [
     0.0 / 64.0, 48.0 / 64.0, 12.0 / 64.0, 60.0 / 64.0,  3.0 / 64.0, 51.0 / 64.0, 15.0 / 64.0, 63.0 / 64.0,
    32.0 / 64.0, 16.0 / 64.0, 44.0 / 64.0, 28.0 / 64.0, 35.0 / 64.0, 19.0 / 64.0, 47.0 / 64.0, 31.0 / 64.0,
     8.0 / 64.0, 56.0 / 64.0,  4.0 / 64.0, 52.0 / 64.0, 11.0 / 64.0, 59.0 / 64.0,  7.0 / 64.0, 55.0 / 64.0,
    40.0 / 64.0, 24.0 / 64.0, 36.0 / 64.0, 20.0 / 64.0, 43.0 / 64.0, 27.0 / 64.0, 39.0 / 64.0, 23.0 / 64.0,
     2.0 / 64.0, 50.0 / 64.0, 14.0 / 64.0, 62.0 / 64.0,  1.0 / 64.0, 49.0 / 64.0, 13.0 / 64.0, 61.0 / 64.0,
    34.0 / 64.0, 18.0 / 64.0, 46.0 / 64.0, 30.0 / 64.0, 33.0 / 64.0, 17.0 / 64.0, 45.0 / 64.0, 29.0 / 64.0,
    10.0 / 64.0, 58.0 / 64.0,  6.0 / 64.0, 54.0 / 64.0,  9.0 / 64.0, 57.0 / 64.0,  5.0 / 64.0, 53.0 / 64.0,
    42.0 / 64.0, 26.0 / 64.0, 38.0 / 64.0, 22.0 / 64.0, 41.0 / 64.0, 25.0 / 64.0, 37.0 / 64.0, 21.0 / 64.0,
];

/// Bayer-dither an animated linear gradient. The gradient angle is fixed per
/// region; its phase sweeps with loop time. `scale` coarsens the matrix
/// sampling granularity, `density` biases the comparison threshold.
pub(super) fn fill(
    bitmap: &mut [u8],
    bw: u32,
    bh: u32,
    _rect: Rect,
    t: f32,
    rng: &mut dyn RngCore,
    params: &FillParams,
) {
    let angle = rand01(rng) * std::f32::consts::TAU;
    let dx = angle.cos();
    let dy = angle.sin();
    let phase = sin_basis(t);
    let phase_b = cos_basis(t + 0.25);

    let max_dim = bw.max(bh).max(1) as f32;
    let granularity = (params.scale.round() as i64).max(1) as usize;
    let bias = params.density * 2.0;

    let w = bw as usize;
    for y in 0..bh as usize {
        for x in 0..bw as usize {
            let grad = ((x as f32 * dx + y as f32 * dy) / max_dim + phase).rem_euclid(1.0);
            let value = (grad + phase_b * 0.3).rem_euclid(1.0);
            let bayer = BAYER8[((y / granularity) & 7) * 8 + ((x / granularity) & 7)];
            bitmap[y * w + x] = u8::from(value < bayer * bias);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bayer_matrix_is_a_permutation_of_64ths() {
        let mut seen = [false; 64];
        for v in BAYER8 {
            let idx = (v * 64.0).round() as usize;
            assert!(!seen[idx], "duplicate matrix entry {idx}");
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
