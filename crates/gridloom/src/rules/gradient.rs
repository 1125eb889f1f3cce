//! Dithered gradient fill.
//!
//! A swept gradient dithered through the average of two decorrelated
//! value-noise samples. The averaged mask behaves like blue noise and gives
//! far smoother tonal steps than the ordered Bayer matrix.
use std::f32::consts::TAU;

use rand::RngCore;

use crate::looptime::{cos_basis, sin_basis, value_noise_2d};
use crate::rng::rand01;
use crate::rules::FillParams;
use crate::subdivide::Rect;

pub(super) fn fill(
    bitmap: &mut [u8],
    bw: u32,
    bh: u32,
    rect: Rect,
    t: f32,
    rng: &mut dyn RngCore,
    params: &FillParams,
) {
    let angle = if rand01(rng) < 0.35 {
        rand01(rng) * TAU
    } else {
        0.0
    };
    let dx = angle.cos();
    let dy = angle.sin();

    let cycles = (0.5 + rand01(rng) * 1.5) / params.scale.max(0.1);
    let phase = sin_basis(t);
    let warp = cos_basis(t + 0.3) * 0.15;

    let noise_seed = rand01(rng) * 1000.0;
    let density = params.density;

    let max_proj = bw.max(bh).max(1) as f32;

    let w = bw as usize;
    for y in 0..bh as usize {
        for x in 0..bw as usize {
            let gx = rect.x as f32 + x as f32;
            let gy = rect.y as f32 + y as f32;

            let proj = (x as f32 * dx + y as f32 * dy) / max_proj * cycles + phase;
            let warp_n = value_noise_2d((gx + noise_seed) * 0.05, (gy + noise_seed) * 0.05);
            let value = (proj + warp_n * warp).rem_euclid(1.0);

            let shifted = (value + (density - 0.5) * 0.6).clamp(0.0, 1.0);

            let d1 = value_noise_2d(gx * 0.97 + noise_seed, gy * 0.97 + noise_seed);
            let d2 = value_noise_2d(gx * 1.73 + noise_seed + 50.0, gy * 1.73 + noise_seed + 50.0);
            let dither = (d1 + d2) * 0.5;

            bitmap[y * w + x] = u8::from(shifted > dither);
        }
    }
}
