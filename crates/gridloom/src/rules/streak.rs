//! Angled streak fill.
//!
//! Dense banding perpendicular to a per-region angle, with noise-modulated
//! local frequency and noise-perturbed band edges. The edge noise keeps the
//! bands from terminating in a hard line.
use std::f32::consts::PI;

use rand::RngCore;

use crate::looptime::{cos_basis, looping_noise_2d, sin_basis};
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
    let offset_y = rand01(rng) * 200.0;
    let offset_x = rand01(rng) * 200.0;

    // Mostly horizontal bands, tilted up to +/-54 degrees.
    let angle = (rand01(rng) - 0.5) * PI * 0.6;
    let ax = -angle.sin();
    let ay = angle.cos();

    let base_freq = 0.3 + rand01(rng) * 0.5;
    let freq = base_freq / params.scale.max(0.1);

    let noise_scale = 0.04 + rand01(rng) * 0.06;
    let phase = sin_basis(t) * 4.0;
    let drift = cos_basis(t + 0.3) * 2.0;

    let duty = 0.2 + params.density * 0.6;

    let w = bw as usize;
    for y in 0..bh as usize {
        for x in 0..bw as usize {
            let gx = rect.x as f32 + x as f32;
            let gy = rect.y as f32 + y as f32;
            let proj = gx * ax + gy * ay;

            let nx = (gx + offset_x) * noise_scale;
            let ny = (gy + offset_y) * noise_scale;
            let n_mod = looping_noise_2d(nx, ny, t, 1.0, 1.2);
            let local_freq = freq * (0.5 + n_mod * 1.5);

            let band = (proj * local_freq + phase).rem_euclid(1.0);
            let on = if band < duty {
                let edge = looping_noise_2d(
                    (gx + offset_x) * noise_scale * 2.0,
                    (gy + offset_y) * noise_scale * 0.5,
                    t,
                    1.0,
                    1.0,
                );
                edge >= 0.15
            } else {
                let edge = looping_noise_2d(
                    (gx + offset_x + drift) * noise_scale * 3.0,
                    (gy + offset_y) * noise_scale,
                    t,
                    1.0,
                    1.0,
                );
                edge > 0.92
            };

            bitmap[y * w + x] = u8::from(on);
        }
    }
}
