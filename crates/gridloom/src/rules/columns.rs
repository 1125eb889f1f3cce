//! Angled column fill.
//!
//! Mostly-vertical stripes with noise-modulated widths and drip-edge noise,
//! a curtain/waterfall texture.
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
    let offset_x = rand01(rng) * 200.0;
    let offset_y = rand01(rng) * 200.0;

    let angle = if rand01(rng) < 0.35 {
        PI * 0.5 + (rand01(rng) - 0.5) * PI * 0.6
    } else {
        PI * 0.5
    };
    let ax = angle.cos();
    let ay = angle.sin();

    let base_freq = 0.2 + rand01(rng) * 0.4;
    let freq = base_freq / params.scale.max(0.1);
    let noise_scale = 0.03 + rand01(rng) * 0.05;

    let phase = cos_basis(t) * 3.0;
    let y_drift = sin_basis(t + 0.25) * 2.0;

    let duty = 0.15 + params.density * 0.55;

    let w = bw as usize;
    for y in 0..bh as usize {
        for x in 0..bw as usize {
            let gx = rect.x as f32 + x as f32;
            let gy = rect.y as f32 + y as f32;
            let proj = gx * ax + gy * ay;

            let nx = (gx + offset_x) * noise_scale;
            let ny = (gy + offset_y) * noise_scale;
            let n_mod = looping_noise_2d(nx, ny, t, 1.0, 1.2);
            let local_freq = freq * (0.4 + n_mod * 1.6);

            let stripe = (proj * local_freq + phase).rem_euclid(1.0);
            let on = if stripe < duty {
                let edge = looping_noise_2d(
                    (gx + offset_x) * noise_scale * 0.5,
                    (gy + offset_y + y_drift) * noise_scale * 2.0,
                    t,
                    1.0,
                    1.0,
                );
                edge >= 0.12
            } else {
                let edge = looping_noise_2d(
                    (gx + offset_x) * noise_scale,
                    (gy + offset_y + y_drift) * noise_scale * 3.0,
                    t,
                    1.0,
                    1.0,
                );
                edge > 0.93
            };

            bitmap[y * w + x] = u8::from(on);
        }
    }
}
