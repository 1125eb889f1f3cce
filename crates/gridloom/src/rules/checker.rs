//! Checker / grid / brick fill.
use std::f32::consts::PI;

use rand::RngCore;

use crate::looptime::{cos_basis, sin_basis};
use crate::rng::{rand_int, rand01};
use crate::rules::FillParams;
use crate::subdivide::Rect;

/// Regular tiling at a per-region angle, with three sub-variants: pure
/// checkerboard, grid lines, and offset bricks. Phase drift gives a slow
/// marching effect.
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

    let base_tile = 3.0 + rand01(rng) * 6.0;
    let tile = (base_tile * params.scale.powf(1.2)).max(2.0);

    let duty = 0.25 + params.density * 0.5;

    let phase_x = sin_basis(t) * tile * 0.5;
    let phase_y = cos_basis(t + 0.3) * tile * 0.5;

    let variant = rand_int(rng, 0, 3);

    let w = bw as usize;
    for y in 0..bh as usize {
        for x in 0..bw as usize {
            let rx = x as f32 * cos_a + y as f32 * sin_a + phase_x;
            let ry = -(x as f32) * sin_a + y as f32 * cos_a + phase_y;

            let nx = rx.rem_euclid(tile) / tile;
            let ny = ry.rem_euclid(tile) / tile;

            let on = match variant {
                0 => {
                    let cell_x = (rx / tile).floor() as i64;
                    let cell_y = (ry / tile).floor() as i64;
                    (cell_x + cell_y) & 1 == 0
                }
                1 => nx < duty || ny < duty,
                _ => {
                    let row = (ry / tile).floor() as i64;
                    let offset = if row & 1 == 1 { tile * 0.5 } else { 0.0 };
                    let bx = (rx + offset).rem_euclid(tile) / tile;
                    bx < duty && ny < duty
                }
            };

            bitmap[y * w + x] = u8::from(on);
        }
    }
}
