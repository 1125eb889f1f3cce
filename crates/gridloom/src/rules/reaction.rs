//! Reaction-diffusion-like fill.
//!
//! A discretized local-averaging step blended with a cubic reaction term,
//! advanced a t-dependent number of iterations from a fixed random
//! concentration field, then thresholded. Like the automaton, it restarts
//! from the seeded field every frame rather than integrating forward.
use rand::RngCore;

use crate::looptime::triangle_basis;
use crate::rng::rand01;
use crate::rules::FillParams;
use crate::subdivide::Rect;

const TOTAL_ITERATIONS: f32 = 8.0;
const DIFFUSION_RATE: f32 = 0.2;

pub(super) fn fill(
    bitmap: &mut [u8],
    bw: u32,
    bh: u32,
    _rect: Rect,
    t: f32,
    rng: &mut dyn RngCore,
    params: &FillParams,
) {
    let w = bw as usize;
    let h = bh as usize;
    let size = w * h;

    let seed_prob = 0.15 + params.density * 0.3;
    let mut u = vec![0.0f32; size];
    for cell in u.iter_mut() {
        *cell = if rand01(rng) < seed_prob { 1.0 } else { 0.0 };
    }

    let target = (triangle_basis(t) * TOTAL_ITERATIONS).round() as u32;
    let mut tmp = vec![0.0f32; size];

    for _ in 0..target {
        for y in 0..h {
            for x in 0..w {
                let mut sum = 0.0f32;
                for dy in [h - 1, 0, 1] {
                    for dx in [w - 1, 0, 1] {
                        let nx = (x + dx) % w;
                        let ny = (y + dy) % h;
                        sum += u[ny * w + nx];
                    }
                }
                let avg = sum / 9.0;
                let val = u[y * w + x];
                let reacted =
                    val + DIFFUSION_RATE * (avg - val) + 0.02 * (val * (1.0 - val) * (val - 0.3));
                tmp[y * w + x] = reacted.clamp(0.0, 1.0);
            }
        }
        u.copy_from_slice(&tmp);
    }

    for (cell, value) in bitmap.iter_mut().zip(u.iter()) {
        *cell = u8::from(*value > 0.5);
    }
}
