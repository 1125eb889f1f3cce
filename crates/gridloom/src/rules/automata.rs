//! Cellular automaton fill.
//!
//! Re-seeds the same random initial state every frame and advances a
//! t-dependent number of steps from it. The triangle wave brings the step
//! count back to zero at both ends of the loop, which is what makes the
//! animation seamless; carrying state between frames would break both
//! determinism and the loop.
use rand::RngCore;

use crate::looptime::triangle_basis;
use crate::rng::rand01;
use crate::rules::FillParams;
use crate::subdivide::Rect;

const BIRTH_MIN: u32 = 3;
const BIRTH_MAX: u32 = 3;
const SURVIVE_MIN: u32 = 2;
const SURVIVE_MAX: u32 = 3;
const MAX_STEPS: f32 = 6.0;

/// Totalistic 2-state automaton (B3/S23) on a torus.
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

    let seed_prob = 0.25 + params.density * 0.3;
    let mut state = vec![0u8; size];
    for cell in state.iter_mut() {
        *cell = u8::from(rand01(rng) < seed_prob);
    }

    let steps = (triangle_basis(t) * MAX_STEPS).round() as u32;
    let mut buf = vec![0u8; size];

    for _ in 0..steps {
        for y in 0..h {
            for x in 0..w {
                let mut neighbors = 0u32;
                for dy in [h - 1, 0, 1] {
                    for dx in [w - 1, 0, 1] {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let nx = (x + dx) % w;
                        let ny = (y + dy) % h;
                        neighbors += state[ny * w + nx] as u32;
                    }
                }
                let alive = state[y * w + x] == 1;
                buf[y * w + x] = if alive {
                    u8::from((SURVIVE_MIN..=SURVIVE_MAX).contains(&neighbors))
                } else {
                    u8::from((BIRTH_MIN..=BIRTH_MAX).contains(&neighbors))
                };
            }
        }
        state.copy_from_slice(&buf);
    }

    bitmap.copy_from_slice(&state);
}
