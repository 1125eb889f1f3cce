//! Loop time and seamless periodic basis functions.
//!
//! Everything time-dependent in the pipeline consumes the normalized loop time
//! `t` in `[0, 1)` through the functions here. The bases are exactly periodic
//! with period 1; [`looping_noise_2d`] stays continuous across the `t = 1 -> 0`
//! wrap by offsetting the spatial field along a circle traced by
//! [`circle_point`], so `t = 0` and `t = 1` sample the identical field.
use std::f32::consts::TAU;

use glam::Vec2;

/// Normalized loop time from elapsed milliseconds and the loop period.
///
/// Always in `[0, 1)`, including for negative elapsed values.
#[inline]
pub fn loop_t(elapsed_ms: f64, period_ms: f64) -> f32 {
    debug_assert!(period_ms > 0.0, "period_ms must be > 0");
    (elapsed_ms.rem_euclid(period_ms) / period_ms) as f32 % 1.0
}

/// Sinusoidal oscillation mapped to `[0, 1]`.
#[inline]
pub fn sin_basis(t: f32) -> f32 {
    ((t * TAU).sin() + 1.0) * 0.5
}

/// Cosine oscillation mapped to `[0, 1]`.
#[inline]
pub fn cos_basis(t: f32) -> f32 {
    ((t * TAU).cos() + 1.0) * 0.5
}

/// Triangle wave in `[0, 1]`: 0 at both ends of the loop, 1 at the midpoint.
#[inline]
pub fn triangle_basis(t: f32) -> f32 {
    1.0 - (2.0 * t.rem_euclid(1.0) - 1.0).abs()
}

/// Point on a circle of the given radius, traced once as `t` goes `0 -> 1`.
///
/// Used to lift 2D noise into two auxiliary dimensions: sampling along this
/// circle makes the temporal axis seamless because `t = 0` and `t = 1` map to
/// the same point.
#[inline]
pub fn circle_point(t: f32, radius: f32) -> Vec2 {
    Vec2::new((t * TAU).cos() * radius, (t * TAU).sin() * radius)
}

/// Pure integer hash of lattice coordinates, uniform in `[0, 1)`.
///
/// Consumes no RNG stream: spatial noise must be reproducible without
/// disturbing a region's draw sequence.
#[inline]
fn hash2d(ix: i32, iy: i32) -> f32 {
    let mut h = ix
        .wrapping_mul(374_761_393)
        .wrapping_add(iy.wrapping_mul(668_265_263)) as u32;
    h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    ((h ^ (h >> 16)) >> 8) as f32 / 16_777_216.0
}

#[inline]
fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// 2D value noise in `[0, 1)`: hashed lattice corners, bilinear interpolation
/// with smoothstep easing.
pub fn value_noise_2d(x: f32, y: f32) -> f32 {
    let ix = x.floor();
    let iy = y.floor();
    let fx = smoothstep(x - ix);
    let fy = smoothstep(y - iy);
    let ix = ix as i32;
    let iy = iy as i32;
    let a = hash2d(ix, iy);
    let b = hash2d(ix + 1, iy);
    let c = hash2d(ix, iy + 1);
    let d = hash2d(ix + 1, iy + 1);
    a + (b - a) * fx + (c - a) * fy + (a - b - c + d) * fx * fy
}

/// Looping 2D noise: the value-noise field offset along [`circle_point`] so the
/// sample is continuous over the `t` wrap.
pub fn looping_noise_2d(x: f32, y: f32, t: f32, scale: f32, loop_radius: f32) -> f32 {
    let c = circle_point(t, loop_radius);
    value_noise_2d(x * scale + c.x, y * scale + c.y)
}
