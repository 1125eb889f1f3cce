//! Global scan warp: per-row circular horizontal displacement.
//!
//! The unit of distortion is the scanline. Each row gets an intensity from
//! its distance to two sinusoidally swept band centres with a steep
//! power-law falloff; rows inside a band are rotated horizontally by an
//! amount combining two phase-shifted sine waves and a seamless-noise term.
//! Rows with negligible intensity are copied through untouched. Every term
//! is period-1 in `t`, so the warp loops with the rest of the frame.
use std::f32::consts::TAU;

use crate::looptime::{cos_basis, looping_noise_2d, sin_basis};

/// Band half-width as a fraction of the canvas height.
const BAND_WIDTH: f32 = 0.18;
/// Falloff exponent; higher is steeper.
const FALLOFF_POW: i32 = 4;
/// Maximum row shift as a fraction of the canvas width, at full strength.
const MAX_SHIFT_FRAC: f32 = 0.35;
/// Rows below this intensity are passed through unshifted.
const MIN_INTENSITY: f32 = 1e-3;

/// Apply the scan warp from `src` into `dst` (both `width * height`,
/// row-major). The horizontal shift wraps circularly; source indices never
/// leave `[0, width)`.
pub(crate) fn apply_scan_warp(
    src: &[u8],
    dst: &mut [u8],
    width: u32,
    height: u32,
    t: f32,
    strength: f32,
) {
    debug_assert_eq!(src.len(), (width * height) as usize);
    debug_assert_eq!(dst.len(), src.len());

    let w = width as usize;
    let center_a = sin_basis(t);
    let center_b = cos_basis(2.0 * t);

    for y in 0..height as usize {
        let row = y * w;
        let yn = (y as f32 + 0.5) / height as f32;

        let intensity = band_falloff(yn - center_a).max(band_falloff(yn - center_b));
        if strength.abs() * intensity < MIN_INTENSITY {
            dst[row..row + w].copy_from_slice(&src[row..row + w]);
            continue;
        }

        let wave = (TAU * (t + yn * 3.1)).sin() * 0.6 + (TAU * (2.0 * t + yn * 7.7 + 0.25)).sin() * 0.4;
        let ripple = looping_noise_2d(yn * 6.0, 17.0, t, 1.0, 1.0) - 0.5;
        let shift =
            (strength * intensity * (wave + ripple) * MAX_SHIFT_FRAC * width as f32).round() as i64;

        for x in 0..w {
            let sx = (x as i64 - shift).rem_euclid(width as i64) as usize;
            dst[row + x] = src[row + sx];
        }
    }
}

#[inline]
fn band_falloff(dist: f32) -> f32 {
    (1.0 - (dist.abs() / BAND_WIDTH).min(1.0)).powi(FALLOFF_POW)
}
