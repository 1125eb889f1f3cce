//! Time-windowed event predicates and their bitmap effects.
//!
//! All windows are fixed fractions of the unit loop so events read the same
//! across variants. Distances on the loop are wrapped: an event at
//! `t = 0.01` is active when queried at `t = 0.99`.
use crate::variant::EventDef;

/// Invert pulse length, centered on the event time.
pub const INVERT_DURATION: f32 = 0.06;
/// Scanline sweep length, centered on the event time.
pub const SCANLINE_DURATION: f32 = 0.12;
/// Rule-swap hold length, forward from the event time.
pub const RULE_SWAP_DURATION: f32 = 0.15;

/// Shortest signed distance from `b` to `a` on the `[0, 1)` loop,
/// in `(-0.5, 0.5]`.
#[inline]
pub fn signed_wrap_dist(a: f32, b: f32) -> f32 {
    let mut d = a - b;
    if d > 0.5 {
        d -= 1.0;
    }
    if d < -0.5 {
        d += 1.0;
    }
    d
}

/// Shortest unsigned distance on the `[0, 1)` loop.
#[inline]
pub fn wrap_dist(a: f32, b: f32) -> f32 {
    signed_wrap_dist(a, b).abs()
}

/// True while an invert pulse is active at time `t`.
#[inline]
pub fn is_invert_active(event: &EventDef, t: f32) -> bool {
    wrap_dist(t, event.t) < INVERT_DURATION / 2.0
}

/// Normalized scanline position in `[0, 1]` sweeping top to bottom over the
/// event window, or `None` outside the window.
#[inline]
pub fn scanline_y(event: &EventDef, t: f32) -> Option<f32> {
    let half = SCANLINE_DURATION / 2.0;
    let d = signed_wrap_dist(t, event.t);
    if d.abs() > half {
        return None;
    }
    Some((d + half) / SCANLINE_DURATION)
}

/// True while the region should render its fallback rule instead of its
/// primary one. The window is forward-only from the event time.
#[inline]
pub fn is_rule_swapped(event: &EventDef, t: f32) -> bool {
    let d = signed_wrap_dist(t, event.t);
    (0.0..RULE_SWAP_DURATION).contains(&d)
}

/// Flip every cell of a bitmap.
pub fn invert_bitmap(bitmap: &mut [u8]) {
    for cell in bitmap.iter_mut() {
        *cell ^= 1;
    }
}

/// Flip one bitmap row, selected by a normalized y position.
pub fn apply_scanline(bitmap: &mut [u8], bw: u32, bh: u32, normalized_y: f32) {
    debug_assert_eq!(bitmap.len(), (bw * bh) as usize);
    let row = (normalized_y * bh as f32).floor() as i64;
    if row < 0 || row >= bh as i64 {
        return;
    }
    let start = row as usize * bw as usize;
    for cell in &mut bitmap[start..start + bw as usize] {
        *cell ^= 1;
    }
}
