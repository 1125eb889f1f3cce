//! Procedural fill rules.
//!
//! Each rule is a pure function from `(region geometry, loop time, region RNG,
//! shared params)` to a binary occupancy bitmap. Rules draw their per-region
//! constants from the RNG once, up front, in a fixed order; the renderer
//! re-seeds the stream every frame, so the same constants come back each time.
//! The rule set is closed: dispatch is a single `match` on [`RuleKind`].
use rand::RngCore;

use crate::subdivide::Rect;
use crate::variant::RuleKind;

mod automata;
mod checker;
mod columns;
mod dither;
mod dots;
mod gradient;
mod lines;
mod noise;
mod reaction;
mod streak;

/// User-tunable dials shared by every rule.
#[derive(Clone, Copy, Debug)]
pub struct FillParams {
    /// Spatial frequency multiplier; the effect is exponential per rule.
    pub scale: f32,
    /// Fill-fraction / threshold bias in `[0, 1]`.
    pub density: f32,
    /// Depth of animated threshold modulation in `[0, 1]`.
    pub noise_amount: f32,
}

impl Default for FillParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            density: 0.5,
            noise_amount: 0.5,
        }
    }
}

impl FillParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_noise_amount(mut self, noise_amount: f32) -> Self {
        self.noise_amount = noise_amount;
        self
    }
}

/// Fill `bitmap` (sized `bw * bh`, row-major) with the given rule's pattern.
///
/// A bitmap sized differently from the declared dimensions is a programming
/// error, not a runtime condition.
pub fn fill_rule(
    kind: RuleKind,
    bitmap: &mut [u8],
    bw: u32,
    bh: u32,
    rect: Rect,
    t: f32,
    rng: &mut dyn RngCore,
    params: &FillParams,
) {
    debug_assert_eq!(
        bitmap.len(),
        (bw * bh) as usize,
        "bitmap size must match region dimensions"
    );
    match kind {
        RuleKind::Noise => noise::fill(bitmap, bw, bh, rect, t, rng, params),
        RuleKind::Dither => dither::fill(bitmap, bw, bh, rect, t, rng, params),
        RuleKind::Automata => automata::fill(bitmap, bw, bh, rect, t, rng, params),
        RuleKind::Reaction => reaction::fill(bitmap, bw, bh, rect, t, rng, params),
        RuleKind::Lines => lines::fill(bitmap, bw, bh, rect, t, rng, params),
        RuleKind::Streak => streak::fill(bitmap, bw, bh, rect, t, rng, params),
        RuleKind::Columns => columns::fill(bitmap, bw, bh, rect, t, rng, params),
        RuleKind::Gradient => gradient::fill(bitmap, bw, bh, rect, t, rng, params),
        RuleKind::Dots => dots::fill(bitmap, bw, bh, rect, t, rng, params),
        RuleKind::Checker => checker::fill(bitmap, bw, bh, rect, t, rng, params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;

    const BW: u32 = 24;
    const BH: u32 = 18;

    fn run(kind: RuleKind, t: f32, seed: u32) -> Vec<u8> {
        let mut bitmap = vec![2u8; (BW * BH) as usize];
        let rect = Rect::new(8, 4, BW, BH);
        let mut rng = Mulberry32::new(seed);
        fill_rule(
            kind,
            &mut bitmap,
            BW,
            BH,
            rect,
            t,
            &mut rng,
            &FillParams::default(),
        );
        bitmap
    }

    #[test]
    fn every_rule_writes_binary_cells() {
        for kind in RuleKind::ALL {
            let bitmap = run(kind, 0.37, 99);
            assert!(
                bitmap.iter().all(|c| *c == 0 || *c == 1),
                "{} left non-binary cells",
                kind.as_str()
            );
        }
    }

    #[test]
    fn every_rule_is_deterministic_per_seed() {
        for kind in RuleKind::ALL {
            assert_eq!(
                run(kind, 0.61, 7),
                run(kind, 0.61, 7),
                "{} not reproducible",
                kind.as_str()
            );
        }
    }

    fn differing_fraction(a: &[u8], b: &[u8]) -> f32 {
        let differing = a.iter().zip(b.iter()).filter(|(x, y)| x != y).count();
        differing as f32 / a.len() as f32
    }

    #[test]
    fn every_rule_closes_the_loop_exactly() {
        // t = 0 and t = 1 sample the same point on the loop; the outputs
        // must agree up to float rounding at threshold boundaries.
        for kind in RuleKind::ALL {
            let lo = run(kind, 0.0, 5);
            let hi = run(kind, 1.0, 5);
            let fraction = differing_fraction(&lo, &hi);
            assert!(
                fraction < 0.005,
                "{} does not close the loop ({fraction} of cells differ)",
                kind.as_str()
            );
        }
    }

    #[test]
    fn every_rule_is_continuous_near_the_wrap() {
        // Thresholded patterns amplify a small phase shift into boundary
        // flips, so the bound is loose; a non-looping rule would differ on
        // the order of half its cells.
        for kind in RuleKind::ALL {
            let lo = run(kind, 0.0001, 5);
            let hi = run(kind, 0.9999, 5);
            let fraction = differing_fraction(&lo, &hi);
            assert!(
                fraction < 0.2,
                "{} jumps at the wrap ({fraction} of cells differ)",
                kind.as_str()
            );
        }
    }

    #[test]
    fn rules_respond_to_scale() {
        // A coarse scale and a fine scale must not produce the same pattern
        // for the spacing-driven rules.
        for kind in [RuleKind::Lines, RuleKind::Dots, RuleKind::Checker] {
            let rect = Rect::new(0, 0, BW, BH);
            let mut fine = vec![0u8; (BW * BH) as usize];
            let mut coarse = vec![0u8; (BW * BH) as usize];
            let mut rng = Mulberry32::new(13);
            fill_rule(
                kind,
                &mut fine,
                BW,
                BH,
                rect,
                0.25,
                &mut rng,
                &FillParams::new().with_scale(0.5),
            );
            let mut rng = Mulberry32::new(13);
            fill_rule(
                kind,
                &mut coarse,
                BW,
                BH,
                rect,
                0.25,
                &mut rng,
                &FillParams::new().with_scale(3.0),
            );
            assert_ne!(fine, coarse, "{} ignores scale", kind.as_str());
        }
    }
}
