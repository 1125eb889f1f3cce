//! Region layout: subdivision plus rule, seed, and event assignment.
use tracing::info;

use crate::error::Result;
use crate::rng::Mulberry32;
use crate::subdivide::{subdivide, Rect, SubdivideConfig};
use crate::variant::{derive_config, EventDef, Overrides, RuleKind, VariantConfig};

/// Per-region state. The bitmap is exclusively owned and rewritten every
/// frame; no other region ever reads it.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionState {
    pub rect: Rect,
    /// Rule normally rendered by this region.
    pub rule: RuleKind,
    /// Fallback rule substituted while a rule-swap event is active.
    pub alt_rule: RuleKind,
    /// Occupancy bitmap, `rect.w * rect.h`, row-major.
    pub bitmap: Vec<u8>,
    /// Fixed seed this region's RNG is re-seeded from every frame.
    pub rng_seed: u32,
    /// Events bound to this region (nominal indices remapped mod the
    /// actual region count).
    pub events: Vec<EventDef>,
}

/// Derive the full variant for a seed: configuration plus region layout.
///
/// Runs twice with the same inputs, returns byte-identical output. Events
/// are generated against a nominal index space during configuration
/// derivation and only here, once the region count is known, remapped onto
/// actual regions.
pub fn derive_variant(
    seed: u32,
    overrides: &Overrides,
) -> Result<(VariantConfig, Vec<RegionState>)> {
    let config = derive_config(seed, overrides)?;

    let mut rng = Mulberry32::new(seed);
    let canvas = Rect::new(0, 0, config.grid_res, config.grid_res);
    let rects = subdivide(
        canvas,
        &SubdivideConfig {
            grid_step: 1,
            min_cells: config.min_rect_cells,
            max_depth: config.subdiv_depth,
            stop_prob: config.stop_prob,
        },
        &mut rng,
    );

    let region_count = rects.len();
    let regions = rects
        .into_iter()
        .enumerate()
        .map(|(i, rect)| {
            let rule_idx = i % config.active_rules.len();
            let rule = config.active_rules[rule_idx];
            let alt_rule = config.active_rules[(rule_idx + 1) % config.active_rules.len()];
            let events: Vec<EventDef> = config
                .events
                .iter()
                .copied()
                .filter(|e| e.rect_index as usize % region_count == i)
                .collect();
            RegionState {
                rect,
                rule,
                alt_rule,
                bitmap: vec![0; (rect.w * rect.h) as usize],
                rng_seed: seed.wrapping_mul(1000).wrapping_add(i as u32 * 37),
                events,
            }
        })
        .collect::<Vec<_>>();

    info!(
        seed,
        grid_res = config.grid_res,
        regions = regions.len(),
        "derived variant"
    );
    Ok((config, regions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_reproducible() {
        let overrides = Overrides::new().with_grid_res(64).with_subdiv_depth(3);
        let (config_a, regions_a) = derive_variant(0, &overrides).unwrap();
        let (config_b, regions_b) = derive_variant(0, &overrides).unwrap();
        assert_eq!(config_a, config_b);
        assert_eq!(regions_a, regions_b);
    }

    #[test]
    fn regions_tile_the_canvas() {
        for seed in 0..24u32 {
            let (config, regions) = derive_variant(seed, &Overrides::default()).unwrap();
            let total: u64 = regions.iter().map(|r| r.rect.area()).sum();
            assert_eq!(total, config.grid_res as u64 * config.grid_res as u64);
            for (i, a) in regions.iter().enumerate() {
                for b in &regions[i + 1..] {
                    assert!(!a.rect.overlaps(&b.rect));
                }
            }
        }
    }

    #[test]
    fn rules_assigned_round_robin() {
        let (config, regions) = derive_variant(7, &Overrides::default()).unwrap();
        let n = config.active_rules.len();
        for (i, region) in regions.iter().enumerate() {
            assert_eq!(region.rule, config.active_rules[i % n]);
            assert_eq!(region.alt_rule, config.active_rules[(i % n + 1) % n]);
        }
    }

    #[test]
    fn every_event_lands_on_exactly_one_region() {
        for seed in 0..48u32 {
            let (config, regions) = derive_variant(seed, &Overrides::default()).unwrap();
            let assigned: usize = regions.iter().map(|r| r.events.len()).sum();
            assert_eq!(assigned, config.events.len());
        }
    }

    #[test]
    fn bitmaps_sized_to_their_rects() {
        let (_, regions) = derive_variant(3, &Overrides::default()).unwrap();
        for region in &regions {
            assert_eq!(
                region.bitmap.len(),
                (region.rect.w * region.rect.h) as usize
            );
        }
    }
}
