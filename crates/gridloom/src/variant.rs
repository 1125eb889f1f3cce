//! Seed-driven variant configuration.
//!
//! A variant is the complete deterministic parameter set for one animation:
//! grid resolution, subdivision shape, the active rule multiset, loop period,
//! and the event schedule. [`derive_config`] is a pure function of the seed
//! and the fixed tables below; identical inputs yield identical configs.
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::rng::{rand_bool, rand_choice, rand_float, rand_int, rand01, shuffle, Mulberry32};

/// The closed set of fill rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RuleKind {
    Noise,
    Dither,
    Automata,
    Reaction,
    Lines,
    Streak,
    Columns,
    Gradient,
    Dots,
    Checker,
}

impl RuleKind {
    /// Every rule kind, in declaration order.
    pub const ALL: [RuleKind; 10] = [
        RuleKind::Noise,
        RuleKind::Dither,
        RuleKind::Automata,
        RuleKind::Reaction,
        RuleKind::Lines,
        RuleKind::Streak,
        RuleKind::Columns,
        RuleKind::Gradient,
        RuleKind::Dots,
        RuleKind::Checker,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Noise => "noise",
            RuleKind::Dither => "dither",
            RuleKind::Automata => "automata",
            RuleKind::Reaction => "reaction",
            RuleKind::Lines => "lines",
            RuleKind::Streak => "streak",
            RuleKind::Columns => "columns",
            RuleKind::Gradient => "gradient",
            RuleKind::Dots => "dots",
            RuleKind::Checker => "checker",
        }
    }
}

/// Time-windowed perturbation kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventKind {
    Invert,
    Scanline,
    RuleSwap,
}

/// A scheduled event on the unit time loop.
///
/// `rect_index` is generated against a nominal index space and remapped
/// modulo the actual region count once subdivision has run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventDef {
    /// Normalized time in `[0, 1)` at which the event fires.
    pub t: f32,
    /// Nominal region index, remapped mod the region count at assignment.
    pub rect_index: u32,
    pub kind: EventKind,
}

/// Organic / chaotic rule family.
const ORGANIC_RULES: [RuleKind; 6] = [
    RuleKind::Noise,
    RuleKind::Streak,
    RuleKind::Columns,
    RuleKind::Gradient,
    RuleKind::Automata,
    RuleKind::Reaction,
];

/// Geometric / regular rule family.
const GEOMETRIC_RULES: [RuleKind; 4] = [
    RuleKind::Lines,
    RuleKind::Dither,
    RuleKind::Dots,
    RuleKind::Checker,
];

/// Calm rules: simple, sparse.
const CALM_RULES: [RuleKind; 4] = [
    RuleKind::Lines,
    RuleKind::Dots,
    RuleKind::Gradient,
    RuleKind::Noise,
];

/// Seed-indexed dominant-rule rotation.
const FAMILY_ROTATION: [RuleKind; 8] = [
    RuleKind::Noise,
    RuleKind::Lines,
    RuleKind::Streak,
    RuleKind::Dots,
    RuleKind::Columns,
    RuleKind::Checker,
    RuleKind::Gradient,
    RuleKind::Dither,
];

/// Event-kind bias table: scanline and rule swap common, invert rare.
const EVENT_KIND_BIAS: [EventKind; 5] = [
    EventKind::Scanline,
    EventKind::RuleSwap,
    EventKind::RuleSwap,
    EventKind::Scanline,
    EventKind::Invert,
];

const GRID_OPTIONS: [u32; 4] = [64, 96, 128, 192];

/// Complete immutable parameter set for one variant.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariantConfig {
    pub seed: u32,
    /// Grid resolution in cells (square canvas).
    pub grid_res: u32,
    /// Maximum subdivision recursion depth.
    pub subdiv_depth: u32,
    /// Minimum region dimension in grid cells.
    pub min_rect_cells: u32,
    /// Active rules, duplicates allowed, never empty.
    pub active_rules: Vec<RuleKind>,
    /// Loop period in milliseconds.
    pub period_ms: u32,
    /// Event schedule, sorted ascending by `t`.
    pub events: Vec<EventDef>,
    /// Probability of stopping a subdivision split early.
    pub stop_prob: f32,
    /// Sparse interstitial variant: single rule, few regions, long period.
    pub calm: bool,
}

impl VariantConfig {
    /// Validate the derived (and possibly overridden) configuration.
    pub fn validate(&self) -> Result<()> {
        if self.grid_res == 0 {
            return Err(Error::InvalidConfig("grid_res must be > 0".into()));
        }
        if self.period_ms == 0 {
            return Err(Error::InvalidConfig("period_ms must be > 0".into()));
        }
        if self.active_rules.is_empty() {
            return Err(Error::InvalidConfig(
                "active_rules must not be empty".into(),
            ));
        }
        if self.min_rect_cells == 0 {
            return Err(Error::InvalidConfig("min_rect_cells must be > 0".into()));
        }
        Ok(())
    }
}

/// Derivation-time overrides. Anything left `None` keeps the derived value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Overrides {
    pub grid_res: Option<u32>,
    pub subdiv_depth: Option<u32>,
    pub period_ms: Option<u32>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid_res(mut self, grid_res: u32) -> Self {
        self.grid_res = Some(grid_res);
        self
    }

    pub fn with_subdiv_depth(mut self, subdiv_depth: u32) -> Self {
        self.subdiv_depth = Some(subdiv_depth);
        self
    }

    pub fn with_period_ms(mut self, period_ms: u32) -> Self {
        self.period_ms = Some(period_ms);
        self
    }
}

/// Derive a complete variant configuration from a seed.
///
/// Pure: no wall clock, no global state. The seed is spread by a fixed odd
/// multiplier before seeding the generator so adjacent seeds decorrelate.
pub fn derive_config(seed: u32, overrides: &Overrides) -> Result<VariantConfig> {
    let rng = &mut Mulberry32::new(seed.wrapping_mul(7919).wrapping_add(31));

    let mut config = if rand_bool(rng, 0.15) {
        derive_calm(seed, rng)
    } else {
        derive_full(seed, rng)
    };

    if let Some(grid_res) = overrides.grid_res {
        config.grid_res = grid_res;
    }
    if let Some(subdiv_depth) = overrides.subdiv_depth {
        config.subdiv_depth = subdiv_depth;
    }
    if let Some(period_ms) = overrides.period_ms {
        config.period_ms = period_ms;
    }

    config.validate()?;
    debug!(
        seed,
        grid_res = config.grid_res,
        rules = config.active_rules.len(),
        events = config.events.len(),
        calm = config.calm,
        "derived variant config"
    );
    Ok(config)
}

/// Sparse interstitial: one simple rule, little subdivision, slow loop.
fn derive_calm(seed: u32, rng: &mut dyn RngCore) -> VariantConfig {
    let rule = *rand_choice(rng, &CALM_RULES);
    VariantConfig {
        seed,
        grid_res: GRID_OPTIONS[rand_int(rng, 0, 4) as usize],
        subdiv_depth: if rand_bool(rng, 0.6) { 0 } else { 1 },
        min_rect_cells: 32,
        active_rules: vec![rule],
        period_ms: rand_int(rng, 8000, 16001) as u32,
        events: Vec::new(),
        stop_prob: 0.9,
        calm: true,
    }
}

fn derive_full(seed: u32, rng: &mut dyn RngCore) -> VariantConfig {
    // Dominant rule from the seed-indexed rotation.
    let family = ((seed >> 5) & 7) as usize;
    let dominant = FAMILY_ROTATION[family % FAMILY_ROTATION.len()];

    let rule_count = rand_int(rng, 4, 7) as usize;

    // Always mix the families: at least one geometric and one organic
    // besides the dominant rule.
    let mut geo_pool: Vec<RuleKind> = GEOMETRIC_RULES
        .iter()
        .copied()
        .filter(|r| *r != dominant)
        .collect();
    let mut org_pool: Vec<RuleKind> = ORGANIC_RULES
        .iter()
        .copied()
        .filter(|r| *r != dominant)
        .collect();
    shuffle(rng, &mut geo_pool);
    shuffle(rng, &mut org_pool);

    let geo_count = rand_int(rng, 1, 3) as usize;
    let org_count = org_pool.len().min(rule_count.saturating_sub(1 + geo_count));

    let mut active_rules = Vec::with_capacity(1 + geo_count + org_count);
    active_rules.push(dominant);
    active_rules.extend_from_slice(&geo_pool[..geo_count]);
    active_rules.extend_from_slice(&org_pool[..org_count]);
    shuffle(rng, &mut active_rules);

    let grid_res = GRID_OPTIONS[rand_int(rng, 0, 4) as usize];
    let subdiv_depth = rand_int(rng, 3, 7) as u32;
    let min_rect_cells = rand_int(rng, 2, 6) as u32;
    let stop_prob = rand_float(rng, 0.05, 0.3);
    let period_ms = rand_int(rng, 6000, 12001) as u32;

    let event_count = rand_int(rng, 1, 9);
    let mut events = Vec::with_capacity(event_count as usize);
    for _ in 0..event_count {
        events.push(EventDef {
            t: rand01(rng),
            rect_index: rand_int(rng, 0, 100) as u32,
            kind: *rand_choice(rng, &EVENT_KIND_BIAS),
        });
    }
    events.sort_by(|a, b| a.t.total_cmp(&b.t));

    VariantConfig {
        seed,
        grid_res,
        subdiv_depth,
        min_rect_cells,
        active_rules,
        period_ms,
        events,
        stop_prob,
        calm: false,
    }
}

/// True if the rule belongs to the organic family.
pub fn is_organic(rule: RuleKind) -> bool {
    ORGANIC_RULES.contains(&rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_yields_identical_config() {
        for seed in 0..64u32 {
            let a = derive_config(seed, &Overrides::default()).unwrap();
            let b = derive_config(seed, &Overrides::default()).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn configs_stay_within_fixed_ranges() {
        for seed in 0..256u32 {
            let c = derive_config(seed, &Overrides::default()).unwrap();
            assert!(GRID_OPTIONS.contains(&c.grid_res));
            if c.calm {
                assert_eq!(c.active_rules.len(), 1);
                assert!(c.subdiv_depth <= 1);
                assert!((8000..=16000).contains(&c.period_ms));
                assert!(c.events.is_empty());
            } else {
                assert!((4..=6).contains(&c.active_rules.len()));
                assert!((3..=6).contains(&c.subdiv_depth));
                assert!((2..=5).contains(&c.min_rect_cells));
                assert!((0.05..0.3).contains(&c.stop_prob));
                assert!((6000..=12000).contains(&c.period_ms));
                assert!((1..=8).contains(&c.events.len()));
            }
        }
    }

    #[test]
    fn full_variants_mix_both_families() {
        for seed in 0..256u32 {
            let c = derive_config(seed, &Overrides::default()).unwrap();
            if c.calm {
                continue;
            }
            let organic = c.active_rules.iter().filter(|r| is_organic(**r)).count();
            let geometric = c.active_rules.len() - organic;
            assert!(organic >= 1, "seed {seed} has no organic rule");
            assert!(geometric >= 1, "seed {seed} has no geometric rule");
        }
    }

    #[test]
    fn events_sorted_and_in_range() {
        for seed in 0..128u32 {
            let c = derive_config(seed, &Overrides::default()).unwrap();
            for pair in c.events.windows(2) {
                assert!(pair[0].t <= pair[1].t);
            }
            for e in &c.events {
                assert!((0.0..1.0).contains(&e.t));
                assert!(e.rect_index < 100);
            }
        }
    }

    #[test]
    fn overrides_replace_derived_values() {
        let c = derive_config(
            3,
            &Overrides::new()
                .with_grid_res(64)
                .with_subdiv_depth(3)
                .with_period_ms(5000),
        )
        .unwrap();
        assert_eq!(c.grid_res, 64);
        assert_eq!(c.subdiv_depth, 3);
        assert_eq!(c.period_ms, 5000);
    }

    #[test]
    fn zero_grid_override_is_rejected() {
        let err = derive_config(3, &Overrides::new().with_grid_res(0));
        assert!(matches!(err, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn seeds_spread_over_the_parameter_space() {
        let periods: std::collections::HashSet<u32> = (0..32u32)
            .map(|s| derive_config(s, &Overrides::default()).unwrap().period_ms)
            .collect();
        assert!(
            periods.len() > 8,
            "adjacent seeds collapse onto {} periods",
            periods.len()
        );
    }
}
