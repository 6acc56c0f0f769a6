//! Configuration for a run of checks.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::batch::RollCount;
use crate::check::RollInput;
use crate::error::CheckResult;

/// Parameters for rolling a batch of checks.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// RNG seed for reproducible rolls; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Level gap for every roll.
    pub level_gap: i32,
    /// Situational modifier for every roll.
    pub modifier: i32,
    /// Number of rolls (1-50).
    pub count: u32,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            seed: None,
            level_gap: 0,
            modifier: 0,
            count: RollCount::MIN,
        }
    }
}

impl CheckConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the level gap.
    pub fn with_level_gap(mut self, level_gap: i32) -> Self {
        self.level_gap = level_gap;
        self
    }

    /// Set the situational modifier.
    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    /// Set the number of rolls (clamped to 1-50).
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count.clamp(RollCount::MIN, RollCount::MAX);
        self
    }

    /// The validated check input.
    pub fn input(&self) -> CheckResult<RollInput> {
        RollInput::new(self.level_gap, self.modifier)
    }

    /// The validated batch size.
    pub fn roll_count(&self) -> CheckResult<RollCount> {
        RollCount::new(self.count)
    }

    /// A generator seeded from the configured seed, or from the OS.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
