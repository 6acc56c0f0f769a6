//! Rolling several independent checks with the same parameters.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::check::RollInput;
use crate::error::{CheckError, CheckResult};
use crate::record::RollRecord;

/// How many checks to roll in one batch (1-50).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RollCount(u32);

impl RollCount {
    /// Fewest rolls in a batch.
    pub const MIN: u32 = 1;
    /// Most rolls in a batch.
    pub const MAX: u32 = 50;

    /// Validate a batch size.
    pub fn new(count: u32) -> CheckResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(CheckError::InvalidRollCount(count))
        }
    }

    /// The number of rolls.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for RollCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u32> for RollCount {
    type Error = CheckError;

    fn try_from(count: u32) -> CheckResult<Self> {
        Self::new(count)
    }
}

impl From<RollCount> for u32 {
    fn from(count: RollCount) -> Self {
        count.0
    }
}

/// A record together with its position in the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedRoll {
    /// Position in generation order, starting at 1.
    pub number: u32,
    /// The resolved check.
    #[serde(flatten)]
    pub record: RollRecord,
}

/// The ordered result of a batch of checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollBatch {
    /// The parameters every roll in the batch used.
    pub input: RollInput,
    rolls: Vec<NumberedRoll>,
}

impl RollBatch {
    /// Rolls in generation order.
    pub fn rolls(&self) -> &[NumberedRoll] {
        &self.rolls
    }

    /// Number of rolls.
    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    /// Whether the batch holds no rolls.
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// The records without their numbers.
    pub fn records(&self) -> impl Iterator<Item = &RollRecord> {
        self.rolls.iter().map(|r| &r.record)
    }
}

/// Resolve `count` independent checks with the same input.
pub fn roll_batch<R: Rng + ?Sized>(input: RollInput, count: RollCount, rng: &mut R) -> RollBatch {
    let rolls = (1..=count.get())
        .map(|number| NumberedRoll {
            number,
            record: input.resolve(rng),
        })
        .collect();
    tracing::debug!(
        level_gap = input.level_gap,
        modifier = input.modifier,
        count = count.get(),
        "rolled batch"
    );
    RollBatch { input, rolls }
}
