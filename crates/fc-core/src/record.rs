//! The audit trail of a single roll.

use serde::{Deserialize, Serialize};

use crate::dice::FateDie;
use crate::outcome::{BaseOutcome, FinalOutcome};

/// Every value that went into one resolved check.
///
/// Callers render these fields directly; nothing needs recomputing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// The level gap the check was rolled with.
    pub level_gap: i32,
    /// The d20 face (1-20).
    pub primary: u32,
    /// The situational modifier.
    pub modifier: i32,
    /// The derived threshold (2-19).
    pub threshold: i32,
    /// `primary + modifier`.
    pub total: i32,
    /// The fate die category.
    pub fate: FateDie,
    /// The refined outcome.
    pub outcome: FinalOutcome,
    /// Whether `total` reached the fixed reference value of 11.
    pub absolute_success: bool,
}

impl RollRecord {
    /// The outcome before the fate die was applied.
    pub fn base(&self) -> BaseOutcome {
        self.outcome.base()
    }

    /// Whether the d20 showed 1 or 20, overriding the threshold.
    pub fn is_natural(&self) -> bool {
        self.primary == 1 || self.primary == 20
    }
}

impl std::fmt::Display for RollRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "d20 {} {:+} = {} vs {} | fate {} | {}",
            self.primary, self.modifier, self.total, self.threshold, self.fate, self.outcome
        )
    }
}
