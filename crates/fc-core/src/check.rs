//! Check resolution.
//!
//! A check compares `d20 + modifier` against a threshold derived from the
//! level gap: `clamp(11 - level_gap, 2, 19)`. A natural 1 always fails and a
//! natural 20 always succeeds. The level gap only moves the threshold; it is
//! never added to the total. The fate die then refines the result.
//!
//! Independently of the threshold, each record also notes whether the total
//! reached a fixed reference of 11.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dice::{Die, FateDie};
use crate::error::{CheckError, CheckResult};
use crate::outcome::{BaseOutcome, FinalOutcome};
use crate::record::RollRecord;

/// Threshold when the level gap is zero.
pub const BASE_THRESHOLD: i32 = 11;
/// Lowest threshold a check can have.
pub const THRESHOLD_MIN: i32 = 2;
/// Highest threshold a check can have.
pub const THRESHOLD_MAX: i32 = 19;
/// Fixed reference total for the absolute-success flag.
pub const ABSOLUTE_THRESHOLD: i32 = 11;

/// Smallest level gap accepted by [`RollInput::new`].
pub const LEVEL_GAP_MIN: i32 = -10;
/// Largest level gap accepted by [`RollInput::new`].
pub const LEVEL_GAP_MAX: i32 = 10;
/// Smallest modifier accepted by [`RollInput::new`].
pub const MODIFIER_MIN: i32 = -10;
/// Largest modifier accepted by [`RollInput::new`].
pub const MODIFIER_MAX: i32 = 10;

/// The caller-supplied parameters of a check.
///
/// Fields are public and unchecked; use [`RollInput::new`] to enforce the
/// supported ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollInput {
    /// Level difference; higher values lower the threshold.
    pub level_gap: i32,
    /// Situational modifier added to the d20.
    pub modifier: i32,
}

impl RollInput {
    /// Build an input, rejecting values outside the supported ranges.
    pub fn new(level_gap: i32, modifier: i32) -> CheckResult<Self> {
        if !(LEVEL_GAP_MIN..=LEVEL_GAP_MAX).contains(&level_gap) {
            return Err(CheckError::InvalidLevelGap(level_gap));
        }
        if !(MODIFIER_MIN..=MODIFIER_MAX).contains(&modifier) {
            return Err(CheckError::InvalidModifier(modifier));
        }
        Ok(Self {
            level_gap,
            modifier,
        })
    }

    /// The threshold for this input.
    pub fn threshold(&self) -> i32 {
        threshold(self.level_gap)
    }

    /// Resolve one check with these parameters.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> RollRecord {
        resolve(self.level_gap, self.modifier, rng)
    }
}

/// The total a check must reach for a base success.
pub fn threshold(level_gap: i32) -> i32 {
    BASE_THRESHOLD
        .saturating_sub(level_gap)
        .clamp(THRESHOLD_MIN, THRESHOLD_MAX)
}

/// Success or failure from the d20 face, total and threshold.
pub fn base_outcome(primary: u32, total: i32, threshold: i32) -> BaseOutcome {
    match primary {
        1 => BaseOutcome::Failure,
        20 => BaseOutcome::Success,
        _ if total >= threshold => BaseOutcome::Success,
        _ => BaseOutcome::Failure,
    }
}

/// Roll the d20 and the fate die, then resolve the check.
pub fn resolve<R: Rng + ?Sized>(level_gap: i32, modifier: i32, rng: &mut R) -> RollRecord {
    let primary = Die::D20.roll(rng);
    let fate = FateDie::roll(rng);
    resolve_faces(level_gap, modifier, primary, fate)
}

/// Resolve a check from already-rolled faces.
pub fn resolve_faces(level_gap: i32, modifier: i32, primary: u32, fate: FateDie) -> RollRecord {
    let threshold = threshold(level_gap);
    let total = i32::try_from(primary)
        .unwrap_or(i32::MAX)
        .saturating_add(modifier);
    let base = base_outcome(primary, total, threshold);
    let outcome = FinalOutcome::refine(base, fate);

    let record = RollRecord {
        level_gap,
        primary,
        modifier,
        threshold,
        total,
        fate,
        outcome,
        absolute_success: total >= ABSOLUTE_THRESHOLD,
    };
    tracing::trace!(
        level_gap,
        primary,
        modifier,
        threshold,
        total,
        fate = %fate,
        outcome = outcome.code(),
        "resolved check"
    );
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn threshold_at_zero_gap() {
        assert_eq!(threshold(0), 11);
    }

    #[test]
    fn threshold_clamps() {
        assert_eq!(threshold(10), 2);
        assert_eq!(threshold(9), 2);
        assert_eq!(threshold(8), 3);
        assert_eq!(threshold(-8), 19);
        assert_eq!(threshold(-10), 19);
        assert_eq!(threshold(i32::MIN), 19);
        assert_eq!(threshold(i32::MAX), 2);
    }

    #[test]
    fn threshold_non_increasing() {
        let mut prev = i32::MAX;
        for gap in LEVEL_GAP_MIN..=LEVEL_GAP_MAX {
            let t = threshold(gap);
            assert!(t <= prev, "gap {gap}: {t} > {prev}");
            prev = t;
        }
    }

    #[test]
    fn input_new_validates() {
        assert!(RollInput::new(0, 0).is_ok());
        assert!(RollInput::new(-10, 10).is_ok());
        assert!(matches!(
            RollInput::new(11, 0),
            Err(CheckError::InvalidLevelGap(11))
        ));
        assert!(matches!(
            RollInput::new(0, -11),
            Err(CheckError::InvalidModifier(-11))
        ));
    }

    #[test]
    fn plain_success_on_neutral() {
        let r = resolve_faces(0, 0, 15, FateDie::Neutral);
        assert_eq!(r.threshold, 11);
        assert_eq!(r.total, 15);
        assert_eq!(r.base(), BaseOutcome::Success);
        assert_eq!(r.outcome, FinalOutcome::Success);
        assert!(r.absolute_success);
    }

    #[test]
    fn level_gap_lowers_threshold_only() {
        let r = resolve_faces(5, 0, 10, FateDie::Neutral);
        assert_eq!(r.threshold, 6);
        assert_eq!(r.total, 10);
        assert_eq!(r.base(), BaseOutcome::Success);
        assert!(!r.absolute_success);
    }

    #[test]
    fn natural_one_fails_with_plus() {
        let r = resolve_faces(0, -4, 1, FateDie::Plus);
        assert_eq!(r.base(), BaseOutcome::Failure);
        assert_eq!(r.outcome, FinalOutcome::FailurePlus);
    }

    #[test]
    fn natural_one_fails_against_lowest_threshold() {
        let r = resolve_faces(10, 10, 1, FateDie::Neutral);
        assert_eq!(r.threshold, 2);
        assert_eq!(r.total, 11);
        assert_eq!(r.outcome, FinalOutcome::Failure);
        assert!(r.absolute_success);
    }

    #[test]
    fn natural_twenty_succeeds_at_highest_threshold() {
        let r = resolve_faces(-10, 4, 20, FateDie::Neutral);
        assert_eq!(r.threshold, 19);
        assert_eq!(r.outcome, FinalOutcome::Success);

        let r = resolve_faces(-10, -10, 20, FateDie::Minus);
        assert_eq!(r.total, 10);
        assert_eq!(r.outcome, FinalOutcome::SuccessMinus);
    }

    #[test]
    fn total_equal_to_threshold_succeeds() {
        let r = resolve_faces(0, 1, 10, FateDie::Neutral);
        assert_eq!(r.total, 11);
        assert_eq!(r.base(), BaseOutcome::Success);

        let r = resolve_faces(0, 0, 10, FateDie::Neutral);
        assert_eq!(r.base(), BaseOutcome::Failure);
    }

    #[test]
    fn out_of_domain_inputs_still_resolve() {
        let r = resolve_faces(0, 100, 5, FateDie::Minus);
        assert_eq!(r.total, 105);
        assert_eq!(r.outcome, FinalOutcome::SuccessMinus);

        let r = resolve_faces(i32::MIN, i32::MAX, 19, FateDie::Neutral);
        assert_eq!(r.threshold, 19);
        assert_eq!(r.total, i32::MAX);
    }

    #[test]
    fn resolve_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(resolve(2, 1, &mut rng1), resolve(2, 1, &mut rng2));
        }
    }

    #[test]
    fn resolve_records_inputs() {
        let mut rng = StdRng::seed_from_u64(3);
        let input = RollInput::new(-3, 2).unwrap();
        for _ in 0..200 {
            let r = input.resolve(&mut rng);
            assert_eq!(r.level_gap, -3);
            assert_eq!(r.modifier, 2);
            assert_eq!(r.threshold, input.threshold());
            assert_eq!(r.total, r.primary as i32 + 2);
            assert!((1..=20).contains(&r.primary));
        }
    }

    proptest! {
        #[test]
        fn threshold_in_bounds(gap in any::<i32>()) {
            let t = threshold(gap);
            prop_assert!((THRESHOLD_MIN..=THRESHOLD_MAX).contains(&t));
        }

        #[test]
        fn threshold_matches_formula(gap in LEVEL_GAP_MIN..=LEVEL_GAP_MAX) {
            prop_assert_eq!(threshold(gap), (11 - gap).clamp(2, 19));
        }

        #[test]
        fn middle_faces_compare_total(
            gap in LEVEL_GAP_MIN..=LEVEL_GAP_MAX,
            modifier in -4i32..=4,
            primary in 2u32..=19,
        ) {
            let r = resolve_faces(gap, modifier, primary, FateDie::Neutral);
            let expected = primary as i32 + modifier >= threshold(gap);
            prop_assert_eq!(r.base().is_success(), expected);
        }

        #[test]
        fn naturals_override(
            gap in any::<i32>(),
            modifier in any::<i32>(),
            fate_face in 1u32..=6,
        ) {
            let fate = FateDie::from_face(fate_face);
            prop_assert_eq!(resolve_faces(gap, modifier, 1, fate).base(), BaseOutcome::Failure);
            prop_assert_eq!(resolve_faces(gap, modifier, 20, fate).base(), BaseOutcome::Success);
        }

        #[test]
        fn absolute_flag_ignores_threshold(
            gap in LEVEL_GAP_MIN..=LEVEL_GAP_MAX,
            modifier in -10i32..=10,
            primary in 1u32..=20,
        ) {
            let r = resolve_faces(gap, modifier, primary, FateDie::Plus);
            prop_assert_eq!(r.absolute_success, r.total >= 11);
        }
    }
}
