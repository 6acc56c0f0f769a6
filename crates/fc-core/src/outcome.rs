//! Check outcomes.
//!
//! The d20 yields a [`BaseOutcome`]; the fate die refines it into one of six
//! [`FinalOutcome`]s. Plus always reads better ("yes, and" / "no, but"),
//! minus always reads worse ("yes, but" / "no, and").

use serde::{Deserialize, Serialize};

use crate::dice::FateDie;

/// Success or failure before the fate die is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseOutcome {
    /// The check succeeded.
    Success,
    /// The check failed.
    Failure,
}

impl BaseOutcome {
    /// Whether this is a success.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for BaseOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Failure => write!(f, "Failure"),
        }
    }
}

/// The outcome after the fate die refines the base result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalOutcome {
    /// Improved success: "yes, and".
    SuccessPlus,
    /// Plain success.
    Success,
    /// Weakened success: "yes, but".
    SuccessMinus,
    /// Mitigated failure: "no, but".
    FailurePlus,
    /// Plain failure.
    Failure,
    /// Aggravated failure: "no, and".
    FailureMinus,
}

/// How a presentation layer should style an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeStyle {
    /// Any success.
    Favorable,
    /// Any failure.
    Unfavorable,
}

impl FinalOutcome {
    /// Every outcome, best to worst.
    pub const ALL: [Self; 6] = [
        Self::SuccessPlus,
        Self::Success,
        Self::SuccessMinus,
        Self::FailurePlus,
        Self::Failure,
        Self::FailureMinus,
    ];

    /// Apply the fate die to a base outcome.
    pub fn refine(base: BaseOutcome, fate: FateDie) -> Self {
        match (base, fate) {
            (BaseOutcome::Success, FateDie::Neutral) => Self::Success,
            (BaseOutcome::Success, FateDie::Plus) => Self::SuccessPlus,
            (BaseOutcome::Success, FateDie::Minus) => Self::SuccessMinus,
            (BaseOutcome::Failure, FateDie::Neutral) => Self::Failure,
            (BaseOutcome::Failure, FateDie::Plus) => Self::FailurePlus,
            (BaseOutcome::Failure, FateDie::Minus) => Self::FailureMinus,
        }
    }

    /// The base outcome this was refined from.
    pub fn base(self) -> BaseOutcome {
        match self {
            Self::SuccessPlus | Self::Success | Self::SuccessMinus => BaseOutcome::Success,
            Self::FailurePlus | Self::Failure | Self::FailureMinus => BaseOutcome::Failure,
        }
    }

    /// Whether the fate die changed the framing of the result.
    pub fn is_refined(self) -> bool {
        !matches!(self, Self::Success | Self::Failure)
    }

    /// Short code, e.g. `S+` or `F-`.
    pub fn code(self) -> &'static str {
        match self {
            Self::SuccessPlus => "S+",
            Self::Success => "S",
            Self::SuccessMinus => "S-",
            Self::FailurePlus => "F+",
            Self::Failure => "F",
            Self::FailureMinus => "F-",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::SuccessPlus => "Improved success",
            Self::Success => "Success",
            Self::SuccessMinus => "Weakened success",
            Self::FailurePlus => "Mitigated failure",
            Self::Failure => "Failure",
            Self::FailureMinus => "Aggravated failure",
        }
    }

    /// The narrative answer, if the fate die refined the result.
    pub fn narrative(self) -> Option<&'static str> {
        match self {
            Self::SuccessPlus => Some("yes, and"),
            Self::SuccessMinus => Some("yes, but"),
            Self::FailurePlus => Some("no, but"),
            Self::FailureMinus => Some("no, and"),
            Self::Success | Self::Failure => None,
        }
    }

    /// Display style for this outcome.
    pub fn style(self) -> OutcomeStyle {
        match self.base() {
            BaseOutcome::Success => OutcomeStyle::Favorable,
            BaseOutcome::Failure => OutcomeStyle::Unfavorable,
        }
    }
}

impl std::fmt::Display for FinalOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.label(), self.code())?;
        if let Some(narrative) = self.narrative() {
            write!(f, " ({narrative})")?;
        }
        Ok(())
    }
}
