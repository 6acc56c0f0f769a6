//! The two dice of a check: the d20 and the fate die.
//!
//! The d20 decides success or failure. The fate die is a d6 read by
//! category (plus, minus, neutral) and only refines that result.

pub mod fate;

pub use fate::FateDie;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A polyhedral die used by a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Six-sided die, read through [`FateDie`].
    D6,
    /// Twenty-sided primary die.
    D20,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::D20 => 20,
        }
    }

    /// Roll this die once, returning a face in `1..=sides`.
    pub fn roll<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        rng.random_range(1..=self.sides())
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::D6 => write!(f, "d6"),
            Self::D20 => write!(f, "d20"),
        }
    }
}
