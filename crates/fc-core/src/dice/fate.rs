//! The fate die.
//!
//! A d6 with two plus, two minus and two neutral faces, so each category
//! comes up one time in three.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Die;

/// The category shown by the fate die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FateDie {
    /// Shifts the result toward a better framing.
    Plus,
    /// Shifts the result toward a worse framing.
    Minus,
    /// Leaves the result as it is.
    Neutral,
}

impl FateDie {
    /// All categories, in face order.
    pub const ALL: [Self; 3] = [Self::Plus, Self::Minus, Self::Neutral];

    /// Read a d6 face: 1-2 plus, 3-4 minus, 5-6 neutral.
    ///
    /// Faces outside `1..=6` are treated as neutral.
    pub fn from_face(face: u32) -> Self {
        match face {
            1 | 2 => Self::Plus,
            3 | 4 => Self::Minus,
            _ => Self::Neutral,
        }
    }

    /// Roll the fate die.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_face(Die::D6.roll(rng))
    }

    /// The symbol printed on the face.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Neutral => "0",
        }
    }
}

impl std::fmt::Display for FateDie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
