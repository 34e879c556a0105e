use crate::core::constants::{DEFAULT_WEIGHT, WEIGHT_SCALE};
use serde::{Serialize, Serializer};

/// Base stats of a job template. Set once when the catalog is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub health_points: u32,
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
}

impl Stats {
    pub const fn new(health_points: u32, strength: u32, dexterity: u32, intelligence: u32) -> Self {
        Self {
            health_points,
            strength,
            dexterity,
            intelligence,
        }
    }
}

/// A decimal weight stored as hundredths (`80` is `0.8`).
///
/// Serializes as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Weight(u32);

impl Weight {
    pub const ZERO: Weight = Weight(0);
    pub const ONE: Weight = Weight(DEFAULT_WEIGHT);

    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    pub const fn hundredths(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / f64::from(WEIGHT_SCALE)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ONE
    }
}

impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Per-stat weights used for attack power and speed potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    pub strength_modifier: Weight,
    pub intelligence_modifier: Weight,
    pub dexterity_modifier: Weight,
}

impl Modifier {
    pub const fn new(strength: Weight, dexterity: Weight, intelligence: Weight) -> Self {
        Self {
            strength_modifier: strength,
            intelligence_modifier: intelligence,
            dexterity_modifier: dexterity,
        }
    }
}
