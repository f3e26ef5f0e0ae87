//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A score between 0 and 100 inclusive.
///
/// Deserialization goes through [`Percentage::try_new`], so out-of-range
/// values are rejected rather than read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// Creates a Percentage from a signed raw score, clamping to [0, 100].
    ///
    /// Used where a base score and bonuses are summed before being reported.
    pub fn clamped(raw: i32) -> Self {
        Self(raw.clamp(0, 100) as u8)
    }

    /// Creates a Percentage from a fractional score, rounding half away from zero.
    ///
    /// Non-finite input maps to zero.
    pub fn from_f64(raw: f64) -> Self {
        if !raw.is_finite() {
            return Self::ZERO;
        }
        Self(raw.round().clamp(0.0, 100.0) as u8)
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(pct: Percentage) -> Self {
        pct.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
