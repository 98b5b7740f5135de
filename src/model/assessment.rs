//! Onboarding answers and the intensity scale.

use crate::error::{ReactivateError, Result};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Today's training intensity on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: Self = Self(7);

    /// Create an intensity, rejecting values outside 1..=10.
    pub fn new(value: i64) -> Result<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ReactivateError::invalid_intensity(value))
        }
    }

    /// Create an intensity, clamping into 1..=10.
    #[must_use]
    pub fn saturating(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Step the slider by `delta`, staying on the scale.
    #[must_use]
    pub fn adjust(self, delta: i64) -> Self {
        Self::saturating(i64::from(self.0) + delta)
    }

    /// Tier this intensity falls into.
    #[must_use]
    pub const fn tier(self) -> Tier {
        Tier::from_intensity(self)
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Intensity {
    type Error = ReactivateError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Intensity> for u8 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

impl FromStr for Intensity {
    type Err = ReactivateError;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ReactivateError::config(format!("'{s}' is not a whole number")))?;
        Self::new(value)
    }
}

/// Recovery bucket selected from training intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Light,
    Moderate,
    Intense,
}

impl Tier {
    /// Both boundaries (5 and 8) belong to the higher tier.
    #[must_use]
    pub const fn from_intensity(intensity: Intensity) -> Self {
        match intensity.0 {
            8.. => Self::Intense,
            5..=7 => Self::Moderate,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Intense => "intense",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Light, Self::Moderate, Self::Intense]
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flip membership of `item`: remove it when present, append it otherwise.
///
/// Returns whether the item is selected afterwards.
pub fn toggle(set: &mut IndexSet<String>, item: &str) -> bool {
    if set.shift_remove(item) {
        false
    } else {
        set.insert(item.to_string());
        true
    }
}

/// Answers collected on the onboarding screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// Sore body areas, in the order they were picked
    pub pain_areas: IndexSet<String>,
    pub intensity: Intensity,
    /// Equipment on hand, in the order it was picked
    pub equipment: IndexSet<String>,
}

impl Assessment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a configured default intensity.
    #[must_use]
    pub fn with_intensity(intensity: Intensity) -> Self {
        Self {
            intensity,
            ..Self::default()
        }
    }

    pub fn toggle_pain_area(&mut self, area: &str) -> bool {
        toggle(&mut self.pain_areas, area)
    }

    pub fn toggle_equipment(&mut self, item: &str) -> bool {
        toggle(&mut self.equipment, item)
    }

    #[must_use]
    pub fn has_pain_area(&self, area: &str) -> bool {
        self.pain_areas.contains(area)
    }

    #[must_use]
    pub fn has_equipment(&self, item: &str) -> bool {
        self.equipment.contains(item)
    }

    /// Build the plan for these answers.
    #[must_use]
    pub fn plan(&self) -> super::RecoveryPlan {
        super::generate(self.intensity, &self.pain_areas, &self.equipment)
    }
}
