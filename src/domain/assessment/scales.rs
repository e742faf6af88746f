//! Numeric answers: bounded measurements and ordinal scales.

use serde::Serialize;
use std::ops::RangeInclusive;

use crate::domain::foundation::ValidationError;

/// Age in whole years, 14 to 90 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Age(u8);

impl Age {
    pub const MIN: u8 = 14;
    pub const MAX: u8 = 90;

    pub fn try_new(years: i64) -> Result<Self, ValidationError> {
        if years < i64::from(Self::MIN) || years > i64::from(Self::MAX) {
            return Err(ValidationError::out_of_range(
                "Age",
                f64::from(Self::MIN),
                f64::from(Self::MAX),
                years as f64,
            ));
        }
        Ok(Self(years as u8))
    }

    pub fn years(&self) -> u8 {
        self.0
    }
}

/// Height in meters, 1.20 to 2.20 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Height(f64);

impl Height {
    pub const MIN: f64 = 1.20;
    pub const MAX: f64 = 2.20;

    pub fn try_new(meters: f64) -> Result<Self, ValidationError> {
        if !meters.is_finite() {
            return Err(ValidationError::invalid_format("Height", "must be a finite number"));
        }
        if !(Self::MIN..=Self::MAX).contains(&meters) {
            return Err(ValidationError::out_of_range("Height", Self::MIN, Self::MAX, meters));
        }
        Ok(Self(meters))
    }

    pub fn meters(&self) -> f64 {
        self.0
    }
}

/// A point on an integer answer scale `LO..=HI`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Ordinal<const LO: u8, const HI: u8>(u8);

impl<const LO: u8, const HI: u8> Ordinal<LO, HI> {
    /// Validates `value` against the scale, naming `field` on failure.
    pub fn try_new(field: &str, value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(LO) || value > i64::from(HI) {
            return Err(ValidationError::out_of_range(
                field,
                f64::from(LO),
                f64::from(HI),
                value as f64,
            ));
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Every point on the scale, ascending.
    pub fn options() -> RangeInclusive<u8> {
        LO..=HI
    }
}

/// `FCVC` - vegetables with meals (1: rarely, 2: sometimes, 3: always).
pub type VegetableFrequency = Ordinal<1, 3>;

/// `NCP` - main meals per day.
pub type MainMeals = Ordinal<1, 4>;

/// `CH2O` - daily water (1: under 1L, 2: 1-2L, 3: over 2L).
pub type WaterIntake = Ordinal<1, 3>;

/// `FAF` - physical activity (0: none, 1: 1-2 days, 2: 2-4 days, 3: over 4 days).
pub type ActivityDays = Ordinal<0, 3>;

/// `TUE` - daily screen time (0: 0-2h, 1: 3-5h, 2: over 5h).
pub type ScreenTime = Ordinal<0, 2>;
