//! Unit types for physical quantities.
//!
//! Provides type-safe representations of machine distances, step counts,
//! step rates, and feed rates to prevent unit confusion at compile time.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// Machine distance in thousandths of a physical unit (mm/1000).
///
/// Used for configuration and user-facing API. Internally converted to
/// [`Steps`] through the configured distance-per-step scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Mm1000(pub i32);

impl Mm1000 {
    /// Create a new Mm1000 value.
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Convert to steps using the steps-per-Mm1000 scale.
    #[inline]
    pub fn to_steps(self, steps_per_mm1000: f32) -> Steps {
        Steps((self.0 as f32 * steps_per_mm1000) as i32)
    }
}

impl Add for Mm1000 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Mm1000 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Machine position or distance in motor steps (signed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steps(pub i32);

impl Steps {
    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Get absolute value as u32.
    #[inline]
    pub fn abs(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Convert to machine distance using the steps-per-Mm1000 scale.
    #[inline]
    pub fn to_mm1000(self, steps_per_mm1000: f32) -> Mm1000 {
        Mm1000((self.0 as f32 / steps_per_mm1000) as i32)
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Step rate in steps per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct StepRate(pub u32);

impl StepRate {
    /// Create a new StepRate value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Clamp to an upper bound.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

/// Feed rate in Mm1000 per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct FeedRate(pub u32);

impl FeedRate {
    /// Create a new FeedRate value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Convert to a step rate using the steps-per-Mm1000 scale.
    ///
    /// steps/sec = (Mm1000/min * steps/Mm1000) / 60
    #[inline]
    pub fn to_step_rate(self, steps_per_mm1000: f32) -> StepRate {
        StepRate((self.0 as f32 * steps_per_mm1000 / 60.0) as u32)
    }
}
