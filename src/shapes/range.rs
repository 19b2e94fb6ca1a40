//! Closed scalar ranges.

use crate::math::RandomNumberGenerator;

/// Closed float interval `[min, max]`.
///
/// `min <= max` is the caller's responsibility and is not checked; a
/// reversed range simply contains nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
}

impl FloatRange {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const ZERO_TO_ONE: Self = Self::new(0.0, 1.0);

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends.
    #[inline]
    pub fn is_on_range(&self, value: f32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Inclusive overlap: ranges sharing a single endpoint overlap.
    #[inline]
    pub fn is_overlapping_with(&self, other: &FloatRange) -> bool {
        other.min <= self.max && self.min <= other.max
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.max - self.min
    }

    /// Uniform roll inside the range using the caller's generator.
    pub fn random_in(&self, rng: &mut RandomNumberGenerator) -> f32 {
        rng.roll_float_in_range(self.min, self.max)
    }
}

/// Closed integer interval `[min, max]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const ZERO: Self = Self::new(0, 0);
    pub const ONE: Self = Self::new(1, 1);
    pub const ZERO_TO_ONE: Self = Self::new(0, 1);

    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn is_on_range(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }

    #[inline]
    pub fn is_overlapping_with(&self, other: &IntRange) -> bool {
        other.min <= self.max && self.min <= other.max
    }

    pub fn random_in(&self, rng: &mut RandomNumberGenerator) -> i32 {
        rng.roll_int_in_range(self.min, self.max)
    }
}
