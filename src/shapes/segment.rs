//! Line segments and the capsules built around them.

use glam::Vec2;

use super::{check_radius, ShapeError};
use crate::math::Vec2Ext;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineSegment2 {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSegment2 {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Start-to-end vector.
    #[inline]
    pub fn displacement(&self) -> Vec2 {
        self.end - self.start
    }

    pub fn translate(&mut self, translation: Vec2) {
        self.start += translation;
        self.end += translation;
    }

    pub fn set_center(&mut self, new_center: Vec2) {
        self.translate(new_center - self.center());
    }

    /// Rotate both endpoints counter-clockwise about the midpoint.
    pub fn rotate_about_center_degrees(&mut self, degrees: f32) {
        let center = self.center();
        self.start = center + (self.start - center).rotated_degrees(degrees);
        self.end = center + (self.end - center).rotated_degrees(degrees);
    }
}

/// A disc swept along a segment, the "bone".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Capsule2 {
    pub bone: LineSegment2,
    pub radius: f32,
}

impl Capsule2 {
    pub fn new(start: Vec2, end: Vec2, radius: f32) -> Self {
        debug_assert!(radius >= 0.0, "negative capsule radius {radius}");
        Self {
            bone: LineSegment2::new(start, end),
            radius,
        }
    }

    pub fn try_new(start: Vec2, end: Vec2, radius: f32) -> Result<Self, ShapeError> {
        check_radius(radius)?;
        Ok(Self {
            bone: LineSegment2::new(start, end),
            radius,
        })
    }

    pub fn translate(&mut self, translation: Vec2) {
        self.bone.translate(translation);
    }

    pub fn set_center(&mut self, new_center: Vec2) {
        self.bone.set_center(new_center);
    }

    pub fn rotate_about_center_degrees(&mut self, degrees: f32) {
        self.bone.rotate_about_center_degrees(degrees);
    }
}
