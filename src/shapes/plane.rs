//! Infinite planes in 3D.

use glam::Vec3;

use super::{check_unit_3d, ShapeError};

/// Infinite plane: unit `normal` plus signed `distance` from the origin along it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane3 {
    pub normal: Vec3,
    pub distance: f32,
}

impl Default for Plane3 {
    /// The XY plane facing +Z.
    fn default() -> Self {
        Self {
            normal: Vec3::Z,
            distance: 0.0,
        }
    }
}

impl Plane3 {
    pub fn new(normal: Vec3, distance: f32) -> Self {
        debug_assert!(normal.is_normalized(), "plane normal {normal} is not unit length");
        Self { normal, distance }
    }

    pub fn try_new(normal: Vec3, distance: f32) -> Result<Self, ShapeError> {
        check_unit_3d(normal)?;
        Ok(Self { normal, distance })
    }

    /// Plane through `point` facing `normal`.
    pub fn from_point_and_normal(point: Vec3, normal: Vec3) -> Self {
        Self::new(normal, normal.dot(point))
    }

    /// Signed height of `point` above the plane.
    #[inline]
    pub fn altitude(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }

    /// Strictly in front; points on the plane are not.
    #[inline]
    pub fn is_point_in_front(&self, point: Vec3) -> bool {
        self.normal.dot(point) > self.distance
    }

    #[inline]
    pub fn nearest_point(&self, reference: Vec3) -> Vec3 {
        reference - self.normal * self.altitude(reference)
    }

    /// The point on the plane closest to the world origin.
    #[inline]
    pub fn origin_point(&self) -> Vec3 {
        self.normal * self.distance
    }
}
