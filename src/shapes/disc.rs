//! Round shapes: discs, spheres and z-aligned cylinders.

use glam::{Vec2, Vec3};

use super::{check_bounds, check_radius, FloatRange, ShapeError};

/// A filled circle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Disc2 {
    pub center: Vec2,
    pub radius: f32,
}

impl Disc2 {
    pub fn new(center: Vec2, radius: f32) -> Self {
        debug_assert!(radius >= 0.0, "negative disc radius {radius}");
        Self { center, radius }
    }

    pub fn try_new(center: Vec2, radius: f32) -> Result<Self, ShapeError> {
        check_radius(radius)?;
        Ok(Self { center, radius })
    }

    pub fn translate(&mut self, translation: Vec2) {
        self.center += translation;
    }
}

/// A filled ball.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        debug_assert!(radius >= 0.0, "negative sphere radius {radius}");
        Self { center, radius }
    }

    pub fn try_new(center: Vec3, radius: f32) -> Result<Self, ShapeError> {
        check_radius(radius)?;
        Ok(Self { center, radius })
    }

    pub fn translate(&mut self, translation: Vec3) {
        self.center += translation;
    }
}

/// Cylinder whose axis is parallel to +Z.
///
/// The footprint is a disc at `center` in the xy plane, extruded over
/// `z_range`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZCylinder {
    pub center: Vec2,
    pub radius: f32,
    pub z_range: FloatRange,
}

impl ZCylinder {
    pub fn new(center: Vec2, radius: f32, z_range: FloatRange) -> Self {
        debug_assert!(radius >= 0.0, "negative cylinder radius {radius}");
        Self {
            center,
            radius,
            z_range,
        }
    }

    /// Validates the radius and that the z range is not reversed.
    pub fn try_new(center: Vec2, radius: f32, z_range: FloatRange) -> Result<Self, ShapeError> {
        check_radius(radius)?;
        check_bounds(&[z_range.min], &[z_range.max])?;
        Ok(Self {
            center,
            radius,
            z_range,
        })
    }

    /// Footprint disc in the xy plane.
    #[inline]
    pub fn footprint(&self) -> Disc2 {
        Disc2 {
            center: self.center,
            radius: self.radius,
        }
    }

    /// Center of the volume, halfway up the z range.
    pub fn center_3d(&self) -> Vec3 {
        self.center.extend((self.z_range.min + self.z_range.max) * 0.5)
    }

    pub fn height(&self) -> f32 {
        self.z_range.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_rejects_negative_radius() {
        assert_eq!(
            Disc2::try_new(Vec2::ZERO, -1.0),
            Err(ShapeError::NegativeRadius(-1.0))
        );
        assert!(Sphere::try_new(Vec3::ZERO, 0.0).is_ok());
    }

    #[test]
    fn test_cylinder_rejects_reversed_range() {
        let result = ZCylinder::try_new(Vec2::ZERO, 1.0, FloatRange::new(3.0, 1.0));
        assert!(matches!(result, Err(ShapeError::InvertedBounds { .. })));
    }

    #[test]
    fn test_cylinder_center_and_height() {
        let c = ZCylinder::new(Vec2::new(1.0, 2.0), 0.5, FloatRange::new(-1.0, 3.0));
        assert_eq!(c.center_3d(), Vec3::new(1.0, 2.0, 1.0));
        assert_eq!(c.height(), 4.0);
        assert_eq!(c.footprint(), Disc2::new(Vec2::new(1.0, 2.0), 0.5));
    }
}
