//! Geometric primitives.
//!
//! All shapes are small `Copy` values with public fields. `new` trusts its
//! input (debug-asserting the obvious invariants); `try_new` validates it and
//! reports a [`ShapeError`].

mod aabb;
mod disc;
mod obb;
mod plane;
mod range;
mod segment;
mod triangle;

pub use aabb::{Aabb2, Aabb3};
pub use disc::{Disc2, Sphere, ZCylinder};
pub use obb::{Obb2, Obb3};
pub use plane::Plane3;
pub use range::{FloatRange, IntRange};
pub use segment::{Capsule2, LineSegment2};
pub use triangle::Triangle2;

use glam::{Vec2, Vec3};
use thiserror::Error;

use crate::query;
use crate::raycast::{self, Ray2D, Ray3D, RaycastResult2D, RaycastResult3D};

/// Allowed deviation of a squared length from 1 for a vector to count as
/// unit. Matches `glam`'s `is_normalized`.
pub const UNIT_TOLERANCE: f32 = 2e-4;

/// Largest |dot| between two basis vectors that still counts as orthogonal.
pub const ORTHOGONAL_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShapeError {
    #[error("negative radius: {0}")]
    NegativeRadius(f32),

    #[error("vector is not unit length (length squared {length_squared})")]
    NonUnitVector { length_squared: f32 },

    #[error("basis vectors are not orthogonal (dot {dot})")]
    NonOrthogonalBasis { dot: f32 },

    #[error("inverted bounds on axis {axis}: min {min} > max {max}")]
    InvertedBounds { axis: usize, min: f32, max: f32 },
}

pub(crate) fn check_radius(radius: f32) -> Result<(), ShapeError> {
    if radius < 0.0 {
        return Err(ShapeError::NegativeRadius(radius));
    }
    Ok(())
}

pub(crate) fn check_bounds(mins: &[f32], maxs: &[f32]) -> Result<(), ShapeError> {
    for (axis, (&min, &max)) in mins.iter().zip(maxs).enumerate() {
        if min > max {
            return Err(ShapeError::InvertedBounds { axis, min, max });
        }
    }
    Ok(())
}

fn check_unit_length_squared(length_squared: f32) -> Result<(), ShapeError> {
    if (length_squared - 1.0).abs() > UNIT_TOLERANCE {
        return Err(ShapeError::NonUnitVector { length_squared });
    }
    Ok(())
}

pub(crate) fn check_unit_2d(v: Vec2) -> Result<(), ShapeError> {
    check_unit_length_squared(v.length_squared())
}

pub(crate) fn check_unit_3d(v: Vec3) -> Result<(), ShapeError> {
    check_unit_length_squared(v.length_squared())
}

pub(crate) fn check_orthogonal(a: Vec3, b: Vec3) -> Result<(), ShapeError> {
    let dot = a.dot(b);
    if dot.abs() > ORTHOGONAL_TOLERANCE {
        return Err(ShapeError::NonOrthogonalBasis { dot });
    }
    Ok(())
}

/// Any closed 2D shape, for scenes that mix shape kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape2D {
    Disc(Disc2),
    Aabb(Aabb2),
    Obb(Obb2),
    Capsule(Capsule2),
    Triangle(Triangle2),
}

impl Shape2D {
    pub fn contains_point(&self, point: Vec2) -> bool {
        match self {
            Shape2D::Disc(disc) => query::is_point_inside_disc_2d(point, disc),
            Shape2D::Aabb(aabb) => query::is_point_inside_aabb_2d(point, aabb),
            Shape2D::Obb(obb) => query::is_point_inside_obb_2d(point, obb),
            Shape2D::Capsule(capsule) => query::is_point_inside_capsule_2d(point, capsule),
            Shape2D::Triangle(triangle) => query::is_point_inside_triangle_2d(point, triangle),
        }
    }

    pub fn nearest_point(&self, reference: Vec2) -> Vec2 {
        match self {
            Shape2D::Disc(disc) => query::nearest_point_on_disc_2d(reference, disc),
            Shape2D::Aabb(aabb) => query::nearest_point_on_aabb_2d(reference, aabb),
            Shape2D::Obb(obb) => query::nearest_point_on_obb_2d(reference, obb),
            Shape2D::Capsule(capsule) => query::nearest_point_on_capsule_2d(reference, capsule),
            Shape2D::Triangle(triangle) => query::nearest_point_on_triangle_2d(reference, triangle),
        }
    }

    pub fn raycast(&self, ray: &Ray2D) -> RaycastResult2D {
        let (start, dir, max) = (ray.origin, ray.direction, ray.max_length);
        match self {
            Shape2D::Disc(disc) => raycast::raycast_vs_disc_2d(start, dir, max, disc),
            Shape2D::Aabb(aabb) => raycast::raycast_vs_aabb_2d(start, dir, max, aabb),
            Shape2D::Obb(obb) => raycast::raycast_vs_obb_2d(start, dir, max, obb),
            Shape2D::Capsule(capsule) => raycast::raycast_vs_capsule_2d(start, dir, max, capsule),
            Shape2D::Triangle(triangle) => {
                raycast::raycast_vs_triangle_2d(start, dir, max, triangle)
            }
        }
    }
}

/// Any closed 3D shape. Planes are left out: they have no inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape3D {
    Sphere(Sphere),
    Aabb(Aabb3),
    Obb(Obb3),
    ZCylinder(ZCylinder),
}

impl Shape3D {
    pub fn contains_point(&self, point: Vec3) -> bool {
        match self {
            Shape3D::Sphere(sphere) => query::is_point_inside_sphere_3d(point, sphere),
            Shape3D::Aabb(aabb) => query::is_point_inside_aabb_3d(point, aabb),
            Shape3D::Obb(obb) => query::is_point_inside_obb_3d(point, obb),
            Shape3D::ZCylinder(cylinder) => query::is_point_inside_z_cylinder_3d(point, cylinder),
        }
    }

    pub fn nearest_point(&self, reference: Vec3) -> Vec3 {
        match self {
            Shape3D::Sphere(sphere) => query::nearest_point_on_sphere_3d(reference, sphere),
            Shape3D::Aabb(aabb) => query::nearest_point_on_aabb_3d(reference, aabb),
            Shape3D::Obb(obb) => query::nearest_point_on_obb_3d(reference, obb),
            Shape3D::ZCylinder(cylinder) => {
                query::nearest_point_on_z_cylinder_3d(reference, cylinder)
            }
        }
    }

    pub fn raycast(&self, ray: &Ray3D) -> RaycastResult3D {
        let (start, dir, max) = (ray.origin, ray.direction, ray.max_length);
        match self {
            Shape3D::Sphere(sphere) => raycast::raycast_vs_sphere_3d(start, dir, max, sphere),
            Shape3D::Aabb(aabb) => raycast::raycast_vs_aabb_3d(start, dir, max, aabb),
            Shape3D::Obb(obb) => raycast::raycast_vs_obb_3d(start, dir, max, obb),
            Shape3D::ZCylinder(cylinder) => {
                raycast::raycast_vs_z_cylinder_3d(start, dir, max, cylinder)
            }
        }
    }
}
