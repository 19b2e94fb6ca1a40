//! Ray and raycast result value types shared by the 2D and 3D casts.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use glam::{Vec2, Vec3};

/// Vector types a ray can be cast in.
pub trait RayVector:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Neg<Output = Self>
{
    fn is_unit(self) -> bool;
}

impl RayVector for Vec2 {
    #[inline]
    fn is_unit(self) -> bool {
        self.is_normalized()
    }
}

impl RayVector for Vec3 {
    #[inline]
    fn is_unit(self) -> bool {
        self.is_normalized()
    }
}

/// A ray segment: unit `direction`, travelling at most `max_length` from `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<V> {
    pub origin: V,
    pub direction: V,
    pub max_length: f32,
}

pub type Ray2D = Ray<Vec2>;
pub type Ray3D = Ray<Vec3>;

impl<V: RayVector> Ray<V> {
    pub fn new(origin: V, direction: V, max_length: f32) -> Self {
        debug_assert!(direction.is_unit(), "ray direction {direction:?} is not unit length");
        Self {
            origin,
            direction,
            max_length,
        }
    }

    #[inline]
    pub fn point_at(&self, distance: f32) -> V {
        self.origin + self.direction * distance
    }

    /// Where the ray stops if it hits nothing.
    #[inline]
    pub fn end(&self) -> V {
        self.point_at(self.max_length)
    }
}

impl Ray2D {
    /// Ray from `start` toward `end`, as long as the gap between them.
    ///
    /// Coincident points give a zero-length ray along +X.
    pub fn between(start: Vec2, end: Vec2) -> Self {
        let delta = end - start;
        Self::new(start, delta.normalize_or(Vec2::X), delta.length())
    }
}

impl Ray3D {
    /// Ray from `start` toward `end`, as long as the gap between them.
    ///
    /// Coincident points give a zero-length ray along +X.
    pub fn between(start: Vec3, end: Vec3) -> Self {
        let delta = end - start;
        Self::new(start, delta.normalize_or(Vec3::X), delta.length())
    }
}

/// Outcome of a single raycast.
///
/// A miss is not a null value: it reports the ray as if it travelled its
/// full length, with `impact_distance == ray_max_length`, the impact
/// position at the ray's end and the normal equal to the ray direction.
/// A ray starting inside the shape impacts at distance 0 with a normal
/// opposing the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastResult<V> {
    pub did_impact: bool,
    pub impact_distance: f32,
    pub impact_position: V,
    pub impact_normal: V,
    pub ray_origin: V,
    pub ray_direction: V,
    pub ray_max_length: f32,
}

pub type RaycastResult2D = RaycastResult<Vec2>;
pub type RaycastResult3D = RaycastResult<Vec3>;

impl<V: RayVector> RaycastResult<V> {
    pub fn miss(origin: V, direction: V, max_length: f32) -> Self {
        Self {
            did_impact: false,
            impact_distance: max_length,
            impact_position: origin + direction * max_length,
            impact_normal: direction,
            ray_origin: origin,
            ray_direction: direction,
            ray_max_length: max_length,
        }
    }

    /// The ray starts inside (or on) the shape.
    pub fn inside(origin: V, direction: V, max_length: f32) -> Self {
        Self {
            did_impact: true,
            impact_distance: 0.0,
            impact_position: origin,
            impact_normal: -direction,
            ray_origin: origin,
            ray_direction: direction,
            ray_max_length: max_length,
        }
    }

    pub fn hit(origin: V, direction: V, max_length: f32, distance: f32, normal: V) -> Self {
        Self {
            did_impact: true,
            impact_distance: distance,
            impact_position: origin + direction * distance,
            impact_normal: normal,
            ray_origin: origin,
            ray_direction: direction,
            ray_max_length: max_length,
        }
    }

    /// Impact distance as a fraction of the ray length; 1 on a miss.
    pub fn impact_fraction(&self) -> f32 {
        if self.ray_max_length == 0.0 {
            return if self.did_impact { 0.0 } else { 1.0 };
        }
        self.impact_distance / self.ray_max_length
    }

    pub fn ray(&self) -> Ray<V> {
        Ray {
            origin: self.ray_origin,
            direction: self.ray_direction,
            max_length: self.ray_max_length,
        }
    }
}
