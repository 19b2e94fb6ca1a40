//! Vector and basis primitives.
//!
//! Vectors and matrices are `glam` types. This module adds the engine
//! vocabulary on top of them: degree-based angle helpers, range mapping,
//! distances, projections and basis transforms.

pub mod basis;
pub mod random;
pub mod vector;

use glam::{IVec2, Vec2, Vec3};

pub use basis::{EulerAngles, Mat4Ext};
pub use random::RandomNumberGenerator;
pub use vector::{Vec2Ext, Vec3Ext};

// ---------------------------------------------------------------------------
// Angles
// ---------------------------------------------------------------------------

#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians.to_degrees()
}

#[inline]
pub fn cos_degrees(degrees: f32) -> f32 {
    degrees.to_radians().cos()
}

#[inline]
pub fn sin_degrees(degrees: f32) -> f32 {
    degrees.to_radians().sin()
}

#[inline]
pub fn atan2_degrees(y: f32, x: f32) -> f32 {
    y.atan2(x).to_degrees()
}

/// Signed angular displacement from `start_deg` to `end_deg`, wrapped into `[-180, 180]`.
///
/// A half turn keeps the sign of the raw displacement. Non-finite input gives NaN.
pub fn shortest_angular_disp_degrees(start_deg: f32, end_deg: f32) -> f32 {
    let displacement = end_deg - start_deg;
    let wrapped = displacement.rem_euclid(360.0);
    if wrapped > 180.0 || (wrapped == 180.0 && displacement < 0.0) {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Turn `current_deg` toward `target_deg` by at most `max_delta_deg` along the short way round.
pub fn turned_toward_degrees(current_deg: f32, target_deg: f32, max_delta_deg: f32) -> f32 {
    let turn = shortest_angular_disp_degrees(current_deg, target_deg);
    current_deg + clamp(turn, -max_delta_deg, max_delta_deg)
}

/// Unsigned angle between two vectors in degrees, in `[0, 180]`.
pub fn angle_degrees_between_vectors_2d(a: Vec2, b: Vec2) -> f32 {
    let cos = a.normalize_or_zero().dot(b.normalize_or_zero());
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

// ---------------------------------------------------------------------------
// Distances
// ---------------------------------------------------------------------------

#[inline]
pub fn distance_2d(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

#[inline]
pub fn distance_squared_2d(a: Vec2, b: Vec2) -> f32 {
    a.distance_squared(b)
}

#[inline]
pub fn distance_3d(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

#[inline]
pub fn distance_squared_3d(a: Vec3, b: Vec3) -> f32 {
    a.distance_squared(b)
}

/// Distance between two points ignoring z.
#[inline]
pub fn distance_xy_3d(a: Vec3, b: Vec3) -> f32 {
    distance_xy_squared_3d(a, b).sqrt()
}

#[inline]
pub fn distance_xy_squared_3d(a: Vec3, b: Vec3) -> f32 {
    a.truncate().distance_squared(b.truncate())
}

/// Manhattan distance between two grid coordinates.
#[inline]
pub fn taxicab_distance_2d(a: IVec2, b: IVec2) -> i32 {
    let delta = b - a;
    delta.x.abs() + delta.y.abs()
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Length of `v` projected onto the direction of `onto`.
#[inline]
pub fn projected_length_2d(v: Vec2, onto: Vec2) -> f32 {
    v.dot(onto.normalize_or_zero())
}

/// `v` projected onto the direction of `onto`.
#[inline]
pub fn projected_onto_2d(v: Vec2, onto: Vec2) -> Vec2 {
    let axis = onto.normalize_or_zero();
    axis * v.dot(axis)
}

// ---------------------------------------------------------------------------
// Transforms
// ---------------------------------------------------------------------------

/// Scale, then rotate about the origin, then translate.
pub fn transform_position_2d(
    position: Vec2,
    uniform_scale: f32,
    rotation_degrees: f32,
    translation: Vec2,
) -> Vec2 {
    (position * uniform_scale).rotated_degrees(rotation_degrees) + translation
}

/// Map local (i, j) coordinates into world space.
#[inline]
pub fn transform_position_2d_basis(
    position: Vec2,
    i_basis: Vec2,
    j_basis: Vec2,
    translation: Vec2,
) -> Vec2 {
    i_basis * position.x + j_basis * position.y + translation
}

/// Rotate about z, scale in xy, then translate in xy. z is preserved.
pub fn transform_position_xy_3d(
    position: Vec3,
    uniform_scale_xy: f32,
    z_rotation_degrees: f32,
    translation_xy: Vec2,
) -> Vec3 {
    let rotated = position.rotated_about_z_degrees(z_rotation_degrees);
    Vec3::new(
        rotated.x * uniform_scale_xy + translation_xy.x,
        rotated.y * uniform_scale_xy + translation_xy.y,
        rotated.z,
    )
}

/// Basis variant of [`transform_position_xy_3d`]. z is preserved.
pub fn transform_position_xy_3d_basis(
    position: Vec3,
    i_basis: Vec2,
    j_basis: Vec2,
    translation_xy: Vec2,
) -> Vec3 {
    let xy = transform_position_2d_basis(position.truncate(), i_basis, j_basis, translation_xy);
    xy.extend(position.z)
}

// ---------------------------------------------------------------------------
// Ranges and interpolation
// ---------------------------------------------------------------------------

#[inline]
pub fn interpolate(start: f32, end: f32, fraction: f32) -> f32 {
    start * (1.0 - fraction) + end * fraction
}

/// Linear interpolation for any glam vector.
#[inline]
pub fn lerp<V>(start: V, end: V, fraction: f32) -> V
where
    V: Copy
        + std::ops::Add<Output = V>
        + std::ops::Sub<Output = V>
        + std::ops::Mul<f32, Output = V>,
{
    start + (end - start) * fraction
}

/// Where `value` sits between `start` and `end` (0 at start, 1 at end).
///
/// A zero-width range yields 0.
#[inline]
pub fn fraction_within_range(value: f32, start: f32, end: f32) -> f32 {
    if end == start {
        return 0.0;
    }
    (value - start) / (end - start)
}

#[inline]
pub fn range_map(value: f32, in_start: f32, in_end: f32, out_start: f32, out_end: f32) -> f32 {
    interpolate(out_start, out_end, fraction_within_range(value, in_start, in_end))
}

pub fn range_map_clamped(
    value: f32,
    in_start: f32,
    in_end: f32,
    out_start: f32,
    out_end: f32,
) -> f32 {
    let (lo, hi) = if in_start <= in_end {
        (in_start, in_end)
    } else {
        (in_end, in_start)
    };
    range_map(clamp(value, lo, hi), in_start, in_end, out_start, out_end)
}

/// Inclusive clamp that never panics, unlike `f32::clamp`, when `min > max`
/// (the upper bound wins).
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value >= max {
        return max;
    }
    if value <= min {
        return min;
    }
    value
}

#[inline]
pub fn clamp_zero_to_one(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

#[inline]
pub fn round_down_to_int(value: f32) -> i32 {
    value.floor() as i32
}
