//! Nearest point on a shape to a reference point.
//!
//! Every function returns the reference point itself when it already lies
//! inside or on the shape.

use glam::{Vec2, Vec3};

use super::overlap::{
    is_point_inside_capsule_2d, is_point_inside_disc_2d, is_point_inside_obb_2d,
    is_point_inside_obb_3d, is_point_inside_sphere_3d, is_point_inside_triangle_2d,
    is_point_inside_z_cylinder_3d,
};
use crate::math::{clamp, projected_onto_2d, Vec2Ext};
use crate::shapes::{
    Aabb2, Aabb3, Capsule2, Disc2, LineSegment2, Obb2, Obb3, Plane3, Sphere, Triangle2, ZCylinder,
};

/// Closest point on the segment. Reference points beyond either end snap to that end.
pub fn nearest_point_on_line_segment_2d(reference: Vec2, segment: &LineSegment2) -> Vec2 {
    let start_to_end = segment.displacement();
    let start_to_point = reference - segment.start;

    if start_to_point.dot(start_to_end) <= 0.0 {
        return segment.start;
    }
    if (reference - segment.end).dot(start_to_end) >= 0.0 {
        return segment.end;
    }

    let t = start_to_point.dot(start_to_end) / start_to_end.length_squared();
    segment.start + start_to_end * t
}

/// Closest point on the infinite line through the segment's endpoints.
pub fn nearest_point_on_infinite_line_2d(reference: Vec2, line: &LineSegment2) -> Vec2 {
    line.start + projected_onto_2d(reference - line.start, line.displacement())
}

pub fn nearest_point_on_disc_2d(reference: Vec2, disc: &Disc2) -> Vec2 {
    if is_point_inside_disc_2d(reference, disc) {
        return reference;
    }
    disc.center + (reference - disc.center).clamped_length(disc.radius)
}

pub fn nearest_point_on_aabb_2d(reference: Vec2, aabb: &Aabb2) -> Vec2 {
    aabb.nearest_point(reference)
}

pub fn nearest_point_on_obb_2d(reference: Vec2, obb: &Obb2) -> Vec2 {
    if is_point_inside_obb_2d(reference, obb) {
        return reference;
    }

    let local = obb.local_from_world(reference);
    let half = obb.half_dimensions;
    let clamped = Vec2::new(
        clamp(local.x, -half.x, half.x),
        clamp(local.y, -half.y, half.y),
    );
    obb.world_from_local(clamped)
}

/// Nearest point on the bone, pushed back toward the reference by at most the radius.
pub fn nearest_point_on_capsule_2d(reference: Vec2, capsule: &Capsule2) -> Vec2 {
    if is_point_inside_capsule_2d(reference, capsule) {
        return reference;
    }
    let on_bone = nearest_point_on_line_segment_2d(reference, &capsule.bone);
    on_bone + (reference - on_bone).clamped_length(capsule.radius)
}

/// Closest point on the edges unless the reference is inside. Edge ties go AB, then BC, then CA.
pub fn nearest_point_on_triangle_2d(reference: Vec2, triangle: &Triangle2) -> Vec2 {
    if is_point_inside_triangle_2d(reference, triangle) {
        return reference;
    }

    let [ab, bc, ca] = triangle
        .edges()
        .map(|edge| nearest_point_on_line_segment_2d(reference, &edge));
    let (d_ab, d_bc, d_ca) = (
        reference.distance_squared(ab),
        reference.distance_squared(bc),
        reference.distance_squared(ca),
    );

    if d_ab <= d_bc && d_ab <= d_ca {
        ab
    } else if d_bc <= d_ca {
        bc
    } else {
        ca
    }
}

pub fn nearest_point_on_sphere_3d(reference: Vec3, sphere: &Sphere) -> Vec3 {
    if is_point_inside_sphere_3d(reference, sphere) {
        return reference;
    }
    sphere.center + (reference - sphere.center).normalize_or_zero() * sphere.radius
}

pub fn nearest_point_on_aabb_3d(reference: Vec3, aabb: &Aabb3) -> Vec3 {
    aabb.nearest_point(reference)
}

pub fn nearest_point_on_obb_3d(reference: Vec3, obb: &Obb3) -> Vec3 {
    if is_point_inside_obb_3d(reference, obb) {
        return reference;
    }

    let local = obb.local_from_world(reference);
    let half = obb.half_dimensions;
    let clamped = Vec3::new(
        clamp(local.x, -half.x, half.x),
        clamp(local.y, -half.y, half.y),
        clamp(local.z, -half.z, half.z),
    );
    obb.world_from_local(clamped)
}

/// Footprint disc nearest point combined with a clamp into the z range.
pub fn nearest_point_on_z_cylinder_3d(reference: Vec3, cylinder: &ZCylinder) -> Vec3 {
    if is_point_inside_z_cylinder_3d(reference, cylinder) {
        return reference;
    }

    let xy = nearest_point_on_disc_2d(reference.truncate(), &cylinder.footprint());
    let z = clamp(reference.z, cylinder.z_range.min, cylinder.z_range.max);
    xy.extend(z)
}

pub fn nearest_point_on_plane_3d(reference: Vec3, plane: &Plane3) -> Vec3 {
    plane.nearest_point(reference)
}
