//! Raycasts in the plane.
//!
//! All casts take a unit `direction` and share one decision order: a ray
//! starting inside (or on) the shape impacts immediately, then cheap
//! rejections, then the exact hit. Anything that does not hit within
//! `[0, max_distance]` returns the miss sentinel of [`RaycastResult`].

use glam::Vec2;

use super::nearest_impact;
use super::result::{RaycastResult, RaycastResult2D};
use super::slab::{entry_face_sign, intersect_slabs};
use crate::query::{
    is_point_inside_capsule_2d, is_point_inside_disc_2d, is_point_inside_obb_2d,
    is_point_inside_triangle_2d,
};
use crate::math::Vec2Ext;
use crate::shapes::{Aabb2, Capsule2, Disc2, LineSegment2, Obb2, Triangle2};

pub fn raycast_vs_disc_2d(
    start: Vec2,
    direction: Vec2,
    max_distance: f32,
    disc: &Disc2,
) -> RaycastResult2D {
    debug_assert!(direction.is_normalized(), "ray direction {direction} is not unit length");
    debug_assert!(disc.radius >= 0.0, "negative disc radius {}", disc.radius);

    if is_point_inside_disc_2d(start, disc) {
        return RaycastResult::inside(start, direction, max_distance);
    }
    let miss = || RaycastResult::miss(start, direction, max_distance);

    let radius = disc.radius;
    let to_center = disc.center - start;

    // With the start outside, a center at or behind the start can only be hit behind it.
    let along = to_center.dot(direction);
    if along <= 0.0 || along >= max_distance + radius {
        return miss();
    }

    let across = to_center.dot(direction.perp());
    if across.abs() >= radius {
        return miss();
    }

    let adjustment = (radius * radius - across * across).sqrt();
    let distance = along - adjustment;
    if distance < 0.0 || distance > max_distance {
        return miss();
    }

    let impact = start + direction * distance;
    let normal = (impact - disc.center).normalize_or(-direction);
    RaycastResult::hit(start, direction, max_distance, distance, normal)
}

pub fn raycast_vs_aabb_2d(
    start: Vec2,
    direction: Vec2,
    max_distance: f32,
    aabb: &Aabb2,
) -> RaycastResult2D {
    debug_assert!(direction.is_normalized(), "ray direction {direction} is not unit length");

    if aabb.contains_point(start) {
        return RaycastResult::inside(start, direction, max_distance);
    }

    let slab = intersect_slabs(
        start.to_array(),
        direction.to_array(),
        aabb.mins.to_array(),
        aabb.maxs.to_array(),
    );
    match slab {
        Some(slab) if slab.enter >= 0.0 && slab.enter <= max_distance => {
            let mut normal = Vec2::ZERO;
            normal[slab.entry_axis] = entry_face_sign(direction[slab.entry_axis]);
            RaycastResult::hit(start, direction, max_distance, slab.enter, normal)
        }
        _ => RaycastResult::miss(start, direction, max_distance),
    }
}

/// Slab test in the box's own frame; the normal is the entered face's basis vector.
pub fn raycast_vs_obb_2d(
    start: Vec2,
    direction: Vec2,
    max_distance: f32,
    obb: &Obb2,
) -> RaycastResult2D {
    debug_assert!(direction.is_normalized(), "ray direction {direction} is not unit length");

    if is_point_inside_obb_2d(start, obb) {
        return RaycastResult::inside(start, direction, max_distance);
    }

    let basis = [obb.i_basis, obb.j_basis()];
    let local_start = obb.local_from_world(start);
    let local_direction = Vec2::new(direction.dot(basis[0]), direction.dot(basis[1]));

    let slab = intersect_slabs(
        local_start.to_array(),
        local_direction.to_array(),
        (-obb.half_dimensions).to_array(),
        obb.half_dimensions.to_array(),
    );
    match slab {
        Some(slab) if slab.enter >= 0.0 && slab.enter <= max_distance => {
            let axis = slab.entry_axis;
            let normal = basis[axis] * entry_face_sign(local_direction[axis]);
            RaycastResult::hit(start, direction, max_distance, slab.enter, normal)
        }
        _ => RaycastResult::miss(start, direction, max_distance),
    }
}

/// The segment is hit only when its endpoints lie strictly on opposite
/// sides of the ray's line. The normal faces back toward the ray.
pub fn raycast_vs_line_segment_2d(
    start: Vec2,
    direction: Vec2,
    max_distance: f32,
    segment: &LineSegment2,
) -> RaycastResult2D {
    debug_assert!(direction.is_normalized(), "ray direction {direction} is not unit length");

    let miss = || RaycastResult::miss(start, direction, max_distance);

    let left = direction.perp();
    let to_start = segment.start - start;
    let to_end = segment.end - start;

    let across_start = left.dot(to_start);
    let across_end = left.dot(to_end);
    if across_start * across_end >= 0.0 {
        return miss();
    }

    let along_start = direction.dot(to_start);
    let along_end = direction.dot(to_end);
    if along_start >= max_distance && along_end >= max_distance {
        return miss();
    }
    if along_start <= 0.0 && along_end <= 0.0 {
        return miss();
    }

    let fraction = across_start.abs() / (across_start.abs() + across_end.abs());
    let distance = along_start + fraction * (along_end - along_start);
    if distance < 0.0 || distance > max_distance {
        return miss();
    }

    let mut normal = segment.displacement().normalize_or_zero().perp();
    if direction.dot(normal) > 0.0 {
        normal = -normal;
    }
    RaycastResult::hit(start, direction, max_distance, distance, normal)
}

/// Nearest hit among the two end discs and the two sides of the capsule.
pub fn raycast_vs_capsule_2d(
    start: Vec2,
    direction: Vec2,
    max_distance: f32,
    capsule: &Capsule2,
) -> RaycastResult2D {
    debug_assert!(direction.is_normalized(), "ray direction {direction} is not unit length");
    debug_assert!(capsule.radius >= 0.0, "negative capsule radius {}", capsule.radius);

    if is_point_inside_capsule_2d(start, capsule) {
        return RaycastResult::inside(start, direction, max_distance);
    }

    let bone = capsule.bone;
    let side_offset = bone.displacement().normalize_or_zero().perp() * capsule.radius;
    let left_side = LineSegment2::new(bone.start + side_offset, bone.end + side_offset);
    let right_side = LineSegment2::new(bone.start - side_offset, bone.end - side_offset);

    let start_cap = Disc2::new(bone.start, capsule.radius);
    let end_cap = Disc2::new(bone.end, capsule.radius);

    let candidates = [
        raycast_vs_disc_2d(start, direction, max_distance, &start_cap),
        raycast_vs_disc_2d(start, direction, max_distance, &end_cap),
        raycast_vs_line_segment_2d(start, direction, max_distance, &left_side),
        raycast_vs_line_segment_2d(start, direction, max_distance, &right_side),
    ];
    nearest_impact(candidates)
        .unwrap_or_else(|| RaycastResult::miss(start, direction, max_distance))
}

/// Nearest edge or vertex hit. Requires counter-clockwise winding for the
/// inside test and the outward normals.
///
/// Edge casts skip endpoints lying exactly on the ray's line, so a ray
/// entering through a corner is caught by the vertex test. A vertex hit
/// takes the sum of the two adjoining edge normals.
pub fn raycast_vs_triangle_2d(
    start: Vec2,
    direction: Vec2,
    max_distance: f32,
    triangle: &Triangle2,
) -> RaycastResult2D {
    debug_assert!(direction.is_normalized(), "ray direction {direction} is not unit length");

    if is_point_inside_triangle_2d(start, triangle) {
        return RaycastResult::inside(start, direction, max_distance);
    }

    let edges = triangle.edges();
    let outward =
        edges.map(|edge| edge.displacement().normalize_or_zero().rotated_minus_90_degrees());
    // Vertex n joins the edge before it and edge n.
    let vertex_normals = [
        outward[2] + outward[0],
        outward[0] + outward[1],
        outward[1] + outward[2],
    ];

    let edge_hits =
        edges.map(|edge| raycast_vs_line_segment_2d(start, direction, max_distance, &edge));
    let vertex_hits = [0, 1, 2].map(|n| {
        raycast_vs_vertex_2d(
            start,
            direction,
            max_distance,
            triangle.points[n],
            vertex_normals[n],
        )
    });
    nearest_impact(edge_hits.into_iter().chain(vertex_hits))
        .unwrap_or_else(|| RaycastResult::miss(start, direction, max_distance))
}

/// Hit only when `vertex` lies exactly on the ray's line within `[0, max_distance]`.
fn raycast_vs_vertex_2d(
    start: Vec2,
    direction: Vec2,
    max_distance: f32,
    vertex: Vec2,
    normal: Vec2,
) -> RaycastResult2D {
    let to_vertex = vertex - start;
    let along = direction.dot(to_vertex);
    if direction.perp().dot(to_vertex) != 0.0 || along < 0.0 || along > max_distance {
        return RaycastResult::miss(start, direction, max_distance);
    }
    let normal = normal.normalize_or(-direction);
    RaycastResult::hit(start, direction, max_distance, along, normal)
}
