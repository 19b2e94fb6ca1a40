//! Raycasts in 3D space.
//!
//! Same conventions as the 2D casts: unit direction, origin-inside first,
//! miss sentinel otherwise.

use glam::{Vec2, Vec3};

use super::result::{RaycastResult, RaycastResult3D};
use super::slab::{entry_face_sign, intersect_slabs};
use crate::query::{
    is_point_inside_disc_2d, is_point_inside_obb_3d, is_point_inside_sphere_3d,
    is_point_inside_z_cylinder_3d,
};
use crate::shapes::{Aabb3, Obb3, Plane3, Sphere, ZCylinder};

pub fn raycast_vs_sphere_3d(
    start: Vec3,
    direction: Vec3,
    max_distance: f32,
    sphere: &Sphere,
) -> RaycastResult3D {
    debug_assert!(direction.is_normalized(), "ray direction {direction} is not unit length");
    debug_assert!(sphere.radius >= 0.0, "negative sphere radius {}", sphere.radius);

    if is_point_inside_sphere_3d(start, sphere) {
        return RaycastResult::inside(start, direction, max_distance);
    }
    let miss = || RaycastResult::miss(start, direction, max_distance);

    let radius = sphere.radius;
    let to_center = sphere.center - start;

    let along = to_center.dot(direction);
    if along <= 0.0 || along >= max_distance + radius {
        return miss();
    }

    let across_sq = (to_center - direction * along).length_squared();
    if across_sq >= radius * radius {
        return miss();
    }

    let distance = along - (radius * radius - across_sq).sqrt();
    if distance < 0.0 || distance > max_distance {
        return miss();
    }

    let impact = start + direction * distance;
    let normal = (impact - sphere.center).normalize_or(-direction);
    RaycastResult::hit(start, direction, max_distance, distance, normal)
}

pub fn raycast_vs_aabb_3d(
    start: Vec3,
    direction: Vec3,
    max_distance: f32,
    aabb: &Aabb3,
) -> RaycastResult3D {
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
            let mut normal = Vec3::ZERO;
            normal[slab.entry_axis] = entry_face_sign(direction[slab.entry_axis]);
            RaycastResult::hit(start, direction, max_distance, slab.enter, normal)
        }
        _ => RaycastResult::miss(start, direction, max_distance),
    }
}

pub fn raycast_vs_obb_3d(
    start: Vec3,
    direction: Vec3,
    max_distance: f32,
    obb: &Obb3,
) -> RaycastResult3D {
    debug_assert!(direction.is_normalized(), "ray direction {direction} is not unit length");

    if is_point_inside_obb_3d(start, obb) {
        return RaycastResult::inside(start, direction, max_distance);
    }

    let local_direction = obb.local_direction(direction);
    let slab = intersect_slabs(
        obb.local_from_world(start).to_array(),
        local_direction.to_array(),
        (-obb.half_dimensions).to_array(),
        obb.half_dimensions.to_array(),
    );
    match slab {
        Some(slab) if slab.enter >= 0.0 && slab.enter <= max_distance => {
            let basis = [obb.i_basis, obb.j_basis, obb.k_basis];
            let axis = slab.entry_axis;
            let normal = basis[axis] * entry_face_sign(local_direction[axis]);
            RaycastResult::hit(start, direction, max_distance, slab.enter, normal)
        }
        _ => RaycastResult::miss(start, direction, max_distance),
    }
}

/// Intersects the z-range slab with the infinite vertical cylinder through
/// the footprint disc. Cap hits get a +/-Z normal, wall hits a horizontal one.
pub fn raycast_vs_z_cylinder_3d(
    start: Vec3,
    direction: Vec3,
    max_distance: f32,
    cylinder: &ZCylinder,
) -> RaycastResult3D {
    debug_assert!(direction.is_normalized(), "ray direction {direction} is not unit length");
    debug_assert!(cylinder.radius >= 0.0, "negative cylinder radius {}", cylinder.radius);

    if is_point_inside_z_cylinder_3d(start, cylinder) {
        return RaycastResult::inside(start, direction, max_distance);
    }
    let footprint = cylinder.footprint();
    let z_range = cylinder.z_range;
    let miss = || RaycastResult::miss(start, direction, max_distance);

    let (z_enter, z_exit) = if direction.z == 0.0 {
        if !z_range.is_on_range(start.z) {
            return miss();
        }
        (f32::NEG_INFINITY, f32::INFINITY)
    } else {
        let to_min = (z_range.min - start.z) / direction.z;
        let to_max = (z_range.max - start.z) / direction.z;
        (to_min.min(to_max), to_min.max(to_max))
    };

    let flat_start = start.truncate();
    let flat_direction = direction.truncate();
    let flat_length = flat_direction.length();
    let (wall_enter, wall_exit) = if flat_length == 0.0 {
        if !is_point_inside_disc_2d(flat_start, &footprint) {
            return miss();
        }
        (f32::NEG_INFINITY, f32::INFINITY)
    } else {
        let flat_unit = flat_direction / flat_length;
        let to_center = footprint.center - flat_start;
        let along = to_center.dot(flat_unit);
        let across = to_center.dot(flat_unit.perp());
        if across.abs() >= footprint.radius {
            return miss();
        }
        let adjustment = (footprint.radius * footprint.radius - across * across).sqrt();
        // Planar distances scaled back to distances along the 3D ray.
        ((along - adjustment) / flat_length, (along + adjustment) / flat_length)
    };

    let enter = z_enter.max(wall_enter);
    let exit = z_exit.min(wall_exit);
    if enter > exit || enter < 0.0 || enter > max_distance {
        return miss();
    }

    let impact = start + direction * enter;
    let normal = if z_enter > wall_enter {
        if start.z < z_range.min {
            Vec3::NEG_Z
        } else {
            Vec3::Z
        }
    } else {
        let radial: Vec2 = impact.truncate() - footprint.center;
        radial.normalize_or_zero().extend(0.0)
    };
    RaycastResult::hit(start, direction, max_distance, enter, normal)
}

/// Hits only when the ray's start and end lie on different sides of the
/// plane. The normal faces the side the ray came from.
pub fn raycast_vs_plane_3d(
    start: Vec3,
    direction: Vec3,
    max_distance: f32,
    plane: &Plane3,
) -> RaycastResult3D {
    debug_assert!(direction.is_normalized(), "ray direction {direction} is not unit length");

    let end = start + direction * max_distance;
    let start_in_front = plane.is_point_in_front(start);
    if start_in_front == plane.is_point_in_front(end) {
        return RaycastResult::miss(start, direction, max_distance);
    }

    let approach = direction.dot(plane.normal);
    // Adding zero turns a -0.0 from a start on the plane into +0.0.
    let distance = plane.altitude(start) / -approach + 0.0;
    let normal = if start_in_front {
        plane.normal
    } else {
        -plane.normal
    };
    RaycastResult::hit(start, direction, max_distance, distance, normal)
}
