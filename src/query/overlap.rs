//! Point containment and shape-vs-shape overlap tests.
//!
//! Every test includes the boundary: a point on a shape's surface is
//! inside it, and shapes that merely touch overlap.

use glam::{Vec2, Vec3};

use super::nearest::{
    nearest_point_on_line_segment_2d, nearest_point_on_obb_3d, nearest_point_on_z_cylinder_3d,
};
use crate::math::{shortest_angular_disp_degrees, EulerAngles, Vec2Ext};
use crate::shapes::{
    Aabb2, Aabb3, Capsule2, Disc2, FloatRange, Obb2, Obb3, Plane3, Sphere, Triangle2, ZCylinder,
};

// ---------------------------------------------------------------------------
// 2D containment
// ---------------------------------------------------------------------------

#[inline]
pub fn is_point_inside_disc_2d(point: Vec2, disc: &Disc2) -> bool {
    point.distance_squared(disc.center) <= disc.radius * disc.radius
}

#[inline]
pub fn is_point_inside_aabb_2d(point: Vec2, aabb: &Aabb2) -> bool {
    aabb.contains_point(point)
}

pub fn is_point_inside_obb_2d(point: Vec2, obb: &Obb2) -> bool {
    let local = obb.local_from_world(point);
    local.x.abs() <= obb.half_dimensions.x && local.y.abs() <= obb.half_dimensions.y
}

pub fn is_point_inside_capsule_2d(point: Vec2, capsule: &Capsule2) -> bool {
    let on_bone = nearest_point_on_line_segment_2d(point, &capsule.bone);
    point.distance_squared(on_bone) <= capsule.radius * capsule.radius
}

/// Inside when the point is on the inner side of all three edges. Requires
/// counter-clockwise winding.
pub fn is_point_inside_triangle_2d(point: Vec2, triangle: &Triangle2) -> bool {
    triangle.edges().iter().all(|edge| {
        let inward = edge.displacement().rotated_90_degrees();
        inward.dot(point - edge.start) >= 0.0
    })
}

/// Pie slice of `radius` centred on `forward_degrees`, `aperture_degrees` wide.
pub fn is_point_inside_oriented_sector_2d(
    point: Vec2,
    tip: Vec2,
    forward_degrees: f32,
    aperture_degrees: f32,
    radius: f32,
) -> bool {
    let tip_to_point = point - tip;
    if tip_to_point.length_squared() > radius * radius {
        return false;
    }
    let offset = shortest_angular_disp_degrees(forward_degrees, tip_to_point.orientation_degrees());
    offset.abs() <= aperture_degrees * 0.5
}

/// Like [`is_point_inside_oriented_sector_2d`] with the heading given as a vector.
pub fn is_point_inside_directed_sector_2d(
    point: Vec2,
    tip: Vec2,
    forward: Vec2,
    aperture_degrees: f32,
    radius: f32,
) -> bool {
    is_point_inside_oriented_sector_2d(
        point,
        tip,
        forward.orientation_degrees(),
        aperture_degrees,
        radius,
    )
}

// ---------------------------------------------------------------------------
// 3D containment
// ---------------------------------------------------------------------------

#[inline]
pub fn is_point_inside_sphere_3d(point: Vec3, sphere: &Sphere) -> bool {
    point.distance_squared(sphere.center) <= sphere.radius * sphere.radius
}

#[inline]
pub fn is_point_inside_aabb_3d(point: Vec3, aabb: &Aabb3) -> bool {
    aabb.contains_point(point)
}

pub fn is_point_inside_obb_3d(point: Vec3, obb: &Obb3) -> bool {
    let local = obb.local_from_world(point);
    local.abs().cmple(obb.half_dimensions).all()
}

pub fn is_point_inside_z_cylinder_3d(point: Vec3, cylinder: &ZCylinder) -> bool {
    is_point_inside_disc_2d(point.truncate(), &cylinder.footprint())
        && cylinder.z_range.is_on_range(point.z)
}

/// Whether `point` is within a cone of `cone_angle_degrees` (full aperture)
/// around the forward direction of `orientation`. The apex counts as inside.
pub fn is_point_inside_vision_cone(
    origin: Vec3,
    orientation: &EulerAngles,
    cone_angle_degrees: f32,
    point: Vec3,
) -> bool {
    if point == origin {
        return true;
    }
    let to_point = (point - origin).normalize_or_zero();
    let max_cos = (cone_angle_degrees * 0.5).to_radians().cos();
    orientation.forward_normal().dot(to_point) >= max_cos
}

// ---------------------------------------------------------------------------
// 2D overlap
// ---------------------------------------------------------------------------

#[inline]
pub fn do_discs_overlap_2d(a: &Disc2, b: &Disc2) -> bool {
    let combined = a.radius + b.radius;
    a.center.distance_squared(b.center) <= combined * combined
}

#[inline]
pub fn do_aabbs_overlap_2d(a: &Aabb2, b: &Aabb2) -> bool {
    a.mins.x <= b.maxs.x && b.mins.x <= a.maxs.x && a.mins.y <= b.maxs.y && b.mins.y <= a.maxs.y
}

pub fn does_disc_overlap_aabb_2d(disc: &Disc2, aabb: &Aabb2) -> bool {
    is_point_inside_disc_2d(aabb.nearest_point(disc.center), disc)
}

// ---------------------------------------------------------------------------
// 3D overlap
// ---------------------------------------------------------------------------

#[inline]
pub fn do_spheres_overlap_3d(a: &Sphere, b: &Sphere) -> bool {
    let combined = a.radius + b.radius;
    a.center.distance_squared(b.center) <= combined * combined
}

#[inline]
pub fn do_aabbs_overlap_3d(a: &Aabb3, b: &Aabb3) -> bool {
    a.mins.cmple(b.maxs).all() && b.mins.cmple(a.maxs).all()
}

/// Footprint discs overlap and the z ranges overlap.
pub fn do_z_cylinders_overlap_3d(a: &ZCylinder, b: &ZCylinder) -> bool {
    do_discs_overlap_2d(&a.footprint(), &b.footprint()) && a.z_range.is_overlapping_with(&b.z_range)
}

pub fn does_sphere_overlap_aabb_3d(sphere: &Sphere, aabb: &Aabb3) -> bool {
    is_point_inside_sphere_3d(aabb.nearest_point(sphere.center), sphere)
}

pub fn does_sphere_overlap_z_cylinder_3d(sphere: &Sphere, cylinder: &ZCylinder) -> bool {
    let nearest = nearest_point_on_z_cylinder_3d(sphere.center, cylinder);
    is_point_inside_sphere_3d(nearest, sphere)
}

pub fn does_sphere_overlap_obb_3d(sphere: &Sphere, obb: &Obb3) -> bool {
    is_point_inside_sphere_3d(nearest_point_on_obb_3d(sphere.center, obb), sphere)
}

/// Both shapes are extrusions along z, so they overlap exactly when their
/// z ranges and their xy footprints both do.
pub fn does_aabb_overlap_z_cylinder_3d(aabb: &Aabb3, cylinder: &ZCylinder) -> bool {
    let z_range = FloatRange::new(aabb.mins.z, aabb.maxs.z);
    if !z_range.is_overlapping_with(&cylinder.z_range) {
        return false;
    }
    let footprint = Aabb2 {
        mins: aabb.mins.truncate(),
        maxs: aabb.maxs.truncate(),
    };
    does_disc_overlap_aabb_2d(&cylinder.footprint(), &footprint)
}

pub fn does_plane_overlap_sphere_3d(plane: &Plane3, sphere: &Sphere) -> bool {
    is_point_inside_sphere_3d(plane.nearest_point(sphere.center), sphere)
}

pub fn does_plane_overlap_aabb_3d(plane: &Plane3, aabb: &Aabb3) -> bool {
    corners_straddle_plane(plane, &aabb.corners())
}

pub fn does_plane_overlap_obb_3d(plane: &Plane3, obb: &Obb3) -> bool {
    corners_straddle_plane(plane, &obb.corners())
}

/// Overlap unless every corner is strictly in front, or every corner is not.
fn corners_straddle_plane(plane: &Plane3, corners: &[Vec3; 8]) -> bool {
    let in_front = corners
        .iter()
        .filter(|&&corner| plane.is_point_in_front(corner))
        .count();
    in_front != 0 && in_front != corners.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_containment_is_inclusive() {
        let disc = Disc2::new(Vec2::ZERO, 2.0);
        assert!(is_point_inside_disc_2d(Vec2::new(2.0, 0.0), &disc));
        assert!(!is_point_inside_disc_2d(Vec2::new(2.0, 0.1), &disc));
    }

    #[test]
    fn test_obb2_containment() {
        let obb = Obb2::new(Vec2::new(1.0, 1.0), Vec2::Y, Vec2::new(2.0, 0.5));
        assert!(is_point_inside_obb_2d(Vec2::new(1.0, 3.0), &obb));
        assert!(is_point_inside_obb_2d(Vec2::new(1.5, 1.0), &obb));
        assert!(!is_point_inside_obb_2d(Vec2::new(3.0, 1.0), &obb));
    }

    #[test]
    fn test_capsule_containment() {
        let capsule = Capsule2::new(Vec2::ZERO, Vec2::new(4.0, 0.0), 1.0);
        assert!(is_point_inside_capsule_2d(Vec2::new(2.0, 1.0), &capsule));
        assert!(is_point_inside_capsule_2d(Vec2::new(-1.0, 0.0), &capsule));
        assert!(!is_point_inside_capsule_2d(Vec2::new(-0.8, 0.8), &capsule));
    }

    #[test]
    fn test_triangle_containment() {
        let tri = Triangle2::new(Vec2::ZERO, Vec2::new(8.0, 0.0), Vec2::new(0.0, 6.0));
        assert!(is_point_inside_triangle_2d(Vec2::new(1.0, 1.0), &tri));
        assert!(is_point_inside_triangle_2d(Vec2::new(4.0, 0.0), &tri));
        assert!(!is_point_inside_triangle_2d(Vec2::new(6.0, 5.0), &tri));

        let clockwise = Triangle2::new(Vec2::ZERO, Vec2::new(0.0, 6.0), Vec2::new(8.0, 0.0));
        assert!(!is_point_inside_triangle_2d(Vec2::new(1.0, 1.0), &clockwise));
    }

    #[test]
    fn test_sectors() {
        let tip = Vec2::ZERO;
        assert!(is_point_inside_oriented_sector_2d(Vec2::new(3.0, 1.0), tip, 0.0, 60.0, 5.0));
        assert!(!is_point_inside_oriented_sector_2d(Vec2::new(1.0, 3.0), tip, 0.0, 60.0, 5.0));
        assert!(!is_point_inside_oriented_sector_2d(Vec2::new(6.0, 0.0), tip, 0.0, 60.0, 5.0));
        // Wraps across +/-180.
        let behind = Vec2::new(-3.0, -0.5);
        assert!(is_point_inside_oriented_sector_2d(behind, tip, 175.0, 30.0, 5.0));
        assert!(is_point_inside_directed_sector_2d(
            Vec2::new(0.5, 3.0),
            tip,
            Vec2::new(0.0, 2.0),
            45.0,
            5.0
        ));
    }

    #[test]
    fn test_sector_with_huge_heading() {
        // A heading of 1e10 degrees points the same way as -80.
        let point = Vec2::new(1.0, 0.0);
        assert!(!is_point_inside_oriented_sector_2d(point, Vec2::ZERO, 1.0e10, 90.0, 5.0));
        assert!(is_point_inside_oriented_sector_2d(point, Vec2::ZERO, 1.0e10, 200.0, 5.0));
        assert!(!is_point_inside_oriented_sector_2d(
            point,
            Vec2::ZERO,
            f32::INFINITY,
            360.0,
            5.0
        ));
    }

    #[test]
    fn test_vision_cone() {
        let facing_x = EulerAngles::default();
        let origin = Vec3::ZERO;
        let ahead = Vec3::new(5.0, 1.0, 0.0);
        let aside = Vec3::new(1.0, 5.0, 0.0);
        assert!(is_point_inside_vision_cone(origin, &facing_x, 90.0, ahead));
        assert!(!is_point_inside_vision_cone(origin, &facing_x, 90.0, aside));
        assert!(is_point_inside_vision_cone(origin, &facing_x, 10.0, origin));
    }

    #[test]
    fn test_obb3_and_cylinder_containment() {
        let obb = Obb3::default();
        assert!(is_point_inside_obb_3d(Vec3::splat(0.5), &obb));
        assert!(!is_point_inside_obb_3d(Vec3::new(0.6, 0.0, 0.0), &obb));

        let cyl = ZCylinder::new(Vec2::ZERO, 1.0, FloatRange::new(0.0, 2.0));
        assert!(is_point_inside_z_cylinder_3d(Vec3::new(1.0, 0.0, 2.0), &cyl));
        assert!(!is_point_inside_z_cylinder_3d(Vec3::new(0.0, 0.0, 2.1), &cyl));
    }

    #[test]
    fn test_touching_discs_overlap() {
        let a = Disc2::new(Vec2::ZERO, 1.0);
        let b = Disc2::new(Vec2::new(2.0, 0.0), 1.0);
        let c = Disc2::new(Vec2::new(2.1, 0.0), 1.0);
        assert!(do_discs_overlap_2d(&a, &b));
        assert!(!do_discs_overlap_2d(&a, &c));
    }

    #[test]
    fn test_aabb_overlaps() {
        let a = Aabb2::from_coords(0.0, 0.0, 1.0, 1.0);
        let b = Aabb2::from_coords(1.0, 1.0, 2.0, 2.0);
        let c = Aabb2::from_coords(1.5, 0.0, 2.0, 1.0);
        assert!(do_aabbs_overlap_2d(&a, &b));
        assert!(!do_aabbs_overlap_2d(&a, &c));

        let a3 = Aabb3::from_coords(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let b3 = Aabb3::from_coords(0.5, 0.5, 1.0, 2.0, 2.0, 2.0);
        let c3 = Aabb3::from_coords(0.5, 0.5, 1.5, 2.0, 2.0, 2.0);
        assert!(do_aabbs_overlap_3d(&a3, &b3));
        assert!(!do_aabbs_overlap_3d(&a3, &c3));
    }

    #[test]
    fn test_disc_vs_aabb() {
        let aabb = Aabb2::from_coords(0.0, 0.0, 2.0, 2.0);
        assert!(does_disc_overlap_aabb_2d(&Disc2::new(Vec2::new(3.0, 1.0), 1.0), &aabb));
        assert!(!does_disc_overlap_aabb_2d(&Disc2::new(Vec2::new(3.0, 3.0), 1.0), &aabb));
        assert!(does_disc_overlap_aabb_2d(&Disc2::new(Vec2::ONE, 0.1), &aabb));
    }

    #[test]
    fn test_sphere_overlaps() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0);
        let aabb = Aabb3::from_coords(-1.0, -1.0, -1.0, 1.0, 1.0, 2.0);
        assert!(does_sphere_overlap_aabb_3d(&sphere, &aabb));

        let half = Vec3::new(1.0, 1.0, 1.5);
        let obb = Obb3::new(Vec3::ZERO, Vec3::Y, Vec3::NEG_X, Vec3::Z, half);
        let above = Sphere::new(Vec3::new(0.0, 0.0, 4.0), 1.0);
        let grazing = Sphere::new(Vec3::new(0.0, 0.0, 2.4), 1.0);
        assert!(!does_sphere_overlap_obb_3d(&above, &obb));
        assert!(does_sphere_overlap_obb_3d(&grazing, &obb));

        let cyl = ZCylinder::new(Vec2::new(3.0, 0.0), 1.0, FloatRange::new(0.0, 4.0));
        let near = Sphere::new(Vec3::new(1.5, 0.0, 2.0), 0.6);
        let far = Sphere::new(Vec3::new(1.0, 0.0, 2.0), 0.6);
        assert!(does_sphere_overlap_z_cylinder_3d(&near, &cyl));
        assert!(!does_sphere_overlap_z_cylinder_3d(&far, &cyl));
    }

    #[test]
    fn test_cylinder_overlaps() {
        let a = ZCylinder::new(Vec2::ZERO, 1.0, FloatRange::new(0.0, 1.0));
        let b = ZCylinder::new(Vec2::new(1.5, 0.0), 1.0, FloatRange::new(1.0, 2.0));
        let c = ZCylinder::new(Vec2::new(1.5, 0.0), 1.0, FloatRange::new(1.1, 2.0));
        assert!(do_z_cylinders_overlap_3d(&a, &b));
        assert!(!do_z_cylinders_overlap_3d(&a, &c));

        let aabb = Aabb3::from_coords(0.5, -0.5, 0.5, 3.0, 0.5, 3.0);
        assert!(does_aabb_overlap_z_cylinder_3d(&aabb, &a));
        let far = Aabb3::from_coords(0.5, -0.5, 1.5, 3.0, 0.5, 3.0);
        assert!(!does_aabb_overlap_z_cylinder_3d(&far, &a));
    }

    #[test]
    fn test_plane_overlaps() {
        let plane = Plane3::new(Vec3::Z, 1.0);
        assert!(does_plane_overlap_sphere_3d(&plane, &Sphere::new(Vec3::ZERO, 1.0)));
        assert!(!does_plane_overlap_sphere_3d(&plane, &Sphere::new(Vec3::ZERO, 0.5)));

        let straddling = Aabb3::from_coords(0.0, 0.0, 0.0, 1.0, 1.0, 2.0);
        let below = Aabb3::from_coords(0.0, 0.0, -2.0, 1.0, 1.0, 0.5);
        assert!(does_plane_overlap_aabb_3d(&plane, &straddling));
        assert!(!does_plane_overlap_aabb_3d(&plane, &below));

        let tilted = Obb3::orthonormalized(
            Vec3::new(0.0, 0.0, 1.2),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::Y,
            Vec3::new(-1.0, 0.0, 1.0),
            Vec3::splat(0.5),
        );
        assert!(does_plane_overlap_obb_3d(&plane, &tilted));
        let raised = Obb3 {
            center: Vec3::new(0.0, 0.0, 3.0),
            ..tilted
        };
        assert!(!does_plane_overlap_obb_3d(&plane, &raised));
    }
}
