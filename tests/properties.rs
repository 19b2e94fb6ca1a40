use georay::glam::{Vec2, Vec3};
use georay::query::{
    do_aabbs_overlap_2d, do_discs_overlap_2d, do_spheres_overlap_3d,
    nearest_point_on_line_segment_2d,
};
use georay::{
    Aabb2, Aabb3, Capsule2, Disc2, EulerAngles, FloatRange, Obb2, Obb3, Ray2D, Ray3D, Shape2D,
    Shape3D, Sphere, Triangle2, ZCylinder,
};
use proptest::prelude::*;

const COORD: std::ops::Range<f32> = -100.0..100.0;
const RADIUS: std::ops::Range<f32> = 0.1..50.0;

/// Slack for containment of computed points, well above f32 rounding at these magnitudes.
const TOLERANCE: f32 = 1e-3;

fn vec2() -> impl Strategy<Value = Vec2> {
    (COORD, COORD).prop_map(|(x, y)| Vec2::new(x, y))
}

fn vec3() -> impl Strategy<Value = Vec3> {
    (COORD, COORD, COORD).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn unit2() -> impl Strategy<Value = Vec2> {
    (0.0f32..std::f32::consts::TAU).prop_map(Vec2::from_angle)
}

fn unit3() -> impl Strategy<Value = Vec3> {
    (0.0f32..std::f32::consts::TAU, -1.0f32..1.0).prop_map(|(yaw, z)| {
        let flat = (1.0 - z * z).sqrt();
        Vec3::new(flat * yaw.cos(), flat * yaw.sin(), z).normalize()
    })
}

fn disc() -> impl Strategy<Value = Disc2> {
    (vec2(), RADIUS).prop_map(|(center, radius)| Disc2::new(center, radius))
}

fn aabb2() -> impl Strategy<Value = Aabb2> {
    (vec2(), vec2()).prop_map(|(a, b)| Aabb2::new(a.min(b), a.max(b)))
}

fn sphere() -> impl Strategy<Value = Sphere> {
    (vec3(), RADIUS).prop_map(|(center, radius)| Sphere::new(center, radius))
}

fn shape2d() -> impl Strategy<Value = Shape2D> {
    prop_oneof![
        disc().prop_map(Shape2D::Disc),
        aabb2().prop_map(Shape2D::Aabb),
        (vec2(), unit2(), 0.1f32..30.0, 0.1f32..30.0)
            .prop_map(|(c, i, hx, hy)| Shape2D::Obb(Obb2::new(c, i, Vec2::new(hx, hy)))),
        (vec2(), vec2(), RADIUS).prop_map(|(a, b, r)| Shape2D::Capsule(Capsule2::new(a, b, r))),
        (vec2(), vec2(), vec2()).prop_map(|(a, b, c)| {
            Shape2D::Triangle(Triangle2::new(a, b, c).with_counter_clockwise_winding())
        }),
    ]
}

fn shape3d() -> impl Strategy<Value = Shape3D> {
    prop_oneof![
        sphere().prop_map(Shape3D::Sphere),
        (vec3(), vec3()).prop_map(|(a, b)| Shape3D::Aabb(Aabb3::new(a.min(b), a.max(b)))),
        (vec3(), vec3(), vec3()).prop_map(|(c, angles, half)| {
            let orientation = EulerAngles::new(angles.x, angles.y, angles.z);
            let (i, j, k) = orientation.as_vectors_i_fwd_j_left_k_up();
            Shape3D::Obb(Obb3::new(c, i, j, k, half.abs() * 0.3 + 0.1))
        }),
        (vec2(), RADIUS, COORD, 0.1f32..50.0).prop_map(|(c, r, z, h)| {
            Shape3D::ZCylinder(ZCylinder::new(c, r, FloatRange::new(z, z + h)))
        }),
    ]
}

fn center_2d(shape: &Shape2D) -> Vec2 {
    match shape {
        Shape2D::Disc(disc) => disc.center,
        Shape2D::Aabb(aabb) => aabb.center(),
        Shape2D::Obb(obb) => obb.center,
        Shape2D::Capsule(capsule) => capsule.bone.start,
        Shape2D::Triangle(triangle) => triangle.centroid(),
    }
}

fn center_3d(shape: &Shape3D) -> Vec3 {
    match shape {
        Shape3D::Sphere(sphere) => sphere.center,
        Shape3D::Aabb(aabb) => aabb.center(),
        Shape3D::Obb(obb) => obb.center,
        Shape3D::ZCylinder(cylinder) => cylinder.center_3d(),
    }
}

/// Containment in the shape grown by [`TOLERANCE`] on every side.
fn contains_with_tolerance_2d(shape: &Shape2D, point: Vec2) -> bool {
    let slack = Vec2::splat(TOLERANCE);
    match *shape {
        Shape2D::Disc(disc) => {
            let grown = Disc2 {
                radius: disc.radius + TOLERANCE,
                ..disc
            };
            Shape2D::Disc(grown).contains_point(point)
        }
        Shape2D::Aabb(aabb) => {
            Aabb2::new(aabb.mins - slack, aabb.maxs + slack).contains_point(point)
        }
        Shape2D::Obb(obb) => {
            let grown = Obb2 {
                half_dimensions: obb.half_dimensions + slack,
                ..obb
            };
            Shape2D::Obb(grown).contains_point(point)
        }
        Shape2D::Capsule(capsule) => {
            let grown = Capsule2 {
                radius: capsule.radius + TOLERANCE,
                ..capsule
            };
            Shape2D::Capsule(grown).contains_point(point)
        }
        Shape2D::Triangle(triangle) => {
            shape.contains_point(point)
                || triangle.edges().iter().any(|edge| {
                    nearest_point_on_line_segment_2d(point, edge).distance(point) <= TOLERANCE
                })
        }
    }
}

fn contains_with_tolerance_3d(shape: &Shape3D, point: Vec3) -> bool {
    let slack = Vec3::splat(TOLERANCE);
    let grown = match *shape {
        Shape3D::Sphere(sphere) => Shape3D::Sphere(Sphere {
            radius: sphere.radius + TOLERANCE,
            ..sphere
        }),
        Shape3D::Aabb(aabb) => Shape3D::Aabb(Aabb3::new(aabb.mins - slack, aabb.maxs + slack)),
        Shape3D::Obb(obb) => Shape3D::Obb(Obb3 {
            half_dimensions: obb.half_dimensions + slack,
            ..obb
        }),
        Shape3D::ZCylinder(cylinder) => Shape3D::ZCylinder(ZCylinder {
            radius: cylinder.radius + TOLERANCE,
            z_range: FloatRange::new(
                cylinder.z_range.min - TOLERANCE,
                cylinder.z_range.max + TOLERANCE,
            ),
            ..cylinder
        }),
    };
    grown.contains_point(point)
}

proptest! {
    #[test]
    fn overlap_is_symmetric(
        a in disc(),
        b in disc(),
        c in aabb2(),
        d in aabb2(),
        e in sphere(),
        f in sphere()
    ) {
        prop_assert_eq!(do_discs_overlap_2d(&a, &b), do_discs_overlap_2d(&b, &a));
        prop_assert_eq!(do_aabbs_overlap_2d(&c, &d), do_aabbs_overlap_2d(&d, &c));
        prop_assert_eq!(do_spheres_overlap_3d(&e, &f), do_spheres_overlap_3d(&f, &e));
    }

    #[test]
    fn nearest_point_of_contained_point_is_itself(shape in shape2d(), point in vec2()) {
        if shape.contains_point(point) {
            prop_assert_eq!(shape.nearest_point(point), point);
        }
        let center = center_2d(&shape);
        if shape.contains_point(center) {
            prop_assert_eq!(shape.nearest_point(center), center);
        }
    }

    #[test]
    fn nearest_point_of_contained_point_is_itself_3d(shape in shape3d(), point in vec3()) {
        if shape.contains_point(point) {
            prop_assert_eq!(shape.nearest_point(point), point);
        }
    }

    #[test]
    fn nearest_point_lies_on_shape(shape in shape2d(), point in vec2()) {
        let nearest = shape.nearest_point(point);
        let again = shape.nearest_point(nearest);
        prop_assert!((again - nearest).length() < 1e-3, "{:?} vs {:?}", nearest, again);
    }

    #[test]
    fn nearest_point_lies_on_shape_3d(shape in shape3d(), point in vec3()) {
        let nearest = shape.nearest_point(point);
        let again = shape.nearest_point(nearest);
        prop_assert!((again - nearest).length() < 1e-3, "{:?} vs {:?}", nearest, again);
    }

    #[test]
    fn nearest_point_is_contained(shape in shape2d(), point in vec2()) {
        let nearest = shape.nearest_point(point);
        prop_assert!(
            contains_with_tolerance_2d(&shape, nearest),
            "{:?} outside {:?}",
            nearest,
            shape
        );
    }

    #[test]
    fn nearest_point_is_contained_3d(shape in shape3d(), point in vec3()) {
        let nearest = shape.nearest_point(point);
        prop_assert!(
            contains_with_tolerance_3d(&shape, nearest),
            "{:?} outside {:?}",
            nearest,
            shape
        );
    }

    #[test]
    fn nearest_point_on_aabb_is_contained(aabb in aabb2(), point in vec2()) {
        prop_assert!(aabb.contains_point(aabb.nearest_point(point)));
    }

    #[test]
    fn ray_from_inside_impacts_at_origin(
        shape in shape2d(),
        dir in unit2(),
        max in 0.0f32..200.0
    ) {
        let origin = center_2d(&shape);
        prop_assume!(shape.contains_point(origin));
        let result = shape.raycast(&Ray2D::new(origin, dir, max));
        prop_assert!(result.did_impact);
        prop_assert_eq!(result.impact_distance, 0.0);
        prop_assert_eq!(result.impact_position, origin);
    }

    #[test]
    fn ray_from_inside_impacts_at_origin_3d(
        shape in shape3d(),
        dir in unit3(),
        max in 0.0f32..200.0
    ) {
        let origin = center_3d(&shape);
        prop_assume!(shape.contains_point(origin));
        let result = shape.raycast(&Ray3D::new(origin, dir, max));
        prop_assert!(result.did_impact);
        prop_assert_eq!(result.impact_distance, 0.0);
        prop_assert_eq!(result.impact_position, origin);
    }

    #[test]
    fn raycast_results_are_well_formed(
        shape in shape2d(),
        origin in vec2(),
        dir in unit2(),
        max in 0.0f32..300.0
    ) {
        let result = shape.raycast(&Ray2D::new(origin, dir, max));
        if result.did_impact {
            prop_assert!(result.impact_distance >= 0.0 && result.impact_distance <= max);
        } else {
            prop_assert_eq!(result.impact_distance, max);
            prop_assert_eq!(result.impact_position, origin + dir * max);
        }
    }

    #[test]
    fn raycast_results_are_well_formed_3d(
        shape in shape3d(),
        origin in vec3(),
        dir in unit3(),
        max in 0.0f32..300.0
    ) {
        let result = shape.raycast(&Ray3D::new(origin, dir, max));
        if result.did_impact {
            prop_assert!(result.impact_distance >= 0.0 && result.impact_distance <= max);
        } else {
            prop_assert_eq!(result.impact_distance, max);
            prop_assert_eq!(result.impact_position, origin + dir * max);
        }
    }
}
