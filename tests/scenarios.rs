//! End-to-end checks of the documented query behaviour through the public API.

use georay::glam::{Vec2, Vec3};
use georay::query::{
    do_discs_overlap_2d, does_plane_overlap_sphere_3d, is_point_inside_vision_cone,
    nearest_point_on_triangle_2d, push_disc_out_of_aabb_2d, push_discs_out_of_each_other_2d,
};
use georay::raycast::{raycast_vs_aabb_2d, raycast_vs_disc_2d, raycast_vs_plane_3d};
use georay::{
    raycast_nearest_2d, Aabb2, Capsule2, Disc2, EulerAngles, Obb2, Plane3, Ray2D, Shape2D,
    Sphere, Triangle2,
};

const EPS: f32 = 1e-5;

#[test]
fn disc_raycast_hit() {
    let disc = Disc2::new(Vec2::new(5.0, 0.0), 1.0);
    let result = raycast_vs_disc_2d(Vec2::ZERO, Vec2::X, 10.0, &disc);

    assert!(result.did_impact);
    assert!((result.impact_distance - 4.0).abs() < EPS);
    assert!((result.impact_position - Vec2::new(4.0, 0.0)).length() < EPS);
    assert!((result.impact_normal - Vec2::new(-1.0, 0.0)).length() < EPS);
}

#[test]
fn aabb_raycast_miss() {
    let aabb = Aabb2::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
    let result = raycast_vs_aabb_2d(Vec2::ZERO, Vec2::Y, 5.0, &aabb);

    assert!(!result.did_impact);
    assert_eq!(result.impact_distance, 5.0);
    assert_eq!(result.impact_position, Vec2::new(0.0, 5.0));
}

#[test]
fn disc_disc_push_out() {
    let a = Disc2::new(Vec2::ZERO, 1.0);
    let b = Disc2::new(Vec2::new(1.0, 0.0), 1.0);
    let (new_a, new_b) = push_discs_out_of_each_other_2d(&a, &b).unwrap();

    assert!((new_a.distance(new_b) - 2.0).abs() < EPS);
    assert!((new_a.distance(a.center) - 0.5).abs() < EPS);
    assert!((new_b.distance(b.center) - 0.5).abs() < EPS);
    assert!(new_a.x < a.center.x && new_b.x > b.center.x);
}

#[test]
fn plane_raycast() {
    let plane = Plane3::new(Vec3::Z, 0.0);
    let result = raycast_vs_plane_3d(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, 10.0, &plane);

    assert!(result.did_impact);
    assert!((result.impact_position - Vec3::ZERO).length() < EPS);
    assert!((result.impact_distance - 5.0).abs() < EPS);
    assert_eq!(result.impact_normal, Vec3::Z);
}

#[test]
fn pushed_disc_no_longer_penetrates() {
    let mut disc = Disc2::new(Vec2::new(1.8, 0.5), 0.5);
    let wall = Aabb2::from_coords(2.0, -5.0, 3.0, 5.0);
    assert!(georay::query::does_disc_overlap_aabb_2d(&disc, &wall));

    disc.center = push_disc_out_of_aabb_2d(&disc, &wall).unwrap();
    assert!((disc.center - Vec2::new(1.5, 0.5)).length() < EPS);
    assert_eq!(push_disc_out_of_aabb_2d(&disc, &wall), None);
}

#[test]
fn scene_raycast_reports_closest_shape() {
    let shapes = [
        Shape2D::Capsule(Capsule2::new(Vec2::new(9.0, -3.0), Vec2::new(9.0, 3.0), 1.0)),
        Shape2D::Obb(Obb2::new(Vec2::new(5.0, 0.0), Vec2::Y, Vec2::new(1.0, 0.5))),
        Shape2D::Triangle(Triangle2::new(
            Vec2::new(2.0, 5.0),
            Vec2::new(3.0, 5.0),
            Vec2::new(2.5, 6.0),
        )),
    ];
    let ray = Ray2D::new(Vec2::ZERO, Vec2::X, 20.0);
    let (index, result) = raycast_nearest_2d(&ray, &shapes).unwrap();

    assert_eq!(index, 1);
    assert!((result.impact_distance - 4.5).abs() < EPS);
    assert!((result.impact_normal - Vec2::NEG_X).length() < EPS);
}

#[test]
fn nearest_point_on_triangle_from_outside() {
    let triangle = Triangle2::new(Vec2::ZERO, Vec2::new(2.0, 0.0), Vec2::new(0.0, 2.0));
    let nearest = nearest_point_on_triangle_2d(Vec2::new(3.0, 3.0), &triangle);
    assert!((nearest - Vec2::ONE).length() < EPS);
}

#[test]
fn touching_shapes_overlap() {
    let a = Disc2::new(Vec2::ZERO, 1.0);
    let b = Disc2::new(Vec2::new(2.0, 0.0), 1.0);
    assert!(do_discs_overlap_2d(&a, &b));

    let plane = Plane3::new(Vec3::Z, 0.0);
    let resting = Sphere::new(Vec3::new(0.0, 0.0, 1.0), 1.0);
    assert!(does_plane_overlap_sphere_3d(&plane, &resting));
}

#[test]
fn vision_cone_follows_yaw() {
    let facing_left = EulerAngles::new(90.0, 0.0, 0.0);
    assert!(is_point_inside_vision_cone(
        Vec3::ZERO,
        &facing_left,
        60.0,
        Vec3::new(0.2, 5.0, 0.0)
    ));
    assert!(!is_point_inside_vision_cone(
        Vec3::ZERO,
        &facing_left,
        60.0,
        Vec3::new(5.0, 0.0, 0.0)
    ));
}
