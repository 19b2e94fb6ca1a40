//! Seeded scene builders shared by the benchmarks.

use georay::{
    Aabb2, Aabb3, Capsule2, Disc2, FloatRange, Obb2, RandomNumberGenerator, Ray2D, Ray3D,
    Shape2D, Shape3D, Sphere, Vec2Ext, ZCylinder,
};
use glam::{Vec2, Vec3};

pub const SEED: u64 = 0x6e0_2a7;

/// Scatter extent for every generated scene.
const EXTENT: FloatRange = FloatRange::new(-100.0, 100.0);
const SIZE: FloatRange = FloatRange::new(0.5, 4.0);

fn random_vec2(rng: &mut RandomNumberGenerator) -> Vec2 {
    Vec2::new(EXTENT.random_in(rng), EXTENT.random_in(rng))
}

fn random_vec3(rng: &mut RandomNumberGenerator) -> Vec3 {
    Vec3::new(EXTENT.random_in(rng), EXTENT.random_in(rng), EXTENT.random_in(rng))
}

/// `n` shapes cycling through discs, boxes, oriented boxes and capsules.
pub fn setup_mixed_scene_2d(n: usize) -> Vec<Shape2D> {
    let mut rng = RandomNumberGenerator::from_seed(SEED);
    (0..n)
        .map(|i| {
            let center = random_vec2(&mut rng);
            let size = SIZE.random_in(&mut rng);
            match i % 4 {
                0 => Shape2D::Disc(Disc2::new(center, size)),
                1 => Shape2D::Aabb(Aabb2::new(center, center + Vec2::splat(size))),
                2 => {
                    let heading = rng.roll_float_in_range(0.0, 360.0);
                    let i_basis = Vec2::from_polar_degrees(heading, 1.0);
                    Shape2D::Obb(Obb2::new(center, i_basis, Vec2::new(size, size * 0.5)))
                }
                _ => Shape2D::Capsule(Capsule2::new(center, center + Vec2::X * size, size * 0.5)),
            }
        })
        .collect()
}

/// `n` shapes cycling through spheres, boxes and z-cylinders.
pub fn setup_mixed_scene_3d(n: usize) -> Vec<Shape3D> {
    let mut rng = RandomNumberGenerator::from_seed(SEED);
    (0..n)
        .map(|i| {
            let center = random_vec3(&mut rng);
            let size = SIZE.random_in(&mut rng);
            match i % 3 {
                0 => Shape3D::Sphere(Sphere::new(center, size)),
                1 => Shape3D::Aabb(Aabb3::new(center, center + Vec3::splat(size))),
                _ => Shape3D::ZCylinder(ZCylinder::new(
                    center.truncate(),
                    size,
                    FloatRange::new(center.z, center.z + size),
                )),
            }
        })
        .collect()
}

/// `n` rays from the scene centre in evenly spread headings.
pub fn setup_ray_fan_2d(n: usize, length: f32) -> Vec<Ray2D> {
    let step = 360.0 / n.max(1) as f32;
    (0..n)
        .map(|i| Ray2D::new(Vec2::ZERO, Vec2::from_polar_degrees(step * i as f32, 1.0), length))
        .collect()
}

/// `n` random rays aimed from one random point toward another.
pub fn setup_random_rays_3d(n: usize) -> Vec<Ray3D> {
    let mut rng = RandomNumberGenerator::from_seed(SEED ^ 0xff);
    (0..n)
        .map(|_| Ray3D::between(random_vec3(&mut rng), random_vec3(&mut rng)))
        .collect()
}

/// `n` discs crowded into a small square so most pairs overlap.
pub fn setup_crowded_discs(n: usize) -> Vec<Disc2> {
    let mut rng = RandomNumberGenerator::from_seed(SEED);
    let spread = FloatRange::new(-(n as f32).sqrt(), (n as f32).sqrt());
    (0..n)
        .map(|_| {
            let center = Vec2::new(spread.random_in(&mut rng), spread.random_in(&mut rng));
            Disc2::new(center, 1.0)
        })
        .collect()
}
