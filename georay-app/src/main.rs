//! Picking and push-out demo.
//!
//! Casts a fan of rays into a mixed 2D scene and a ground-picking ray into a
//! 3D scene, then lets a handful of scattered discs settle inside an arena.
//!
//! Run: RUST_LOG=debug cargo run --manifest-path georay-app/Cargo.toml

use anyhow::{ensure, Context};
use georay::query::{push_disc_out_of_aabb_2d, push_discs_out_of_each_other_2d};
use georay::raycast::raycast_vs_plane_3d;
use georay::{
    raycast_nearest_2d, raycast_nearest_3d, Aabb2, Aabb3, Capsule2, Disc2, FloatRange, Obb2,
    Plane3, RandomNumberGenerator, Ray2D, Ray3D, Shape2D, Shape3D, Sphere, Triangle2, Vec2Ext,
    ZCylinder,
};
use glam::{Vec2, Vec3};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Demo scene parameters.
#[derive(Debug, Clone, PartialEq)]
struct DemoConfig {
    /// Rays in the picking fan. Default: 16
    ray_count: usize,
    /// Length of every picking ray. Default: 30.0
    ray_length: f32,
    /// Discs scattered into the arena. Default: 6
    disc_count: usize,
    /// Radius range of the scattered discs. Default: 0.5..=1.5
    disc_radius: FloatRange,
    /// Half extent of the square arena. Default: 5.0
    arena_half_extent: f32,
    /// Push-out passes over all disc pairs. Default: 8
    push_iterations: usize,
    /// Seed for scattering. Default: 7
    seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            ray_count: 16,
            ray_length: 30.0,
            disc_count: 6,
            disc_radius: FloatRange::new(0.5, 1.5),
            arena_half_extent: 5.0,
            push_iterations: 8,
            seed: 7,
        }
    }
}

fn picking_scene_2d() -> anyhow::Result<Vec<Shape2D>> {
    Ok(vec![
        Shape2D::Disc(Disc2::try_new(Vec2::new(8.0, 2.0), 1.5)?),
        Shape2D::Aabb(Aabb2::try_new(Vec2::new(-12.0, -3.0), Vec2::new(-9.0, 3.0))?),
        Shape2D::Obb(Obb2::try_new(
            Vec2::new(0.0, 10.0),
            Vec2::from_polar_degrees(30.0, 1.0),
            Vec2::new(3.0, 1.0),
        )?),
        Shape2D::Capsule(Capsule2::try_new(
            Vec2::new(-4.0, -9.0),
            Vec2::new(4.0, -9.0),
            1.0,
        )?),
        Shape2D::Triangle(Triangle2::new(
            Vec2::new(6.0, -6.0),
            Vec2::new(10.0, -6.0),
            Vec2::new(8.0, -3.0),
        )),
    ])
}

fn picking_scene_3d() -> anyhow::Result<Vec<Shape3D>> {
    Ok(vec![
        Shape3D::Sphere(Sphere::try_new(Vec3::new(2.0, 0.0, 1.0), 1.0)?),
        Shape3D::Aabb(Aabb3::try_new(Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.5))?),
        Shape3D::ZCylinder(ZCylinder::try_new(
            Vec2::new(0.0, 3.0),
            0.75,
            FloatRange::new(0.0, 3.0),
        )?),
    ])
}

fn cast_fan(config: &DemoConfig, scene: &[Shape2D]) {
    let step = 360.0 / config.ray_count as f32;
    for index in 0..config.ray_count {
        let heading = step * index as f32;
        let ray = Ray2D::new(
            Vec2::ZERO,
            Vec2::from_polar_degrees(heading, 1.0),
            config.ray_length,
        );
        match raycast_nearest_2d(&ray, scene) {
            Some((shape, hit)) => info!(
                heading,
                shape,
                distance = hit.impact_distance,
                normal = ?hit.impact_normal,
                "ray hit"
            ),
            None => debug!(heading, "ray missed"),
        }
    }
}

/// Pick along the line of sight from an elevated eye to a ground target.
/// Objects take precedence over the ground plane.
fn pick_ground(scene: &[Shape3D], eye: Vec3, target: Vec3) {
    let ray = Ray3D::between(eye, target);
    if let Some((shape, hit)) = raycast_nearest_3d(&ray, scene) {
        info!(shape, position = ?hit.impact_position, "picked object");
        return;
    }

    let ground = Plane3::default();
    let hit = raycast_vs_plane_3d(ray.origin, ray.direction, ray.max_length, &ground);
    if hit.did_impact {
        info!(position = ?hit.impact_position, "picked ground");
    } else {
        warn!("pick ray never reached the ground");
    }
}

fn settle_discs(config: &DemoConfig) -> anyhow::Result<Vec<Disc2>> {
    let half = config.arena_half_extent;
    let arena = Aabb2::try_new(Vec2::splat(-half), Vec2::splat(half))?;
    let walls = [
        Aabb2::from_coords(-half - 1.0, -half - 1.0, -half, half + 1.0),
        Aabb2::from_coords(half, -half - 1.0, half + 1.0, half + 1.0),
        Aabb2::from_coords(-half, -half - 1.0, half, -half),
        Aabb2::from_coords(-half, half, half, half + 1.0),
    ];

    let mut rng = RandomNumberGenerator::from_seed(config.seed);
    let position_range = FloatRange::new(-half, half);
    let mut discs = (0..config.disc_count)
        .map(|_| {
            let center = Vec2::new(
                position_range.random_in(&mut rng),
                position_range.random_in(&mut rng),
            );
            Disc2::try_new(center, config.disc_radius.random_in(&mut rng))
        })
        .collect::<Result<Vec<_>, _>>()
        .context("scattering discs")?;

    for pass in 0..config.push_iterations {
        let mut corrections = 0;
        for a in 0..discs.len() {
            for b in (a + 1)..discs.len() {
                let pushed = push_discs_out_of_each_other_2d(&discs[a], &discs[b]);
                if let Some((new_a, new_b)) = pushed {
                    discs[a].center = new_a;
                    discs[b].center = new_b;
                    corrections += 1;
                }
            }
        }
        for disc in &mut discs {
            for wall in &walls {
                if let Some(center) = push_disc_out_of_aabb_2d(disc, wall) {
                    disc.center = center;
                    corrections += 1;
                }
            }
        }
        debug!(pass, corrections, "push-out pass");
        if corrections == 0 {
            break;
        }
    }

    let escaped = discs
        .iter()
        .filter(|disc| !arena.contains_point(disc.center))
        .count();
    if escaped > 0 {
        warn!(escaped, "discs left the arena");
    }
    Ok(discs)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = DemoConfig::default();
    ensure!(config.ray_count > 0, "ray_count must be positive");
    ensure!(config.arena_half_extent > 0.0, "arena must have a positive size");

    cast_fan(&config, &picking_scene_2d()?);
    let scene_3d = picking_scene_3d()?;
    pick_ground(&scene_3d, Vec3::new(-6.0, 0.0, 6.0), Vec3::new(1.5, 0.0, 0.0));
    pick_ground(&scene_3d, Vec3::new(-6.0, 0.0, 6.0), Vec3::new(-3.0, -4.0, 0.0));

    for disc in settle_discs(&config)? {
        info!(center = ?disc.center, radius = disc.radius, "settled disc");
    }
    Ok(())
}
