//! Push-out: the minimal translation that separates a movable disc from a
//! static point, disc or box, or two movable discs from each other.
//!
//! Every function returns the corrected center(s) and leaves writing them
//! back to the caller. `None` means the shapes were not penetrating; discs
//! that exactly touch are not penetrating.

use glam::Vec2;
use tracing::debug;

use crate::shapes::{Aabb2, Disc2};

/// Configuration for degenerate push-out cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PushConfig {
    /// Squared center distance at or below which two centers count as
    /// coincident. Default: 1e-7.
    pub coincident_epsilon_sq: f32,
    /// Unit axis used to separate coincident centers. Default: +X.
    pub fallback_axis: Vec2,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            coincident_epsilon_sq: 1e-7,
            fallback_axis: Vec2::X,
        }
    }
}

/// Move `disc` so that `anchor` lies on its rim.
pub fn push_disc_out_of_point_2d(disc: &Disc2, anchor: Vec2) -> Option<Vec2> {
    push_disc_out_of_point_2d_with_config(disc, anchor, &PushConfig::default())
}

pub fn push_disc_out_of_point_2d_with_config(
    disc: &Disc2,
    anchor: Vec2,
    config: &PushConfig,
) -> Option<Vec2> {
    push_away_from(disc.center, anchor, disc.radius, config)
}

/// Move `disc` until it just touches the static disc.
pub fn push_disc_out_of_disc_2d(disc: &Disc2, fixed: &Disc2) -> Option<Vec2> {
    push_disc_out_of_disc_2d_with_config(disc, fixed, &PushConfig::default())
}

pub fn push_disc_out_of_disc_2d_with_config(
    disc: &Disc2,
    fixed: &Disc2,
    config: &PushConfig,
) -> Option<Vec2> {
    push_away_from(disc.center, fixed.center, disc.radius + fixed.radius, config)
}

/// Separate two movable discs, splitting the correction evenly. Returns the
/// new centers of `a` and `b`.
pub fn push_discs_out_of_each_other_2d(a: &Disc2, b: &Disc2) -> Option<(Vec2, Vec2)> {
    push_discs_out_of_each_other_2d_with_config(a, b, &PushConfig::default())
}

pub fn push_discs_out_of_each_other_2d_with_config(
    a: &Disc2,
    b: &Disc2,
    config: &PushConfig,
) -> Option<(Vec2, Vec2)> {
    let displacement = b.center - a.center;
    let dist_sq = displacement.length_squared();
    let combined = a.radius + b.radius;

    if dist_sq >= combined * combined {
        return None;
    }

    if dist_sq <= config.coincident_epsilon_sq {
        debug!(
            center = ?a.center,
            axis = ?config.fallback_axis,
            "coincident disc centers, separating along fallback axis"
        );
        let push = config.fallback_axis * (combined * 0.5);
        return Some((a.center - push, b.center + push));
    }

    let distance = dist_sq.sqrt();
    let correction = displacement / distance * ((combined - distance) * 0.5);
    Some((a.center - correction, b.center + correction))
}

/// Move `disc` out of the box along the line from the box's nearest point.
///
/// A center inside the box has no such line; it leaves through the nearest
/// face instead, checking faces in the order -X, +X, -Y, +Y on ties.
pub fn push_disc_out_of_aabb_2d(disc: &Disc2, aabb: &Aabb2) -> Option<Vec2> {
    push_disc_out_of_aabb_2d_with_config(disc, aabb, &PushConfig::default())
}

pub fn push_disc_out_of_aabb_2d_with_config(
    disc: &Disc2,
    aabb: &Aabb2,
    config: &PushConfig,
) -> Option<Vec2> {
    let nearest = aabb.nearest_point(disc.center);
    if disc.center.distance_squared(nearest) > config.coincident_epsilon_sq {
        return push_away_from(disc.center, nearest, disc.radius, config);
    }

    let c = disc.center;
    let faces = [
        (c.x - aabb.mins.x, Vec2::new(aabb.mins.x - disc.radius, c.y)),
        (aabb.maxs.x - c.x, Vec2::new(aabb.maxs.x + disc.radius, c.y)),
        (c.y - aabb.mins.y, Vec2::new(c.x, aabb.mins.y - disc.radius)),
        (aabb.maxs.y - c.y, Vec2::new(c.x, aabb.maxs.y + disc.radius)),
    ];
    let mut best = faces[0];
    for face in &faces[1..] {
        if face.0 < best.0 {
            best = *face;
        }
    }

    debug!(center = ?c, depth = best.0, "disc center inside box, pushing through nearest face");
    Some(best.1)
}

/// Place `center` at `distance` from `anchor`, along the anchor-to-center
/// line, when it is currently closer than that.
fn push_away_from(center: Vec2, anchor: Vec2, distance: f32, config: &PushConfig) -> Option<Vec2> {
    let offset = center - anchor;
    let dist_sq = offset.length_squared();
    if dist_sq >= distance * distance {
        return None;
    }

    let axis = if dist_sq <= config.coincident_epsilon_sq {
        debug!(
            center = ?center,
            axis = ?config.fallback_axis,
            "disc center on its anchor, pushing along fallback axis"
        );
        config.fallback_axis
    } else {
        offset / dist_sq.sqrt()
    };
    Some(anchor + axis * distance)
}
