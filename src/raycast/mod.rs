//! Raycasts against single shapes and against whole scenes.
//!
//! Every cast returns a [`RaycastResult`]; misses are reported through the
//! result's sentinel values rather than an `Option`.

mod cast2d;
mod cast3d;
mod result;
mod slab;

pub use cast2d::*;
pub use cast3d::*;
pub use result::{Ray, Ray2D, Ray3D, RayVector, RaycastResult, RaycastResult2D, RaycastResult3D};

use tracing::trace;

use crate::shapes::{Shape2D, Shape3D};

/// Cast `ray` at every shape and keep the closest impact, with the index of
/// the shape it hit. Shapes hit at the same distance resolve to the first.
pub fn raycast_nearest_2d(ray: &Ray2D, shapes: &[Shape2D]) -> Option<(usize, RaycastResult2D)> {
    let nearest = nearest_impact_indexed(shapes.iter().map(|shape| shape.raycast(ray)));
    trace!(
        origin = ?ray.origin,
        shapes = shapes.len(),
        hit = ?nearest.map(|(index, result)| (index, result.impact_distance)),
        "2d scene raycast"
    );
    nearest
}

/// 3D counterpart of [`raycast_nearest_2d`].
pub fn raycast_nearest_3d(ray: &Ray3D, shapes: &[Shape3D]) -> Option<(usize, RaycastResult3D)> {
    let nearest = nearest_impact_indexed(shapes.iter().map(|shape| shape.raycast(ray)));
    trace!(
        origin = ?ray.origin,
        shapes = shapes.len(),
        hit = ?nearest.map(|(index, result)| (index, result.impact_distance)),
        "3d scene raycast"
    );
    nearest
}

/// Closest impacting result; the earliest candidate wins ties.
pub(crate) fn nearest_impact<V: RayVector>(
    candidates: impl IntoIterator<Item = RaycastResult<V>>,
) -> Option<RaycastResult<V>> {
    nearest_impact_indexed(candidates).map(|(_, result)| result)
}

fn nearest_impact_indexed<V: RayVector>(
    candidates: impl IntoIterator<Item = RaycastResult<V>>,
) -> Option<(usize, RaycastResult<V>)> {
    candidates
        .into_iter()
        .enumerate()
        .filter(|(_, result)| result.did_impact)
        .reduce(|best, next| {
            if next.1.impact_distance < best.1.impact_distance {
                next
            } else {
                best
            }
        })
}
