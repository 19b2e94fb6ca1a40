//! Triangles in the plane.

use glam::Vec2;

use super::LineSegment2;

/// Triangle with counter-clockwise points.
///
/// Containment and nearest-point queries rely on the winding: a clockwise
/// triangle contains no points. See [`Triangle2::with_counter_clockwise_winding`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Triangle2 {
    pub points: [Vec2; 3],
}

impl Triangle2 {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { points: [a, b, c] }
    }

    /// Twice the signed area; positive for counter-clockwise winding.
    #[inline]
    pub fn signed_double_area(&self) -> f32 {
        let [a, b, c] = self.points;
        (b - a).perp_dot(c - a)
    }

    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_double_area() > 0.0
    }

    /// Same triangle, reordered counter-clockwise if needed.
    pub fn with_counter_clockwise_winding(&self) -> Self {
        if self.signed_double_area() < 0.0 {
            let [a, b, c] = self.points;
            Self::new(a, c, b)
        } else {
            *self
        }
    }

    /// Edges AB, BC, CA in that order.
    pub fn edges(&self) -> [LineSegment2; 3] {
        let [a, b, c] = self.points;
        [
            LineSegment2::new(a, b),
            LineSegment2::new(b, c),
            LineSegment2::new(c, a),
        ]
    }

    pub fn centroid(&self) -> Vec2 {
        let [a, b, c] = self.points;
        (a + b + c) / 3.0
    }
}
