//! Axis-aligned boxes.

use glam::{Vec2, Vec3};

use super::{check_bounds, ShapeError};
use crate::math::{clamp, fraction_within_range, interpolate, range_map};

/// Axis-aligned rectangle defined by its min and max corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aabb2 {
    pub mins: Vec2,
    pub maxs: Vec2,
}

impl Aabb2 {
    pub const ZERO_TO_ONE: Self = Self {
        mins: Vec2::ZERO,
        maxs: Vec2::ONE,
    };

    pub fn new(mins: Vec2, maxs: Vec2) -> Self {
        debug_assert!(
            mins.cmple(maxs).all(),
            "Aabb2 mins {mins} exceed maxs {maxs}"
        );
        Self { mins, maxs }
    }

    pub fn from_coords(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    /// Validating constructor: rejects any axis where min exceeds max.
    pub fn try_new(mins: Vec2, maxs: Vec2) -> Result<Self, ShapeError> {
        check_bounds(&mins.to_array(), &maxs.to_array())?;
        Ok(Self { mins, maxs })
    }

    /// Inclusive of the boundary.
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.mins.x <= point.x
            && point.x <= self.maxs.x
            && self.mins.y <= point.y
            && point.y <= self.maxs.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.mins + self.maxs) * 0.5
    }

    #[inline]
    pub fn dimensions(&self) -> Vec2 {
        self.maxs - self.mins
    }

    /// Per-axis clamp; points inside come back unchanged.
    #[inline]
    pub fn nearest_point(&self, reference: Vec2) -> Vec2 {
        Vec2::new(
            clamp(reference.x, self.mins.x, self.maxs.x),
            clamp(reference.y, self.mins.y, self.maxs.y),
        )
    }

    /// (0,0) is `mins`, (1,1) is `maxs`; values outside `[0,1]` extrapolate.
    pub fn point_at_uv(&self, uv: Vec2) -> Vec2 {
        Vec2::new(
            interpolate(self.mins.x, self.maxs.x, uv.x),
            interpolate(self.mins.y, self.maxs.y, uv.y),
        )
    }

    pub fn uv_for_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            fraction_within_range(point.x, self.mins.x, self.maxs.x),
            fraction_within_range(point.y, self.mins.y, self.maxs.y),
        )
    }

    pub fn translate(&mut self, translation: Vec2) {
        self.mins += translation;
        self.maxs += translation;
    }

    pub fn set_center(&mut self, new_center: Vec2) {
        self.translate(new_center - self.center());
    }

    /// Resize around the current center.
    pub fn set_dimensions(&mut self, new_dimensions: Vec2) {
        let center = self.center();
        let half = new_dimensions * 0.5;
        self.mins = center - half;
        self.maxs = center + half;
    }

    pub fn stretch_to_include_point(&mut self, point: Vec2) {
        if point.x < self.mins.x {
            self.mins.x = point.x;
        } else if point.x > self.maxs.x {
            self.maxs.x = point.x;
        }

        if point.y < self.mins.y {
            self.mins.y = point.y;
        } else if point.y > self.maxs.y {
            self.maxs.y = point.y;
        }
    }

    pub fn add_padding(&mut self, padding: f32) {
        self.mins -= Vec2::splat(padding);
        self.maxs += Vec2::splat(padding);
    }

    /// Keep the top `top_fraction` of the box and return the bottom remainder.
    pub fn split_off_bottom(&mut self, top_fraction: f32) -> Aabb2 {
        let split_y = range_map(top_fraction, 0.0, 1.0, self.maxs.y, self.mins.y);
        let bottom = Aabb2 {
            mins: self.mins,
            maxs: Vec2::new(self.maxs.x, split_y),
        };
        self.mins.y = split_y;
        bottom
    }

    /// Keep the left `left_fraction` of the box and return the right remainder.
    pub fn split_off_right(&mut self, left_fraction: f32) -> Aabb2 {
        let split_x = range_map(left_fraction, 0.0, 1.0, self.mins.x, self.maxs.x);
        let right = Aabb2 {
            mins: Vec2::new(split_x, self.mins.y),
            maxs: self.maxs,
        };
        self.maxs.x = split_x;
        right
    }

    /// A box of the given size sharing this box's center.
    pub fn centered_box(&self, dimensions: Vec2) -> Aabb2 {
        let center = self.center();
        let half = dimensions * 0.5;
        Aabb2 {
            mins: center - half,
            maxs: center + half,
        }
    }
}

/// Axis-aligned box defined by its min and max corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aabb3 {
    pub mins: Vec3,
    pub maxs: Vec3,
}

impl Aabb3 {
    pub fn new(mins: Vec3, maxs: Vec3) -> Self {
        debug_assert!(
            mins.cmple(maxs).all(),
            "Aabb3 mins {mins} exceed maxs {maxs}"
        );
        Self { mins, maxs }
    }

    pub fn from_coords(
        min_x: f32,
        min_y: f32,
        min_z: f32,
        max_x: f32,
        max_y: f32,
        max_z: f32,
    ) -> Self {
        Self::new(
            Vec3::new(min_x, min_y, min_z),
            Vec3::new(max_x, max_y, max_z),
        )
    }

    /// Validating constructor: rejects any axis where min exceeds max.
    pub fn try_new(mins: Vec3, maxs: Vec3) -> Result<Self, ShapeError> {
        check_bounds(&mins.to_array(), &maxs.to_array())?;
        Ok(Self { mins, maxs })
    }

    /// Inclusive of the boundary.
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.mins.cmple(point).all() && point.cmple(self.maxs).all()
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.mins + self.maxs) * 0.5
    }

    #[inline]
    pub fn dimensions(&self) -> Vec3 {
        self.maxs - self.mins
    }

    #[inline]
    pub fn nearest_point(&self, reference: Vec3) -> Vec3 {
        Vec3::new(
            clamp(reference.x, self.mins.x, self.maxs.x),
            clamp(reference.y, self.mins.y, self.maxs.y),
            clamp(reference.z, self.mins.z, self.maxs.z),
        )
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (min, max) = (self.mins, self.maxs);
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
        ]
    }
}
