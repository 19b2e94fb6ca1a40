//! Oriented boxes.
//!
//! Both boxes store unit, mutually orthogonal basis vectors. Nothing here
//! orthonormalizes on construction; use [`Obb3::orthonormalized`] when the
//! input basis is not already clean.

use glam::{Mat4, Vec2, Vec3};

use super::{check_orthogonal, check_unit_2d, check_unit_3d, ShapeError};
use crate::math::{Mat4Ext, Vec2Ext};

/// Oriented rectangle. The j basis is the i basis rotated +90 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb2 {
    pub center: Vec2,
    pub i_basis: Vec2,
    pub half_dimensions: Vec2,
}

impl Default for Obb2 {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            i_basis: Vec2::X,
            half_dimensions: Vec2::ONE,
        }
    }
}

impl Obb2 {
    pub fn new(center: Vec2, i_basis: Vec2, half_dimensions: Vec2) -> Self {
        debug_assert!(
            i_basis.is_normalized(),
            "Obb2 i basis {i_basis} is not unit length"
        );
        Self {
            center,
            i_basis,
            half_dimensions,
        }
    }

    pub fn try_new(center: Vec2, i_basis: Vec2, half_dimensions: Vec2) -> Result<Self, ShapeError> {
        check_unit_2d(i_basis)?;
        Ok(Self {
            center,
            i_basis,
            half_dimensions,
        })
    }

    #[inline]
    pub fn j_basis(&self) -> Vec2 {
        self.i_basis.rotated_90_degrees()
    }

    /// Corners counter-clockwise starting from (-i, -j).
    pub fn corner_points(&self) -> [Vec2; 4] {
        let i = self.i_basis * self.half_dimensions.x;
        let j = self.j_basis() * self.half_dimensions.y;
        [
            self.center - i - j,
            self.center + i - j,
            self.center + i + j,
            self.center - i + j,
        ]
    }

    /// World position to (i, j) coordinates relative to the center.
    #[inline]
    pub fn local_from_world(&self, world_pos: Vec2) -> Vec2 {
        let offset = world_pos - self.center;
        Vec2::new(offset.dot(self.i_basis), offset.dot(self.j_basis()))
    }

    #[inline]
    pub fn world_from_local(&self, local_pos: Vec2) -> Vec2 {
        self.center + self.i_basis * local_pos.x + self.j_basis() * local_pos.y
    }

    pub fn rotate_about_center_degrees(&mut self, degrees: f32) {
        self.i_basis = self.i_basis.rotated_degrees(degrees);
    }
}

/// Oriented box with an explicit i/j/k basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb3 {
    pub center: Vec3,
    pub i_basis: Vec3,
    pub j_basis: Vec3,
    pub k_basis: Vec3,
    pub half_dimensions: Vec3,
}

impl Default for Obb3 {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            i_basis: Vec3::X,
            j_basis: Vec3::Y,
            k_basis: Vec3::Z,
            half_dimensions: Vec3::splat(0.5),
        }
    }
}

impl Obb3 {
    pub fn new(
        center: Vec3,
        i_basis: Vec3,
        j_basis: Vec3,
        k_basis: Vec3,
        half_dimensions: Vec3,
    ) -> Self {
        debug_assert!(
            i_basis.is_normalized() && j_basis.is_normalized() && k_basis.is_normalized(),
            "Obb3 basis vectors must be unit length"
        );
        Self {
            center,
            i_basis,
            j_basis,
            k_basis,
            half_dimensions,
        }
    }

    /// Validating constructor: every basis vector unit length and pairwise orthogonal.
    pub fn try_new(
        center: Vec3,
        i_basis: Vec3,
        j_basis: Vec3,
        k_basis: Vec3,
        half_dimensions: Vec3,
    ) -> Result<Self, ShapeError> {
        check_unit_3d(i_basis)?;
        check_unit_3d(j_basis)?;
        check_unit_3d(k_basis)?;
        check_orthogonal(i_basis, j_basis)?;
        check_orthogonal(i_basis, k_basis)?;
        check_orthogonal(j_basis, k_basis)?;
        Ok(Self {
            center,
            i_basis,
            j_basis,
            k_basis,
            half_dimensions,
        })
    }

    /// Build from an arbitrary basis, keeping i and straightening k then j.
    pub fn orthonormalized(
        center: Vec3,
        i_basis: Vec3,
        j_basis: Vec3,
        k_basis: Vec3,
        half_dimensions: Vec3,
    ) -> Self {
        let m = Mat4::from_ijkt_3d(i_basis, j_basis, k_basis, center)
            .orthonormalized_i_fwd_j_left_k_up();
        Self {
            center,
            i_basis: m.i_basis_3d(),
            j_basis: m.j_basis_3d(),
            k_basis: m.k_basis_3d(),
            half_dimensions,
        }
    }

    /// World-from-local transform with the box center as translation.
    pub fn world_transform(&self) -> Mat4 {
        Mat4::from_ijkt_3d(self.i_basis, self.j_basis, self.k_basis, self.center)
    }

    #[inline]
    pub fn local_from_world(&self, world_pos: Vec3) -> Vec3 {
        let offset = world_pos - self.center;
        Vec3::new(
            offset.dot(self.i_basis),
            offset.dot(self.j_basis),
            offset.dot(self.k_basis),
        )
    }

    #[inline]
    pub fn world_from_local(&self, local_pos: Vec3) -> Vec3 {
        self.center
            + self.i_basis * local_pos.x
            + self.j_basis * local_pos.y
            + self.k_basis * local_pos.z
    }

    /// Rotate a world direction into the box frame.
    #[inline]
    pub fn local_direction(&self, world_dir: Vec3) -> Vec3 {
        Vec3::new(
            world_dir.dot(self.i_basis),
            world_dir.dot(self.j_basis),
            world_dir.dot(self.k_basis),
        )
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let h = self.half_dimensions;
        let mut corners = [Vec3::ZERO; 8];
        for (index, corner) in corners.iter_mut().enumerate() {
            let sign = |bit: usize| if index & bit == 0 { -1.0 } else { 1.0 };
            let local = Vec3::new(sign(1) * h.x, sign(2) * h.y, sign(4) * h.z);
            *corner = self.world_from_local(local);
        }
        corners
    }
}
