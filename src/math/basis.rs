//! Basis helpers on [`Mat4`] and Euler angle orientation.
//!
//! Matrices use the engine convention: column 0 is the i (forward) basis,
//! column 1 the j (left) basis, column 2 the k (up) basis and column 3 the
//! translation.

use glam::{Mat4, Vec3, Vec4};

use super::{cos_degrees, sin_degrees};

/// i/j/k/t accessors and orthonormal operations for [`Mat4`].
pub trait Mat4Ext: Sized {
    fn from_ijkt_3d(i: Vec3, j: Vec3, k: Vec3, t: Vec3) -> Self;
    fn i_basis_3d(&self) -> Vec3;
    fn j_basis_3d(&self) -> Vec3;
    fn k_basis_3d(&self) -> Vec3;
    fn translation_3d(&self) -> Vec3;
    /// Inverse of a rigid transform: transposed rotation and rotated, negated translation.
    ///
    /// Only valid when the i/j/k columns are orthonormal.
    fn orthonormal_inverse(&self) -> Self;
    /// Gram-Schmidt with i kept fixed, then k, then j. Translation is preserved.
    fn orthonormalized_i_fwd_j_left_k_up(&self) -> Self;
}

impl Mat4Ext for Mat4 {
    #[inline]
    fn from_ijkt_3d(i: Vec3, j: Vec3, k: Vec3, t: Vec3) -> Self {
        Mat4::from_cols(i.extend(0.0), j.extend(0.0), k.extend(0.0), t.extend(1.0))
    }

    #[inline]
    fn i_basis_3d(&self) -> Vec3 {
        self.x_axis.truncate()
    }

    #[inline]
    fn j_basis_3d(&self) -> Vec3 {
        self.y_axis.truncate()
    }

    #[inline]
    fn k_basis_3d(&self) -> Vec3 {
        self.z_axis.truncate()
    }

    #[inline]
    fn translation_3d(&self) -> Vec3 {
        self.w_axis.truncate()
    }

    fn orthonormal_inverse(&self) -> Self {
        let mut rotation = *self;
        rotation.w_axis = Vec4::W;
        let rotation = rotation.transpose();
        let translation = rotation.transform_vector3(-self.translation_3d());
        let mut inverse = rotation;
        inverse.w_axis = translation.extend(1.0);
        inverse
    }

    fn orthonormalized_i_fwd_j_left_k_up(&self) -> Self {
        let i = self.i_basis_3d().normalize();

        let k = self.k_basis_3d();
        let k = (k - i * k.dot(i)).normalize();

        let j = self.j_basis_3d();
        let j = (j - i * j.dot(i) - k * j.dot(k)).normalize();

        Mat4::from_ijkt_3d(i, j, k, self.translation_3d())
    }
}

/// Yaw (about +Z), pitch (about +Y) and roll (about +X), in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EulerAngles {
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
    pub roll_degrees: f32,
}

impl EulerAngles {
    pub fn new(yaw_degrees: f32, pitch_degrees: f32, roll_degrees: f32) -> Self {
        Self {
            yaw_degrees,
            pitch_degrees,
            roll_degrees,
        }
    }

    /// Rotation matrix with i-forward, j-left, k-up columns.
    pub fn as_matrix_i_fwd_j_left_k_up(&self) -> Mat4 {
        let (cy, sy) = (cos_degrees(self.yaw_degrees), sin_degrees(self.yaw_degrees));
        let (cp, sp) = (
            cos_degrees(self.pitch_degrees),
            sin_degrees(self.pitch_degrees),
        );
        let (cr, sr) = (cos_degrees(self.roll_degrees), sin_degrees(self.roll_degrees));

        let i = Vec3::new(cp * cy, cp * sy, -sp);
        let j = Vec3::new(-cr * sy + sr * sp * cy, cr * cy + sr * sp * sy, sr * cp);
        let k = Vec3::new(sr * sy + cr * sp * cy, -sr * cy + cr * sp * sy, cr * cp);

        Mat4::from_ijkt_3d(i, j, k, Vec3::ZERO)
    }

    /// The (forward, left, up) basis vectors.
    pub fn as_vectors_i_fwd_j_left_k_up(&self) -> (Vec3, Vec3, Vec3) {
        let m = self.as_matrix_i_fwd_j_left_k_up();
        (m.i_basis_3d(), m.j_basis_3d(), m.k_basis_3d())
    }

    pub fn forward_normal(&self) -> Vec3 {
        self.as_matrix_i_fwd_j_left_k_up().i_basis_3d()
    }
}
