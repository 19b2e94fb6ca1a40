//! Extension traits adding engine vocabulary to `glam` vectors.

use glam::{Vec2, Vec3};

/// Degree-based rotation and length helpers for [`Vec2`].
pub trait Vec2Ext: Sized {
    /// Unit vector (scaled by `length`) at `degrees` counter-clockwise from +X.
    fn from_polar_degrees(degrees: f32, length: f32) -> Self;
    /// Orientation in degrees, counter-clockwise from +X, in `(-180, 180]`.
    fn orientation_degrees(self) -> f32;
    /// `(-y, x)`.
    fn rotated_90_degrees(self) -> Self;
    /// `(y, -x)`.
    fn rotated_minus_90_degrees(self) -> Self;
    fn rotated_degrees(self, degrees: f32) -> Self;
    /// Shortened to `limit` if longer, otherwise unchanged.
    fn clamped_length(self, limit: f32) -> Self;
    /// Same direction with the given length. A zero vector stays zero.
    fn with_length(self, length: f32) -> Self;
    /// Mirror across a surface with unit `normal`.
    fn reflected(self, normal: Self) -> Self;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn from_polar_degrees(degrees: f32, length: f32) -> Self {
        Vec2::from_angle(degrees.to_radians()) * length
    }

    #[inline]
    fn orientation_degrees(self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }

    #[inline]
    fn rotated_90_degrees(self) -> Self {
        self.perp()
    }

    #[inline]
    fn rotated_minus_90_degrees(self) -> Self {
        Vec2::new(self.y, -self.x)
    }

    #[inline]
    fn rotated_degrees(self, degrees: f32) -> Self {
        Vec2::from_angle(degrees.to_radians()).rotate(self)
    }

    #[inline]
    fn clamped_length(self, limit: f32) -> Self {
        if self.length_squared() > limit * limit {
            self.normalize_or_zero() * limit
        } else {
            self
        }
    }

    #[inline]
    fn with_length(self, length: f32) -> Self {
        self.normalize_or_zero() * length
    }

    #[inline]
    fn reflected(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }
}

/// World axis conventions and z-plane helpers for [`Vec3`].
///
/// The engine basis is i-forward (+X), j-left (+Y), k-up (+Z).
pub trait Vec3Ext: Sized {
    const WORLD_FORWARD: Self;
    const WORLD_LEFT: Self;
    const WORLD_UP: Self;

    /// Vector from yaw (about +Z) and pitch (toward +Z) in degrees.
    fn from_polar_degrees(yaw_degrees: f32, pitch_degrees: f32, length: f32) -> Self;
    fn length_xy(self) -> f32;
    fn length_xy_squared(self) -> f32;
    fn angle_about_z_degrees(self) -> f32;
    fn rotated_about_z_degrees(self, degrees: f32) -> Self;
    fn flattened_xy(self) -> Vec2;
    /// Unit vector of the xy components with z zeroed. Zero if vertical.
    fn flattened_normal_xy(self) -> Self;
    fn with_length(self, length: f32) -> Self;
}

impl Vec3Ext for Vec3 {
    const WORLD_FORWARD: Self = Vec3::X;
    const WORLD_LEFT: Self = Vec3::Y;
    const WORLD_UP: Self = Vec3::Z;

    fn from_polar_degrees(yaw_degrees: f32, pitch_degrees: f32, length: f32) -> Self {
        let (sin_yaw, cos_yaw) = yaw_degrees.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = pitch_degrees.to_radians().sin_cos();
        Vec3::new(
            length * cos_yaw * cos_pitch,
            length * sin_yaw * cos_pitch,
            length * sin_pitch,
        )
    }

    #[inline]
    fn length_xy(self) -> f32 {
        self.truncate().length()
    }

    #[inline]
    fn length_xy_squared(self) -> f32 {
        self.truncate().length_squared()
    }

    #[inline]
    fn angle_about_z_degrees(self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }

    fn rotated_about_z_degrees(self, degrees: f32) -> Self {
        self.truncate().rotated_degrees(degrees).extend(self.z)
    }

    #[inline]
    fn flattened_xy(self) -> Vec2 {
        self.truncate()
    }

    #[inline]
    fn flattened_normal_xy(self) -> Self {
        self.truncate().normalize_or_zero().extend(0.0)
    }

    #[inline]
    fn with_length(self, length: f32) -> Self {
        self.normalize_or_zero() * length
    }
}
