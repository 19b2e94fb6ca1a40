//! georay geometric query core
//!
//! Stateless overlap, nearest-point, push-out and raycast queries over
//! simple 2D and 3D shapes, built on glam vectors.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **math** - Angle/vector helpers, i-forward/j-left/k-up bases, seeded random rolls
//! 2. **shapes** - Plain `Copy` shape values (discs, boxes, capsules, cylinders, planes)
//! 3. **query** - Containment, overlap, nearest point and push-out
//! 4. **raycast** - Ray-vs-shape casts and nearest-hit scene casts
//!
//! # Conventions
//!
//! - Angles are in degrees.
//! - Containment and overlap are boundary-inclusive.
//! - Ray directions must be unit length; casts debug-assert it.
//! - A missed raycast still returns a full [`RaycastResult`] describing the
//!   unobstructed ray.

pub mod math;
pub mod query;
pub mod raycast;
pub mod shapes;

// Re-export commonly used types
pub use glam;

pub use math::{EulerAngles, Mat4Ext, RandomNumberGenerator, Vec2Ext, Vec3Ext};

pub use raycast::{
    raycast_nearest_2d, raycast_nearest_3d, Ray, Ray2D, Ray3D, RaycastResult, RaycastResult2D,
    RaycastResult3D,
};

pub use shapes::{
    Aabb2, Aabb3, Capsule2, Disc2, FloatRange, IntRange, LineSegment2, Obb2, Obb3, Plane3, Shape2D,
    Shape3D, ShapeError, Sphere, Triangle2, ZCylinder,
};

pub use query::PushConfig;
