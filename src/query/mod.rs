//! Stateless geometric queries over the shape types.
//!
//! - [`overlap`]: point containment and shape-vs-shape overlap
//! - [`nearest`]: nearest point on a shape
//! - [`push`]: push-out of penetrating discs

pub mod nearest;
pub mod overlap;
pub mod push;

pub use nearest::*;
pub use overlap::*;
pub use push::*;
