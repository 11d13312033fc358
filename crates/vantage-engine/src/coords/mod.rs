//! Coordinate and geometry types shared by the projection pipeline and output surfaces.
//!
//! Canonical spaces:
//! - World space: arbitrary `f64` coordinates, camera looks down -Z
//! - Screen space: logical viewport (default `[-1, -1]` to `[1, 1]`), +X right, +Y up
//!
//! Output surfaces flip the vertical axis when the target format is +Y down.

mod rect;
mod vec2;
mod vec3;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use viewport::Viewport;
