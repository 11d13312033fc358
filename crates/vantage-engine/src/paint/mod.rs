//! Paint model shared between the compositor and output surfaces.
//!
//! Scope:
//! - color representation (straight-alpha sRGB)
//! - the [`Shade`] seam through which distance-based darkening is applied
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod shade;

pub use color::{Color, ColorParseError};
pub use shade::Shade;
