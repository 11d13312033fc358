//! Vantage engine crate.
//!
//! Renders 3-D world points into 2-D screen primitives:
//!
//! ```text
//! WorldPoint[] + CameraConfig ──project──▶ ProjectedPoint[] ──composite──▶ Composite (RenderPrimitive[])
//! ```
//!
//! - [`projection`]: pinhole perspective transform with frustum depth remap
//! - [`composite`]: clip, depth ordering, perspective divide, shading, shape emission
//! - [`scene`]: layered draw list consumed by output surfaces
//!
//! Every pipeline call is a pure function of its inputs; batches can be
//! processed on any thread.
//!
//! ```
//! use vantage_engine::composite::{render, ShapeKind};
//! use vantage_engine::coords::Vec3;
//! use vantage_engine::paint::Color;
//! use vantage_engine::projection::{CameraConfig, WorldPoint};
//!
//! let camera = CameraConfig::default();
//! let points = [WorldPoint::new(Vec3::zero(), 1.0, Color::black())];
//! let batch = render(&points, &camera, ShapeKind::Circle);
//! assert_eq!(batch.len(), 1);
//! ```

pub mod composite;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod projection;
pub mod scene;

pub use composite::{composite, render, Composite, CompositeConfig, DepthOrder, RenderPrimitive, ShapeKind};
pub use projection::{project, CameraConfig, ProjectedPoint, WorldPoint};
