//! Vantage scene layer: point generators, `.vsml` scene files, and file output
//! on top of `vantage-engine`.
//!
//! # Quick start
//!
//! ```rust
//! use vantage_scene::prelude::*;
//!
//! let scene = load_scene(r#"
//!     Scene {
//!         Camera { depth: -8  light: 100 }
//!         Orbital { resolution: 64  radius: 3 }
//!     }
//! "#).unwrap();
//!
//! let viewport = Viewport::unit();
//! let mut draw_list = scene.draw_list(&viewport);
//! let svg = write_svg(&mut draw_list, &viewport);
//! assert!(svg.contains("<circle"));
//! ```
//!
//! # Custom point sources
//!
//! Implement [`PointSource`](generators::PointSource) for any type and feed its
//! points into a [`SceneLayer`](scene::SceneLayer):
//!
//! ```rust
//! use vantage_scene::prelude::*;
//!
//! struct Line { steps: usize }
//!
//! impl PointSource<Color> for Line {
//!     fn emit(&self, out: &mut Vec<WorldPoint<Color>>) {
//!         for i in 0..self.steps {
//!             out.push(WorldPoint::new(Vec3::new(i as f64, 0.0, 0.0), 0.1, Color::black()));
//!         }
//!     }
//! }
//!
//! let layer = SceneLayer { layer: Layer(0), points: Line { steps: 4 }.points() };
//! assert_eq!(layer.points.len(), 4);
//! ```

pub mod builder;
pub mod generators;
pub mod raster;
pub mod scene;
pub mod svg;

pub use builder::{build_scene, load_scene, BuildError};
pub use scene::{SceneLayer, SceneSpec};

/// Source of the built-in three-ring logo scene.
pub const RINGS_VSML: &str = include_str!("../scenes/rings.vsml");

/// Builds the built-in three-ring logo scene.
pub fn rings_scene() -> Result<SceneSpec, BuildError> {
    load_scene(RINGS_VSML)
}

/// Everything needed to build and render scenes.
pub mod prelude {
    pub use crate::builder::{build_scene, load_scene, BuildError};
    pub use crate::generators::{AngleFunctionSet, DepthWave, Orbital, PointSource, Sphere};
    pub use crate::raster::{rasterize, save_png, RasterError};
    pub use crate::scene::{SceneLayer, SceneSpec};
    pub use crate::svg::write_svg;
    pub use vantage_engine::composite::{DepthOrder, ShapeKind};
    pub use vantage_engine::coords::{Vec2, Vec3, Viewport};
    pub use vantage_engine::paint::Color;
    pub use vantage_engine::projection::{CameraConfig, WorldPoint};
    pub use vantage_engine::scene::{DrawList, Layer};
}
