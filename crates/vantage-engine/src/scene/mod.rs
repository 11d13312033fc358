//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands for every batch of a frame
//! - provide deterministic ordering (layer + insertion order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`
//!
//! Batches can be composited independently (and in parallel); pushing them
//! into a [`DrawList`] is the only point where they are ordered against each other.

mod cmd;
mod key;
mod layer;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use layer::Layer;
pub use list::{DrawItem, DrawList};
pub use shapes::{CircleCmd, RectCmd};
