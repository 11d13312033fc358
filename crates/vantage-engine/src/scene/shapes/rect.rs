use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Layer};

/// Filled axis-aligned rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub fill: Color,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, fill: Color) -> Self {
        Self { rect, fill }
    }
}

impl DrawList {
    /// Records a filled rectangle.
    #[inline]
    pub fn push_solid_rect(&mut self, layer: Layer, rect: Rect, fill: Color) {
        self.push(layer, DrawCmd::Rect(RectCmd::new(rect, fill)));
    }
}
