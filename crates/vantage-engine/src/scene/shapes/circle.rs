use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Layer};

/// Filled circle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f64,
    pub fill: Color,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f64, fill: Color) -> Self {
        Self { center, radius, fill }
    }
}

impl DrawList {
    /// Records a filled circle.
    #[inline]
    pub fn push_solid_circle(&mut self, layer: Layer, center: Vec2, radius: f64, fill: Color) {
        self.push(layer, DrawCmd::Circle(CircleCmd::new(center, radius, fill)));
    }
}
