use super::Rect;

/// Logical view rectangle that screen-space primitives are placed in.
///
/// `flip_y` asks output surfaces whose native axis points down (SVG, raster
/// images) to mirror the vertical axis so screen +Y points up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub view: Rect,
    pub flip_y: bool,
}

impl Viewport {
    #[inline]
    pub const fn new(view: Rect, flip_y: bool) -> Self {
        Self { view, flip_y }
    }

    /// The `[-1, -1]` to `[1, 1]` square with +Y up.
    #[inline]
    pub const fn unit() -> Self {
        Self::new(Rect::new(-1.0, -1.0, 2.0, 2.0), true)
    }

    /// Finite, with positive width and height.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.view.is_finite() && !self.view.is_empty()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::unit()
    }
}
