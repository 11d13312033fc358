use crate::coords::{Rect, Vec2};

use super::ShapeKind;

/// One screen-space shape, after clipping, the perspective divide and shading.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPrimitive<C> {
    pub center: Vec2,
    /// Radius for circles, half-extent for squares.
    pub size: f64,
    pub color: C,
    /// Camera-space distance the primitive was divided by.
    pub distance: f64,
    /// Index of the originating world point.
    pub source: usize,
}

impl<C> RenderPrimitive<C> {
    /// Axis-aligned bounds: the square centered on `center` with side `2 * size`.
    ///
    /// For [`ShapeKind::Square`] this is the shape itself.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.center, self.size)
    }
}

/// Compositor output: primitives in paint order plus the batch shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite<C> {
    pub shape: ShapeKind,
    pub primitives: Vec<RenderPrimitive<C>>,
}

impl<C> Composite<C> {
    #[inline]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, RenderPrimitive<C>> {
        self.primitives.iter()
    }
}

impl<'a, C> IntoIterator for &'a Composite<C> {
    type Item = &'a RenderPrimitive<C>;
    type IntoIter = core::slice::Iter<'a, RenderPrimitive<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}
