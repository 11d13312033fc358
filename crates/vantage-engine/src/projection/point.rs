use crate::coords::{Vec2, Vec3};

/// A point in scene coordinates, before any camera transform.
///
/// `size` is a non-negative world-space radius (circles) or half-extent
/// (squares). `color` is an opaque token that is carried through untouched
/// unless shading is enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldPoint<C> {
    pub position: Vec3,
    pub size: f64,
    pub color: C,
}

impl<C> WorldPoint<C> {
    #[inline]
    pub const fn new(position: Vec3, size: f64, color: C) -> Self {
        Self { position, size, color }
    }
}

/// A world point after the perspective transform, before the divide.
///
/// `distance` is the signed camera-space depth (`-(z + camera_depth)`) used
/// for clipping, ordering and the perspective divide. `depth` is the
/// frustum-remapped z and is informational only.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedPoint<C> {
    pub position: Vec2,
    pub depth: f64,
    pub size: f64,
    pub color: C,
    pub distance: f64,
    /// Index of the originating [`WorldPoint`] in the projected slice.
    pub source: usize,
}
