use thiserror::Error;

use crate::projection::CameraConfig;

/// Batch-level primitive shape.
///
/// `size` on a primitive is a radius for circles and a half-extent for squares.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    #[default]
    Circle,
    Square,
}

/// Emission order of kept points, keyed on `distance`.
///
/// Ties keep their projection order in both modes.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DepthOrder {
    /// Non-decreasing distance: nearest point first.
    #[default]
    Ascending,
    /// Non-increasing distance: farthest point first, so nearer points land on top.
    Descending,
}

/// Distance-based darkening. Each kept color becomes `darken(distance / light_depth)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shading {
    pub light_depth: f64,
}

impl Shading {
    #[inline]
    pub const fn new(light_depth: f64) -> Self {
        Self { light_depth }
    }

    #[inline]
    pub fn amount(self, distance: f64) -> f64 {
        distance / self.light_depth
    }
}

/// Compositor settings for one batch.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CompositeConfig {
    pub depth_near: f64,
    pub depth_far: f64,
    pub shape: ShapeKind,
    pub shading: Option<Shading>,
    pub order: DepthOrder,
}

/// Rejected compositor settings.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum CompositeError {
    #[error("clip range bounds must be finite (near {near}, far {far})")]
    NonFinite { near: f64, far: f64 },
    #[error("clip range is empty: near {near} must be less than far {far}")]
    DepthRange { near: f64, far: f64 },
    #[error("light depth {0} must be finite and non-zero")]
    LightDepth(f64),
}

impl CompositeConfig {
    #[inline]
    pub fn new(depth_near: f64, depth_far: f64, shape: ShapeKind) -> Self {
        Self { depth_near, depth_far, shape, shading: None, order: DepthOrder::default() }
    }

    /// Takes the clip range from `camera`; shading is enabled iff `camera.light_depth` is set.
    pub fn from_camera(camera: &CameraConfig, shape: ShapeKind) -> Self {
        Self {
            shading: camera.light_depth.map(Shading::new),
            ..Self::new(camera.depth_near, camera.depth_far, shape)
        }
    }

    #[inline]
    pub fn with_shading(mut self, shading: Option<Shading>) -> Self {
        self.shading = shading;
        self
    }

    #[inline]
    pub fn with_order(mut self, order: DepthOrder) -> Self {
        self.order = order;
        self
    }

    /// Clip test: `depth_near <= distance <= depth_far`. NaN is never kept.
    #[inline]
    pub fn keeps(&self, distance: f64) -> bool {
        self.depth_near <= distance && distance <= self.depth_far
    }

    pub fn validate(&self) -> Result<(), CompositeError> {
        let (near, far) = (self.depth_near, self.depth_far);
        if !near.is_finite() || !far.is_finite() {
            return Err(CompositeError::NonFinite { near, far });
        }
        if near >= far {
            return Err(CompositeError::DepthRange { near, far });
        }
        if let Some(Shading { light_depth }) = self.shading {
            if light_depth == 0.0 || !light_depth.is_finite() {
                return Err(CompositeError::LightDepth(light_depth));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_is_inclusive_on_both_ends() {
        let config = CompositeConfig::new(0.01, 100.0, ShapeKind::Circle);
        assert!(config.keeps(0.01));
        assert!(config.keeps(100.0));
        assert!(!config.keeps(0.01 - 1e-9));
        assert!(!config.keeps(100.0 + 1e-9));
        assert!(!config.keeps(f64::NAN));
    }

    #[test]
    fn from_camera_enables_shading_only_with_light_depth() {
        let camera = CameraConfig::default();
        assert_eq!(CompositeConfig::from_camera(&camera, ShapeKind::Square).shading, None);

        let lit = CompositeConfig::from_camera(&camera.with_light_depth(16.0), ShapeKind::Square);
        assert_eq!(lit.shading, Some(Shading::new(16.0)));
        assert_eq!(lit.depth_near, camera.depth_near);
        assert_eq!(lit.depth_far, camera.depth_far);
        assert_eq!(lit.shape, ShapeKind::Square);
    }

    #[test]
    fn validate_rejects_bad_ranges_and_light_depth() {
        let ok = CompositeConfig::new(1.0, 2.0, ShapeKind::Circle);
        assert_eq!(ok.validate(), Ok(()));

        let empty = CompositeConfig::new(2.0, 2.0, ShapeKind::Circle);
        assert_eq!(empty.validate(), Err(CompositeError::DepthRange { near: 2.0, far: 2.0 }));

        let dark = ok.with_shading(Some(Shading::new(0.0)));
        assert_eq!(dark.validate(), Err(CompositeError::LightDepth(0.0)));
    }

    #[test]
    fn shading_amount_scales_distance() {
        assert_eq!(Shading::new(100.0).amount(8.0), 0.08);
    }
}
