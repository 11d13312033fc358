use core::f64::consts::PI;

use thiserror::Error;

/// Pinhole camera parameters shared by projection and compositing.
///
/// The camera sits on the Z axis looking down -Z; `camera_depth` is added to
/// every world z before projection.
///
/// # Preconditions
///
/// The permissive pipeline does not enforce these; [`validate`](Self::validate) does.
/// - `0 < vertical_fov < π`
/// - `depth_near < depth_far`, both finite
/// - `depth_near > 0` to keep the perspective divide away from zero distance
/// - `light_depth != 0` whenever shading is requested
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraConfig {
    /// Translation applied to every point's z.
    pub camera_depth: f64,
    /// Vertical field of view in radians. Also used horizontally (isotropic).
    pub vertical_fov: f64,
    /// Nearest visible distance (inclusive).
    pub depth_near: f64,
    /// Farthest visible distance (inclusive).
    pub depth_far: f64,
    /// Scale for distance-based darkening. `None` disables shading.
    pub light_depth: Option<f64>,
}

/// Rejected camera configuration.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum CameraError {
    #[error("camera field `{field}` is not finite")]
    NonFinite { field: &'static str },
    #[error("vertical field of view {0} rad is outside (0, π)")]
    FieldOfView(f64),
    #[error("depth range is empty: near {near} must be less than far {far}")]
    DepthRange { near: f64, far: f64 },
    #[error("light depth must be non-zero when shading is enabled")]
    LightDepth,
}

impl CameraConfig {
    #[inline]
    pub const fn new(camera_depth: f64, vertical_fov: f64, depth_near: f64, depth_far: f64) -> Self {
        Self { camera_depth, vertical_fov, depth_near, depth_far, light_depth: None }
    }

    /// Enables distance-based shading with the given scale.
    #[inline]
    pub fn with_light_depth(mut self, light_depth: f64) -> Self {
        self.light_depth = Some(light_depth);
        self
    }

    /// Checks the preconditions listed on the type.
    ///
    /// A non-positive near plane is accepted (points at distance zero can
    /// survive clipping) but is reported at `warn`.
    pub fn validate(&self) -> Result<(), CameraError> {
        let fields = [
            ("camera_depth", self.camera_depth),
            ("vertical_fov", self.vertical_fov),
            ("depth_near", self.depth_near),
            ("depth_far", self.depth_far),
            ("light_depth", self.light_depth.unwrap_or(1.0)),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CameraError::NonFinite { field: *field });
        }

        if !(self.vertical_fov > 0.0 && self.vertical_fov < PI) {
            return Err(CameraError::FieldOfView(self.vertical_fov));
        }

        if self.depth_near >= self.depth_far {
            return Err(CameraError::DepthRange { near: self.depth_near, far: self.depth_far });
        }

        if self.light_depth == Some(0.0) {
            return Err(CameraError::LightDepth);
        }

        if self.depth_near <= 0.0 {
            log::warn!(
                "depth_near {} is not positive; points at zero distance will divide by zero",
                self.depth_near
            );
        }

        Ok(())
    }
}

impl Default for CameraConfig {
    /// Camera 8 units back, 105° vertical field of view, depth range `[0.01, 100]`.
    fn default() -> Self {
        Self::new(-8.0, (1.75 / 3.0) * PI, 0.01, 100.0)
    }
}
