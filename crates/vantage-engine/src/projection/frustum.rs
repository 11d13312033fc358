use crate::coords::Vec2;

use super::{CameraConfig, ProjectedPoint, WorldPoint};

/// Per-camera projection constants, computed once and reused for every point.
///
/// `fov_scale` is applied isotropically to x, y and size. `z_scale` and
/// `z_translate` are the symmetric-frustum remap of camera-space z; the
/// remapped value is carried on [`ProjectedPoint::depth`] for consumers such as
/// a z-buffer, but clipping and ordering use [`ProjectedPoint::distance`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frustum {
    pub camera_depth: f64,
    pub fov_scale: f64,
    pub z_scale: f64,
    pub z_translate: f64,
}

impl Frustum {
    pub fn from_camera(camera: &CameraConfig) -> Self {
        let fov_scale = 1.0 / (camera.vertical_fov / 2.0).tan();
        let depth_delta = camera.depth_near - camera.depth_far;
        let z_scale = -(camera.depth_far + camera.depth_near) / depth_delta;
        let z_translate = -(2.0 * camera.depth_far * camera.depth_near) / depth_delta;

        Self { camera_depth: camera.camera_depth, fov_scale, z_scale, z_translate }
    }

    /// Projects a single point. `source` is recorded on the result as-is.
    #[inline]
    pub fn project_point<C: Clone>(&self, point: &WorldPoint<C>, source: usize) -> ProjectedPoint<C> {
        let camera_z = point.position.z + self.camera_depth;

        ProjectedPoint {
            position: Vec2::new(self.fov_scale * point.position.x, self.fov_scale * point.position.y),
            depth: self.z_scale * camera_z + self.z_translate,
            size: self.fov_scale * point.size,
            color: point.color.clone(),
            distance: -camera_z,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec3;
    use approx::assert_abs_diff_eq;

    #[test]
    fn right_angle_fov_has_unit_scale() {
        let camera = CameraConfig::new(0.0, core::f64::consts::FRAC_PI_2, 1.0, 3.0);
        let f = Frustum::from_camera(&camera);
        assert_abs_diff_eq!(f.fov_scale, 1.0, epsilon = 1e-12);
        // near 1, far 3: delta -2 → z_scale 2, z_translate 3
        assert_abs_diff_eq!(f.z_scale, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.z_translate, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn remapped_depth_spans_near_and_far_planes() {
        let camera = CameraConfig::new(0.0, 1.0, 0.5, 40.0);
        let f = Frustum::from_camera(&camera);
        let at = |d: f64| f.project_point(&WorldPoint::new(Vec3::new(0.0, 0.0, -d), 0.0, ()), 0);

        // Camera-space z = -near maps to +near, -far maps to -far.
        assert_abs_diff_eq!(at(0.5).depth, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(at(40.0).depth, -40.0, epsilon = 1e-9);
    }

    #[test]
    fn distance_is_signed_pre_remap_camera_z() {
        let camera = CameraConfig::new(-8.0, 1.0, 0.01, 100.0);
        let f = Frustum::from_camera(&camera);
        let behind = f.project_point(&WorldPoint::new(Vec3::new(0.0, 0.0, 10.0), 1.0, ()), 7);
        assert_abs_diff_eq!(behind.distance, -2.0, epsilon = 1e-12);
        assert_eq!(behind.source, 7);
    }
}
