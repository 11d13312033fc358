//! Projection Engine.
//!
//! Converts world points into camera-space perspective points. Every call is a
//! pure transform: one output per input, in input order. Depth ordering and the
//! perspective divide happen later in [`crate::composite`].

mod camera;
mod frustum;
mod point;

pub use camera::{CameraConfig, CameraError};
pub use frustum::Frustum;
pub use point::{ProjectedPoint, WorldPoint};

/// Projects `points` through `camera` without validating the camera.
///
/// Degenerate cameras (field of view of `0` or `π`, `depth_near == depth_far`)
/// propagate as non-finite coordinates per IEEE-754 rather than failing. Use
/// [`project_checked`] to reject them up front.
pub fn project<C: Clone>(points: &[WorldPoint<C>], camera: &CameraConfig) -> Vec<ProjectedPoint<C>> {
    let frustum = Frustum::from_camera(camera);
    let projected: Vec<_> = points
        .iter()
        .enumerate()
        .map(|(source, point)| frustum.project_point(point, source))
        .collect();

    log::trace!("projected {} world points", projected.len());
    projected
}

/// Validating entry point: checks `camera` before projecting.
pub fn project_checked<C: Clone>(
    points: &[WorldPoint<C>],
    camera: &CameraConfig,
) -> Result<Vec<ProjectedPoint<C>>, CameraError> {
    camera.validate()?;
    Ok(project(points, camera))
}
