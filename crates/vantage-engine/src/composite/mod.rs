//! Compositor.
//!
//! Turns projected points into screen-space primitives:
//! 1) clip by `[depth_near, depth_far]` on `distance` (inclusive)
//! 2) order by `distance` ([`DepthOrder`]), stable for ties
//! 3) perspective divide of position and size by `distance`
//! 4) optional shading through [`Shade`]
//!
//! Single pass, no state between calls.

mod config;
mod primitive;

pub use config::{CompositeConfig, CompositeError, DepthOrder, ShapeKind, Shading};
pub use primitive::{Composite, RenderPrimitive};

use crate::paint::Shade;
use crate::projection::{project, CameraConfig, ProjectedPoint, WorldPoint};

/// Composites a batch without validating `config`.
///
/// A kept point at `distance == 0` (only possible when the clip range spans
/// zero) divides to non-finite coordinates; shading with a zero light depth
/// does the same to the darken amount.
pub fn composite<C: Shade>(projected: Vec<ProjectedPoint<C>>, config: &CompositeConfig) -> Composite<C> {
    let total = projected.len();
    let mut kept: Vec<ProjectedPoint<C>> =
        projected.into_iter().filter(|p| config.keeps(p.distance)).collect();

    // `sort_by` is stable, so equal distances keep their projection order.
    match config.order {
        DepthOrder::Ascending => kept.sort_by(|a, b| a.distance.total_cmp(&b.distance)),
        DepthOrder::Descending => kept.sort_by(|a, b| b.distance.total_cmp(&a.distance)),
    }

    log::trace!("composite: kept {} of {} points", kept.len(), total);

    let primitives = kept
        .into_iter()
        .map(|p| {
            let color = match config.shading {
                Some(shading) => p.color.darken(shading.amount(p.distance)),
                None => p.color,
            };
            RenderPrimitive {
                center: p.position / p.distance,
                size: p.size / p.distance,
                color,
                distance: p.distance,
                source: p.source,
            }
        })
        .collect();

    Composite { shape: config.shape, primitives }
}

/// Validating entry point: checks `config` before compositing.
pub fn composite_checked<C: Shade>(
    projected: Vec<ProjectedPoint<C>>,
    config: &CompositeConfig,
) -> Result<Composite<C>, CompositeError> {
    config.validate()?;
    Ok(composite(projected, config))
}

/// Projects `points` through `camera` and composites them in one call.
///
/// Clip range and shading come from `camera`; order is [`DepthOrder::Ascending`].
pub fn render<C: Shade + Clone>(
    points: &[WorldPoint<C>],
    camera: &CameraConfig,
    shape: ShapeKind,
) -> Composite<C> {
    composite(project(points, camera), &CompositeConfig::from_camera(camera, shape))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use approx::assert_abs_diff_eq;

    /// Color token that records the darken amounts applied to it.
    #[derive(Debug, Clone, PartialEq)]
    struct Tag(&'static str, Vec<f64>);

    impl Shade for Tag {
        fn darken(&self, amount: f64) -> Self {
            let mut applied = self.1.clone();
            applied.push(amount);
            Tag(self.0, applied)
        }
    }

    fn projected(name: &'static str, x: f64, y: f64, size: f64, distance: f64) -> ProjectedPoint<Tag> {
        ProjectedPoint {
            position: Vec2::new(x, y),
            depth: 0.0,
            size,
            color: Tag(name, Vec::new()),
            distance,
            source: 0,
        }
    }

    fn names(out: &Composite<Tag>) -> Vec<&'static str> {
        out.iter().map(|p| p.color.0).collect()
    }

    #[test]
    fn ascending_order_is_nearest_first() {
        let input = vec![
            projected("far", 0.0, 0.0, 1.0, 50.0),
            projected("near", 0.0, 0.0, 1.0, 2.0),
            projected("mid", 0.0, 0.0, 1.0, 10.0),
        ];
        let out = composite(input, &CompositeConfig::new(0.01, 100.0, ShapeKind::Circle));
        assert_eq!(names(&out), ["near", "mid", "far"]);
    }

    #[test]
    fn descending_order_is_farthest_first() {
        let input = vec![
            projected("near", 0.0, 0.0, 1.0, 2.0),
            projected("far", 0.0, 0.0, 1.0, 50.0),
            projected("mid", 0.0, 0.0, 1.0, 10.0),
        ];
        let config = CompositeConfig::new(0.01, 100.0, ShapeKind::Circle).with_order(DepthOrder::Descending);
        let out = composite(input, &config);
        assert_eq!(names(&out), ["far", "mid", "near"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let input = vec![
            projected("a", 0.0, 0.0, 1.0, 5.0),
            projected("b", 0.0, 0.0, 1.0, 5.0),
            projected("c", 0.0, 0.0, 1.0, 1.0),
            projected("d", 0.0, 0.0, 1.0, 5.0),
        ];
        let out = composite(input, &CompositeConfig::new(0.5, 10.0, ShapeKind::Circle));
        assert_eq!(names(&out), ["c", "a", "b", "d"]);
    }

    #[test]
    fn out_of_range_points_emit_nothing() {
        let input = vec![
            projected("behind", 0.0, 0.0, 1.0, -3.0),
            projected("too-near", 0.0, 0.0, 1.0, 0.005),
            projected("too-far", 0.0, 0.0, 1.0, 100.5),
            projected("nan", 0.0, 0.0, 1.0, f64::NAN),
            projected("kept", 0.0, 0.0, 1.0, 1.0),
        ];
        let out = composite(input, &CompositeConfig::new(0.01, 100.0, ShapeKind::Circle));
        assert_eq!(names(&out), ["kept"]);
    }

    #[test]
    fn divides_position_and_size_by_distance() {
        let input = vec![projected("p", 3.0, -1.5, 0.6, 4.0)];
        let out = composite(input, &CompositeConfig::new(0.01, 100.0, ShapeKind::Circle));
        let p = &out.primitives[0];
        assert_abs_diff_eq!(p.center.x, 0.75);
        assert_abs_diff_eq!(p.center.y, -0.375);
        assert_abs_diff_eq!(p.size, 0.15);
        assert_eq!(p.distance, 4.0);
    }

    #[test]
    fn shading_darkens_by_distance_over_light_depth() {
        let input = vec![projected("p", 0.0, 0.0, 1.0, 8.0)];
        let config = CompositeConfig::new(0.01, 100.0, ShapeKind::Circle)
            .with_shading(Some(Shading::new(100.0)));
        let out = composite(input, &config);
        assert_eq!(out.primitives[0].color.1, [0.08]);
    }

    #[test]
    fn no_shading_leaves_color_untouched() {
        let input = vec![projected("p", 0.0, 0.0, 1.0, 8.0)];
        let out = composite(input, &CompositeConfig::new(0.01, 100.0, ShapeKind::Circle));
        assert!(out.primitives[0].color.1.is_empty());
    }

    #[test]
    fn square_bounds_have_double_side() {
        let input = vec![projected("p", 2.0, 2.0, 1.0, 4.0)];
        let out = composite(input, &CompositeConfig::new(0.01, 100.0, ShapeKind::Square));
        assert_eq!(out.shape, ShapeKind::Square);

        let p = &out.primitives[0];
        let bounds = p.bounds();
        assert_abs_diff_eq!(bounds.size.x, 2.0 * p.size);
        assert_abs_diff_eq!(bounds.size.y, 2.0 * p.size);
        assert_eq!(bounds.center(), p.center);
    }

    #[test]
    fn checked_composite_rejects_zero_light_depth() {
        let config = CompositeConfig::new(0.01, 100.0, ShapeKind::Circle)
            .with_shading(Some(Shading::new(0.0)));
        let err = composite_checked(vec![projected("p", 0.0, 0.0, 1.0, 1.0)], &config).unwrap_err();
        assert_eq!(err, CompositeError::LightDepth(0.0));
    }

    #[test]
    fn render_uses_camera_light_depth() {
        use crate::coords::Vec3;

        let camera = CameraConfig::default().with_light_depth(100.0);
        let points = [WorldPoint::new(Vec3::zero(), 1.0, Color::white())];
        let out = render(&points, &camera, ShapeKind::Circle);
        assert_eq!(out.primitives[0].color.to_hex(), "#ebebeb");
    }
}
