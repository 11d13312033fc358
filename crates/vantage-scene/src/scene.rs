use vantage_engine::composite::{composite, Composite, CompositeConfig, DepthOrder, ShapeKind};
use vantage_engine::coords::Viewport;
use vantage_engine::paint::Color;
use vantage_engine::projection::{project, CameraConfig, WorldPoint};
use vantage_engine::scene::{DrawList, Layer};

/// One independently composited batch of world points.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayer {
    pub layer: Layer,
    pub points: Vec<WorldPoint<Color>>,
}

/// A fully resolved scene: camera, compositing settings and point batches.
///
/// Built from `.vsml` by [`crate::builder::build_scene`] or assembled directly.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSpec {
    pub camera: CameraConfig,
    pub background: Color,
    pub shape: ShapeKind,
    pub order: DepthOrder,
    pub layers: Vec<SceneLayer>,
}

impl Default for SceneSpec {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            background: Color::white(),
            shape: ShapeKind::Circle,
            order: DepthOrder::Ascending,
            layers: Vec::new(),
        }
    }
}

impl SceneSpec {
    /// Settings shared by every layer's compositor pass.
    pub fn composite_config(&self) -> CompositeConfig {
        CompositeConfig::from_camera(&self.camera, self.shape).with_order(self.order)
    }

    /// Total number of world points across layers.
    pub fn point_count(&self) -> usize {
        self.layers.iter().map(|l| l.points.len()).sum()
    }

    /// Projects and composites each layer on its own.
    pub fn composite_layers(&self) -> Vec<(Layer, Composite<Color>)> {
        let config = self.composite_config();
        self.layers
            .iter()
            .map(|scene_layer| {
                let batch = composite(project(&scene_layer.points, &self.camera), &config);
                log::debug!(
                    "layer {}: {} of {} points visible",
                    scene_layer.layer.0,
                    batch.len(),
                    scene_layer.points.len()
                );
                (scene_layer.layer, batch)
            })
            .collect()
    }

    /// Background fill over `viewport` followed by every composited layer.
    pub fn draw_list(&self, viewport: &Viewport) -> DrawList {
        let mut draw_list = DrawList::new();
        draw_list.push_solid_rect(Layer::BACKGROUND, viewport.view, self.background);
        for (layer, batch) in self.composite_layers() {
            draw_list.push_composite(layer, &batch);
        }
        draw_list
    }
}
