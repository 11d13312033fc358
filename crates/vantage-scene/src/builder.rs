use std::str::FromStr;

use thiserror::Error;
use vantage_engine::composite::{DepthOrder, ShapeKind};
use vantage_engine::coords::Vec3;
use vantage_engine::paint::Color;
use vantage_engine::projection::{CameraConfig, CameraError, WorldPoint};
use vantage_engine::scene::Layer;
use vantage_vsml::{parse_str, Node, ParseError, Value, VsmlDocument};

use crate::generators::{AngleFunctionSet, DepthWave, Orbital, PointSource, Sphere};
use crate::scene::{SceneLayer, SceneSpec};

/// World-space size used when a generator omits `size`.
pub const DEFAULT_POINT_SIZE: f64 = 0.25;

/// Largest `resolution` or `count` a single generator may ask for.
pub const MAX_GENERATOR_POINTS: usize = 1 << 20;

// ── BuildError ────────────────────────────────────────────────────────────

/// A `.vsml` document that parsed but does not describe a valid scene.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("line {line}: root node must be `Scene`, found `{found}`")]
    UnexpectedRoot { found: String, line: usize },
    #[error("line {line}: `{name}` is not allowed inside {parent}")]
    UnknownNode { name: String, parent: String, line: usize },
    #[error("line {line}: {node} has no property `{key}`")]
    UnknownProp { node: String, key: String, line: usize },
    #[error("line {line}: {node}.{key} expects a {expected}, found a {found}")]
    WrongType { node: String, key: String, expected: &'static str, found: &'static str, line: usize },
    #[error("line {line}: {node}.{key}: {reason}")]
    InvalidValue { node: String, key: String, reason: String, line: usize },
    #[error("line {line}: a scene has at most one Camera")]
    DuplicateCamera { line: usize },
    #[error("invalid camera: {0}")]
    Camera(#[from] CameraError),
}

// ── Entry points ──────────────────────────────────────────────────────────

/// Parses `src` and builds the scene it describes.
pub fn load_scene(src: &str) -> Result<SceneSpec, BuildError> {
    let doc = parse_str(src)?;
    build_scene(&doc)
}

/// Builds a [`SceneSpec`] from a parsed document.
///
/// Generators placed directly under `Scene` land on layer `0`; each `Layer`
/// node becomes its own batch. The camera is validated before returning.
pub fn build_scene(doc: &VsmlDocument) -> Result<SceneSpec, BuildError> {
    let root = &doc.root;
    if root.kind != "Scene" {
        return Err(BuildError::UnexpectedRoot { found: root.kind.clone(), line: root.line });
    }

    let props = Props::check(root, &["background", "shape", "order"])?;
    let mut scene = SceneSpec::default();
    if let Some(background) = props.color("background")? {
        scene.background = background;
    }
    if let Some(shape) =
        props.choice("shape", &[("circle", ShapeKind::Circle), ("square", ShapeKind::Square)])?
    {
        scene.shape = shape;
    }
    if let Some(order) = props.choice(
        "order",
        &[("ascending", DepthOrder::Ascending), ("descending", DepthOrder::Descending)],
    )? {
        scene.order = order;
    }

    let mut has_camera = false;
    let mut loose = Vec::new();
    let mut layers = Vec::new();
    for child in &root.children {
        match child.kind.as_str() {
            "Camera" => {
                if has_camera {
                    return Err(BuildError::DuplicateCamera { line: child.line });
                }
                has_camera = true;
                scene.camera = build_camera(child)?;
            }
            "Layer" => layers.push(build_layer(child)?),
            _ => emit_generator(child, root, &mut loose)?,
        }
    }
    scene.camera.validate()?;

    if !loose.is_empty() {
        scene.layers.push(SceneLayer { layer: Layer(0), points: loose });
    }
    scene.layers.extend(layers);

    log::debug!(
        "built scene: {} layers, {} points, camera {}",
        scene.layers.len(),
        scene.point_count(),
        if has_camera { "explicit" } else { "default" }
    );
    Ok(scene)
}

// ── Nodes ─────────────────────────────────────────────────────────────────

fn build_camera(node: &Node) -> Result<CameraConfig, BuildError> {
    reject_children(node)?;
    let props = Props::check(node, &["depth", "fov", "fov_deg", "near", "far", "light"])?;
    let defaults = CameraConfig::default();

    let mut camera = CameraConfig::new(
        props.number_or("depth", defaults.camera_depth)?,
        props.angle("fov", "fov_deg")?.unwrap_or(defaults.vertical_fov),
        props.number_or("near", defaults.depth_near)?,
        props.number_or("far", defaults.depth_far)?,
    );
    camera.light_depth = props.number("light")?;
    Ok(camera)
}

fn build_layer(node: &Node) -> Result<SceneLayer, BuildError> {
    let props = Props::check(node, &["z"])?;
    let z = match props.number("z")? {
        None => 0,
        Some(z) if z.fract() == 0.0 && z > f64::from(i32::MIN) && z <= f64::from(i32::MAX) => z as i32,
        Some(z) => return Err(props.invalid("z", format!("{z} is not a layer index"))),
    };

    let mut points = Vec::new();
    for child in &node.children {
        emit_generator(child, node, &mut points)?;
    }
    Ok(SceneLayer { layer: Layer(z), points })
}

fn emit_generator(node: &Node, parent: &Node, out: &mut Vec<WorldPoint<Color>>) -> Result<(), BuildError> {
    match node.kind.as_str() {
        "Orbital" => build_orbital(node)?.emit(out),
        "Sphere" => build_sphere(node)?.emit(out),
        "Point" => build_point(node)?.emit(out),
        _ => {
            return Err(BuildError::UnknownNode {
                name: node.kind.clone(),
                parent: parent.display_name(),
                line: node.line,
            });
        }
    }
    Ok(())
}

fn build_orbital(node: &Node) -> Result<Orbital<Color>, BuildError> {
    reject_children(node)?;
    let props = Props::check(
        node,
        &[
            "resolution", "radius", "size", "color",
            "axis_x", "axis_y", "axis_z", "rotation", "rotation_deg",
            "x", "y", "z",
            "tilt", "tilt_deg", "wobble", "wobble_deg", "wobble_freq",
            "turns", "profile",
        ],
    )?;

    let axis = props.vec3(["axis_x", "axis_y", "axis_z"], Vec3::unit_x())?;
    if axis.length() == 0.0 || !axis.is_finite() {
        return Err(props.invalid("axis_x", "rotation axis must be a non-zero vector"));
    }

    let depth_wave = DepthWave {
        base: props.angle("tilt", "tilt_deg")?.unwrap_or(DepthWave::FLAT.base),
        amplitude: props.angle("wobble", "wobble_deg")?.unwrap_or(0.0),
        frequency: props.number_or("wobble_freq", 1.0)?,
    };
    let angles = props
        .choice(
            "profile",
            &[("circle", AngleFunctionSet::circular()), ("square", AngleFunctionSet::square_slice())],
        )?
        .unwrap_or_default();

    let mut orbital = Orbital::new(
        props.count("resolution", 512)?,
        props.number_or("radius", 1.0)?,
        props.number_or("size", DEFAULT_POINT_SIZE)?,
        props.color("color")?.unwrap_or(Color::black()),
    )
    .rotated(axis, props.angle("rotation", "rotation_deg")?.unwrap_or(0.0))
    .translated(props.vec3(["x", "y", "z"], Vec3::zero())?)
    .with_depth_wave(depth_wave)
    .with_angles(angles);
    orbital.slice_turns = props.number_or("turns", 1.0)?;
    Ok(orbital)
}

fn build_sphere(node: &Node) -> Result<Sphere<Color>, BuildError> {
    reject_children(node)?;
    let props = Props::check(node, &["count", "radius", "x", "y", "z", "size", "color"])?;
    Ok(Sphere {
        count: props.count("count", 256)?,
        radius: props.number_or("radius", 1.0)?,
        center: props.vec3(["x", "y", "z"], Vec3::zero())?,
        point_size: props.number_or("size", DEFAULT_POINT_SIZE)?,
        color: props.color("color")?.unwrap_or(Color::black()),
    })
}

fn build_point(node: &Node) -> Result<WorldPoint<Color>, BuildError> {
    reject_children(node)?;
    let props = Props::check(node, &["x", "y", "z", "size", "color"])?;
    Ok(WorldPoint::new(
        props.vec3(["x", "y", "z"], Vec3::zero())?,
        props.number_or("size", DEFAULT_POINT_SIZE)?,
        props.color("color")?.unwrap_or(Color::black()),
    ))
}

fn reject_children(node: &Node) -> Result<(), BuildError> {
    match node.children.first() {
        Some(child) => Err(BuildError::UnknownNode {
            name: child.kind.clone(),
            parent: node.display_name(),
            line: child.line,
        }),
        None => Ok(()),
    }
}

// ── Props ─────────────────────────────────────────────────────────────────

/// Typed access to a node's properties, after checking every key is known.
struct Props<'a> {
    node: &'a Node,
}

impl<'a> Props<'a> {
    fn check(node: &'a Node, allowed: &[&str]) -> Result<Self, BuildError> {
        if let Some(prop) = node.props.iter().find(|p| !allowed.contains(&p.key.as_str())) {
            return Err(BuildError::UnknownProp {
                node: node.display_name(),
                key: prop.key.clone(),
                line: prop.line,
            });
        }
        Ok(Self { node })
    }

    fn line(&self, key: &str) -> usize {
        self.node.props.iter().rev().find(|p| p.key == key).map_or(self.node.line, |p| p.line)
    }

    fn invalid(&self, key: &str, reason: impl Into<String>) -> BuildError {
        BuildError::InvalidValue {
            node: self.node.display_name(),
            key: key.to_string(),
            reason: reason.into(),
            line: self.line(key),
        }
    }

    fn wrong_type(&self, key: &str, expected: &'static str, found: &Value) -> BuildError {
        BuildError::WrongType {
            node: self.node.display_name(),
            key: key.to_string(),
            expected,
            found: found.kind(),
            line: self.line(key),
        }
    }

    fn number(&self, key: &str) -> Result<Option<f64>, BuildError> {
        match self.node.prop(key) {
            None => Ok(None),
            Some(Value::Number(v)) => Ok(Some(*v)),
            Some(other) => Err(self.wrong_type(key, "number", other)),
        }
    }

    fn number_or(&self, key: &str, default: f64) -> Result<f64, BuildError> {
        Ok(self.number(key)?.unwrap_or(default))
    }

    /// An angle given either in radians under `rad_key` or in degrees under `deg_key`.
    fn angle(&self, rad_key: &str, deg_key: &str) -> Result<Option<f64>, BuildError> {
        match (self.number(rad_key)?, self.number(deg_key)?) {
            (Some(_), Some(_)) => Err(self.invalid(deg_key, format!("conflicts with `{rad_key}`"))),
            (Some(radians), None) => Ok(Some(radians)),
            (None, Some(degrees)) => Ok(Some(degrees.to_radians())),
            (None, None) => Ok(None),
        }
    }

    fn count(&self, key: &str, default: usize) -> Result<usize, BuildError> {
        match self.number(key)? {
            None => Ok(default),
            Some(v) if v < 0.0 || v.fract() != 0.0 => {
                Err(self.invalid(key, format!("{v} is not a non-negative integer")))
            }
            Some(v) if v > MAX_GENERATOR_POINTS as f64 => {
                Err(self.invalid(key, format!("{v} exceeds the maximum of {MAX_GENERATOR_POINTS}")))
            }
            Some(v) => Ok(v as usize),
        }
    }

    fn vec3(&self, keys: [&str; 3], default: Vec3) -> Result<Vec3, BuildError> {
        Ok(Vec3::new(
            self.number_or(keys[0], default.x)?,
            self.number_or(keys[1], default.y)?,
            self.number_or(keys[2], default.z)?,
        ))
    }

    /// Accepts color literals as well as color names (`black`, `"orange"`).
    fn color(&self, key: &str) -> Result<Option<Color>, BuildError> {
        match self.node.prop(key) {
            None => Ok(None),
            Some(Value::Color([r, g, b, a])) => Ok(Some(Color::from_srgb_u8(*r, *g, *b, *a))),
            Some(Value::Ident(name) | Value::Str(name)) => {
                Color::from_str(name).map(Some).map_err(|e| self.invalid(key, e.to_string()))
            }
            Some(other) => Err(self.wrong_type(key, "color", other)),
        }
    }

    fn choice<T: Copy>(&self, key: &str, options: &[(&str, T)]) -> Result<Option<T>, BuildError> {
        match self.node.prop(key) {
            None => Ok(None),
            Some(Value::Ident(name) | Value::Str(name)) => options
                .iter()
                .find(|(option, _)| *option == name.as_str())
                .map(|&(_, value)| Some(value))
                .ok_or_else(|| {
                    let names: Vec<&str> = options.iter().map(|(option, _)| *option).collect();
                    self.invalid(key, format!("`{name}` is not one of {}", names.join(", ")))
                }),
            Some(other) => Err(self.wrong_type(key, "identifier", other)),
        }
    }
}
