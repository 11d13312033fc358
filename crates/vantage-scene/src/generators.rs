//! Point generators: producers of world-point lists for the engine.
//!
//! Generators are plain data; [`PointSource::emit`] appends their points to a
//! caller-owned buffer so several sources can share one batch.

use std::f64::consts::{FRAC_PI_2, TAU};

use vantage_engine::coords::Vec3;
use vantage_engine::projection::WorldPoint;

/// Anything that can append world points to a batch.
pub trait PointSource<C> {
    fn emit(&self, out: &mut Vec<WorldPoint<C>>);

    fn points(&self) -> Vec<WorldPoint<C>> {
        let mut out = Vec::new();
        self.emit(&mut out);
        out
    }
}

impl<C: Clone> PointSource<C> for WorldPoint<C> {
    fn emit(&self, out: &mut Vec<WorldPoint<C>>) {
        out.push(self.clone());
    }
}

// ── Angle functions ───────────────────────────────────────────────────────

pub type AngleFn = fn(f64) -> f64;

/// Cosine/sine pairs used by [`spherical_to_cartesian`], one pair per plane.
///
/// Swapping in non-circular pairs deforms the sampled loop (see [`AngleFunctionSet::square_slice`]).
#[derive(Debug, Copy, Clone)]
pub struct AngleFunctionSet {
    pub depth_cos: AngleFn,
    pub depth_sin: AngleFn,
    pub slice_cos: AngleFn,
    pub slice_sin: AngleFn,
}

impl AngleFunctionSet {
    /// Standard trigonometry in both planes.
    pub fn circular() -> Self {
        Self { depth_cos: f64::cos, depth_sin: f64::sin, slice_cos: f64::cos, slice_sin: f64::sin }
    }

    /// Circular depth plane, slice plane traced along the unit square's boundary.
    pub fn square_slice() -> Self {
        Self { slice_cos: square_cos, slice_sin: square_sin, ..Self::circular() }
    }
}

impl Default for AngleFunctionSet {
    fn default() -> Self {
        Self::circular()
    }
}

/// Wraps `angle` into `[0, 2π)`.
#[inline]
pub fn normalized_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

fn square_cos(angle: f64) -> f64 {
    let a = normalized_angle(angle);
    a.cos() / a.cos().abs().max(a.sin().abs())
}

fn square_sin(angle: f64) -> f64 {
    let a = normalized_angle(angle);
    a.sin() / a.cos().abs().max(a.sin().abs())
}

/// `(r·sinD(d)·cosS(s), r·sinD(d)·sinS(s), r·cosD(d))`.
pub fn spherical_to_cartesian(
    angles: &AngleFunctionSet,
    radius: f64,
    depth_angle: f64,
    slice_angle: f64,
) -> Vec3 {
    let depth_sin = (angles.depth_sin)(depth_angle);
    Vec3::new(
        radius * depth_sin * (angles.slice_cos)(slice_angle),
        radius * depth_sin * (angles.slice_sin)(slice_angle),
        radius * (angles.depth_cos)(depth_angle),
    )
}

// ── Orbital ───────────────────────────────────────────────────────────────

/// Depth-plane angle as a function of the loop stamp `t ∈ [0, 1)`:
/// `base + amplitude · sin(frequency · 2π · t)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DepthWave {
    pub base: f64,
    pub amplitude: f64,
    pub frequency: f64,
}

impl DepthWave {
    /// Constant `π/2`: the loop stays on the equator.
    pub const FLAT: DepthWave = DepthWave { base: FRAC_PI_2, amplitude: 0.0, frequency: 1.0 };

    #[inline]
    pub fn at(self, t: f64) -> f64 {
        self.base + self.amplitude * (self.frequency * TAU * t).sin()
    }
}

impl Default for DepthWave {
    fn default() -> Self {
        Self::FLAT
    }
}

/// A closed loop of evenly stamped points around the origin, then rotated
/// about `axis` by `rotation` and moved by `translation`.
#[derive(Debug, Clone)]
pub struct Orbital<C> {
    pub resolution: usize,
    pub radius: f64,
    pub point_size: f64,
    pub color: C,
    pub axis: Vec3,
    pub rotation: f64,
    pub translation: Vec3,
    pub depth_wave: DepthWave,
    /// Full slice-plane revolutions over one loop.
    pub slice_turns: f64,
    pub angles: AngleFunctionSet,
}

impl<C> Orbital<C> {
    /// Flat circular loop in the XY plane, centered on the origin.
    pub fn new(resolution: usize, radius: f64, point_size: f64, color: C) -> Self {
        Self {
            resolution,
            radius,
            point_size,
            color,
            axis: Vec3::unit_x(),
            rotation: 0.0,
            translation: Vec3::zero(),
            depth_wave: DepthWave::FLAT,
            slice_turns: 1.0,
            angles: AngleFunctionSet::circular(),
        }
    }

    pub fn rotated(mut self, axis: Vec3, rotation: f64) -> Self {
        self.axis = axis;
        self.rotation = rotation;
        self
    }

    pub fn translated(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_depth_wave(mut self, depth_wave: DepthWave) -> Self {
        self.depth_wave = depth_wave;
        self
    }

    pub fn with_angles(mut self, angles: AngleFunctionSet) -> Self {
        self.angles = angles;
        self
    }
}

impl<C: Clone> PointSource<C> for Orbital<C> {
    fn emit(&self, out: &mut Vec<WorldPoint<C>>) {
        out.reserve(self.resolution);
        let axis = self.axis.normalized();
        for i in 0..self.resolution {
            let t = i as f64 / self.resolution as f64;
            let base = spherical_to_cartesian(
                &self.angles,
                self.radius,
                self.depth_wave.at(t),
                self.slice_turns * TAU * t,
            );
            let position = base.rotated_about(axis, self.rotation) + self.translation;
            out.push(WorldPoint::new(position, self.point_size, self.color.clone()));
        }
    }
}

// ── Sphere ────────────────────────────────────────────────────────────────

/// `count` points spread evenly over a sphere surface (Fibonacci lattice).
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere<C> {
    pub count: usize,
    pub radius: f64,
    pub center: Vec3,
    pub point_size: f64,
    pub color: C,
}

impl<C: Clone> PointSource<C> for Sphere<C> {
    fn emit(&self, out: &mut Vec<WorldPoint<C>>) {
        let golden_angle = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());
        out.reserve(self.count);
        for i in 0..self.count {
            let y = 1.0 - 2.0 * (i as f64 + 0.5) / self.count as f64;
            let ring = (1.0 - y * y).max(0.0).sqrt();
            let (sin, cos) = (golden_angle * i as f64).sin_cos();
            let unit = Vec3::new(cos * ring, y, sin * ring);
            out.push(WorldPoint::new(self.center + unit * self.radius, self.point_size, self.color.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalized_angle_wraps_both_directions() {
        assert_abs_diff_eq!(normalized_angle(-FRAC_PI_2), 1.5 * std::f64::consts::PI, epsilon = 1e-12);
        assert_abs_diff_eq!(normalized_angle(5.0 * TAU + 1.0), 1.0, epsilon = 1e-9);
        assert_eq!(normalized_angle(0.0), 0.0);
    }

    #[test]
    fn spherical_equator_lies_in_xy_plane() {
        let p = spherical_to_cartesian(&AngleFunctionSet::circular(), 2.0, FRAC_PI_2, 0.0);
        assert_abs_diff_eq!(p.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn flat_orbital_is_a_circle() {
        let points = Orbital::new(64, 11.0, 0.3, "black").points();
        assert_eq!(points.len(), 64);
        for p in &points {
            assert_abs_diff_eq!(p.position.z, 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(p.position.length(), 11.0, epsilon = 1e-9);
            assert_eq!(p.size, 0.3);
            assert_eq!(p.color, "black");
        }
    }

    #[test]
    fn zero_resolution_emits_nothing() {
        assert!(Orbital::new(0, 1.0, 0.1, ()).points().is_empty());
    }

    #[test]
    fn rotation_then_translation() {
        let points = Orbital::new(16, 1.0, 0.1, ())
            .rotated(Vec3::new(2.0, 0.0, 0.0), FRAC_PI_2)
            .translated(Vec3::new(0.0, 9.0, -3.0))
            .points();
        for p in &points {
            // Quarter turn about X moves the ring into the XZ plane, then y += 9.
            assert_abs_diff_eq!(p.position.y, 9.0, epsilon = 1e-9);
            let local = p.position - Vec3::new(0.0, 9.0, -3.0);
            assert_abs_diff_eq!(local.length(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn depth_wave_tilts_points_off_the_equator() {
        let wave = DepthWave { base: FRAC_PI_2, amplitude: std::f64::consts::PI / 24.0, frequency: 3.0 };
        let points = Orbital::new(48, 10.0, 0.5, ()).with_depth_wave(wave).points();
        assert!(points.iter().any(|p| p.position.z.abs() > 0.5));
        for p in &points {
            assert_abs_diff_eq!(p.position.length(), 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn square_slice_traces_square_boundary() {
        let points = Orbital::new(40, 3.0, 0.1, ()).with_angles(AngleFunctionSet::square_slice()).points();
        for p in &points {
            let edge = p.position.x.abs().max(p.position.y.abs());
            assert_abs_diff_eq!(edge, 3.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn sphere_points_sit_on_the_surface() {
        let sphere = Sphere { count: 200, radius: 4.0, center: Vec3::new(1.0, 2.0, 3.0), point_size: 0.1, color: () };
        let points = sphere.points();
        assert_eq!(points.len(), 200);
        for p in &points {
            assert_abs_diff_eq!((p.position - sphere.center).length(), 4.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn single_point_is_its_own_source() {
        let p = WorldPoint::new(Vec3::new(1.0, 2.0, 3.0), 0.5, 7u8);
        assert_eq!(p.points(), [p.clone()]);
    }
}
