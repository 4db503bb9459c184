//! Antenna Pointing Geometry
//!
//! Boresight vectors, offset-frame construction, and angle helpers shared
//! by the monopulse tracking chain. All vectors are in the antenna-centered
//! world frame: x forward, y toward increasing azimuth, z up.

use nalgebra::Vector3;
use std::f64::consts::{FRAC_PI_2, PI};

/// When |boresight . world_up| reaches this limit the boresight is close
/// enough to a pole that the cross product with world-up degenerates and the
/// frame falls back to the world-forward reference.
const POLE_ALIGNMENT_LIMIT: f64 = 0.999;

/// Unit vector along the antenna boresight for the given pointing angles.
///
/// Standard spherical-to-Cartesian conversion: azimuth rotates from +x
/// toward +y, elevation lifts toward +z. Both angles in radians.
pub fn boresight_vector(azimuth: f64, elevation: f64) -> Vector3<f64> {
    let cos_el = elevation.cos();
    Vector3::new(
        cos_el * azimuth.cos(),
        cos_el * azimuth.sin(),
        elevation.sin(),
    )
}

/// Angle in radians between two unit vectors.
///
/// The dot product is clamped to [-1, 1] before `acos` so floating-point
/// overshoot on near-parallel vectors cannot produce NaN.
pub fn angular_separation(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.dot(b).clamp(-1.0, 1.0).acos()
}

/// Orthonormal basis spanning the plane perpendicular to a boresight.
///
/// `right` points along increasing azimuth and `up` along increasing
/// elevation, so projections of a direction offset onto the frame read
/// directly as azimuth-like and elevation-like error components.
#[derive(Debug, Clone, Copy)]
pub struct OffsetFrame {
    pub right: Vector3<f64>,
    pub up: Vector3<f64>,
}

impl OffsetFrame {
    /// Build the frame for a unit boresight vector.
    ///
    /// Uses world-up (0,0,1) as the reference; near the poles it switches to
    /// world-forward (1,0,0) to keep the cross product well conditioned. The
    /// orientation is consistent everywhere except across that threshold.
    pub fn at_boresight(boresight: &Vector3<f64>) -> Self {
        let world_up = Vector3::new(0.0, 0.0, 1.0);
        let reference = if boresight.dot(&world_up).abs() < POLE_ALIGNMENT_LIMIT {
            world_up
        } else {
            Vector3::new(1.0, 0.0, 0.0)
        };
        let right = reference.cross(boresight).normalize();
        let up = boresight.cross(&right).normalize();
        Self { right, up }
    }

    /// Resolve an offset vector into (right, up) components.
    pub fn project(&self, offset: &Vector3<f64>) -> (f64, f64) {
        (offset.dot(&self.right), offset.dot(&self.up))
    }
}

/// Wrap an azimuth angle into [-pi, pi).
pub fn wrap_azimuth(azimuth: f64) -> f64 {
    (azimuth + PI).rem_euclid(2.0 * PI) - PI
}

/// Clamp an elevation angle into [-pi/2, pi/2].
pub fn clamp_elevation(elevation: f64) -> f64 {
    elevation.clamp(-FRAC_PI_2, FRAC_PI_2)
}
