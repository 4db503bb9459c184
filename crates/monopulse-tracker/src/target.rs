//! Target Simulator
//!
//! Constant-velocity point target advanced by explicit Euler integration.

use crate::TargetState;
use nalgebra::Vector3;

/// Simulated target with constant-velocity kinematics.
pub struct TargetSimulator {
    initial: TargetState,
    current: TargetState,
}

impl TargetSimulator {
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        let state = TargetState { position, velocity };
        Self {
            initial: state,
            current: state,
        }
    }

    /// Advance position by `velocity * dt`.
    ///
    /// A negative `dt` is clamped to zero, turning the update into a no-op.
    pub fn update(&mut self, dt: f64) {
        let dt = dt.max(0.0);
        self.current.position += self.current.velocity * dt;
    }

    /// Read-only snapshot of the full state.
    pub fn state(&self) -> TargetState {
        self.current
    }

    /// Replace the velocity unconditionally, e.g. for operator-driven
    /// what-if trajectory changes mid-run.
    pub fn set_velocity(&mut self, velocity: Vector3<f64>) {
        self.current.velocity = velocity;
    }

    /// Restore position and velocity to their construction-time values.
    pub fn reset(&mut self) {
        self.current = self.initial;
    }
}
