//! Antenna Platform
//!
//! Integrates commanded slew rates into pointing angles and synthesizes
//! monopulse sum/difference signals from the true target geometry.

use crate::{AntennaAngles, AntennaCommands, MonopulseSignals, TargetState};
use crate::{Result, TrackerError};
use antenna_geometry::{
    angular_separation, boresight_vector, clamp_elevation, wrap_azimuth, OffsetFrame,
};
use num_complex::Complex64;

/// Below this range in meters the target is treated as co-located with the
/// antenna and all channels read zero.
const RANGE_FLOOR_M: f64 = 1e-6;

/// Steerable antenna with a Gaussian main-lobe gain model.
///
/// The beamwidth (FWHM, radians) drives both the sum-channel gain falloff
/// and the difference-channel sensitivity.
pub struct AntennaPlatform {
    initial: AntennaAngles,
    current: AntennaAngles,
    beamwidth: f64,
    pointing_limits: bool,
}

impl AntennaPlatform {
    /// Rejects a non-positive (or NaN) beamwidth.
    pub fn new(initial_angles: AntennaAngles, beamwidth_rad: f64) -> Result<Self> {
        if !(beamwidth_rad > 0.0) {
            return Err(TrackerError::InvalidBeamwidth(beamwidth_rad));
        }
        Ok(Self {
            initial: initial_angles,
            current: initial_angles,
            beamwidth: beamwidth_rad,
            pointing_limits: false,
        })
    }

    /// Opt in to azimuth wrapping into [-pi, pi) and elevation clamping into
    /// [-pi/2, pi/2] after each pointing update. Off by default: the
    /// baseline integrator leaves angles unbounded.
    pub fn with_pointing_limits(mut self) -> Self {
        self.pointing_limits = true;
        self
    }

    /// Integrate commanded angular rates over `dt`.
    pub fn update_pointing(&mut self, commands: &AntennaCommands, dt: f64) {
        self.current.azimuth += commands.az_rate * dt;
        self.current.elevation += commands.el_rate * dt;
        if self.pointing_limits {
            self.current.azimuth = wrap_azimuth(self.current.azimuth);
            self.current.elevation = clamp_elevation(self.current.elevation);
        }
    }

    pub fn current_angles(&self) -> AntennaAngles {
        self.current
    }

    pub fn initial_angles(&self) -> AntennaAngles {
        self.initial
    }

    pub fn beamwidth(&self) -> f64 {
        self.beamwidth
    }

    /// Restore pointing to the construction-time angles.
    pub fn reset(&mut self) {
        self.current = self.initial;
    }

    /// Synthesize monopulse channel signals for the current pointing and the
    /// true target position. Pure: no internal state is mutated.
    ///
    /// The relative az/el errors come from projecting the difference between
    /// the target direction and the boresight onto the offset frame, a
    /// small-angle linear approximation valid well inside one radian of
    /// separation. Difference channels are purely real (in-phase feed).
    pub fn generate_signals(&self, target: &TargetState) -> MonopulseSignals {
        let boresight = boresight_vector(self.current.azimuth, self.current.elevation);

        let range = target.position.norm();
        if range < RANGE_FLOOR_M {
            return MonopulseSignals::default();
        }
        let direction = target.position / range;

        let theta = angular_separation(&boresight, &direction);

        // Gaussian main lobe: sigma from the FWHM beamwidth
        let sigma = self.beamwidth / (2.0 * (2.0 * 2.0_f64.ln()).sqrt());
        let gain = (-0.5 * (theta / sigma).powi(2)).exp();
        let sum = Complex64::new(gain, 0.0);

        let frame = OffsetFrame::at_boresight(&boresight);
        let (rel_az, rel_el) = frame.project(&(direction - boresight));

        // Error-signal strength scales inversely with beamwidth
        let sensitivity = 2.0 / self.beamwidth;

        MonopulseSignals {
            sum,
            delta_az: sum * (sensitivity * rel_az),
            delta_el: sum * (sensitivity * rel_el),
        }
    }
}
