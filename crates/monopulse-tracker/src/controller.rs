//! Tracker Controller
//!
//! Maps angular error estimates to antenna slew-rate commands with a pure
//! proportional law. Rate limiting is an opt-in extension.

use crate::{AngularErrors, AntennaCommands};

/// Proportional tracking controller.
///
/// The gain carries no sign or magnitude validation: a negative or
/// excessive gain is a caller error, not a construction failure.
pub struct TrackerController {
    kp: f64,
    max_rate: Option<f64>,
    last: AntennaCommands,
}

impl TrackerController {
    pub fn new(proportional_gain: f64) -> Self {
        Self {
            kp: proportional_gain,
            max_rate: None,
            last: AntennaCommands::default(),
        }
    }

    /// Opt in to symmetric clamping of both rate commands to
    /// [-max_rate, max_rate]. Off by default.
    pub fn with_rate_limit(mut self, max_rate_rad_s: f64) -> Self {
        self.max_rate = Some(max_rate_rad_s);
        self
    }

    /// Compute rate commands: `rate = Kp * error` per axis.
    pub fn compute_commands(&mut self, errors: &AngularErrors) -> AntennaCommands {
        let mut az_rate = self.kp * errors.az_error;
        let mut el_rate = self.kp * errors.el_error;
        if let Some(max_rate) = self.max_rate {
            az_rate = az_rate.clamp(-max_rate, max_rate);
            el_rate = el_rate.clamp(-max_rate, max_rate);
        }
        self.last = AntennaCommands { az_rate, el_rate };
        self.last
    }

    /// Most recently computed commands, for inspection.
    pub fn last_commands(&self) -> AntennaCommands {
        self.last
    }

    pub fn set_gain(&mut self, proportional_gain: f64) {
        self.kp = proportional_gain;
    }

    pub fn gain(&self) -> f64 {
        self.kp
    }

    /// Clear the stored commands back to zero.
    pub fn reset(&mut self) {
        self.last = AntennaCommands::default();
    }
}
