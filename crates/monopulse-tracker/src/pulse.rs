//! Pulse Timing
//!
//! Transmit pulse parameters and range-ambiguity bookkeeping for the
//! simulated radar.

use serde::{Deserialize, Serialize};

/// Speed of light in meters per second.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Transmit pulse description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseParameters {
    /// Peak amplitude, volts
    pub amplitude_v: f64,
    /// Carrier frequency, Hz
    pub frequency_hz: f64,
    /// Pulse width, seconds
    pub width_s: f64,
    /// Pulse repetition frequency, Hz
    pub repetition_frequency_hz: f64,
}

impl Default for PulseParameters {
    fn default() -> Self {
        Self {
            amplitude_v: 1.0,
            frequency_hz: 2.8e9,
            width_s: 1e-6,
            repetition_frequency_hz: 1000.0,
        }
    }
}

/// Maximum unambiguous range in meters.
///
/// An echo must return inside the dead time between pulses to be
/// attributed to the pulse that produced it.
pub fn max_unambiguous_range(pulse: &PulseParameters) -> f64 {
    let dead_time = 1.0 / pulse.repetition_frequency_hz - pulse.width_s;
    SPEED_OF_LIGHT * dead_time / 2.0
}
