//! Signal Processor
//!
//! Demodulates monopulse sum/difference signals into angular error
//! estimates via the normalized ratio Re{delta / sum} / Km.

use crate::{AngularErrors, MonopulseSignals, Result, TrackerError};

/// Below this sum-channel magnitude the estimate degrades gracefully to
/// zero error instead of dividing by a near-zero complex value.
const SUM_MAGNITUDE_FLOOR: f64 = 1e-9;

/// Monopulse error demodulator.
///
/// Takes the real part of the complex delta/sum ratios. This assumes an
/// in-phase feed; quadrature content is discarded.
pub struct SignalProcessor {
    km: f64,
    last: AngularErrors,
}

impl SignalProcessor {
    /// Rejects a zero monopulse slope.
    pub fn new(monopulse_slope_km: f64) -> Result<Self> {
        if monopulse_slope_km == 0.0 {
            return Err(TrackerError::ZeroMonopulseSlope);
        }
        Ok(Self {
            km: monopulse_slope_km,
            last: AngularErrors::default(),
        })
    }

    /// Estimate angular errors from one tick's signals.
    ///
    /// Weak sum channel (|sum| below the floor) yields zero error, an
    /// expected condition for a target far outside the beam, not a failure.
    pub fn estimate_errors(&mut self, signals: &MonopulseSignals) -> AngularErrors {
        if signals.sum.norm() < SUM_MAGNITUDE_FLOOR {
            self.last = AngularErrors::default();
        } else {
            let ratio_az = signals.delta_az / signals.sum;
            let ratio_el = signals.delta_el / signals.sum;
            self.last = AngularErrors {
                az_error: ratio_az.re / self.km,
                el_error: ratio_el.re / self.km,
            };
        }
        self.last
    }

    /// Most recently computed estimate (zero before the first call).
    ///
    /// This is the value the controller consumes at the start of the next
    /// tick, one cycle behind signal generation.
    pub fn last_errors(&self) -> AngularErrors {
        self.last
    }

    /// Replace the monopulse slope; rejects zero like the constructor.
    pub fn set_slope(&mut self, monopulse_slope_km: f64) -> Result<()> {
        if monopulse_slope_km == 0.0 {
            return Err(TrackerError::ZeroMonopulseSlope);
        }
        self.km = monopulse_slope_km;
        Ok(())
    }

    pub fn slope(&self) -> f64 {
        self.km
    }

    /// Clear the stored estimate back to zero.
    pub fn reset(&mut self) {
        self.last = AngularErrors::default();
    }
}
