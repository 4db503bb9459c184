//! Monopulse Tracker Library
//!
//! Closed-loop monopulse radar tracking: a constant-velocity target, an
//! antenna platform that synthesizes sum/difference channel signals from
//! pointing geometry, a signal processor that demodulates angular tracking
//! error, and a proportional controller that slews the antenna to null it.
//!
//! The [`scheduler::TrackerScheduler`] sequences the four components on a
//! fixed time step with a deliberate one-tick delay between error sensing
//! and command application, mirroring a digital control loop. All state is
//! owned by value; time is an explicit `dt` parameter, never wall-clock
//! derived, so runs are fully deterministic and replayable.

use nalgebra::Vector3;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod antenna;
pub mod controller;
pub mod history;
pub mod pulse;
pub mod scheduler;
pub mod signal;
pub mod target;

// Re-exports
pub use antenna::AntennaPlatform;
pub use controller::TrackerController;
pub use history::TrackHistory;
pub use pulse::{max_unambiguous_range, PulseParameters, SPEED_OF_LIGHT};
pub use scheduler::{SimParams, TrackerScheduler};
pub use signal::SignalProcessor;
pub use target::TargetSimulator;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Beamwidth must be positive, got {0} rad")]
    InvalidBeamwidth(f64),
    #[error("Monopulse slope Km cannot be zero")]
    ZeroMonopulseSlope,
    #[error("Simulation start time {start} s must be before end time {end} s")]
    InvalidTimeSpan { start: f64, end: f64 },
    #[error("Simulation time step must be positive, got {0} s")]
    InvalidTimeStep(f64),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

/// True kinematic state of the tracked target, antenna-centered frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetState {
    /// Position in meters
    pub position: Vector3<f64>,
    /// Velocity in meters/sec
    pub velocity: Vector3<f64>,
}

/// Antenna pointing angles in radians.
///
/// Unbounded by default; see [`antenna::AntennaPlatform::with_pointing_limits`]
/// for the opt-in wrap/clamp behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AntennaAngles {
    pub azimuth: f64,
    pub elevation: f64,
}

/// Angular rate commands for the antenna mount, radians/sec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AntennaCommands {
    pub az_rate: f64,
    pub el_rate: f64,
}

/// Complex monopulse channel amplitudes for one tick.
///
/// All three channels are zero when the target sits at the antenna origin
/// (degenerate geometry). The difference channels are purely real in this
/// model: the feed is assumed to produce in-phase error signals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonopulseSignals {
    pub sum: Complex64,
    pub delta_az: Complex64,
    pub delta_el: Complex64,
}

/// Demodulated angular tracking error, radians.
///
/// Defined as zero whenever the sum channel falls below the weak-signal
/// floor of the [`signal::SignalProcessor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AngularErrors {
    pub az_error: f64,
    pub el_error: f64,
}

/// Read-only per-tick snapshot for presentation layers and track history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackSnapshot {
    pub time: f64,
    pub target: TargetState,
    pub antenna: AntennaAngles,
    pub errors: AngularErrors,
    pub commands: AntennaCommands,
    /// Magnitude of the sum channel at this tick (linear, 1.0 = boresight)
    pub sum_magnitude: f64,
}
