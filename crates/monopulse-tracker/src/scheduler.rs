//! Simulation Scheduler
//!
//! Fixed-timestep driver for the closed tracking loop. The scheduler owns
//! all four components by value and is the only code that moves data
//! between them; no component calls another directly.
//!
//! Each tick runs, in strict order:
//!
//! 1. advance target kinematics
//! 2. compute rate commands from the error estimated on the *previous* tick
//! 3. integrate antenna pointing with those commands
//! 4. synthesize monopulse signals from the new pointing and target position
//! 5. estimate angular error from those signals, for the *next* tick
//!
//! Steps 2 and 5 put exactly one tick of latency between error sensing and
//! command application, as in a real digital control loop. Reordering them
//! changes closed-loop stability; the ordering is load-bearing.

use crate::{
    AngularErrors, AntennaAngles, AntennaCommands, AntennaPlatform, Result, SignalProcessor,
    TargetSimulator, TargetState, TrackHistory, TrackSnapshot, TrackerController, TrackerError,
};
use tracing::{debug, trace};

const DEFAULT_HISTORY_CAPACITY: usize = 4096;

/// Fixed-step simulation parameters, seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    pub start_time: f64,
    pub end_time: f64,
    pub dt: f64,
    /// Ticks performed per presentation frame by [`TrackerScheduler::advance_frame`]
    pub ticks_per_frame: u32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            start_time: 0.0,
            end_time: 10.0,
            dt: 1.0 / 60.0,
            ticks_per_frame: 1,
        }
    }
}

impl SimParams {
    fn validate(&self) -> Result<()> {
        if self.start_time >= self.end_time {
            return Err(TrackerError::InvalidTimeSpan {
                start: self.start_time,
                end: self.end_time,
            });
        }
        if !(self.dt > 0.0) {
            return Err(TrackerError::InvalidTimeStep(self.dt));
        }
        Ok(())
    }
}

/// Closed-loop tracker driver.
///
/// Supports continuous running (`start` + `update` once per host-loop
/// iteration), single-stepping while stopped (`step`), and a full reset to
/// construction-time state. Stopping takes effect at the next tick
/// boundary; a tick is never interrupted midway.
pub struct TrackerScheduler {
    params: SimParams,
    initial_params: SimParams,
    running: bool,
    time: f64,
    target: TargetSimulator,
    antenna: AntennaPlatform,
    processor: SignalProcessor,
    controller: TrackerController,
    history: TrackHistory,
    last_sum_magnitude: f64,
}

impl TrackerScheduler {
    /// Validates the simulation parameters and takes ownership of the
    /// component chain.
    pub fn new(
        params: SimParams,
        target: TargetSimulator,
        antenna: AntennaPlatform,
        processor: SignalProcessor,
        controller: TrackerController,
    ) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            initial_params: params,
            running: false,
            time: params.start_time,
            target,
            antenna,
            processor,
            controller,
            history: TrackHistory::new(DEFAULT_HISTORY_CAPACITY),
            last_sum_magnitude: 0.0,
        })
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history = TrackHistory::new(capacity);
        self
    }

    pub fn start(&mut self) {
        self.running = true;
        debug!("tracker loop started at t={:.4}s", self.time);
    }

    pub fn stop(&mut self) {
        self.running = false;
        debug!("tracker loop stopped at t={:.4}s", self.time);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one tick, only while running.
    pub fn update(&mut self) {
        if !self.running {
            return;
        }
        self.tick();
    }

    /// Advance one tick, only while stopped (manual single-step).
    pub fn step(&mut self) {
        if self.running {
            return;
        }
        self.tick();
    }

    /// Perform `ticks_per_frame` updates; lets a presentation loop run the
    /// simulation faster than its own frame rate.
    pub fn advance_frame(&mut self) {
        for _ in 0..self.params.ticks_per_frame {
            self.update();
        }
    }

    /// Restore time, parameters, components, and history to their
    /// construction-time values. Clears the running flag.
    pub fn reset(&mut self) {
        self.running = false;
        self.params = self.initial_params;
        self.time = self.params.start_time;
        self.target.reset();
        self.antenna.reset();
        self.processor.reset();
        self.controller.reset();
        self.history.clear();
        self.last_sum_magnitude = 0.0;
        debug!("tracker loop reset to t={:.4}s", self.time);
    }

    fn tick(&mut self) {
        let dt = self.params.dt;

        self.target.update(dt);

        // Previous tick's estimate: zero on the very first tick
        let previous_errors = self.processor.last_errors();
        let commands = self.controller.compute_commands(&previous_errors);

        self.antenna.update_pointing(&commands, dt);

        let signals = self.antenna.generate_signals(&self.target.state());
        let errors = self.processor.estimate_errors(&signals);

        self.last_sum_magnitude = signals.sum.norm();
        self.time += dt;

        let snapshot = self.snapshot();
        self.history.push(snapshot);

        trace!(
            "t={:.4}s az_err={:+.6} el_err={:+.6} |sum|={:.3e}",
            self.time,
            errors.az_error,
            errors.el_error,
            self.last_sum_magnitude
        );
    }

    /// Replace the time step for subsequent ticks; reset restores the
    /// construction-time value.
    pub fn set_time_step(&mut self, dt: f64) -> Result<()> {
        if !(dt > 0.0) {
            return Err(TrackerError::InvalidTimeStep(dt));
        }
        self.params.dt = dt;
        Ok(())
    }

    pub fn set_ticks_per_frame(&mut self, ticks: u32) {
        self.params.ticks_per_frame = ticks;
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn params(&self) -> SimParams {
        self.params
    }

    pub fn target_state(&self) -> TargetState {
        self.target.state()
    }

    pub fn antenna_angles(&self) -> AntennaAngles {
        self.antenna.current_angles()
    }

    pub fn last_errors(&self) -> AngularErrors {
        self.processor.last_errors()
    }

    pub fn last_commands(&self) -> AntennaCommands {
        self.controller.last_commands()
    }

    pub fn history(&self) -> &TrackHistory {
        &self.history
    }

    /// Combined read-only snapshot of the loop state.
    pub fn snapshot(&self) -> TrackSnapshot {
        TrackSnapshot {
            time: self.time,
            target: self.target.state(),
            antenna: self.antenna.current_angles(),
            errors: self.processor.last_errors(),
            commands: self.controller.last_commands(),
            sum_magnitude: self.last_sum_magnitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn build(params: SimParams) -> Result<TrackerScheduler> {
        TrackerScheduler::new(
            params,
            TargetSimulator::new(Vector3::new(5000.0, 0.0, 0.0), Vector3::zeros()),
            AntennaPlatform::new(AntennaAngles::default(), 0.1)?,
            SignalProcessor::new(2.0)?,
            TrackerController::new(0.5),
        )
    }

    #[test]
    fn test_rejects_inverted_time_span() {
        let params = SimParams {
            start_time: 10.0,
            end_time: 10.0,
            ..SimParams::default()
        };
        assert!(matches!(
            build(params),
            Err(TrackerError::InvalidTimeSpan { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_time_step() {
        let params = SimParams {
            dt: 0.0,
            ..SimParams::default()
        };
        assert!(matches!(
            build(params),
            Err(TrackerError::InvalidTimeStep(_))
        ));

        let params = SimParams {
            dt: -0.01,
            ..SimParams::default()
        };
        assert!(build(params).is_err());
    }

    #[test]
    fn test_update_is_inert_while_stopped() {
        let mut sched = build(SimParams::default()).unwrap();
        sched.update();
        sched.update();
        assert_eq!(sched.time(), 0.0);
        assert!(sched.history().is_empty());
    }

    #[test]
    fn test_step_is_inert_while_running() {
        let mut sched = build(SimParams::default()).unwrap();
        sched.start();
        let t0 = sched.time();
        sched.step();
        assert_eq!(sched.time(), t0);
    }

    #[test]
    fn test_step_advances_while_stopped() {
        let mut sched = build(SimParams::default()).unwrap();
        sched.step();
        assert!(sched.time() > 0.0);
        assert_eq!(sched.history().len(), 1);
    }

    #[test]
    fn test_advance_frame_runs_configured_tick_count() {
        let params = SimParams {
            ticks_per_frame: 4,
            ..SimParams::default()
        };
        let mut sched = build(params).unwrap();
        sched.start();
        sched.advance_frame();
        assert_eq!(sched.history().len(), 4);
    }

    #[test]
    fn test_set_time_step_rejects_non_positive() {
        let mut sched = build(SimParams::default()).unwrap();
        assert!(sched.set_time_step(0.0).is_err());
        assert!(sched.set_time_step(-1.0).is_err());
        sched.set_time_step(0.5).unwrap();
        assert_eq!(sched.params().dt, 0.5);
    }

    #[test]
    fn test_reset_restores_construction_state() {
        let mut sched = build(SimParams::default()).unwrap();
        sched.start();
        for _ in 0..20 {
            sched.update();
        }
        sched.set_time_step(0.5).unwrap();
        sched.reset();

        assert!(!sched.is_running());
        assert_eq!(sched.time(), 0.0);
        assert_eq!(sched.params(), SimParams::default());
        assert_eq!(sched.target_state().position, Vector3::new(5000.0, 0.0, 0.0));
        assert_eq!(sched.antenna_angles(), AntennaAngles::default());
        assert_eq!(sched.last_errors(), AngularErrors::default());
        assert_eq!(sched.last_commands(), AntennaCommands::default());
        assert!(sched.history().is_empty());
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut sched = build(SimParams::default()).unwrap();
        sched.step();
        sched.step();
        assert_eq!(sched.snapshot(), sched.snapshot());
        assert_eq!(sched.target_state(), sched.target_state());
        assert_eq!(sched.antenna_angles(), sched.antenna_angles());
    }
}
