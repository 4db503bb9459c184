// Monopulse Tracker Simulation
// Runs the closed tracking loop against a constant-velocity target and
// reports acquisition and convergence over the configured time span.

use anyhow::Result;
use monopulse_tracker::{
    max_unambiguous_range, AntennaAngles, AntennaPlatform, PulseParameters, SignalProcessor,
    SimParams, TargetSimulator, TrackerController, TrackerScheduler,
};
use nalgebra::Vector3;
use tracing::info;

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "tracker_sim=info".to_string()),
        )
        .init();

    // Scenario configuration from environment, with a default engagement:
    // inbound crossing target ~10 km out, antenna parked near the bearing
    let target_position = Vector3::new(
        env_f64("TRK_TARGET_X", 10_000.0),
        env_f64("TRK_TARGET_Y", 1_000.0),
        env_f64("TRK_TARGET_Z", 500.0),
    );
    let target_velocity = Vector3::new(
        env_f64("TRK_TARGET_VX", -50.0),
        env_f64("TRK_TARGET_VY", 0.0),
        env_f64("TRK_TARGET_VZ", 10.0),
    );
    let initial_angles = AntennaAngles {
        azimuth: env_f64("TRK_AZIMUTH", 0.08),
        elevation: env_f64("TRK_ELEVATION", 0.03),
    };
    let beamwidth = env_f64("TRK_BEAMWIDTH", 0.035);
    let monopulse_slope = env_f64("TRK_KM", 2.0);
    let gain = env_f64("TRK_KP", 0.5);

    let params = SimParams {
        start_time: 0.0,
        end_time: env_f64("TRK_END_TIME", 10.0),
        dt: env_f64("TRK_DT", 0.01),
        ticks_per_frame: 10,
    };

    let pulse = PulseParameters::default();
    info!(
        "pulse: {:.1} GHz, PRF {:.0} Hz, max unambiguous range {:.0} km",
        pulse.frequency_hz / 1e9,
        pulse.repetition_frequency_hz,
        max_unambiguous_range(&pulse) / 1000.0
    );
    info!(
        "target at {:.0} m, beamwidth {:.1} mrad, Km={:.2}, Kp={:.2}, dt={:.3}s",
        target_position.norm(),
        beamwidth * 1e3,
        monopulse_slope,
        gain,
        params.dt
    );

    let mut scheduler = TrackerScheduler::new(
        params,
        TargetSimulator::new(target_position, target_velocity),
        AntennaPlatform::new(initial_angles, beamwidth)?,
        SignalProcessor::new(monopulse_slope)?,
        TrackerController::new(gain),
    )?;

    scheduler.start();
    let mut frame = 0u64;
    while scheduler.time() < params.end_time {
        scheduler.advance_frame();
        frame += 1;

        if frame % 10 == 0 {
            let snap = scheduler.snapshot();
            info!(
                "t={:5.2}s az={:+.4} el={:+.4} az_err={:+.5} el_err={:+.5} |sum|={:.3}",
                snap.time,
                snap.antenna.azimuth,
                snap.antenna.elevation,
                snap.errors.az_error,
                snap.errors.el_error,
                snap.sum_magnitude
            );
        }
    }
    scheduler.stop();

    let snapshot = scheduler.snapshot();
    let residual = snapshot.errors.az_error.hypot(snapshot.errors.el_error);
    info!(
        "finished after {} ticks: residual error {:.2} mrad, |sum| {:.3}",
        scheduler.history().len(),
        residual * 1e3,
        snapshot.sum_magnitude
    );

    // Final state for downstream tooling
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
