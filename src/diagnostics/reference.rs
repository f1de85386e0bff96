//! Closed-form values for the symmetric four-bug problem.
//!
//! With the square symmetric, every agent sits at its predecessor rotated by
//! +90°, so the leader obeys `dp/dt = (i - 1) p`. The continuous solution is
//! `p(t) = p0 · e^{(i-1)t}` and the Euler map is `p ← p · (1 + (i-1)dt)`:
//! every step rotates by the same angle and shrinks by the same factor.

use num_complex::Complex64;
use serde::Serialize;

use crate::error::Result;
use crate::sim::{SimulationParams, Swarm};

/// Distance each bug travels in continuous time: the side of the unit square.
pub const CONTINUOUS_PATH_LENGTH: f64 = 1.0;

/// Exact leader position of the continuous system at `time`.
pub fn continuous_position(initial: Complex64, time: f64) -> Complex64 {
    initial * (Complex64::new(-1.0, 1.0) * time).exp()
}

/// Rotation of the leader about the origin in one Euler step.
pub fn euler_step_rotation(dt: f64) -> f64 {
    dt.atan2(1.0 - dt)
}

/// Radius ratio between consecutive Euler steps, `|1 + (i-1)dt|`.
pub fn euler_step_contraction(dt: f64) -> f64 {
    Complex64::new(1.0 - dt, dt).norm()
}

/// Winding angle the Euler run should report over `steps` logged points.
pub fn predicted_winding(steps: usize, dt: f64) -> f64 {
    steps.saturating_sub(1) as f64 * euler_step_rotation(dt)
}

/// Arc length the Euler run should report, starting at radius `initial_radius`.
pub fn predicted_arc_length(initial_radius: f64, steps: usize, dt: f64) -> f64 {
    if steps < 2 {
        return 0.0;
    }
    let q = euler_step_contraction(dt);
    let segments = (steps - 1) as f64;
    // First segment starts at the first logged point, one contraction in
    let geometric = if (1.0 - q).abs() < f64::EPSILON {
        segments
    } else {
        q * (1.0 - q.powf(segments)) / (1.0 - q)
    };
    std::f64::consts::SQRT_2 * dt.abs() * initial_radius * geometric
}

/// Reference values for one set of parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceValues {
    /// Winding angle predicted for the Euler map
    pub predicted_winding: f64,
    /// Arc length predicted for the Euler map
    pub predicted_arc_length: f64,
    /// Path length of the continuous system run to infinity
    pub continuous_path_length: f64,
    /// Leader radius of the continuous system at the end of the run
    pub continuous_final_radius: f64,
}

impl ReferenceValues {
    /// Reference values for the unit-square start
    pub fn for_params(params: &SimulationParams) -> Result<Self> {
        let steps = params.step_count()?;
        let initial = Swarm::unit_square().leader();
        let elapsed = steps as f64 * params.dt;
        Ok(Self {
            predicted_winding: predicted_winding(steps, params.dt),
            predicted_arc_length: predicted_arc_length(initial.norm(), steps, params.dt),
            continuous_path_length: CONTINUOUS_PATH_LENGTH,
            continuous_final_radius: continuous_position(initial, elapsed).norm(),
        })
    }
}
