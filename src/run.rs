//! End-to-end run: integrate, then reduce to diagnostics.

use num_complex::Complex64;
use serde::Serialize;

use crate::diagnostics::reference::ReferenceValues;
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::sim::{integrate, SimulationParams, Trajectory};

/// Summary of one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunReport {
    /// Parameters the run used
    pub params: SimulationParams,
    /// Number of logged points
    pub steps: usize,
    /// Leader position after the last step, as `[re, im]`
    pub final_position: Option<[f64; 2]>,
    /// Computed diagnostics
    pub diagnostics: Diagnostics,
    /// Closed-form values for comparison
    pub reference: ReferenceValues,
}

/// Output of [`run`]: the recorded path and its summary
#[derive(Debug, Clone)]
pub struct Run {
    /// Leader trajectory
    pub trajectory: Trajectory,
    /// Summary
    pub report: RunReport,
}

/// Integrate with `params` and compute the diagnostics.
pub fn run(params: &SimulationParams) -> Result<Run> {
    let trajectory = integrate(params)?;
    if trajectory.len() < 2 {
        tracing::warn!(
            steps = trajectory.len(),
            duration = params.duration,
            dt = params.dt,
            "fewer than two logged points; diagnostics reduce to zero"
        );
    }

    let diagnostics = Diagnostics::compute(&trajectory)?;
    let reference = ReferenceValues::for_params(params)?;

    tracing::info!(
        steps = trajectory.len(),
        winding_angle = diagnostics.winding_angle,
        turns = diagnostics.turns(),
        arc_length = diagnostics.arc_length,
        "pursuit run complete"
    );
    tracing::debug!(
        winding_deviation = diagnostics.winding_angle - reference.predicted_winding,
        arc_length_deviation = diagnostics.arc_length - reference.predicted_arc_length,
        "deviation from closed-form Euler values"
    );

    let report = RunReport {
        params: *params,
        steps: trajectory.len(),
        final_position: trajectory.last().map(|p: Complex64| [p.re, p.im]),
        diagnostics,
        reference,
    };
    Ok(Run { trajectory, report })
}
