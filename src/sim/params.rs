//! Simulation parameters and the step-count law.

use serde::{Deserialize, Serialize};

use crate::error::{PursuitError, Result};

/// Default total simulated time
pub const DEFAULT_DURATION: f64 = 100.0;

/// Default Euler time step
pub const DEFAULT_DT: f64 = 0.001;

/// Upper bound on the step count of a single run (the trajectory is held in
/// memory, 16 bytes per step)
pub const MAX_STEPS: usize = 10_000_000;

/// Total time and step size of a run.
///
/// The number of Euler steps is `floor(duration / dt)`. A non-positive
/// duration, or a negative step with a positive duration, runs zero steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Total simulated time
    pub duration: f64,

    /// Time step
    pub dt: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            dt: DEFAULT_DT,
        }
    }
}

impl SimulationParams {
    /// Create parameters from a duration and step size
    pub const fn new(duration: f64, dt: f64) -> Self {
        Self { duration, dt }
    }

    /// Set the total simulated time
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Set the time step
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Number of Euler steps these parameters call for.
    ///
    /// Fails for non-finite values, a zero step, or more than [`MAX_STEPS`].
    pub fn step_count(&self) -> Result<usize> {
        if !self.duration.is_finite() || !self.dt.is_finite() {
            return Err(PursuitError::InvalidParams(format!(
                "duration and dt must be finite (duration={}, dt={})",
                self.duration, self.dt
            )));
        }
        if self.dt == 0.0 {
            return Err(PursuitError::InvalidParams("dt must be non-zero".to_string()));
        }
        if self.duration <= 0.0 || self.dt < 0.0 {
            return Ok(0);
        }

        let steps = (self.duration / self.dt).floor();
        if steps > MAX_STEPS as f64 {
            return Err(PursuitError::InvalidParams(format!(
                "{steps} steps exceeds the limit of {MAX_STEPS}"
            )));
        }
        Ok(steps as usize)
    }
}
