//! Scalar diagnostics over a recorded trajectory.
//!
//! - **Winding angle**: net rotation of the traced point about the origin,
//!   accumulated from consecutive principal-argument differences wrapped
//!   into `[0, 2π)`. The wrap assumes no single step turns a full circle.
//! - **Arc length**: length of the polyline through the logged points.
//!
//! Both reduce to `0.0` for trajectories with fewer than two points.

pub mod reference;

use std::f64::consts::TAU;

use num_complex::Complex64;
use serde::Serialize;

use crate::error::{PursuitError, Result};
use crate::sim::Trajectory;

/// Diagnostics computed from one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Diagnostics {
    /// Total winding angle in radians
    pub winding_angle: f64,
    /// Total path length
    pub arc_length: f64,
}

impl Diagnostics {
    /// Compute both diagnostics for a trajectory
    pub fn compute(trajectory: &Trajectory) -> Result<Self> {
        let points = trajectory.points();
        Ok(Self {
            winding_angle: winding_angle(points)?,
            arc_length: arc_length(points),
        })
    }

    /// Winding angle in full turns
    pub fn turns(&self) -> f64 {
        self.winding_angle / TAU
    }
}

/// Imaginary part of `ln(point)`, i.e. its principal argument.
///
/// `step` is reported back in the error when the angle is undefined.
fn principal_angle(step: usize, point: Complex64) -> Result<f64> {
    if !point.is_finite() || (point.re == 0.0 && point.im == 0.0) {
        return Err(PursuitError::Domain { step });
    }
    Ok(point.arg())
}

/// Sum of consecutive angle differences, each wrapped into `[0, 2π)`.
///
/// Fails with [`PursuitError::Domain`] if any point is the origin or non-finite.
pub fn winding_angle(points: &[Complex64]) -> Result<f64> {
    let angles = points
        .iter()
        .enumerate()
        .map(|(step, &point)| principal_angle(step, point))
        .collect::<Result<Vec<f64>>>()?;

    Ok(angles
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).rem_euclid(TAU))
        .sum())
}

/// Sum of distances between consecutive points.
pub fn arc_length(points: &[Complex64]) -> f64 {
    points
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).norm())
        .sum()
}
