//! Recorded path of the leading agent.

use num_complex::Complex64;
use serde::Serialize;

/// Positions of agent 0, one per integration step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<Complex64>,
}

/// One exported row of a trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySample {
    /// Zero-based step index
    pub step: usize,
    /// Simulated time at the end of the step
    pub time: f64,
    /// Real part
    pub x: f64,
    /// Imaginary part
    pub y: f64,
}

impl Trajectory {
    /// Empty trajectory with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, point: Complex64) {
        self.points.push(point);
    }

    /// Logged points in step order
    pub fn points(&self) -> &[Complex64] {
        &self.points
    }

    /// Number of logged points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Points the log can hold before reallocating
    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    /// True when no step was taken
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last logged point
    pub fn last(&self) -> Option<Complex64> {
        self.points.last().copied()
    }

    /// Real parts, in step order
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.re).collect()
    }

    /// Imaginary parts, in step order
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.im).collect()
    }

    /// Rows for export, with each point stamped at `(step + 1) * dt`.
    pub fn samples(&self, dt: f64) -> Vec<TrajectorySample> {
        self.points
            .iter()
            .enumerate()
            .map(|(step, p)| TrajectorySample {
                step,
                time: (step + 1) as f64 * dt,
                x: p.re,
                y: p.im,
            })
            .collect()
    }
}

impl From<Vec<Complex64>> for Trajectory {
    fn from(points: Vec<Complex64>) -> Self {
        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xs_ys_have_equal_length() {
        let trajectory =
            Trajectory::from(vec![Complex64::new(1.0, 2.0), Complex64::new(3.0, 4.0)]);
        assert_eq!(trajectory.xs(), vec![1.0, 3.0]);
        assert_eq!(trajectory.ys(), vec![2.0, 4.0]);
    }

    #[test]
    fn test_samples_stamp_end_of_step() {
        let trajectory =
            Trajectory::from(vec![Complex64::new(0.25, 0.5), Complex64::new(0.0625, 0.4375)]);
        let samples = trajectory.samples(0.25);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].time, 0.25);
        assert_eq!(samples[1].step, 1);
        assert_eq!(samples[1].time, 0.5);
        assert_eq!(samples[1].x, 0.0625);

        let json = serde_json::to_value(samples[0]).unwrap();
        assert_eq!(json["y"], 0.5);
    }

    #[test]
    fn test_empty_trajectory() {
        let trajectory = Trajectory::default();
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.last(), None);
        assert!(trajectory.samples(0.1).is_empty());
    }
}
