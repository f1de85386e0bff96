//! Fixed-step explicit Euler integrator.
//!
//! The integrator owns the [`Swarm`] for the whole run and appends the
//! leader's position to a [`Trajectory`] after every step. It is a trivial
//! state machine: running for exactly `total_steps` steps, then done.

use num_complex::Complex64;

use super::params::SimulationParams;
use super::swarm::Swarm;
use super::trajectory::Trajectory;
use crate::error::Result;

/// Most points reserved up front; longer runs grow the log as they go.
const INITIAL_CAPACITY: usize = 1 << 20;

/// Steps a swarm forward and records the leader's path.
#[derive(Debug, Clone)]
pub struct Integrator {
    swarm: Swarm,
    dt: f64,
    total_steps: usize,
    steps_taken: usize,
}

impl Integrator {
    /// Integrator starting from the unit square
    pub fn new(params: &SimulationParams) -> Result<Self> {
        Ok(Self {
            swarm: Swarm::unit_square(),
            dt: params.dt,
            total_steps: params.step_count()?,
            steps_taken: 0,
        })
    }

    /// Replace the starting swarm
    pub fn with_swarm(mut self, swarm: Swarm) -> Self {
        self.swarm = swarm;
        self
    }

    /// Current swarm state
    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    /// Steps this run will take in total
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Steps taken so far
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// True once every step has run
    pub fn is_done(&self) -> bool {
        self.steps_taken >= self.total_steps
    }

    /// Take one step, returning the leader's new position, or `None` when done.
    pub fn step(&mut self) -> Option<Complex64> {
        if self.is_done() {
            return None;
        }
        self.swarm.advance(self.dt);
        self.steps_taken += 1;
        Some(self.swarm.leader())
    }

    /// Run the remaining steps and return the recorded trajectory.
    pub fn run(self) -> Trajectory {
        self.run_with(|_, _| {})
    }

    /// Like [`Integrator::run`], calling `observe(step, swarm)` after each step.
    pub fn run_with<F>(mut self, mut observe: F) -> Trajectory
    where
        F: FnMut(usize, &Swarm),
    {
        let remaining = self.total_steps - self.steps_taken;
        let mut trajectory = Trajectory::with_capacity(initial_capacity(remaining));
        while let Some(leader) = self.step() {
            trajectory.push(leader);
            observe(self.steps_taken - 1, &self.swarm);
        }
        trajectory
    }
}

fn initial_capacity(remaining: usize) -> usize {
    remaining.min(INITIAL_CAPACITY)
}

/// Integrate the unit-square swarm for `params` and return agent 0's path.
pub fn integrate(params: &SimulationParams) -> Result<Trajectory> {
    let integrator = Integrator::new(params)?;
    tracing::debug!(
        steps = integrator.total_steps(),
        dt = params.dt,
        "integrating pursuit"
    );
    Ok(integrator.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::params::MAX_STEPS;

    #[test]
    fn test_dyadic_steps_are_exact() {
        let trajectory = integrate(&SimulationParams::new(1.0, 0.25)).unwrap();
        assert_eq!(
            trajectory.points(),
            &[
                Complex64::new(0.25, 0.5),
                Complex64::new(0.0625, 0.4375),
                Complex64::new(-0.0625, 0.34375),
                Complex64::new(-0.1328125, 0.2421875),
            ]
        );
    }

    #[test]
    fn test_state_machine() {
        let mut integrator = Integrator::new(&SimulationParams::new(0.5, 0.25)).unwrap();
        assert_eq!(integrator.total_steps(), 2);
        assert!(!integrator.is_done());
        assert!(integrator.step().is_some());
        assert!(integrator.step().is_some());
        assert!(integrator.is_done());
        assert_eq!(integrator.step(), None);
        assert_eq!(integrator.steps_taken(), 2);
    }

    #[test]
    fn test_logged_points_are_snapshots() {
        let mut integrator = Integrator::new(&SimulationParams::new(1.0, 0.25)).unwrap();
        let first = integrator.step().unwrap();
        integrator.step();
        assert_eq!(first, Complex64::new(0.25, 0.5));
        assert_ne!(integrator.swarm().leader(), first);
    }

    #[test]
    fn test_observer_sees_every_step() {
        let mut seen = Vec::new();
        let trajectory = Integrator::new(&SimulationParams::new(1.0, 0.1))
            .unwrap()
            .run_with(|step, swarm| seen.push((step, swarm.leader())));
        assert_eq!(seen.len(), trajectory.len());
        assert_eq!(seen[0].0, 0);
        assert_eq!(seen.last().map(|s| s.1), trajectory.last());
    }

    #[test]
    fn test_reservation_is_bounded() {
        assert_eq!(initial_capacity(0), 0);
        assert_eq!(initial_capacity(100_000), 100_000);
        assert_eq!(initial_capacity(MAX_STEPS), INITIAL_CAPACITY);

        let trajectory = integrate(&SimulationParams::new(1.0, 0.25)).unwrap();
        assert_eq!(trajectory.capacity(), 4);
    }

    #[test]
    fn test_zero_steps() {
        let trajectory = integrate(&SimulationParams::new(0.0, 0.001)).unwrap();
        assert!(trajectory.is_empty());
    }

    #[test]
    fn test_custom_swarm() {
        let collapsed = Swarm::from_positions([Complex64::new(0.0, 0.0); 4]);
        let trajectory = Integrator::new(&SimulationParams::new(1.0, 0.5))
            .unwrap()
            .with_swarm(collapsed)
            .run();
        assert_eq!(trajectory.points(), &[Complex64::new(0.0, 0.0); 2]);
    }
}
