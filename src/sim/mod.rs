//! Pursuit simulation: initial state, Euler integration and the recorded path.
//!
//! # Example
//!
//! ```
//! use pursuit::sim::{integrate, SimulationParams};
//!
//! let trajectory = integrate(&SimulationParams::new(1.0, 0.25)).unwrap();
//! assert_eq!(trajectory.len(), 4);
//! ```

mod integrator;
mod params;
mod swarm;
mod trajectory;

pub use integrator::{integrate, Integrator};
pub use params::{SimulationParams, DEFAULT_DT, DEFAULT_DURATION, MAX_STEPS};
pub use swarm::{Swarm, AGENT_COUNT};
pub use trajectory::{Trajectory, TrajectorySample};
