//! # Pursuit - Four-Bug Pursuit Curve Simulator
//!
//! Four bugs start at the corners of a unit square centered at the origin.
//! Each one moves straight toward the next, cyclically, and all four spiral
//! into the center. This crate integrates that system with fixed-step
//! explicit Euler, records the path of the first bug, and reduces it to two
//! diagnostics.
//!
//! ## Pipeline
//!
//! ```text
//!   Swarm::unit_square()  ──>  Integrator  ──>  Trajectory  ──┬──>  Diagnostics
//!   [4 × Complex64]            n = ⌊t/dt⌋       agent 0       │     winding, arc length
//!                                                             └──>  Renderer (SVG)
//! ```
//!
//! ### Update rule
//!
//! Every step, with all velocities taken from the pre-step state:
//!
//! ```text
//!   v[i]    = pos[(i + 1) % 4] - pos[i]
//!   pos[i] += v[i] * dt
//! ```
//!
//! ### Diagnostics
//!
//! | Value         | Definition                                              |
//! |---------------|---------------------------------------------------------|
//! | Winding angle | Σ (arg p[k+1] - arg p[k]) mod 2π                        |
//! | Arc length    | Σ \|p[k+1] - p[k]\|                                     |
//!
//! For the defaults (`t = 100`, `dt = 0.001`) a run reports a winding angle of
//! about 100.099 rad and an arc length of about 0.9995.
//!
//! ## Quick Start
//!
//! ```
//! use pursuit::{run, SimulationParams};
//!
//! let run = run(&SimulationParams::new(10.0, 0.01)).unwrap();
//! assert_eq!(run.trajectory.len(), 1000);
//! println!("{}", run.report.diagnostics.winding_angle);
//! println!("{}", run.report.diagnostics.arc_length);
//! ```
//!
//! ## Modules
//!
//! - [`sim`]: Swarm state, parameters, integrator and trajectory
//! - [`diagnostics`]: Winding angle, arc length and closed-form references
//! - [`render`]: Trajectory plotting
//! - [`config`]: Configuration management
//! - [`error`]: Error types and result aliases

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod render;
mod run;
pub mod sim;

// Re-exports for convenience
pub use config::{Config, ConfigLayer, RenderConfig, RenderLayer, SimulationLayer};
pub use diagnostics::reference::ReferenceValues;
pub use diagnostics::{arc_length, winding_angle, Diagnostics};
pub use error::{PursuitError, Result};
pub use render::{PlotData, Renderer, SvgRenderer};
pub use run::{run, Run, RunReport};
pub use sim::{integrate, Integrator, SimulationParams, Swarm, Trajectory, TrajectorySample};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
