//! Pursuit simulator error types.
//!
//! Every fallible operation in the crate returns [`Result`], whose error is
//! [`PursuitError`]. Numeric failures are fatal to a run: nothing in the
//! library retries or substitutes a value, the error is handed back to the
//! caller.

use thiserror::Error;

/// Pursuit simulator errors.
#[derive(Error, Debug)]
pub enum PursuitError {
    /// A logged point has no defined angle (the origin, or a non-finite value).
    #[error("Domain error: angle undefined for trajectory point at step {step}")]
    Domain {
        /// Zero-based index into the trajectory.
        step: usize,
    },

    /// Simulation parameters that cannot produce a step count.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Plot rendering failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pursuit operations
pub type Result<T> = std::result::Result<T, PursuitError>;

impl From<toml::de::Error> for PursuitError {
    fn from(err: toml::de::Error) -> Self {
        PursuitError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for PursuitError {
    fn from(err: toml::ser::Error) -> Self {
        PursuitError::Config(err.to_string())
    }
}
