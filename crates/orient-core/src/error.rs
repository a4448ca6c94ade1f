//! Orientation errors

use thiserror::Error;

/// Errors raised by sequence lookup, configuration and the orientation object
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrientationError {
    #[error("The euler_sequence has not been set or is invalid; value={value}")]
    InvalidSequence { value: i32 },
    #[error("Unknown Euler sequence name: {0}")]
    UnknownSequenceName(String),
    #[error("Gimbal lock threshold must be finite and nonnegative, got {0}")]
    InvalidThreshold(f64),
    #[error("No orientation representation has been set")]
    MissingDataSource,
}
