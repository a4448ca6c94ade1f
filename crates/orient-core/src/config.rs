//! Orientation configuration
//!
//! Tunables shared by Euler angle extraction.

use serde::{Deserialize, Serialize};

use crate::error::OrientationError;

/// Default threshold below which a matrix is treated as gimbal locked.
///
/// Gimbal lock occurs when sin(theta) (aerodynamic sequences) or cos(theta)
/// (astronomical sequences) is within this distance of -1 or +1, as measured
/// by the magnitude of the terms that scale the first and third angles.
pub const DEFAULT_GIMBAL_LOCK_THRESHOLD: f64 = 1e-13;

/// Configuration for Euler angle extraction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationConfig {
    /// Gimbal lock threshold (dimensionless)
    pub gimbal_lock_threshold: f64,
}

impl Default for OrientationConfig {
    fn default() -> Self {
        Self {
            gimbal_lock_threshold: DEFAULT_GIMBAL_LOCK_THRESHOLD,
        }
    }
}

impl OrientationConfig {
    /// Create a configuration with a custom gimbal lock threshold
    pub fn with_gimbal_lock_threshold(threshold: f64) -> Result<Self, OrientationError> {
        let config = Self {
            gimbal_lock_threshold: threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the threshold is usable
    pub fn validate(&self) -> Result<(), OrientationError> {
        let threshold = self.gimbal_lock_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(OrientationError::InvalidThreshold(threshold));
        }
        Ok(())
    }
}
