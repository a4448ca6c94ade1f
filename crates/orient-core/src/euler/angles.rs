//! Euler angle triple

use serde::{Deserialize, Serialize};

/// Euler angles in radians, in the rotation order of their sequence
///
/// For an XYZ sequence phi is about X, theta about Y and psi about Z.
/// Values are not normalized to any particular range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    /// First rotation angle [rad]
    pub phi: f64,
    /// Second (middle) rotation angle [rad]
    pub theta: f64,
    /// Third rotation angle [rad]
    pub psi: f64,
}

impl EulerAngles {
    pub fn new(phi: f64, theta: f64, psi: f64) -> Self {
        Self { phi, theta, psi }
    }

    /// Angles in rotation order
    pub fn to_array(self) -> [f64; 3] {
        [self.phi, self.theta, self.psi]
    }
}

impl From<[f64; 3]> for EulerAngles {
    fn from(angles: [f64; 3]) -> Self {
        Self::new(angles[0], angles[1], angles[2])
    }
}

impl From<EulerAngles> for [f64; 3] {
    fn from(angles: EulerAngles) -> Self {
        angles.to_array()
    }
}
