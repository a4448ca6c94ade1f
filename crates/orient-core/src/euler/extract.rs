//! Euler angle extraction from a transformation matrix
//!
//! A transformation matrix built from an XYZ sequence has the form
//!
//! ```text
//! [ cosψ cosθ   ...          ...        ]
//! [-sinψ cosθ   ...          ...        ]
//! [ sinθ       -cosθ sinφ    cosθ cosφ  ]
//! ```
//!
//! Element [2][0] depends on theta alone, the rest of the left column on theta
//! and psi, and the rest of the bottom row on theta and phi. Every sequence has
//! five such key elements; the descriptor locates them:
//!
//! - `[i2][i0]` gives theta
//! - `[i1][i0]` and `[altx][i0]` give psi
//! - `[i2][i1]` and `[i2][altz]` give phi
//! - `[i1][altz]` and `[i1][i1]` give phi under gimbal lock
//!
//! At gimbal lock (cosθ = 0 for XYZ) only phi + psi or phi - psi can be
//! recovered. Psi is then fixed at zero and phi absorbs the whole rotation.
//!
//! The input is assumed to be a proper rotation matrix: unit rows and columns,
//! orthogonal, determinant one, entries within [-1, 1] up to rounding. This is
//! not checked; violating it degrades the result silently.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{Matrix3, UnitQuaternion};

use super::{EulerAngles, EulerSequence};
use crate::config::OrientationConfig;
use crate::math::transformation_from_quaternion;

/// Recovers Euler angles from transformation matrices
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerExtractor {
    config: OrientationConfig,
}

impl EulerExtractor {
    /// Create an extractor; the configuration is assumed validated
    pub fn new(config: OrientationConfig) -> Self {
        Self { config }
    }

    /// Threshold at or below which the matrix is treated as gimbal locked
    pub fn gimbal_lock_threshold(&self) -> f64 {
        self.config.gimbal_lock_threshold
    }

    /// Extract the Euler angles of `sequence` from a transformation matrix
    ///
    /// Rebuilding a matrix from the result reproduces `trans`. Under gimbal
    /// lock psi is exactly zero.
    pub fn extract(&self, trans: &Matrix3<f64>, sequence: EulerSequence) -> EulerAngles {
        let info = sequence.descriptor();
        let [i0, i1, i2] = info.axes.map(|axis| axis.index());
        let altx = info.alternate_x.index();
        let altz = info.alternate_z.index();
        let aero = info.is_aerodynamic;
        let even = info.is_even_permutation;

        // sin(θ) for even aero, -sin(θ) for odd aero, cos(θ) for astro
        let mut theta_val = trans[(i2, i0)];

        // sin/cos of phi and psi, each scaled by the same ±cos(θ) or ±sin(θ)
        let mut sin_phi = trans[(i2, i1)];
        let mut cos_phi = trans[(i2, altz)];
        let mut sin_psi = trans[(i1, i0)];
        let mut cos_psi = trans[(altx, i0)];

        // Both pairs measure the magnitude of that common scale factor
        let alt_theta_val = 0.5 * (sin_phi.hypot(cos_phi) + sin_psi.hypot(cos_psi));

        if aero && !even {
            theta_val = -theta_val;
        }

        // Take theta from whichever of the two is further from ±1
        let theta = if alt_theta_val < theta_val.abs() {
            let alt_theta = alt_theta_val.asin();
            match (aero, theta_val < 0.0) {
                (true, true) => -FRAC_PI_2 + alt_theta,
                (true, false) => FRAC_PI_2 - alt_theta,
                (false, true) => PI - alt_theta,
                (false, false) => alt_theta,
            }
        } else if aero {
            theta_val.asin()
        } else {
            theta_val.acos()
        };

        let (phi, psi) = if alt_theta_val > self.config.gimbal_lock_threshold {
            // Make the common scale factor positive
            if aero {
                if even {
                    sin_phi = -sin_phi;
                    sin_psi = -sin_psi;
                }
            } else if even {
                cos_phi = -cos_phi;
            } else {
                cos_psi = -cos_psi;
            }

            (sin_phi.atan2(cos_phi), sin_psi.atan2(cos_psi))
        } else {
            let mut sin_phi = trans[(i1, altz)];
            let cos_phi = trans[(i1, i1)];

            if !even {
                sin_phi = -sin_phi;
            }

            (sin_phi.atan2(cos_phi), 0.0)
        };

        EulerAngles { phi, theta, psi }
    }

    /// Extract Euler angles from a left transformation quaternion
    pub fn extract_from_quaternion(
        &self,
        quat: &UnitQuaternion<f64>,
        sequence: EulerSequence,
    ) -> EulerAngles {
        self.extract(&transformation_from_quaternion(quat), sequence)
    }
}

/// Extract Euler angles using the default gimbal lock threshold
pub fn extract_angles(trans: &Matrix3<f64>, sequence: EulerSequence) -> EulerAngles {
    EulerExtractor::default().extract(trans, sequence)
}
