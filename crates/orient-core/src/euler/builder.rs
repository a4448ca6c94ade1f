//! Forward builders: Euler angles to quaternion and transformation matrix
//!
//! Both builders form one elementary rotation per angle and compose them in
//! reverse order, so the first rotation is applied first:
//!
//! ```text
//! q = q3 * q2 * q1        T = T3 T2 T1
//! ```

use nalgebra::{Matrix3, UnitQuaternion};

use super::{EulerAngles, EulerSequence};
use crate::math::{elementary_matrix, elementary_quaternion};

/// Left transformation quaternion for an Euler sequence
///
/// The product is renormalized to remove accumulated rounding drift.
pub fn build_quaternion(sequence: EulerSequence, angles: &EulerAngles) -> UnitQuaternion<f64> {
    let [a1, a2, a3] = sequence.axes();
    let [phi, theta, psi] = angles.to_array();

    let q1 = elementary_quaternion(a1, phi);
    let q2 = elementary_quaternion(a2, theta);
    let q3 = elementary_quaternion(a3, psi);

    UnitQuaternion::from_quaternion(q3 * q2 * q1)
}

/// Transformation matrix for an Euler sequence
pub fn build_matrix(sequence: EulerSequence, angles: &EulerAngles) -> Matrix3<f64> {
    let [a1, a2, a3] = sequence.axes();
    let [phi, theta, psi] = angles.to_array();

    elementary_matrix(a3, psi) * elementary_matrix(a2, theta) * elementary_matrix(a1, phi)
}
