//! Left transformation quaternions
//!
//! A left transformation quaternion q = (s, v) for a rotation by angle a about
//! unit axis e is (cos(a/2), -sin(a/2) e). Its transformation matrix is
//!
//! ```text
//! T(q) = (2s² - 1) I + 2 v vᵀ + 2 s [v]×
//! ```
//!
//! which is nalgebra's rotation matrix of the same quaternion, and the
//! Hamilton product composes transformations: T(q2 * q1) = T(q2) T(q1).

use nalgebra::{Matrix3, Quaternion, Rotation3, Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use super::rotation::{skew, Axis};

/// Below this vector-part magnitude an eigen rotation has no defined axis
const EIGEN_AXIS_EPSILON: f64 = 1e-15;

/// Quaternion for a single rotation about a coordinate axis
///
/// Scalar part cos(angle/2), vector part -sin(angle/2) along `axis`.
pub fn elementary_quaternion(axis: Axis, angle: f64) -> Quaternion<f64> {
    let (sin_half, cos_half) = (0.5 * angle).sin_cos();
    let mut v = Vector3::zeros();
    v[axis.index()] = -sin_half;
    Quaternion::from_parts(cos_half, v)
}

/// Transformation matrix from a left transformation quaternion
pub fn transformation_from_quaternion(q: &UnitQuaternion<f64>) -> Matrix3<f64> {
    let s = q.scalar();
    let v = q.vector().into_owned();

    Matrix3::identity() * (2.0 * s * s - 1.0) + 2.0 * v * v.transpose() + 2.0 * s * skew(&v)
}

/// Left transformation quaternion from a transformation matrix
///
/// The result has a nonnegative scalar part. The input is assumed to be a
/// proper rotation matrix; this is not checked.
pub fn quaternion_from_transformation(m: &Matrix3<f64>) -> UnitQuaternion<f64> {
    let q = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(*m));
    canonical(q)
}

/// Flip the sign of a quaternion so its scalar part is nonnegative
pub fn canonical(q: UnitQuaternion<f64>) -> UnitQuaternion<f64> {
    if q.scalar() < 0.0 {
        UnitQuaternion::new_unchecked(-q.into_inner())
    } else {
        q
    }
}

/// Single-axis (eigen) rotation equivalent to an orientation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EigenRotation {
    /// Rotation angle [rad], in [0, π]
    pub angle: f64,
    /// Unit rotation axis
    pub axis: Unit<Vector3<f64>>,
}

impl Default for EigenRotation {
    fn default() -> Self {
        Self {
            angle: 0.0,
            axis: Vector3::x_axis(),
        }
    }
}

impl EigenRotation {
    /// Create an eigen rotation (axis will be normalized)
    pub fn new(axis: &Vector3<f64>, angle: f64) -> Self {
        Self {
            angle,
            axis: Unit::new_normalize(*axis),
        }
    }

    /// Eigen rotation from a left transformation quaternion
    ///
    /// A zero rotation has no unique axis; +X is reported.
    pub fn from_quaternion(q: &UnitQuaternion<f64>) -> Self {
        let q = canonical(*q);
        let v = q.vector().into_owned();
        let sin_half = v.norm();

        if sin_half < EIGEN_AXIS_EPSILON {
            return Self::default();
        }

        Self {
            angle: 2.0 * sin_half.atan2(q.scalar()),
            axis: Unit::new_unchecked(-v / sin_half),
        }
    }

    /// Left transformation quaternion for this rotation
    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        let (sin_half, cos_half) = (0.5 * self.angle).sin_cos();
        UnitQuaternion::new_normalize(Quaternion::from_parts(
            cos_half,
            -sin_half * self.axis.into_inner(),
        ))
    }
}
